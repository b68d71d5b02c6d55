// This file is part of the chessvar library.
// Copyright (C) 2026 The chessvar developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::num::TryFromIntError;

pub(crate) fn out_of_range_error() -> TryFromIntError {
    // This is a hack to construct TryFromIntError despite its private
    // constructor. It is unlikely that something more specific than
    // "overflow" will ever be added.
    u32::try_from(u64::MAX).unwrap_err()
}

/// Implements `From<$ty>` for the listed integer types via `as` casts of
/// the discriminant.
macro_rules! from_enum_as_int_impl {
    ($from:ty, $($t:ty)+) => {
        $(impl From<$from> for $t {
            #[inline]
            fn from(value: $from) -> $t {
                value as $t
            }
        })+
    }
}

/// Implements `TryFrom<integer>` for an enum with contiguous discriminants
/// starting at `0`, using its `new` constructor.
macro_rules! try_from_int_impl {
    ($type:ty, $lower:expr, $upper:expr, $($t:ty)+) => {
        $(impl core::convert::TryFrom<$t> for $type {
            type Error = core::num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<$type, Self::Error> {
                if ($lower..$upper).contains(&value) {
                    Ok(<$type>::new(value as u32))
                } else {
                    Err($crate::util::out_of_range_error())
                }
            }
        })+
    }
}
