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

use std::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// `moved` records whether a pawn has advanced, which decides whether the
/// two-square advance is still available. It is always `false` for other
/// pieces.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub moved: bool,
}

impl Piece {
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Parses a FEN piece letter, uppercase for White. The piece is
    /// considered unmoved.
    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(ch.is_ascii_uppercase())))
    }

    /// The same piece after it has been moved.
    #[must_use]
    #[inline]
    pub const fn into_moved(self) -> Piece {
        Piece {
            moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.role, Role::Pawn)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// `Standard` or `Legacy` treatment of moves toward the a-file.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum EdgeMode {
    /// Geometrically accurate bounds on every edge.
    #[default]
    Standard,
    /// Reproduces the historical rules engine, which never lets a king on
    /// the b-file step onto the a-file, and never lets a black pawn on the
    /// b-file capture onto the a-file.
    Legacy,
}

impl EdgeMode {
    pub const fn is_standard(self) -> bool {
        matches!(self, EdgeMode::Standard)
    }

    pub const fn is_legacy(self) -> bool {
        matches!(self, EdgeMode::Legacy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Piece::from_char('Q'), Some(Color::White.queen()));
        assert_eq!(Piece::from_char('n'), Some(Color::Black.knight()));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Color::Black.rook().char(), 'r');
    }

    #[test]
    fn test_into_moved() {
        let pawn = Color::White.pawn();
        assert!(!pawn.moved);
        assert!(pawn.into_moved().moved);
        assert_eq!(pawn.into_moved().role, Role::Pawn);
    }
}
