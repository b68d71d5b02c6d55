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

use std::{error::Error, fmt};

use crate::role::{ByRole, Role};

/// Error when recording a capture of a kind that has none left.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CaptureError {
    pub role: Role,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {} left to capture", self.role)
    }
}

impl Error for CaptureError {}

/// Opponent pieces a side still has to capture, by kind.
///
/// A side wins as soon as any kind runs out.
///
/// # Examples
///
/// ```
/// use chessvar::{Role, Tally};
///
/// let mut tally = Tally::new();
/// assert_eq!(tally.remaining(Role::Queen), 1);
/// assert!(!tally.has_won());
///
/// tally.record_capture(Role::Queen)?;
/// assert_eq!(tally.exhausted(), Some(Role::Queen));
/// assert!(tally.has_won());
///
/// assert!(tally.record_capture(Role::Queen).is_err());
/// # Ok::<_, chessvar::CaptureError>(())
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Tally(ByRole<u8>);

impl Tally {
    /// Eight pawns, two each of knights, bishops and rooks, one queen and
    /// one king.
    pub fn new() -> Tally {
        Tally(ByRole::new_with(Role::initial_count))
    }

    /// Builds a tally from explicit counts. Returns `None` if any count
    /// exceeds what a side starts with.
    pub fn from_counts(counts: ByRole<u8>) -> Option<Tally> {
        for role in Role::ALL {
            if *counts.get(role) > role.initial_count() {
                return None;
            }
        }
        Some(Tally(counts))
    }

    pub fn counts(&self) -> ByRole<u8> {
        self.0
    }

    pub fn remaining(&self, role: Role) -> u8 {
        *self.0.get(role)
    }

    /// Records the capture of one opponent piece.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError`] and leaves the tally unchanged if no piece of
    /// this kind is left.
    pub fn record_capture(&mut self, role: Role) -> Result<(), CaptureError> {
        let count = self.0.get_mut(role);
        *count = count.checked_sub(1).ok_or(CaptureError { role })?;
        Ok(())
    }

    /// The first kind with nothing left, if any.
    pub fn exhausted(&self) -> Option<Role> {
        self.0.find(|&count| count == 0)
    }

    pub fn has_won(&self) -> bool {
        self.exhausted().is_some()
    }
}

impl Default for Tally {
    fn default() -> Tally {
        Tally::new()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for role in Role::ALL {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", role.upper_char(), self.remaining(role))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counts() {
        let tally = Tally::new();
        assert_eq!(tally.remaining(Role::Pawn), 8);
        assert_eq!(tally.remaining(Role::Knight), 2);
        assert_eq!(tally.remaining(Role::Bishop), 2);
        assert_eq!(tally.remaining(Role::Rook), 2);
        assert_eq!(tally.remaining(Role::Queen), 1);
        assert_eq!(tally.remaining(Role::King), 1);
        assert_eq!(tally.exhausted(), None);
        assert_eq!(tally.to_string(), "P8 N2 B2 R2 Q1 K1");
    }

    #[test]
    fn test_win_on_last_pawn() {
        let mut tally = Tally::new();
        for captured in 1..=8 {
            assert!(!tally.has_won());
            tally.record_capture(Role::Pawn).expect("pawn left");
            assert_eq!(tally.remaining(Role::Pawn), 8 - captured);
        }
        assert!(tally.has_won());
        assert_eq!(tally.exhausted(), Some(Role::Pawn));
    }

    #[test]
    fn test_capture_underflow_is_rejected() {
        let mut tally = Tally::new();
        tally.record_capture(Role::King).expect("king left");
        let before = tally;
        assert_eq!(tally.record_capture(Role::King), Err(CaptureError { role: Role::King }));
        assert_eq!(tally, before);
    }

    #[test]
    fn test_from_counts() {
        let counts = ByRole { pawn: 3, knight: 0, bishop: 2, rook: 1, queen: 1, king: 1 };
        let tally = Tally::from_counts(counts).expect("valid counts");
        assert_eq!(tally.counts(), counts);
        assert_eq!(tally.exhausted(), Some(Role::Knight));

        assert!(Tally::from_counts(ByRole { queen: 2, ..Tally::new().counts() }).is_none());
    }
}
