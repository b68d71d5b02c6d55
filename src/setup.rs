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

//! Positions as text, and validation of positions that did not arise from
//! a game.
//!
//! The text form is the board part of a FEN, the side to move and an
//! optional move number:
//!
//! ```
//! use chessvar::{Color, Setup, Square};
//!
//! let setup: Setup = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b 1".parse()?;
//! assert_eq!(setup.turn, Color::Black);
//! assert_eq!(setup.board.piece_at(Square::E4), Some(Color::White.pawn().into_moved()));
//! # Ok::<_, chessvar::ParseSetupError>(())
//! ```

use std::{error::Error, fmt, num::NonZeroU32, str::FromStr};

use bitflags::bitflags;

use crate::{Board, Color};

/// Errors that can occur when parsing a [`Setup`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseSetupError {
    InvalidSetup,
    InvalidBoard,
    InvalidTurn,
    InvalidFullmoves,
}

impl fmt::Display for ParseSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseSetupError::InvalidSetup => "invalid setup",
            ParseSetupError::InvalidBoard => "invalid board part in setup",
            ParseSetupError::InvalidTurn => "invalid turn part in setup",
            ParseSetupError::InvalidFullmoves => "invalid fullmoves part in setup",
        })
    }
}

impl Error for ParseSetupError {}

bitflags! {
    /// Reasons for a [`Setup`] not being a playable position.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A side has more pieces of some kind than it starts with.
        const TOO_MANY_PIECES = 1 << 1;

        /// A side has no piece left of some kind, so the game would already
        /// be decided.
        const MISSING_ROLE = 1 << 2;

        /// There are pawns on the first or last rank, where they can never
        /// have moved to.
        const PAWNS_ON_BACKRANK = 1 << 3;
    }
}

/// Error when a [`Setup`] is not a playable position.
#[derive(Clone, Debug)]
pub struct SetupError {
    kinds: SetupErrorKinds,
}

impl SetupError {
    pub(crate) const fn new(kinds: SetupErrorKinds) -> SetupError {
        SetupError { kinds }
    }

    /// Returns the reasons for this error.
    pub const fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reasons = Vec::new();
        if self.kinds.contains(SetupErrorKinds::EMPTY_BOARD) {
            reasons.push("empty board");
        }
        if self.kinds.contains(SetupErrorKinds::TOO_MANY_PIECES) {
            reasons.push("too many pieces");
        }
        if self.kinds.contains(SetupErrorKinds::MISSING_ROLE) {
            reasons.push("missing piece kind");
        }
        if self.kinds.contains(SetupErrorKinds::PAWNS_ON_BACKRANK) {
            reasons.push("pawns on backrank");
        }
        write!(f, "illegal setup: {}", reasons.join(", "))
    }
}

impl Error for SetupError {}

/// A not necessarily playable position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    pub board: Board,
    pub turn: Color,
    pub fullmoves: NonZeroU32,
}

impl Setup {
    /// The starting position, white to move.
    pub fn initial() -> Setup {
        Setup {
            board: Board::new(),
            turn: Color::White,
            fullmoves: NonZeroU32::MIN,
        }
    }

    pub fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Color::White,
            fullmoves: NonZeroU32::MIN,
        }
    }

    /// Parses a setup from its ASCII text form.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseSetupError`] naming the first malformed field.
    pub fn from_ascii(setup: &[u8]) -> Result<Setup, ParseSetupError> {
        let mut parts = setup.split(|ch| *ch == b' ').filter(|part| !part.is_empty());

        let board_part = parts.next().ok_or(ParseSetupError::InvalidSetup)?;
        let board_fen = std::str::from_utf8(board_part).map_err(|_| ParseSetupError::InvalidBoard)?;
        let board = Board::from_board_fen(board_fen)?;

        let turn = match parts.next() {
            Some(b"w") => Color::White,
            Some(b"b") => Color::Black,
            Some(_) => return Err(ParseSetupError::InvalidTurn),
            None => return Err(ParseSetupError::InvalidSetup),
        };

        let fullmoves = match parts.next() {
            Some(part) => btoi::btou::<u32>(part)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ParseSetupError::InvalidFullmoves)?,
            None => NonZeroU32::MIN,
        };

        if parts.next().is_some() {
            return Err(ParseSetupError::InvalidSetup);
        }

        Ok(Setup {
            board,
            turn,
            fullmoves,
        })
    }
}

impl Default for Setup {
    fn default() -> Setup {
        Setup::initial()
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(setup: &str) -> Result<Setup, ParseSetupError> {
        Setup::from_ascii(setup.as_bytes())
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.board.board_fen(),
            self.turn.char(),
            self.fullmoves
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_initial_setup_text() {
        let text = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 1";
        assert_eq!(Setup::initial().to_string(), text);
        assert_eq!(text.parse::<Setup>(), Ok(Setup::initial()));
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w".parse::<Setup>(),
            Ok(Setup::initial())
        );
    }

    #[test]
    fn test_parse_fields() {
        let setup: Setup = "4k3/8/8/8/8/8/8/4K3 b 42".parse().expect("valid setup");
        assert_eq!(setup.turn, Color::Black);
        assert_eq!(setup.fullmoves.get(), 42);
        assert_eq!(setup.board.occupied().count(), 2);
        assert_eq!(setup.board.piece_at(Square::E1), Some(Color::White.king()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Setup>(), Err(ParseSetupError::InvalidSetup));
        assert_eq!("8/8/8/8/8/8/8/8".parse::<Setup>(), Err(ParseSetupError::InvalidSetup));
        assert_eq!("8/8/8/8/8/8/8 w".parse::<Setup>(), Err(ParseSetupError::InvalidBoard));
        assert_eq!("8/8/8/8/8/8/8/7x w".parse::<Setup>(), Err(ParseSetupError::InvalidBoard));
        assert_eq!("8/8/8/8/8/8/8/8 x".parse::<Setup>(), Err(ParseSetupError::InvalidTurn));
        assert_eq!("8/8/8/8/8/8/8/8 w 0".parse::<Setup>(), Err(ParseSetupError::InvalidFullmoves));
        assert_eq!("8/8/8/8/8/8/8/8 w -1".parse::<Setup>(), Err(ParseSetupError::InvalidFullmoves));
        assert_eq!("8/8/8/8/8/8/8/8 w 1 1".parse::<Setup>(), Err(ParseSetupError::InvalidSetup));
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::new(SetupErrorKinds::EMPTY_BOARD | SetupErrorKinds::MISSING_ROLE);
        assert_eq!(err.to_string(), "illegal setup: empty board, missing piece kind");
    }
}
