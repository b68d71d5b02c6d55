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

//! Parse and write moves in the `e2e4` notation used by drivers.
//!
//! # Examples
//!
//! ```
//! use chessvar::{new_game, Coordinate, Square, Uci};
//!
//! let uci: Uci = "g1f3".parse()?;
//! assert_eq!(uci.from, Coordinate::from(Square::G1));
//!
//! let mut game = new_game();
//! let m = uci.to_move(&game)?;
//! assert_eq!(m.to_string(), "Ng1-f3");
//!
//! game.play_uci(uci)?;
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{Coordinate, Game, Move, PlayError};

/// Error when parsing an invalid UCI move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid uci")
    }
}

impl Error for ParseUciError {}

/// A move request as origin and target coordinates.
///
/// Coordinates are not checked against the board, so `"i9a1"` parses and
/// is then rejected when played.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Uci {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Uci {
    /// Parses a move from exactly four ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUciError`] if either half is not a coordinate.
    pub fn from_ascii(uci: &[u8]) -> Result<Uci, ParseUciError> {
        if uci.len() != 4 {
            return Err(ParseUciError);
        }
        Ok(Uci {
            from: Coordinate::from_ascii(&uci[0..2]).map_err(|_| ParseUciError)?,
            to: Coordinate::from_ascii(&uci[2..4]).map_err(|_| ParseUciError)?,
        })
    }

    pub fn from_move(m: Move) -> Uci {
        Uci {
            from: m.from.into(),
            to: m.to.into(),
        }
    }

    /// Converts to a legal move in the context of a game, without playing
    /// it.
    ///
    /// # Errors
    ///
    /// Returns the [`PlayError`] that playing this move would produce.
    pub fn to_move(&self, game: &Game) -> Result<Move, PlayError> {
        game.validate(self.from, self.to)
    }
}

impl FromStr for Uci {
    type Err = ParseUciError;

    fn from_str(uci: &str) -> Result<Uci, ParseUciError> {
        Uci::from_ascii(uci.as_bytes())
    }
}

impl fmt::Display for Uci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl From<Move> for Uci {
    fn from(m: Move) -> Uci {
        Uci::from_move(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_game, Role, Square};

    #[test]
    fn test_parse_uci() {
        let uci: Uci = "e2e4".parse().expect("valid uci");
        assert_eq!(uci.from, Coordinate::new(4, 1));
        assert_eq!(uci.to, Coordinate::new(4, 3));
        assert_eq!(uci.to_string(), "e2e4");

        let off_board: Uci = "i9a0".parse().expect("parses off the board");
        assert!(!off_board.from.in_bounds());
        assert!(!off_board.to.in_bounds());

        assert_eq!("e2e".parse::<Uci>(), Err(ParseUciError));
        assert_eq!("e2e4q".parse::<Uci>(), Err(ParseUciError));
        assert_eq!("E2E4".parse::<Uci>(), Err(ParseUciError));
        assert_eq!("2e4e".parse::<Uci>(), Err(ParseUciError));
        assert_eq!("".parse::<Uci>(), Err(ParseUciError));
    }

    #[test]
    fn test_to_move() {
        let game = new_game();
        let m = "b1c3".parse::<Uci>().expect("valid uci").to_move(&game).expect("legal");
        assert_eq!(m, Move { role: Role::Knight, from: Square::B1, to: Square::C3, capture: None });
        assert_eq!(Uci::from(m).to_string(), "b1c3");

        let err = "b1b3".parse::<Uci>().expect("valid uci").to_move(&game);
        assert_eq!(err, Err(PlayError::IllegalMove));
    }
}
