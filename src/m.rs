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

use std::fmt::{self, Display, Write as _};

use arrayvec::ArrayVec;

use crate::{Role, Square, Uci};

/// A move that was, or could be, played.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub role: Role,
    pub from: Square,
    pub to: Square,
    pub capture: Option<Role>,
}

impl Move {
    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }

    pub fn to_uci(self) -> Uci {
        Uci::from_move(self)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.role != Role::Pawn {
            f.write_char(self.role.upper_char())?;
        }

        write!(
            f,
            "{}{}{}",
            self.from,
            if self.is_capture() { 'x' } else { '-' },
            self.to
        )
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// With at most sixteen pieces per side and no promotions, the capacity
/// holds the legal moves of any reachable position.
///
/// # Example
///
/// ```
/// use chessvar::{new_game, Role};
///
/// let game = new_game();
/// let mut moves = game.legal_moves();
/// moves.retain(|m| m.role == Role::Pawn);
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<Move, 256>;
