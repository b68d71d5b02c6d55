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

use crate::Game;

/// Counts legal move paths of a given length.
///
/// A path ends early once a game is decided. Useful for comparing, testing
/// and debugging move generation correctness and performance.
///
/// # Examples
///
/// ```
/// use chessvar::{perft, new_game};
///
/// let game = new_game();
/// assert_eq!(perft(&game, 1), 20);
/// assert_eq!(perft(&game, 2), 400);
/// ```
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = game.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|m| {
                    let mut child = game.clone();
                    child.play_unchecked(*m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EdgeMode, Setup};

    #[test]
    fn test_perft_start() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
    }

    #[test]
    fn test_perft_stops_at_decided_games() {
        // The only black queen stands on g1, next to the white rook.
        let setup: Setup = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBqR w".parse().expect("valid setup");
        let game = Game::from_setup(setup, EdgeMode::Standard).expect("valid position");

        let mut expected = 0;
        let mut captures = 0;
        for m in game.legal_moves() {
            let mut child = game.clone();
            child.play_unchecked(m);
            if m.is_capture() {
                captures += 1;
                assert!(child.game_state().is_terminal());
                assert_eq!(perft(&child, 1), 0);
            } else {
                expected += child.legal_moves().len() as u64;
            }
        }

        assert_eq!(captures, 1);
        assert_eq!(perft(&game, 2), expected);
    }
}
