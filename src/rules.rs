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

//! Move legality for each piece type.
//!
//! These functions read the board but never change it. They do not check
//! whose turn it is, nor whether the target square holds a piece of the
//! mover's own color. The [`Game`](crate::Game) takes care of both.
//!
//! # Example
//!
//! ```
//! use chessvar::{rules, Board, EdgeMode, Square};
//!
//! let board = Board::new();
//! let pawn = board.piece_at(Square::E2).expect("pawn on e2");
//!
//! assert!(rules::is_legal_move(pawn, Square::E2, Square::E4, &board, EdgeMode::Standard));
//! assert!(!rules::is_legal_move(pawn, Square::E2, Square::E5, &board, EdgeMode::Standard));
//! ```

use crate::{attacks, Board, EdgeMode, File, Piece, Role, Square};

/// Tests whether `piece`, standing on `from`, may move to `to`.
pub fn is_legal_move(piece: Piece, from: Square, to: Square, board: &Board, mode: EdgeMode) -> bool {
    match piece.role {
        Role::Pawn => pawn_move(piece, from, to, board, mode),
        Role::Knight => knight_move(from, to),
        Role::Bishop => bishop_move(from, to, board),
        Role::Rook => rook_move(from, to, board),
        Role::Queen => queen_move(from, to, board),
        Role::King => king_move(from, to, mode),
    }
}

/// Pawns advance one square onto an empty square, or two from a pawn
/// that has not moved yet if both squares are empty. They capture one
/// square diagonally forward, and only onto an occupied square.
pub fn pawn_move(piece: Piece, from: Square, to: Square, board: &Board, mode: EdgeMode) -> bool {
    let forward = piece.color.forward();

    let Some(single) = from.offset(0, forward) else {
        return false;
    };

    if to == single {
        return board.piece_at(single).is_none();
    }

    if from.offset(0, 2 * forward) == Some(to) {
        return !piece.moved && board.piece_at(single).is_none() && board.piece_at(to).is_none();
    }

    if attacks::pawn_attacks(piece.color, from).contains(to) {
        if mode.is_legacy() && piece.color.is_black() && leaves_b_file_for_a_file(from, to) {
            return false;
        }
        return board.piece_at(to).is_some();
    }

    false
}

pub fn knight_move(from: Square, to: Square) -> bool {
    attacks::knight_attacks(from).contains(to)
}

pub fn bishop_move(from: Square, to: Square, board: &Board) -> bool {
    attacks::is_diagonal(from, to) && is_unobstructed(from, to, board)
}

pub fn rook_move(from: Square, to: Square, board: &Board) -> bool {
    attacks::is_straight(from, to) && is_unobstructed(from, to, board)
}

pub fn queen_move(from: Square, to: Square, board: &Board) -> bool {
    rook_move(from, to, board) || bishop_move(from, to, board)
}

pub fn king_move(from: Square, to: Square, mode: EdgeMode) -> bool {
    if mode.is_legacy() && leaves_b_file_for_a_file(from, to) {
        return false;
    }
    attacks::king_attacks(from).contains(to)
}

/// Every square strictly between `from` and `to` is empty. What stands on
/// `to` itself is irrelevant.
fn is_unobstructed(from: Square, to: Square, board: &Board) -> bool {
    (attacks::between(from, to) & board.occupied()).is_empty()
}

fn leaves_b_file_for_a_file(from: Square, to: Square) -> bool {
    from.file() == File::B && to.file() == File::A
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn board(fen: &str) -> Board {
        Board::from_board_fen(fen).expect("valid board")
    }

    fn legal(board: &Board, from: Square, to: Square) -> bool {
        let piece = board.piece_at(from).expect("piece on from square");
        is_legal_move(piece, from, to, board, EdgeMode::Standard)
    }

    fn legal_legacy(board: &Board, from: Square, to: Square) -> bool {
        let piece = board.piece_at(from).expect("piece on from square");
        is_legal_move(piece, from, to, board, EdgeMode::Legacy)
    }

    #[test]
    fn test_pawn_advances() {
        let board = Board::new();
        assert!(legal(&board, Square::E2, Square::E3));
        assert!(legal(&board, Square::E2, Square::E4));
        assert!(!legal(&board, Square::E2, Square::E5));
        assert!(!legal(&board, Square::E2, Square::E1));
        assert!(!legal(&board, Square::E2, Square::D3));
        assert!(legal(&board, Square::D7, Square::D5));
        assert!(legal(&board, Square::D7, Square::D6));
        assert!(!legal(&board, Square::D7, Square::D8));
    }

    #[test]
    fn test_pawn_double_step_needs_unmoved_pawn() {
        let board = board("4k3/8/8/8/8/4P3/8/4K3");
        assert!(board.piece_at(Square::E3).expect("pawn").moved);
        assert!(legal(&board, Square::E3, Square::E4));
        assert!(!legal(&board, Square::E3, Square::E5));

        let mut board = Board::new();
        let pawn = board.remove_piece_at(Square::E2).expect("pawn");
        board.set_piece_at(Square::E2, pawn.into_moved());
        assert!(!legal(&board, Square::E2, Square::E4));
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        // Intermediate square occupied.
        let board = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(!legal(&board, Square::E2, Square::E4));
        assert!(!legal(&board, Square::E2, Square::E3));

        // Destination occupied.
        let board = self::board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert!(!legal(&board, Square::E2, Square::E4));
        assert!(legal(&board, Square::E2, Square::E3));
    }

    #[test]
    fn test_pawn_captures() {
        let board = board("4k3/8/8/3p1p2/4P3/8/8/4K3");
        assert!(legal(&board, Square::E4, Square::D5));
        assert!(legal(&board, Square::E4, Square::F5));
        assert!(legal(&board, Square::E4, Square::E5));
        assert!(legal(&board, Square::D5, Square::D4));
        assert!(legal(&board, Square::D5, Square::E4));

        // No diagonal step onto an empty square, no capture straight ahead.
        let board = self::board("4k3/8/8/4p3/4P3/8/8/4K3");
        assert!(!legal(&board, Square::E4, Square::D5));
        assert!(!legal(&board, Square::E4, Square::E5));
        assert!(!legal(&board, Square::E5, Square::E4));
    }

    #[test]
    fn test_pawn_captures_do_not_wrap() {
        let board = board("4k3/8/8/p6p/P6P/8/8/4K3");
        assert!(!legal(&board, Square::H4, Square::A5));
        assert!(!legal(&board, Square::A4, Square::H5));
    }

    #[test]
    fn test_rook() {
        let board = Board::new();
        assert!(!legal(&board, Square::A1, Square::A8));
        assert!(!legal(&board, Square::A1, Square::A3));
        // The friendly knight on b1 is not this function's concern.
        assert!(legal(&board, Square::A1, Square::B1));

        let board = self::board("r3k3/8/8/8/8/8/8/R3K3");
        assert!(legal(&board, Square::A1, Square::A8));
        assert!(legal(&board, Square::A1, Square::D1));
        assert!(!legal(&board, Square::A1, Square::F1));
        assert!(!legal(&board, Square::A1, Square::B2));
        assert!(!legal(&board, Square::A1, Square::A1));
    }

    #[test]
    fn test_knight() {
        let board = Board::new();
        assert!(legal(&board, Square::B1, Square::A3));
        assert!(legal(&board, Square::B1, Square::C3));
        assert!(legal(&board, Square::B1, Square::D2));
        assert!(!legal(&board, Square::B1, Square::B3));
        assert!(legal(&board, Square::G8, Square::F6));
        assert!(!legal(&board, Square::G8, Square::G6));
    }

    #[test]
    fn test_bishop() {
        let board = Board::new();
        assert!(!legal(&board, Square::C1, Square::E3));

        let board = self::board("4k3/8/8/8/8/8/3P4/2B1K3");
        assert!(legal(&board, Square::C1, Square::B2));
        assert!(legal(&board, Square::C1, Square::A3));
        assert!(!legal(&board, Square::C1, Square::E3));
        assert!(legal(&board, Square::C1, Square::D2));
        assert!(!legal(&board, Square::C1, Square::C3));
        assert!(!legal(&board, Square::C1, Square::D3));
    }

    #[test]
    fn test_queen() {
        let board = self::board("4k3/8/8/8/3Q4/8/8/4K3");
        for to in [Square::D8, Square::D1, Square::A4, Square::H4, Square::A7, Square::H8, Square::A1, Square::G1] {
            assert!(legal(&board, Square::D4, to), "d4 -> {to}");
        }
        assert!(!legal(&board, Square::D4, Square::E6));
        assert!(!legal(&board, Square::D4, Square::D4));

        let board = self::board("4k3/8/5p2/8/3Q4/8/8/4K3");
        assert!(legal(&board, Square::D4, Square::F6));
        assert!(!legal(&board, Square::D4, Square::G7));
    }

    #[test]
    fn test_king() {
        let board = self::board("4k3/8/8/8/8/8/8/4K3");
        assert!(legal(&board, Square::E1, Square::D1));
        assert!(legal(&board, Square::E1, Square::F2));
        assert!(legal(&board, Square::E1, Square::E2));
        assert!(!legal(&board, Square::E1, Square::E3));
        assert!(!legal(&board, Square::E1, Square::E1));
        assert!(!legal(&board, Square::E1, Square::G1));
    }

    #[test]
    fn test_legacy_edge_mode() {
        let board = self::board("4k3/8/8/8/8/8/8/1K6");
        assert!(legal(&board, Square::B1, Square::A1));
        assert!(legal(&board, Square::B1, Square::A2));
        assert!(!legal_legacy(&board, Square::B1, Square::A1));
        assert!(!legal_legacy(&board, Square::B1, Square::A2));
        assert!(legal_legacy(&board, Square::B1, Square::C2));
        assert!(legal_legacy(&board, Square::B1, Square::B2));

        let board = self::board("4k3/1p6/P1P5/8/8/8/1P6/4K3");
        assert_eq!(board.color_at(Square::B7), Some(Color::Black));
        assert!(legal(&board, Square::B7, Square::A6));
        assert!(!legal_legacy(&board, Square::B7, Square::A6));
        assert!(legal_legacy(&board, Square::B7, Square::C6));
    }
}
