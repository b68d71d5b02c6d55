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

//! Step tables and rays.
//!
//! # Example
//!
//! ```
//! use chessvar::{attacks, Square};
//!
//! let targets = attacks::knight_attacks(Square::B1);
//! assert!(targets.contains(Square::A3));
//! assert!(targets.contains(Square::C3));
//! assert!(targets.contains(Square::D2));
//! assert_eq!(targets.count(), 3);
//! ```

use crate::{Bitboard, ByColor, Color, Square};

const KING_DELTAS: [i32; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
const KNIGHT_DELTAS: [i32; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
const WHITE_PAWN_DELTAS: [i32; 2] = [7, 9];
const BLACK_PAWN_DELTAS: [i32; 2] = [-7, -9];

const fn stepping_attacks(square: i32, deltas: &[i32]) -> u64 {
    let mut attack = 0;

    let mut i = 0;
    let len = deltas.len();
    while i < len {
        let sq = square + deltas[i];
        // A file jump of more than two means the step wrapped around an edge.
        let file_diff = (sq & 0x7) - (square & 0x7);
        if sq >= 0 && sq < 64 && file_diff <= 2 && file_diff >= -2 {
            attack |= 1 << sq;
        }
        i += 1;
    }

    attack
}

const fn bootstrap_stepping_attacks(deltas: &[i32]) -> [u64; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = stepping_attacks(sq as i32, deltas);
        sq += 1;
    }
    table
}

static KNIGHT_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&KNIGHT_DELTAS);
static KING_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&KING_DELTAS);
static PAWN_ATTACKS: ByColor<[u64; 64]> = ByColor {
    white: bootstrap_stepping_attacks(&WHITE_PAWN_DELTAS),
    black: bootstrap_stepping_attacks(&BLACK_PAWN_DELTAS),
};

/// Looks up the diagonal capture targets for a pawn of `color` on `sq`.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS.get(color)[sq.to_usize()])
}

/// Looks up attacks for a knight on `sq`.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.to_usize()])
}

/// Looks up attacks for a king on `sq`.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.to_usize()])
}

/// Whether `a` and `b` are distinct squares on a common rank or file.
#[inline]
pub fn is_straight(a: Square, b: Square) -> bool {
    a != b && (a.file() == b.file() || a.rank() == b.rank())
}

/// Whether `a` and `b` are distinct squares on a common diagonal.
#[inline]
pub fn is_diagonal(a: Square, b: Square) -> bool {
    a != b && a.file().distance(b.file()) == a.rank().distance(b.rank())
}

/// The squares strictly between `a` and `b`, if they share a rank, file or
/// diagonal. Otherwise, and for adjacent squares, the result is empty.
///
/// # Examples
///
/// ```
/// use chessvar::{attacks, Square};
///
/// let ray = attacks::between(Square::A1, Square::A8);
/// assert_eq!(ray.count(), 6);
/// assert!(ray.contains(Square::A2));
/// assert!(!ray.contains(Square::A8));
///
/// assert!(attacks::between(Square::B1, Square::C3).is_empty());
/// ```
pub fn between(a: Square, b: Square) -> Bitboard {
    if !is_straight(a, b) && !is_diagonal(a, b) {
        return Bitboard::EMPTY;
    }

    let (files, ranks) = a.delta(b);
    let (step_file, step_rank) = (files.signum(), ranks.signum());

    let mut result = Bitboard::EMPTY;
    let mut sq = a;
    while let Some(next) = sq.offset(step_file, step_rank) {
        if next == b {
            break;
        }
        result.add(next);
        sq = next;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_at_edges() {
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert_eq!(knight_attacks(Square::H8).count(), 2);
        assert_eq!(knight_attacks(Square::D4).count(), 8);
        assert!(!knight_attacks(Square::H3).contains(Square::A5));
    }

    #[test]
    fn test_king_attacks_do_not_wrap() {
        assert_eq!(king_attacks(Square::A4).count(), 5);
        assert!(!king_attacks(Square::A4).contains(Square::H3));
        assert!(!king_attacks(Square::H4).contains(Square::A5));
    }

    #[test]
    fn test_pawn_attacks() {
        let white = pawn_attacks(Color::White, Square::A2);
        assert_eq!(white.count(), 1);
        assert!(white.contains(Square::B3));

        let black = pawn_attacks(Color::Black, Square::E7);
        assert!(black.contains(Square::D6));
        assert!(black.contains(Square::F6));
        assert!(!black.contains(Square::D8));
    }

    #[test]
    fn test_between() {
        assert_eq!(between(Square::C1, Square::H6).count(), 4);
        assert!(between(Square::H6, Square::C1).contains(Square::D2));
        assert!(between(Square::E4, Square::E5).is_empty());
        assert!(between(Square::E4, Square::E4).is_empty());
        assert!(between(Square::A1, Square::B3).is_empty());
        assert_eq!(between(Square::H1, Square::A1).count(), 6);
    }
}
