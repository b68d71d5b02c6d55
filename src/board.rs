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

//! Piece positions on a board.

use std::{
    error::Error,
    fmt::{self, Write as _},
};

use crate::{
    bitboard::Bitboard,
    color::{ByColor, Color},
    role::{ByRole, Role},
    setup::ParseSetupError,
    square::{Coordinate, File, Rank, Square},
    types::Piece,
};

/// Error when accessing a [`Coordinate`] that is not on the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidCoordinate {
    pub coordinate: Coordinate,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate {} is not on the board", self.coordinate)
    }
}

impl Error for InvalidCoordinate {}

/// [`Piece`] positions on a board.
///
/// The board is a plain container: it does not know whose turn it is and
/// performs no legality checks when pieces are placed.
///
/// # Examples
///
/// ```
/// use chessvar::{Board, Square, Color::Black};
///
/// let board = Board::new();
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
///
/// assert_eq!(board.piece_at(Square::E8), Some(Black.king()));
/// assert_eq!(board.piece_at(Square::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    by_color: ByColor<Bitboard>,
    occupied: Bitboard,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();

        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        for color in Color::ALL {
            for (file, role) in File::ALL.into_iter().zip(BACKRANK) {
                board.set_piece_at(Square::from_coords(file, color.backrank()), role.of(color));
                board.set_piece_at(Square::from_coords(file, color.pawn_rank()), color.pawn());
            }
        }

        board
    }

    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
            by_color: ByColor {
                white: Bitboard::EMPTY,
                black: Bitboard::EMPTY,
            },
            occupied: Bitboard::EMPTY,
        }
    }

    /// Whether `coordinate` names a square on the board: column `a`..`h`
    /// and row `1`..`8`.
    #[inline]
    pub const fn in_bounds(coordinate: Coordinate) -> bool {
        coordinate.in_bounds()
    }

    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.to_usize()]
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Gets the contents of the square named by `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if the coordinate is not
    /// [in bounds](Board::in_bounds).
    pub fn occupancy(&self, coordinate: Coordinate) -> Result<Option<Piece>, InvalidCoordinate> {
        coordinate
            .square()
            .map(|sq| self.piece_at(sq))
            .ok_or(InvalidCoordinate { coordinate })
    }

    /// Overwrites the contents of the square named by `coordinate`,
    /// returning what was there before. No legality checks.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] and leaves the board unchanged if the
    /// coordinate is not [in bounds](Board::in_bounds).
    pub fn place(
        &mut self,
        coordinate: Coordinate,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, InvalidCoordinate> {
        let sq = coordinate.square().ok_or(InvalidCoordinate { coordinate })?;
        Ok(self.replace_piece_at(sq, piece))
    }

    /// Overwrites the contents of `sq`, returning what was there before.
    pub fn replace_piece_at(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = self.squares[sq.to_usize()].take();
        if let Some(previous) = previous {
            self.by_color.get_mut(previous.color).discard(sq);
            self.occupied.discard(sq);
        }
        if let Some(piece) = piece {
            self.by_color.get_mut(piece.color).add(sq);
            self.occupied.add(sq);
        }
        self.squares[sq.to_usize()] = piece;
        previous
    }

    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.replace_piece_at(sq, Some(piece));
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.replace_piece_at(sq, None)
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub const fn by_color(&self, color: Color) -> Bitboard {
        *self.by_color.get(color)
    }

    /// Squares holding pieces of the given color and role.
    pub fn by_piece(&self, color: Color, role: Role) -> Bitboard {
        self.by_color(color)
            .into_iter()
            .filter(|&sq| self.role_at(sq) == Some(role))
            .collect()
    }

    /// Number of pieces of each role per color.
    pub fn material(&self) -> ByColor<ByRole<u8>> {
        let mut material = ByColor::<ByRole<u8>>::default();
        for (_, piece) in self.pieces() {
            *material.get_mut(piece.color).get_mut(piece.role) += 1;
        }
        material
    }

    /// Iterates over all pieces with their squares, from `a1` to `h8`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied
            .into_iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Renders the piece placement part of a FEN, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(64 + 7);

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0;

            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if rank > Rank::First {
                fen.push('/');
            }
        }

        fen
    }

    /// Parses the piece placement part of a FEN.
    ///
    /// Pawns off their starting rank are marked as moved. Other pieces are
    /// always unmoved.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSetupError::InvalidBoard`] if the text does not
    /// describe exactly eight ranks of eight squares.
    pub fn from_board_fen(board_fen: &str) -> Result<Board, ParseSetupError> {
        let mut board = Board::empty();

        let ranks: Vec<&str> = board_fen.split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseSetupError::InvalidBoard);
        }

        for (rank, row) in Rank::ALL.into_iter().rev().zip(ranks) {
            let mut file = 0u32;
            for ch in row.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if file >= 8 {
                        return Err(ParseSetupError::InvalidBoard);
                    }
                    let sq = Square::from_coords(File::new(file), rank);
                    let moved = piece.is_pawn() && rank != piece.color.pawn_rank();
                    board.set_piece_at(sq, Piece { moved, ..piece });
                    file += 1;
                } else {
                    return Err(ParseSetupError::InvalidBoard);
                }
            }
            if file != 8 {
                return Err(ParseSetupError::InvalidBoard);
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let sq = Square::from_coords(file, rank);
                f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.board_fen()).finish()
    }
}
