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

use std::{error::Error, fmt, str::FromStr};

use crate::color::Color;

macro_rules! try_from_int_impl_u32 {
    ($type:ty, $upper:expr) => {
        try_from_int_impl! { $type, 0, $upper, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
    };
}

/// A file of the chessboard, `a` to `h`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets a `File` from its zero-based index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> File {
        assert!(index < 8);
        File::ALL[index as usize]
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<File> {
        if 'a' <= ch && ch <= 'h' {
            Some(File::new(ch as u32 - 'a' as u32))
        } else {
            None
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Zero-based column index, `0` for the a-file.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn offset(self, delta: i32) -> Option<File> {
        i32::from(self as u8)
            .checked_add(delta)
            .and_then(|index| u32::try_from(index).ok())
            .filter(|&index| index < 8)
            .map(File::new)
    }

    #[inline]
    pub const fn distance(self, other: File) -> u32 {
        (self as u32).abs_diff(other as u32)
    }

    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

from_enum_as_int_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_from_int_impl_u32! { File, 8 }

/// A rank of the chessboard, `1` to `8`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets a `Rank` from its zero-based index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Rank {
        assert!(index < 8);
        Rank::ALL[index as usize]
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Rank> {
        if '1' <= ch && ch <= '8' {
            Some(Rank::new(ch as u32 - '1' as u32))
        } else {
            None
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn offset(self, delta: i32) -> Option<Rank> {
        i32::from(self as u8)
            .checked_add(delta)
            .and_then(|index| u32::try_from(index).ok())
            .filter(|&index| index < 8)
            .map(Rank::new)
    }

    /// The same rank seen from the given side, e.g. the second rank for
    /// Black is the seventh rank.
    #[inline]
    pub const fn relative_to(self, color: Color) -> Rank {
        match color {
            Color::White => self,
            Color::Black => Rank::new(7 - self as u32),
        }
    }

    #[inline]
    pub const fn distance(self, other: Rank) -> u32 {
        (self as u32).abs_diff(other as u32)
    }

    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

from_enum_as_int_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_from_int_impl_u32! { Rank, 8 }

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// A square of the chessboard, `a1` = 0 to `h8` = 63.
///
/// Unlike [`Coordinate`], a `Square` is always on the board.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from its index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64);
        Square(index as u8)
    }

    /// Tries to get a square from file and rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessvar::{File, Rank, Square};
    ///
    /// assert_eq!(Square::from_coords(File::A, Rank::First), Square::A1);
    /// ```
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | (rank as u8) << 3)
    }

    /// Parses a square name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a valid square name
    /// in lowercase ASCII characters.
    ///
    /// # Example
    ///
    /// ```
    /// use chessvar::Square;
    /// let sq = Square::from_ascii(b"e4")?;
    /// assert_eq!(sq, Square::E4);
    /// # Ok::<_, chessvar::ParseSquareError>(())
    /// ```
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file, rank] => match (
                File::from_char(char::from(file)),
                Rank::from_char(char::from(rank)),
            ) {
                (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
                _ => Err(ParseSquareError),
            },
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        File::new((self.0 & 7) as u32)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::new((self.0 >> 3) as u32)
    }

    #[inline]
    pub const fn coords(self) -> (File, Rank) {
        (self.file(), self.rank())
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Steps by the given number of files and ranks, or returns `None` if
    /// that would leave the board. Never wraps around an edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessvar::Square;
    ///
    /// assert_eq!(Square::B1.offset(-1, 2), Some(Square::A3));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// assert_eq!(Square::H4.offset(1, 0), None);
    /// ```
    #[inline]
    pub fn offset(self, files: i32, ranks: i32) -> Option<Square> {
        Some(Square::from_coords(
            self.file().offset(files)?,
            self.rank().offset(ranks)?,
        ))
    }

    /// Signed `(files, ranks)` displacement from `self` to `other`.
    #[inline]
    pub const fn delta(self, other: Square) -> (i32, i32) {
        (
            other.file() as i32 - self.file() as i32,
            other.rank() as i32 - self.rank() as i32,
        )
    }

    /// Chebyshev distance, the number of king steps between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u32 {
        let files = self.file().distance(other.file());
        let ranks = self.rank().distance(other.rank());
        if files > ranks {
            files
        } else {
            ranks
        }
    }

    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square::new)
    }
}

macro_rules! square_consts {
    ($($name:ident = $index:expr,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl From<Square> for u32 {
    #[inline]
    fn from(sq: Square) -> u32 {
        sq.to_u32()
    }
}

impl From<(File, Rank)> for Square {
    #[inline]
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_coords(file, rank)
    }
}

try_from_int_impl_u32! { Square, 64 }

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char(), self.rank().char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file().char().to_ascii_uppercase(),
            self.rank().char()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let name = <&str>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        Ok(Square::new(u.int_in_range(0..=63)?))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}

/// Error when parsing an invalid coordinate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCoordinateError;

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid coordinate")
    }
}

impl Error for ParseCoordinateError {}

/// An algebraic coordinate as requested by a driver, possibly off the board.
///
/// Column and row are zero-based, so `a1` is `(0, 0)`. The text form is a
/// lowercase column letter followed by a row digit. Letters past `h` and
/// the digits `0` and `9` parse fine and produce coordinates that are not
/// [in bounds](crate::Board::in_bounds).
///
/// # Examples
///
/// ```
/// use chessvar::{Coordinate, Square};
///
/// let e4: Coordinate = "e4".parse()?;
/// assert_eq!(e4.square(), Some(Square::E4));
///
/// let off: Coordinate = "i9".parse()?;
/// assert_eq!(off.square(), None);
/// # Ok::<_, chessvar::ParseCoordinateError>(())
/// ```
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Coordinate {
    pub column: i8,
    pub row: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(column: i8, row: i8) -> Coordinate {
        Coordinate { column, row }
    }

    /// Parses the two-character text form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCoordinateError`] unless the input is exactly a
    /// lowercase ASCII letter followed by an ASCII digit.
    pub fn from_ascii(s: &[u8]) -> Result<Coordinate, ParseCoordinateError> {
        match *s {
            [column @ b'a'..=b'z', row @ b'0'..=b'9'] => Ok(Coordinate {
                column: (column - b'a') as i8,
                row: row as i8 - b'1' as i8,
            }),
            _ => Err(ParseCoordinateError),
        }
    }

    /// Whether the coordinate names one of the 64 squares.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        0 <= self.column && self.column < 8 && 0 <= self.row && self.row < 8
    }

    #[inline]
    pub fn square(self) -> Option<Square> {
        if self.in_bounds() {
            Some(Square::from_coords(
                File::new(self.column as u32),
                Rank::new(self.row as u32),
            ))
        } else {
            None
        }
    }
}

impl From<Square> for Coordinate {
    #[inline]
    fn from(sq: Square) -> Coordinate {
        Coordinate {
            column: sq.file() as i8,
            row: sq.rank() as i8,
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Coordinate, ParseCoordinateError> {
        Coordinate::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square() {
            Some(sq) => fmt::Display::fmt(&sq, f),
            None => write!(f, "({}, {})", self.column, self.row),
        }
    }
}
