/*
  Kingfall, a king-capture chess rules engine.
  Copyright (C) 2026 The Kingfall Authors.

  Kingfall is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Kingfall is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Squares, which are positions on a board.

use super::{Direction, MoveError};

use std::{
    fmt::{Display, Formatter},
    ops::Sub,
    str::FromStr,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A square: one of 64 spots on a `Board` that a `Piece` can occupy.
///
/// Squares are addressed by zero-based `(row, col)` pairs. Row 0 is rank 8,
/// the topmost row when the board is printed, and row 7 is rank 1. Column 0
/// is the a-file.
///
/// Internally, a `Square` is the single integer `row * 8 + col`.
pub struct Square(u8);

impl Square {
    /// The number of squares on a board.
    pub const NUM: usize = 64;

    #[inline(always)]
    #[must_use]
    /// Create a `Square` from a row and a column, each of which must be in
    /// `0..8`.
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the row of this square. Row 0 is rank 8.
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline(always)]
    #[must_use]
    /// Get the column of this square. Column 0 is the a-file.
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    #[inline(always)]
    #[must_use]
    /// Get the index of this square in `0..64`, suitable for lookup tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every square, row by row starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[must_use]
    /// Get the square reached by moving one step of `dir` away from this one,
    /// or `None` if that step leaves the board.
    pub fn offset(self, dir: Direction) -> Option<Square> {
        let row = i16::from(self.row()) + i16::from(dir.rows());
        let col = i16::from(self.col()) + i16::from(dir.cols());
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row), Ok(col)) => Square::new(row, col),
            _ => None,
        }
    }

    /// Convert an algebraic coordinate (such as `e7` or `E7`) to a square.
    /// The coordinate must be exactly two characters: a file from `a` to `h`,
    /// in either case, followed by a rank from `1` to `8`.
    ///
    /// # Errors
    ///
    /// This function will return `MoveError::InvalidCoordinate` if `s` is not
    /// a legal coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingfall::base::Square;
    /// let sq = Square::from_algebraic("a2").unwrap();
    /// assert_eq!((sq.row(), sq.col()), (6, 0));
    /// ```
    pub fn from_algebraic(s: &str) -> Result<Square, MoveError> {
        let invalid = || MoveError::InvalidCoordinate(s.to_string());
        let mut chars = s.chars();
        let (Some(file_chr), Some(rank_chr), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file_chr = file_chr.to_ascii_lowercase();
        if !('a'..='h').contains(&file_chr) {
            return Err(invalid());
        }
        let rank = match rank_chr.to_digit(10) {
            Some(n @ 1..=8) => n,
            _ => return Err(invalid()),
        };

        // both are in range, so the casts cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let (row, col) = ((8 - rank) as u8, file_chr as u8 - b'a');
        Square::new(row, col).ok_or_else(invalid)
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square in
    /// column 0 is on the "a" file.
    pub fn file_name(self) -> char {
        char::from(b'a' + self.col())
    }

    #[must_use]
    /// Get the rank number (1 through 8) of this square.
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank())
    }
}

impl FromStr for Square {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Square, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl Sub<Square> for Square {
    type Output = Direction;

    /// Get the displacement which takes `rhs` to `self`.
    #[inline(always)]
    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Square) -> Self::Output {
        Direction::new(
            self.row() as i8 - rhs.row() as i8,
            self.col() as i8 - rhs.col() as i8,
        )
    }
}
