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

//! Moves, which take a piece from one square to another.

use super::{MoveError, Square};

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The information of one move: the square a piece leaves and the square it
/// lands on. A move says nothing about whether it is legal.
pub struct Move {
    /// The square the moving piece starts on.
    pub from: Square,
    /// The square the moving piece ends on.
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Read a move written as two whitespace-separated coordinates, such as
    /// `a2 a3`.
    ///
    /// # Errors
    ///
    /// This function will return `MoveError::InputFormat` if `s` does not
    /// contain exactly two tokens, and `MoveError::InvalidCoordinate` if
    /// either token is not a square.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingfall::base::{Move, MoveError};
    /// let m = Move::from_algebraic("e2 e4").unwrap();
    /// assert_eq!(m.to_string(), "e2 e4");
    /// assert_eq!(Move::from_algebraic("e2"), Err(MoveError::InputFormat));
    /// ```
    pub fn from_algebraic(s: &str) -> Result<Move, MoveError> {
        let mut tokens = s.split_ascii_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(from), Some(to), None) => Move::from_coordinates(from, to),
            _ => Err(MoveError::InputFormat),
        }
    }

    /// Build a move out of two separate coordinates.
    ///
    /// # Errors
    ///
    /// This function will return `MoveError::InvalidCoordinate` naming the
    /// first of `from` and `to` which is not a square.
    pub fn from_coordinates(from: &str, to: &str) -> Result<Move, MoveError> {
        Ok(Move::new(
            Square::from_algebraic(from)?,
            Square::from_algebraic(to)?,
        ))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        Move::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move() {
        let m = Move::from_algebraic("a2 a3").unwrap();
        assert_eq!(m.from, Square::new(6, 0).unwrap());
        assert_eq!(m.to, Square::new(5, 0).unwrap());
    }

    #[test]
    /// Test that extra whitespace and uppercase files are tolerated.
    fn parse_loose_move() {
        assert_eq!(
            Move::from_algebraic("  B1\tc3 \n"),
            Move::from_algebraic("b1 c3")
        );
    }

    #[test]
    /// Test that anything but two tokens is a format error, even if the
    /// tokens themselves are bad squares.
    fn wrong_token_count() {
        for bad in ["", "   ", "a2", "a2 a3 a4", "a2a3", "zz"] {
            assert_eq!(Move::from_algebraic(bad), Err(MoveError::InputFormat));
        }
    }

    #[test]
    fn bad_coordinate_in_move() {
        assert_eq!(
            Move::from_algebraic("a2 a9"),
            Err(MoveError::InvalidCoordinate("a9".into()))
        );
        assert_eq!(
            Move::from_algebraic("i1 a9"),
            Err(MoveError::InvalidCoordinate("i1".into()))
        );
    }
}
