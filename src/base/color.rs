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

//! Representation of player colors.

use super::Direction;
use std::{
    fmt::{Display, Formatter},
    ops::Not,
    str::FromStr,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible colors that a piece or player can be.
pub enum Color {
    /// The white player, a.k.a. the first player to move in a game.
    /// White pieces are drawn with lowercase letters.
    White,
    /// The black player, a.k.a. the second player to move in a game.
    /// Black pieces are drawn with uppercase letters.
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline(always)]
    #[must_use]
    /// Get the direction that a pawn of the given color moves. White pawns
    /// travel towards row 0 (rank 8) and Black pawns towards row 7 (rank 1).
    pub const fn pawn_direction(self) -> Direction {
        match self {
            Color::White => Direction::NORTH,
            Color::Black => Direction::SOUTH,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the row on which the pawns of this color start, and from which
    /// they may advance two squares.
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the row holding this color's back rank in the starting layout.
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[must_use]
    /// Get a description of the letter case used for this color's pieces.
    pub const fn glyph_case(self) -> &'static str {
        match self {
            Color::White => "lowercase",
            Color::Black => "uppercase",
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = &'static str;

    /// Parse a color name, such as "white" or "b". Case does not matter.
    fn from_str(s: &str) -> Result<Color, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err("expected `white` or `black`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the opposite color of `Color::White` is `Color::Black`, and
    /// vice versa.
    fn test_opposite_color() {
        assert_eq!(Color::White, !Color::Black);
        assert_eq!(Color::Black, !Color::White);
    }

    #[test]
    /// Test that White pawns head towards row 0 and Black pawns towards row 7.
    fn test_directions() {
        assert_eq!(Color::White.pawn_direction(), Direction::NORTH);
        assert_eq!(Color::Black.pawn_direction(), Direction::SOUTH);
        assert_eq!(Color::White.pawn_direction().rows(), -1);
        assert_eq!(Color::Black.pawn_direction().rows(), 1);
    }

    #[test]
    fn test_pawn_start_row() {
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
    }

    #[test]
    fn parse_color_names() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!("B".parse::<Color>(), Ok(Color::Black));
        assert!("green".parse::<Color>().is_err());
    }
}
