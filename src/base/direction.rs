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

//! Directions, which describe motions between `Square`s.

use std::ops::{Add, Mul};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two squares, measured in rows and columns.
///
/// Rows grow downwards on the printed board, so "north" (towards rank 8) is a
/// negative row step.
pub struct Direction {
    rows: i8,
    cols: i8,
}

impl Direction {
    /* Cardinal directions */

    /// A move "north" from White's point of view, in the direction a white
    /// pawn would travel.
    pub const NORTH: Self = Self::new(-1, 0);

    /// A move "east" from White's point of view.
    pub const EAST: Self = Self::new(0, 1);

    /// A move "south" from White's point of view.
    pub const SOUTH: Self = Self::new(1, 0);

    /// A move "west" from White's point of view.
    pub const WEST: Self = Self::new(0, -1);

    /* Composite directions */

    pub const NORTHWEST: Self = Self::new(-1, -1);
    pub const NORTHEAST: Self = Self::new(-1, 1);
    pub const SOUTHEAST: Self = Self::new(1, 1);
    pub const SOUTHWEST: Self = Self::new(1, -1);

    /* Knight directions */

    pub const NNW: Self = Self::new(-2, -1);
    pub const NNE: Self = Self::new(-2, 1);
    pub const ENE: Self = Self::new(-1, 2);
    pub const ESE: Self = Self::new(1, 2);
    pub const SSE: Self = Self::new(2, 1);
    pub const SSW: Self = Self::new(2, -1);
    pub const WSW: Self = Self::new(1, -2);
    pub const WNW: Self = Self::new(-1, -2);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHWEST,
        Self::SOUTHEAST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Self; 8] = [
        Self::NNW,
        Self::NNE,
        Self::ENE,
        Self::ESE,
        Self::SSE,
        Self::SSW,
        Self::WSW,
        Self::WNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Self; 8] = [
        Self::NORTH,
        Self::NORTHEAST,
        Self::EAST,
        Self::SOUTHEAST,
        Self::SOUTH,
        Self::SOUTHWEST,
        Self::WEST,
        Self::NORTHWEST,
    ];

    #[must_use]
    /// Create a new `Direction` based on how far it moves in rows and columns.
    pub const fn new(rows: i8, cols: i8) -> Self {
        Self { rows, cols }
    }

    #[inline(always)]
    #[must_use]
    /// The number of rows this direction moves. Positive is towards row 7.
    pub const fn rows(self) -> i8 {
        self.rows
    }

    #[inline(always)]
    #[must_use]
    /// The number of columns this direction moves. Positive is towards the
    /// h-file.
    pub const fn cols(self) -> i8 {
        self.cols
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;
    fn mul(self, rhs: Direction) -> Direction {
        Direction::new(self * rhs.rows, self * rhs.cols)
    }
}

impl Add<Self> for Direction {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.rows + rhs.rows, self.cols + rhs.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_directions() {
        assert_eq!(Direction::NORTH + Direction::EAST, Direction::NORTHEAST);
        assert_eq!(Direction::SOUTH + Direction::WEST, Direction::SOUTHWEST);
        assert_eq!(Direction::EAST + Direction::WEST, Direction::new(0, 0));
    }

    #[test]
    /// Test that every knight step is an L-shape.
    fn knight_steps_are_l_shaped() {
        for step in Direction::KNIGHT_STEPS {
            let mut d = [step.rows().abs(), step.cols().abs()];
            d.sort_unstable();
            assert_eq!(d, [1, 2]);
        }
    }

    #[test]
    fn scale_direction() {
        assert_eq!(2 * Direction::NORTH, Direction::new(-2, 0));
    }
}
