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

//! Bitboards, sets of squares packed into a single integer.

use super::Square;

use std::ops::BitAnd;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// A set of squares. Bit `i` is set when the square with index `i` (see
/// `Square::index`) is in the set, so a8 is the least significant bit and h1
/// the most significant.
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline(always)]
    #[must_use]
    /// Determine whether a square is in this set.
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    #[inline(always)]
    /// Add a square to the set.
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1 << square.index();
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this set has no squares in it.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    #[must_use]
    /// Count the squares in this set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.insert(sq);
        }
        bb
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::new(idx >> 3, idx & 7)
    }
}
