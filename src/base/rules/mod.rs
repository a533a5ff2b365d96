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

//! Movement rules for each kind of piece.
//!
//! Every rule is a pure function of the moving piece, its origin, its
//! destination and the board. They share two conventions:
//!
//! * a destination holding a piece of the mover's color is never legal;
//! * a destination holding an opposing piece is a capture, which is legal
//!   whenever the same move onto an empty square would be (pawns excepted,
//!   since they capture differently from how they move).
//!
//! Nothing here knows about check. A move which leaves the mover's own king
//! open to capture is still legal.

use once_cell::sync::Lazy;

use super::{Bitboard, Board, Color, Direction, Piece, PieceKind, Square};


/// A lookup table for the squares strictly between two other squares, either
/// down a row or column like a rook or on a diagonal like a bishop.
/// `BETWEEN[a1][a4]` contains a2 and a3. For squares which are not on a
/// shared line, or which are adjacent, the entry is empty.
static BETWEEN: Lazy<[[Bitboard; Square::NUM]; Square::NUM]> = Lazy::new(|| {
    let mut between = [[Bitboard::EMPTY; Square::NUM]; Square::NUM];

    for sq1 in Square::all() {
        for dir in Direction::ROOK_DIRECTIONS
            .into_iter()
            .chain(Direction::BISHOP_DIRECTIONS)
        {
            let mut passed = Bitboard::EMPTY;
            let mut current = sq1;
            while let Some(next) = current.offset(dir) {
                between[sq1.index()][next.index()] = passed;
                passed.insert(next);
                current = next;
            }
        }
    }

    between
});

/// A bitboard of all the squares a knight can move to if its position is
/// the index of the list.
static KNIGHT_MOVES: Lazy<[Bitboard; Square::NUM]> =
    Lazy::new(|| create_step_attacks(&Direction::KNIGHT_STEPS));

/// A bitboard of all the squares a king can move to if his position is the
/// index in the list.
static KING_MOVES: Lazy<[Bitboard; Square::NUM]> =
    Lazy::new(|| create_step_attacks(&Direction::KING_STEPS));

/// Get a step attacks table for a piece which moves by a fixed set of steps,
/// dropping the steps which would leave the board.
fn create_step_attacks(steps: &[Direction]) -> [Bitboard; Square::NUM] {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];
    for start_sq in Square::all() {
        attacks[start_sq.index()] = steps
            .iter()
            .filter_map(|&step| start_sq.offset(step))
            .collect();
    }

    attacks
}

#[must_use]
/// Determine whether `piece` may move from `from` to `to` on `board`.
///
/// The piece does not have to actually be standing on `from`.
///
/// # Examples
///
/// ```
/// use kingfall::base::{rules::is_legal, Board, Color, Piece, PieceKind, Square};
///
/// let board = Board::new();
/// let pawn = Piece::new(Color::White, PieceKind::Pawn);
/// let a2 = Square::from_algebraic("a2").unwrap();
/// assert!(is_legal(pawn, a2, Square::from_algebraic("a4").unwrap(), &board));
/// assert!(!is_legal(pawn, a2, Square::from_algebraic("b3").unwrap(), &board));
/// ```
pub fn is_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_legal(color, from, to, board),
        PieceKind::Knight => knight_legal(color, from, to, board),
        PieceKind::Bishop => bishop_legal(color, from, to, board),
        PieceKind::Rook => rook_legal(color, from, to, board),
        PieceKind::Queen => queen_legal(color, from, to, board),
        PieceKind::King => king_legal(color, from, to, board),
    }
}

#[must_use]
/// Get every square that `piece` could legally move to from `from`.
pub fn destinations(piece: Piece, from: Square, board: &Board) -> Bitboard {
    Square::all()
        .filter(|&to| is_legal(piece, from, to, board))
        .collect()
}

#[inline(always)]
#[must_use]
/// Get the squares strictly between `from` and `to`, if they share a row,
/// column or diagonal. Otherwise, the result is empty.
pub fn between(from: Square, to: Square) -> Bitboard {
    BETWEEN[from.index()][to.index()]
}

#[inline(always)]
#[must_use]
/// Determine whether every square strictly between `from` and `to` is empty.
/// Both endpoints are ignored.
pub fn path_clear(from: Square, to: Square, board: &Board) -> bool {
    (between(from, to) & board.occupancy()).is_empty()
}

#[inline(always)]
/// Determine whether a piece of color `color` may end its move on `to`, that
/// is, whether `to` is empty or holds an opposing piece.
fn can_land(color: Color, to: Square, board: &Board) -> bool {
    board.get(to).map_or(true, |p| p.color != color)
}

#[must_use]
/// Determine whether a pawn of color `color` may move from `from` to `to`.
///
/// A pawn moves one square straight ahead onto an empty square, or two from
/// its starting row if both squares it crosses are empty. It captures one
/// square diagonally ahead, and only onto an opposing piece.
pub fn pawn_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let dir = color.pawn_direction();
    let target = board.get(to);

    if from.offset(dir) == Some(to) {
        return target.is_none();
    }

    if from.row() == color.pawn_start_row() && from.offset(2 * dir) == Some(to) {
        return target.is_none() && path_clear(from, to, board);
    }

    if [Direction::EAST, Direction::WEST]
        .into_iter()
        .any(|side| from.offset(dir + side) == Some(to))
    {
        return matches!(target, Some(p) if p.color != color);
    }

    false
}

#[must_use]
/// Determine whether a knight may leap from `from` to `to`.
pub fn knight_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    KNIGHT_MOVES[from.index()].contains(to) && can_land(color, to, board)
}

#[must_use]
/// Determine whether a king may step from `from` to `to`.
pub fn king_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    KING_MOVES[from.index()].contains(to) && can_land(color, to, board)
}

#[must_use]
/// Determine whether a rook may slide from `from` to `to`.
pub fn rook_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    from != to
        && (from.row() == to.row() || from.col() == to.col())
        && path_clear(from, to, board)
        && can_land(color, to, board)
}

#[must_use]
/// Determine whether a bishop may slide from `from` to `to`.
pub fn bishop_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let delta = to - from;
    delta.rows() != 0
        && delta.rows().abs() == delta.cols().abs()
        && path_clear(from, to, board)
        && can_land(color, to, board)
}

#[must_use]
/// Determine whether a queen may slide from `from` to `to`, which it can do
/// along any line that either a rook or a bishop could.
pub fn queen_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    rook_legal(color, from, to, board) || bishop_legal(color, from, to, board)
}
