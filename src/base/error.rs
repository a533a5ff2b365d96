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

//! Errors raised while reading or playing moves and positions.
//!
//! None of these are fatal: a rejected move leaves the game exactly as it was,
//! and the same player is expected to try again.

use super::{Color, PieceKind, Square};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// The reasons a submitted move can be turned down.
pub enum MoveError {
    /// A token was not a file from `a` to `h` followed by a rank from `1` to
    /// `8`.
    #[error("`{0}` is not a square; expected a file a-h followed by a rank 1-8")]
    InvalidCoordinate(String),
    /// The input did not consist of exactly two squares.
    #[error("expected exactly two squares, such as `a2 a3`")]
    InputFormat,
    /// There was no piece on the origin square.
    #[error("there is no piece on {0}")]
    NoPieceAtSource(Square),
    /// The piece on the origin square belongs to the player who is not moving.
    #[error("the {kind} on {square} belongs to {owner}, but it is {turn}'s turn")]
    WrongOwner {
        square: Square,
        kind: PieceKind,
        owner: Color,
        turn: Color,
    },
    /// The move does not fit the way the piece moves, or its path or target
    /// square is blocked.
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalMove {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    /// The game has already been won, so no more moves are accepted.
    #[error("the game is over; {winner} has already won")]
    GameFinished { winner: Color },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// The reasons a board diagram can fail to load.
pub enum DiagramError {
    #[error("expected 8 rows separated by `/`, found {0}")]
    RowCount(usize),
    #[error("row {row} describes {width} squares instead of 8")]
    RowWidth { row: usize, width: usize },
    #[error("unrecognized character `{chr}` in row {row}")]
    BadCharacter { row: usize, chr: char },
}
