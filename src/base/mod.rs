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
#![warn(clippy::pedantic)]

//! Shared data types and the rules of the game.

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::Bitboard;

mod board;
pub use board::Board;

mod color;
pub use color::Color;

mod direction;
pub use direction::Direction;

mod error;
pub use error::{DiagramError, MoveError};

mod game;
pub use game::{Game, MoveOutcome, MoveResult};

mod moves;
pub use moves::Move;

mod piece;
pub use piece::{Piece, PieceKind};

pub mod rules;

mod square;
pub use square::Square;

mod turn;
pub use turn::TurnManager;
