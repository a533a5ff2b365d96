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

//! Kingfall: a turn-based chess rules engine in which a game ends the moment
//! a king is captured.
//!
//! The rules themselves live in [`base`]. [`cli`] is a small text front-end
//! which feeds typed moves into a [`base::Game`], and [`config`] describes how
//! that front-end starts a game.

pub mod base;
pub mod cli;
pub mod config;
