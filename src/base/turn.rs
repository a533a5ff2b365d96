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

//! Tracking whose turn it is.

use super::{Color, MoveResult};

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Keeps track of which player is to move.
///
/// The turn passes only when a move has been played. A rejected move leaves it
/// with the same player, who is asked again.
pub struct TurnManager {
    active: Color,
}

impl TurnManager {
    #[must_use]
    /// Start with `first` to move.
    pub const fn new(first: Color) -> TurnManager {
        TurnManager { active: first }
    }

    #[inline(always)]
    #[must_use]
    /// Get the player who is to move.
    pub const fn active(&self) -> Color {
        self.active
    }

    /// Update the turn after a submission. The turn passes to the other player
    /// exactly when the submission was played, whether or not it ended the
    /// game.
    pub fn record(&mut self, result: &MoveResult) {
        if result.is_ok() {
            self.active = !self.active;
        }
    }
}

impl Default for TurnManager {
    fn default() -> TurnManager {
        TurnManager::new(Color::White)
    }
}

impl Display for TurnManager {
    /// Name the active player and the case of their pieces, for instance
    /// `White (lowercase pieces)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} pieces)", self.active, self.active.glyph_case())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{MoveError, MoveOutcome};

    #[test]
    fn flips_on_accept_only() {
        let mut turn = TurnManager::default();
        assert_eq!(turn.active(), Color::White);

        turn.record(&Err(MoveError::InputFormat));
        assert_eq!(turn.active(), Color::White);

        turn.record(&Ok(MoveOutcome::Accepted));
        assert_eq!(turn.active(), Color::Black);

        turn.record(&Ok(MoveOutcome::GameOver {
            winner: Color::Black,
        }));
        assert_eq!(turn.active(), Color::White);
    }

    #[test]
    fn prompt_names_glyph_case() {
        assert_eq!(
            TurnManager::new(Color::White).to_string(),
            "White (lowercase pieces)"
        );
        assert_eq!(
            TurnManager::new(Color::Black).to_string(),
            "Black (uppercase pieces)"
        );
    }
}
