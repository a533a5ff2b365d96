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

//! Options for starting a game from the command line.

use crate::base::{Board, Color, DiagramError, Game};

use thiserror::Error;

/// Usage text for the command line.
pub const USAGE: &str = "usage: kingfall [--position <diagram>] [--to-move white|black]

  --position <diagram>   start from a board diagram, rows from rank 8 to rank 1
                         separated by `/`, e.g. RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr
  --to-move <color>      the player who moves first (default: white)
  --help                 print this message

Set RUST_LOG=kingfall=debug to log every move to stderr.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// The reasons the command line can be turned down.
pub enum ConfigError {
    #[error("unrecognized option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),
    #[error("bad color `{0}`; expected `white` or `black`")]
    BadColor(String),
    #[error("bad position: {0}")]
    BadDiagram(#[from] DiagramError),
    #[error("the position has no {0} king")]
    MissingKing(Color),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Configuration options for a game.
pub struct GameConfig {
    /// The position the game starts from.
    pub start: Board,
    /// The player who moves first.
    pub to_move: Color,
    /// Whether only the usage text was asked for.
    pub show_help: bool,
}

impl GameConfig {
    #[must_use]
    /// The standard game: the starting position with White to move.
    pub fn new() -> GameConfig {
        GameConfig {
            start: Board::new(),
            to_move: Color::White,
            show_help: false,
        }
    }

    /// Read a configuration from command-line arguments, not including the
    /// program name.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` for unknown options, options missing
    /// their values, unreadable colors or diagrams, and positions without
    /// both kings.
    pub fn from_args<I, S>(args: I) -> Result<GameConfig, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => config.show_help = true,
                "-p" | "--position" => {
                    let diagram = args.next().ok_or(ConfigError::MissingValue("--position"))?;
                    config.start = Board::from_diagram(diagram.as_ref())?;
                }
                "-t" | "--to-move" => {
                    let name = args.next().ok_or(ConfigError::MissingValue("--to-move"))?;
                    config.to_move = name
                        .as_ref()
                        .parse()
                        .map_err(|_| ConfigError::BadColor(name.as_ref().to_string()))?;
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        // a kingless position would be over before it began
        for color in Color::ALL {
            if !config.start.has_king(color) {
                return Err(ConfigError::MissingKing(color));
            }
        }

        Ok(config)
    }

    #[must_use]
    /// Create the game this configuration describes.
    pub fn build_game(&self) -> Game {
        Game::from_board(self.start, self.to_move)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let config = GameConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, GameConfig::new());
        assert_eq!(config.build_game(), Game::new());
    }

    #[test]
    fn position_and_color() {
        let config =
            GameConfig::from_args(["--position", "4K3/8/8/8/8/8/8/3kr3", "--to-move", "black"])
                .unwrap();
        assert_eq!(config.to_move, Color::Black);
        assert_eq!(config.start.diagram(), "4K3/8/8/8/8/8/8/3kr3");
        assert_eq!(config.build_game().player_to_move(), Color::Black);
    }

    #[test]
    fn help_flag() {
        assert!(GameConfig::from_args(["--help"]).unwrap().show_help);
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(
            GameConfig::from_args(["--fast"]),
            Err(ConfigError::UnknownOption("--fast".into()))
        );
        assert_eq!(
            GameConfig::from_args(["--position"]),
            Err(ConfigError::MissingValue("--position"))
        );
        assert_eq!(
            GameConfig::from_args(["-t", "green"]),
            Err(ConfigError::BadColor("green".into()))
        );
        assert_eq!(
            GameConfig::from_args(["-p", "8/8"]),
            Err(ConfigError::BadDiagram(DiagramError::RowCount(2)))
        );
        assert_eq!(
            GameConfig::from_args(["-p", "8/8/8/8/8/8/8/3k4"]),
            Err(ConfigError::MissingKing(Color::Black))
        );
    }
}
