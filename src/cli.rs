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

//! A text-based front-end: print the board, ask the player to move, repeat.

use crate::base::{Color, Game, MoveOutcome, Square};

use log::debug;

use std::{
    fmt,
    io::{self, BufRead, Write},
};

/// The commands which can be typed instead of a move.
const HELP: &str = "Type a move as two squares, such as `e2 e4`. Other commands:
  /moves <square>   list the squares the piece on <square> can move to
  /help             print this message
  /quit             leave the game";

/// A text-based application for playing a game of Kingfall.
pub struct KingfallApp<'a> {
    /// The currently-played game.
    game: Game,

    /// The input stream to receive moves from.
    input_stream: Box<dyn BufRead + 'a>,

    /// The output stream to send the board and messages to.
    output_stream: Box<dyn Write + 'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The set of commands which this command line program can execute.
enum Command {
    /// Quit the currently-running application.
    Quit,

    /// Print the list of commands.
    Help,

    /// List where the piece on a square can move.
    ListMoves(Square),

    /// Submit a move, as typed.
    PlayMove(String),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Quit => write!(f, "quit"),
            Command::Help => write!(f, "help"),
            Command::ListMoves(sq) => write!(f, "list moves from {sq}"),
            Command::PlayMove(s) => write!(f, "play move {s:?}"),
        }
    }
}

type ParseResult = Result<Command, String>;

impl<'a> KingfallApp<'a> {
    /// Create an application which plays `game`, reading moves from `input`
    /// and writing to `output`.
    pub fn new(game: Game, input: impl BufRead + 'a, output: impl Write + 'a) -> KingfallApp<'a> {
        KingfallApp {
            game,
            input_stream: Box::new(input),
            output_stream: Box::new(output),
        }
    }

    #[must_use]
    /// Get the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command line application.
    /// Will continue running until a king is captured, the user quits, or the
    /// input runs out. Returns the winner if there is one.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if reading from the input or writing
    /// to the output fails.
    pub fn run(&mut self) -> io::Result<Option<Color>> {
        let mut user_input = Vec::with_capacity(64);
        loop {
            writeln!(self.output_stream)?;
            write!(self.output_stream, "{}", self.game.board())?;
            writeln!(self.output_stream)?;

            if let Some(winner) = self.game.winner() {
                writeln!(self.output_stream, "{winner} has already won.")?;
                return Ok(Some(winner));
            }

            write!(
                self.output_stream,
                "{}'s move (e.g., a2 a3): ",
                self.game.turn()
            )?;
            self.output_stream.flush()?;

            user_input.clear();
            // bytes which are not UTF-8 become U+FFFD and fail as a bad move
            if self.input_stream.read_until(b'\n', &mut user_input)? == 0 {
                writeln!(self.output_stream)?;
                writeln!(self.output_stream, "End of input; leaving the game.")?;
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&user_input);
            let command = match parse_command(&line) {
                Ok(cmd) => cmd,
                Err(s) => {
                    writeln!(self.output_stream, "{s}")?;
                    continue;
                }
            };
            debug!("executing command: {command}");

            match command {
                Command::Quit => {
                    writeln!(self.output_stream, "Now quitting.")?;
                    return Ok(None);
                }
                Command::Help => writeln!(self.output_stream, "{HELP}")?,
                Command::ListMoves(sq) => self.list_moves(sq)?,
                Command::PlayMove(line) => {
                    if let Some(winner) = self.play_move(&line)? {
                        return Ok(Some(winner));
                    }
                }
            }
        }
    }

    /// Submit a move and report a rejection or the end of the game.
    fn play_move(&mut self, line: &str) -> io::Result<Option<Color>> {
        match self.game.submit_line(line) {
            Ok(MoveOutcome::Accepted) => Ok(None),
            Ok(MoveOutcome::GameOver { winner }) => {
                writeln!(self.output_stream)?;
                write!(self.output_stream, "{}", self.game.board())?;
                writeln!(self.output_stream)?;
                writeln!(self.output_stream, "{winner} wins by capturing the king!")?;
                Ok(Some(winner))
            }
            Err(e) => {
                writeln!(self.output_stream, "Invalid move: {e}. Try again.")?;
                Ok(None)
            }
        }
    }

    fn list_moves(&mut self, sq: Square) -> io::Result<()> {
        match self.game.destinations(sq) {
            Ok(targets) if targets.is_empty() => {
                writeln!(self.output_stream, "The piece on {sq} cannot move.")
            }
            Ok(targets) => {
                let names: Vec<String> = targets.map(|t| t.to_string()).collect();
                writeln!(
                    self.output_stream,
                    "The piece on {sq} can move to: {}",
                    names.join(" ")
                )
            }
            Err(e) => writeln!(self.output_stream, "{e}."),
        }
    }
}

impl Default for KingfallApp<'_> {
    fn default() -> Self {
        KingfallApp::new(Game::new(), io::BufReader::new(io::stdin()), io::stdout())
    }
}

/// Parse the given line, and create a new `Command` to describe it.
/// Lines starting with `/` are commands; anything else is a move.
/// Will return an `Err` if the line is an unknown or malformed command.
fn parse_command(s: &str) -> ParseResult {
    let mut token_iter = s.split_ascii_whitespace();
    let Some(command_block) = token_iter.next() else {
        return Ok(Command::PlayMove(s.to_string()));
    };
    let Some(command_name) = command_block.strip_prefix('/') else {
        return Ok(Command::PlayMove(s.to_string()));
    };

    match command_name {
        "q" | "quit" => Ok(Command::Quit),
        "h" | "help" => Ok(Command::Help),
        "m" | "moves" => {
            let sq_name = token_iter
                .next()
                .ok_or("`/moves` needs a square, such as `/moves b1`")?;
            Square::from_algebraic(sq_name)
                .map(Command::ListMoves)
                .map_err(|e| e.to_string())
        }
        _ => Err(format!("unrecognized command `{command_block}`; type /help")),
    }
}
