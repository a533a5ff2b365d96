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

//! Play Kingfall in a terminal.
//!
//! Two players take turns typing moves on standard input. The game ends when a
//! king is captured, when a player types `/quit`, or when the input runs out.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

use std::{
    env,
    io::{self, BufReader},
    process::ExitCode,
};

use kingfall::{
    cli::KingfallApp,
    config::{GameConfig, USAGE},
};
use log::{error, info};

/// Run a game of Kingfall over standard input and output.
fn main() -> ExitCode {
    env_logger::init();

    let config = match GameConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kingfall: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let mut app = KingfallApp::new(
        config.build_game(),
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    match app.run() {
        Ok(Some(winner)) => {
            info!("game finished; {winner} won");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("game abandoned");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("i/o failure: {e}");
            eprintln!("kingfall: {e}");
            ExitCode::FAILURE
        }
    }
}
