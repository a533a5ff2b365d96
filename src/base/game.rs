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

//! Full games: a board, the player to move, and the outcome once there is one.

use super::{rules, Bitboard, Board, Color, Move, MoveError, Piece, Square, TurnManager};

use log::{debug, info};

use std::{
    default::Default,
    fmt::{Display, Formatter},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What happened after a move was played.
pub enum MoveOutcome {
    /// The move was played and the game goes on with the other player.
    Accepted,
    /// The move captured a king, ending the game.
    GameOver {
        /// The player whose king is still on the board.
        winner: Color,
    },
}

/// The result of submitting a move: either what happened after it was played,
/// or why it was turned down.
pub type MoveResult = Result<MoveOutcome, MoveError>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A game in progress.
///
/// The board can only be changed by submitting moves. Each submission is
/// checked in order for: a readable move, a piece on the origin square, that
/// piece belonging to the player to move, and the move suiting that piece. The
/// first failed check rejects the move and nothing changes. Otherwise the
/// piece is moved, capturing whatever was on its destination, and the turn
/// passes.
///
/// There is no check or checkmate. The game ends the moment either king is
/// captured, after which every further submission is rejected.
pub struct Game {
    /// The current position.
    board: Board,
    /// The player to move.
    turn: TurnManager,
    /// The winner, once a king has been captured.
    winner: Option<Color>,
}

impl Game {
    #[must_use]
    /// Construct a new `Game` in the starting position, with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::new(), Color::White)
    }

    #[must_use]
    /// Construct a `Game` from any position, with `to_move` to play first. If
    /// the board is already missing a king, the game starts out finished.
    pub fn from_board(board: Board, to_move: Color) -> Game {
        Game {
            winner: board.winner(),
            board,
            turn: TurnManager::new(to_move),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    #[must_use]
    /// Get the player to move.
    pub fn player_to_move(&self) -> Color {
        self.turn.active()
    }

    #[inline(always)]
    #[must_use]
    /// Get the turn tracker, whose `Display` form names the player to move and
    /// the case of their pieces.
    pub fn turn(&self) -> &TurnManager {
        &self.turn
    }

    #[must_use]
    /// Get the winner, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    /// Determine whether a king has been captured. Once this is true, every
    /// further move is rejected.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Submit a move written as a single line, such as `a2 a3`, for the player
    /// to move.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing why the move was turned
    /// down, in which case the game is unchanged and the same player is still
    /// to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingfall::base::{Color, Game, MoveError, MoveOutcome};
    ///
    /// let mut g = Game::new();
    /// assert_eq!(g.submit_line("a2 a4"), Ok(MoveOutcome::Accepted));
    /// assert_eq!(g.player_to_move(), Color::Black);
    /// assert!(matches!(g.submit_line("a4 a5"), Err(MoveError::WrongOwner { .. })));
    /// assert_eq!(g.player_to_move(), Color::Black);
    /// ```
    pub fn submit_line(&mut self, line: &str) -> MoveResult {
        let result = self
            .check_running()
            .and_then(|()| Move::from_algebraic(line))
            .and_then(|m| self.apply(m));
        self.conclude(line, result)
    }

    /// Submit a move given as two separate coordinates for the player to move.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing why the move was turned
    /// down, in which case the game is unchanged and the same player is still
    /// to move.
    pub fn submit_move(&mut self, from: &str, to: &str) -> MoveResult {
        let result = self
            .check_running()
            .and_then(|()| Move::from_coordinates(from, to))
            .and_then(|m| self.apply(m));
        self.conclude(&format!("{from} {to}"), result)
    }

    /// Attempt to play a move, which may or may not be legal.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing the source of the problem
    /// if `m` cannot be played.
    pub fn try_move(&mut self, m: Move) -> MoveResult {
        let result = self.check_running().and_then(|()| self.apply(m));
        self.conclude(&m.to_string(), result)
    }

    /// Check whether the player to move may play `m`, without playing it.
    /// Returns the piece which would move.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing why `m` would be turned
    /// down.
    pub fn validate(&self, m: Move) -> Result<Piece, MoveError> {
        self.check_running()?;
        let piece = self.board[m.from].ok_or(MoveError::NoPieceAtSource(m.from))?;
        if piece.color != self.turn.active() {
            return Err(MoveError::WrongOwner {
                square: m.from,
                kind: piece.kind,
                owner: piece.color,
                turn: self.turn.active(),
            });
        }
        if !rules::is_legal(piece, m.from, m.to, &self.board) {
            return Err(MoveError::IllegalMove {
                kind: piece.kind,
                from: m.from,
                to: m.to,
            });
        }
        Ok(piece)
    }

    /// Get the squares which the piece on `sq` could move to, whoever owns it.
    ///
    /// # Errors
    ///
    /// This function will return `MoveError::NoPieceAtSource` if `sq` is
    /// empty.
    pub fn destinations(&self, sq: Square) -> Result<Bitboard, MoveError> {
        let piece = self.board[sq].ok_or(MoveError::NoPieceAtSource(sq))?;
        Ok(rules::destinations(piece, sq, &self.board))
    }

    /// Reject everything once the game has been won.
    fn check_running(&self) -> Result<(), MoveError> {
        match self.winner {
            Some(winner) => Err(MoveError::GameFinished { winner }),
            None => Ok(()),
        }
    }

    /// Validate and then play `m`, and look for a captured king. The turn is
    /// left alone.
    fn apply(&mut self, m: Move) -> MoveResult {
        let piece = self.validate(m)?;
        if let Some(captured) = self.board.make_move(m) {
            debug!("{piece} on {} captured the {captured} on {}", m.from, m.to);
        }

        self.winner = self.board.winner();
        Ok(match self.winner {
            Some(winner) => MoveOutcome::GameOver { winner },
            None => MoveOutcome::Accepted,
        })
    }

    /// Log the result of a submission and pass the turn if it was played.
    fn conclude(&mut self, input: &str, result: MoveResult) -> MoveResult {
        let mover = self.turn.active();
        match &result {
            Ok(MoveOutcome::Accepted) => debug!("{mover} played {input}"),
            Ok(MoveOutcome::GameOver { winner }) => {
                info!("{mover} played {input}; {winner} wins by capturing the king");
            }
            Err(e) => debug!("rejected {input:?} from {mover}: {e}"),
        }
        self.turn.record(&result);
        result
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.winner {
            Some(winner) => writeln!(f, "{winner} has won."),
            None => writeln!(f, "{} to move.", self.turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::PieceKind;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    /// Play a list of moves which are all expected to be accepted.
    fn play(g: &mut Game, moves: &[&str]) {
        for m in moves {
            assert_eq!(g.submit_line(m), Ok(MoveOutcome::Accepted), "playing {m}");
        }
    }

    #[test]
    /// Test that an accepted move relocates the piece and passes the turn.
    fn accepted_move() {
        let mut g = Game::new();
        assert_eq!(g.submit_move("a2", "a3"), Ok(MoveOutcome::Accepted));
        assert_eq!(g.board()[sq("a2")], None);
        assert_eq!(
            g.board()[sq("a3")],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(g.player_to_move(), Color::Black);
    }

    #[test]
    /// Test that every kind of rejection leaves the game untouched, including
    /// the player to move.
    fn rejections_change_nothing() {
        let mut g = Game::new();
        let before = g.clone();

        assert_eq!(
            g.submit_move("i1", "a3"),
            Err(MoveError::InvalidCoordinate("i1".into()))
        );
        assert_eq!(g.submit_line("a2"), Err(MoveError::InputFormat));
        assert_eq!(g.submit_line("a2 a3 a4"), Err(MoveError::InputFormat));
        assert_eq!(
            g.submit_move("a3", "a4"),
            Err(MoveError::NoPieceAtSource(sq("a3")))
        );
        assert_eq!(
            g.submit_move("a7", "a6"),
            Err(MoveError::WrongOwner {
                square: sq("a7"),
                kind: PieceKind::Pawn,
                owner: Color::Black,
                turn: Color::White,
            })
        );
        assert_eq!(
            g.submit_move("a1", "a3"),
            Err(MoveError::IllegalMove {
                kind: PieceKind::Rook,
                from: sq("a1"),
                to: sq("a3"),
            })
        );

        assert_eq!(g, before);
        assert_eq!(g.player_to_move(), Color::White);
    }

    #[test]
    /// Test that turns alternate over a short sequence of moves.
    fn turns_alternate() {
        let mut g = Game::new();
        play(&mut g, &["e2 e4", "e7 e5", "g1 f3", "b8 c6"]);
        assert_eq!(g.player_to_move(), Color::White);
        assert!(!g.is_over());
    }

    #[test]
    /// Test that capturing overwrites the piece on the destination.
    fn capture_by_overwrite() {
        let mut g = Game::new();
        play(&mut g, &["e2 e4", "d7 d5", "e4 d5"]);
        assert_eq!(
            g.board()[sq("d5")],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(g.board()[sq("e4")], None);
        assert_eq!(g.board().occupancy().len(), 31);
    }

    #[test]
    /// Test that moving into a position where one's king could be taken is
    /// allowed.
    fn no_check_detection() {
        let b = Board::from_diagram("3K4/8/8/8/8/8/8/3kR3").unwrap();
        let mut g = Game::from_board(b, Color::White);
        // the white king walks straight onto the black rook's file
        assert_eq!(g.submit_line("d1 e2"), Ok(MoveOutcome::Accepted));
    }

    #[test]
    /// Test that taking the Black king ends the game in White's favor, and that
    /// the turn still passes.
    fn capture_black_king() {
        let b = Board::from_diagram("4K3/8/8/8/8/8/8/3kr3").unwrap();
        let mut g = Game::from_board(b, Color::White);
        assert_eq!(
            g.submit_line("e1 e8"),
            Ok(MoveOutcome::GameOver {
                winner: Color::White
            })
        );
        assert_eq!(g.winner(), Some(Color::White));
        assert!(g.is_over());
        assert_eq!(g.player_to_move(), Color::Black);
    }

    #[test]
    fn capture_white_king() {
        let b = Board::from_diagram("4K3/8/8/8/8/8/8/3k3R").unwrap();
        let mut g = Game::from_board(b, Color::Black);
        assert_eq!(
            g.submit_line("h1 d1"),
            Ok(MoveOutcome::GameOver {
                winner: Color::Black
            })
        );
        assert_eq!(g.winner(), Some(Color::Black));
    }

    #[test]
    /// Test that nothing can be played after the game has ended.
    fn finished_game_is_frozen() {
        let b = Board::from_diagram("4K3/8/8/8/8/8/8/3kr3").unwrap();
        let mut g = Game::from_board(b, Color::White);
        g.submit_line("e1 e8").unwrap();
        let after = g.clone();

        let finished = Err(MoveError::GameFinished {
            winner: Color::White,
        });
        assert_eq!(g.submit_line("e8 d8"), finished);
        assert_eq!(g.submit_line("nonsense"), finished);
        assert_eq!(g.submit_move("d1", "d2"), finished);
        assert_eq!(g, after);
    }

    #[test]
    /// Test that a board which is already missing a king starts finished.
    fn kingless_start() {
        let b = Board::from_diagram("8/8/8/8/8/8/8/3k4").unwrap();
        let g = Game::from_board(b, Color::White);
        assert_eq!(g.winner(), Some(Color::White));
    }

    #[test]
    /// Test the shortest king hunt from the starting position.
    fn king_hunt_from_start() {
        let mut g = Game::new();
        // walk Black's king down the e-file towards White's queen on e1
        play(&mut g, &["e2 e4", "e7 e5", "f2 f4", "e8 e7", "f4 e5", "e7 e6"]);
        play(&mut g, &["a2 a3", "e6 e5"]);
        assert_eq!(
            g.submit_line("e1 e5"),
            Err(MoveError::IllegalMove {
                kind: PieceKind::Queen,
                from: sq("e1"),
                to: sq("e5"),
            })
        );
        play(&mut g, &["d2 d4"]);
        assert_eq!(
            g.submit_line("e5 e4"),
            Ok(MoveOutcome::Accepted),
            "the black king takes the e4 pawn"
        );
        assert_eq!(
            g.submit_line("e1 e4"),
            Ok(MoveOutcome::GameOver {
                winner: Color::White
            })
        );
    }

    #[test]
    fn validate_does_not_play() {
        let g = Game::new();
        let m = Move::from_algebraic("b1 c3").unwrap();
        assert_eq!(
            g.validate(m),
            Ok(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(g, Game::new());
    }

    #[test]
    fn destinations_of_piece() {
        let g = Game::new();
        let knight_moves: Vec<Square> = g.destinations(sq("g8")).unwrap().collect();
        assert_eq!(knight_moves, vec![sq("f6"), sq("h6")]);
        assert_eq!(
            g.destinations(sq("e4")),
            Err(MoveError::NoPieceAtSource(sq("e4")))
        );
    }
}
