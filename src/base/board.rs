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

//! State representations of boards, which contain piece positions but
//! neither the turn nor the outcome of a game.

use super::{Bitboard, Color, DiagramError, Move, Piece, PieceKind, Square};

use std::{
    default::Default,
    fmt::{Display, Formatter, Write},
    ops::Index,
};

/// The glyph drawn on an empty square.
pub const EMPTY_GLYPH: char = '.';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// An 8x8 grid of squares, each of which is either empty or holds one piece.
///
/// The board enforces nothing about its contents: any number of pieces of any
/// kind may be placed on it. Legality is decided when a move is made, by the
/// functions in `rules`.
pub struct Board {
    /// The squares, indexed first by row (row 0 is rank 8) and then by column.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The diagram of the starting position.
    pub const START_DIAGRAM: &'static str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr";

    #[must_use]
    /// Create a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[must_use]
    /// Create a board in the starting position.
    ///
    /// Black's back rank is on row 0 and White's on row 7, each with a full
    /// row of pawns in front of it. Black's back rank reads `R N B Q K B N R`
    /// from the a-file to the h-file; White's is the mirror image
    /// `r n b k q b n r`.
    pub fn new() -> Board {
        const BLACK_BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        const WHITE_BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (color, back) in [(Color::Black, BLACK_BACK), (Color::White, WHITE_BACK)] {
            let back_row = usize::from(color.back_row());
            let pawn_row = usize::from(color.pawn_start_row());
            for col in 0..8 {
                board.squares[back_row][col] = Some(Piece::new(color, back[col]));
                board.squares[pawn_row][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Create a board from a diagram.
    ///
    /// A diagram lists the 8 rows from row 0 (rank 8) to row 7 (rank 1),
    /// separated by `/`. Each row is made of piece glyphs (lowercase for White,
    /// uppercase for Black) and digits from 1 to 8 standing for that many
    /// empty squares.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing the first problem found
    /// if `diagram` does not describe exactly 64 squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingfall::base::Board;
    /// assert_eq!(Board::from_diagram(Board::START_DIAGRAM), Ok(Board::new()));
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Board, DiagramError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(DiagramError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (r, row_text) in rows.into_iter().enumerate() {
            let mut c = 0;
            for chr in row_text.chars() {
                if let Some(piece) = Piece::from_glyph(chr) {
                    if c < 8 {
                        board.squares[r][c] = Some(piece);
                    }
                    c += 1;
                } else {
                    match chr.to_digit(10) {
                        Some(n @ 1..=8) => c += n as usize,
                        _ => return Err(DiagramError::BadCharacter { row: r, chr }),
                    }
                }
            }
            if c != 8 {
                return Err(DiagramError::RowWidth { row: r, width: c });
            }
        }

        Ok(board)
    }

    #[must_use]
    /// Write this board as a diagram which `Board::from_diagram` accepts.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for (r, row) in self.squares.iter().enumerate() {
            if r > 0 {
                out.push('/');
            }
            let mut blanks = 0;
            for sq in row {
                match sq {
                    Some(piece) => {
                        if blanks > 0 {
                            // writing to a String never fails
                            let _ = write!(out, "{blanks}");
                            blanks = 0;
                        }
                        out.push(piece.glyph());
                    }
                    None => blanks += 1,
                }
            }
            if blanks > 0 {
                let _ = write!(out, "{blanks}");
            }
        }
        out
    }

    #[inline(always)]
    #[must_use]
    /// Get the piece on a square, if there is one.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[usize::from(sq.row())][usize::from(sq.col())]
    }

    #[inline(always)]
    /// Place a piece on a square, replacing whatever was there. Placing `None`
    /// empties the square.
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[usize::from(sq.row())][usize::from(sq.col())] = piece;
    }

    #[inline(always)]
    /// Remove the piece on a square, returning it.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[usize::from(sq.row())][usize::from(sq.col())].take()
    }

    #[must_use]
    /// Get the rows of the board, row 0 (rank 8) first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    #[must_use]
    /// Get the squares occupied by pieces of either color.
    pub fn occupancy(&self) -> Bitboard {
        Square::all().filter(|&sq| self.get(sq).is_some()).collect()
    }

    #[must_use]
    /// Get the square of the given color's king. If there is more than one,
    /// the first one found from a8 onwards is returned.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    #[must_use]
    /// Determine whether any king of the given color is on the board.
    pub fn has_king(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }

    #[must_use]
    /// Check whether the game on this board has been won, which is the case as
    /// soon as either king is gone. A missing White king means Black has won;
    /// otherwise, a missing Black king means White has won.
    pub fn winner(&self) -> Option<Color> {
        if !self.has_king(Color::White) {
            Some(Color::Black)
        } else if !self.has_king(Color::Black) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Move a piece, without checking whether the move is legal. Whatever was
    /// on the destination is overwritten, and returned.
    pub fn make_move(&mut self, m: Move) -> Option<Piece> {
        let mover = self.remove(m.from);
        let captured = self.get(m.to);
        self.put(m.to, mover);
        captured
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Option<Piece> {
        &self.squares[usize::from(sq.row())][usize::from(sq.col())]
    }
}

impl Display for Board {
    /// Display this board in a console-ready format: a file header, then 8
    /// rows from rank 8 down to rank 1 with the rank on both sides, then the
    /// file header again. White pieces are lowercase, Black pieces uppercase
    /// and empty squares are dots.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        const FILES: &str = "   a b c d e f g h";
        const RULE: &str = "  -----------------";

        writeln!(f, "{FILES}")?;
        writeln!(f, "{RULE}")?;
        for (r, row) in self.squares.iter().enumerate() {
            let rank = 8 - r;
            write!(f, "{rank} |")?;
            for sq in row {
                write!(f, "{} ", sq.map_or(EMPTY_GLYPH, Piece::glyph))?;
            }
            writeln!(f, "|{rank}")?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "{FILES}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn glyphs(board: &Board, row: usize) -> String {
        board.rows()[row]
            .iter()
            .map(|p| p.map_or(EMPTY_GLYPH, Piece::glyph))
            .collect()
    }

    #[test]
    /// Test that a new board has 8 rows of 8 squares.
    fn board_is_8x8() {
        let b = Board::new();
        assert_eq!(b.rows().len(), 8);
        for row in b.rows() {
            assert_eq!(row.len(), 8);
        }
    }

    #[test]
    /// Test the starting layout, row by row.
    fn starting_layout() {
        let b = Board::new();
        assert_eq!(glyphs(&b, 0), "RNBQKBNR");
        assert_eq!(glyphs(&b, 1), "PPPPPPPP");
        for r in 2..6 {
            assert_eq!(glyphs(&b, r), "........");
        }
        assert_eq!(glyphs(&b, 6), "pppppppp");
        assert_eq!(glyphs(&b, 7), "rnbkqbnr");
    }

    #[test]
    fn starting_kings() {
        let b = Board::new();
        assert_eq!(b.king_square(Color::White), Some(sq("d1")));
        assert_eq!(b.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(b.winner(), None);
    }

    #[test]
    /// Test that the start diagram loads the start position, and that
    /// diagrams survive being written out and read back.
    fn diagrams() {
        assert_eq!(Board::from_diagram(Board::START_DIAGRAM), Ok(Board::new()));
        assert_eq!(Board::new().diagram(), Board::START_DIAGRAM);

        let d = "4K3/8/8/3Q4/8/2n5/8/3k4";
        let b = Board::from_diagram(d).unwrap();
        assert_eq!(b.diagram(), d);
        assert_eq!(
            b.get(sq("d5")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            b.get(sq("c3")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn bad_diagrams() {
        assert_eq!(
            Board::from_diagram("8/8/8/8/8/8/8"),
            Err(DiagramError::RowCount(7))
        );
        assert_eq!(
            Board::from_diagram("8/8/8/8/8/8/8/7"),
            Err(DiagramError::RowWidth { row: 7, width: 7 })
        );
        assert_eq!(
            Board::from_diagram("8/8/8/8/8/8/8/pppppppppp"),
            Err(DiagramError::RowWidth { row: 7, width: 10 })
        );
        assert_eq!(
            Board::from_diagram("8/8/8/8/8/8/8/7x"),
            Err(DiagramError::BadCharacter { row: 7, chr: 'x' })
        );
        assert_eq!(
            Board::from_diagram("8/8/8/8/8/8/8/09"),
            Err(DiagramError::BadCharacter { row: 7, chr: '0' })
        );
    }

    #[test]
    /// Test that removing either king decides the winner.
    fn missing_king_wins() {
        let mut b = Board::new();
        b.remove(sq("d1"));
        assert_eq!(b.winner(), Some(Color::Black));

        let mut b = Board::new();
        b.remove(sq("e8"));
        assert_eq!(b.winner(), Some(Color::White));
    }

    #[test]
    /// Test that making a move overwrites and reports the captured piece.
    fn make_move_captures() {
        let mut b = Board::new();
        let captured = b.make_move(Move::new(sq("a1"), sq("a8")));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(b[sq("a1")], None);
        assert_eq!(b[sq("a8")], Some(Piece::new(Color::White, PieceKind::Rook)));
    }

    #[test]
    fn occupancy_of_start() {
        let occ = Board::new().occupancy();
        assert_eq!(occ.len(), 32);
        assert!(occ.contains(sq("a2")));
        assert!(!occ.contains(sq("a3")));
    }

    #[test]
    /// Test the rendered form of the starting position.
    fn render_start() {
        let expected = "   a b c d e f g h
  -----------------
8 |R N B Q K B N R |8
7 |P P P P P P P P |7
6 |. . . . . . . . |6
5 |. . . . . . . . |5
4 |. . . . . . . . |4
3 |. . . . . . . . |3
2 |p p p p p p p p |2
1 |r n b k q b n r |1
  -----------------
   a b c d e f g h
";
        assert_eq!(Board::new().to_string(), expected);
    }
}
