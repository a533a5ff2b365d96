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

//! Pieces and their kinds.

use super::Color;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The kind of a piece, independent of its color.
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const NUM_KINDS: usize = 6;

    pub const ALL_KINDS: [PieceKind; PieceKind::NUM_KINDS] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[must_use]
    /// Get the letter code of this kind as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[must_use]
    /// Given a letter code, convert it to a piece kind. Must be uppercase.
    pub const fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[must_use]
    /// Get the English name of this kind, in lowercase.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A piece: a kind which belongs to one of the players.
pub struct Piece {
    /// The player who owns this piece.
    pub color: Color,
    /// What sort of piece this is, which decides how it moves.
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    #[must_use]
    /// Get the single-character glyph of this piece. White pieces are drawn in
    /// lowercase and Black pieces in uppercase.
    pub fn glyph(self) -> char {
        match self.color {
            Color::White => self.kind.code().to_ascii_lowercase(),
            Color::Black => self.kind.code(),
        }
    }

    #[must_use]
    /// Read a glyph as drawn by `Piece::glyph`.
    pub fn from_glyph(c: char) -> Option<Piece> {
        let color = if c.is_ascii_lowercase() {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::from_code(c.to_ascii_uppercase()).map(|kind| Piece::new(color, kind))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that White glyphs are lowercase and Black glyphs are uppercase.
    fn glyph_case() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).glyph(), 'n');
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).glyph(), 'N');
    }

    #[test]
    /// Test that every piece can be read back from its glyph.
    fn glyphs_read_back() {
        for color in Color::ALL {
            for kind in PieceKind::ALL_KINDS {
                let p = Piece::new(color, kind);
                assert_eq!(Piece::from_glyph(p.glyph()), Some(p));
            }
        }
    }

    #[test]
    fn unknown_glyphs() {
        assert_eq!(Piece::from_glyph('.'), None);
        assert_eq!(Piece::from_glyph('x'), None);
        assert_eq!(Piece::from_glyph('3'), None);
    }
}
