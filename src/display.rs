use crate::board::Board;
use crate::color::Color;
use crate::file::ALL_FILES;
use crate::piece::{ColoredPiece, Piece};
use crate::rank::ALL_RANKS;
use crate::square::Square;
use std::fmt;

/// Which characters to draw pieces with.  The rules never look at glyphs.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum GlyphSet {
    /// `K Q R B N P` for White, `k q r b n p` for Black.
    Letters,
    /// The chess symbols from the Unicode "Miscellaneous Symbols" block.
    Unicode,
}

/// Drawn on squares with nothing on them.
pub const EMPTY_GLYPH: char = '-';

const WHITE_SYMBOLS: [char; 6] = ['♙', '♘', '♗', '♖', '♕', '♔'];
const BLACK_SYMBOLS: [char; 6] = ['♟', '♞', '♝', '♜', '♛', '♚'];

impl GlyphSet {
    /// The character for one piece.
    ///
    /// ```
    /// use kingrace::{ColoredPiece, Color, GlyphSet, Piece};
    ///
    /// let king = ColoredPiece::new(Piece::King, Color::Black);
    /// assert_eq!(GlyphSet::Letters.glyph(king), 'k');
    /// assert_eq!(GlyphSet::Unicode.glyph(king), '♚');
    /// ```
    pub fn glyph(&self, piece: ColoredPiece) -> char {
        match *self {
            GlyphSet::Letters => {
                let letter = match piece.piece {
                    Piece::Pawn => 'p',
                    Piece::Knight => 'n',
                    Piece::Bishop => 'b',
                    Piece::Rook => 'r',
                    Piece::Queen => 'q',
                    Piece::King => 'k',
                };
                if piece.color == Color::White {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            }
            GlyphSet::Unicode => match piece.color {
                Color::White => WHITE_SYMBOLS[piece.piece.to_index()],
                Color::Black => BLACK_SYMBOLS[piece.piece.to_index()],
            },
        }
    }
}

/// A `Board` paired with the glyphs to draw it with.  Build one with `Board::display`.
///
/// Rank 8 is printed first, one rank per line, with rank numbers down the left and file letters
/// along the bottom.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    glyphs: GlyphSet,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board, glyphs: GlyphSet) -> BoardDisplay<'a> {
        BoardDisplay { board, glyphs }
    }
}

impl<'a> fmt::Display for BoardDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{}", rank.to_index() + 1)?;
            for file in ALL_FILES.iter() {
                let glyph = match self.board.piece_at(Square::make_square(*rank, *file)) {
                    Some(piece) => self.glyphs.glyph(piece),
                    None => EMPTY_GLYPH,
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }

        write!(f, " ")?;
        for file in ALL_FILES.iter() {
            write!(f, " {}", file.to_char())?;
        }
        writeln!(f)
    }
}
