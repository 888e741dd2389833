use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::display::{BoardDisplay, GlyphSet};
use crate::file::{File, ALL_FILES};
use crate::piece::{ColoredPiece, Piece};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use crate::variant::{GameConfig, Layout};
use std::ops::Index;

/// A representation of a chess board.  That's why you're here, right?
///
/// The board only knows where pieces stand.  It will happily hold any arrangement at all;
/// whether a move is allowed is decided in `rules`, and whose turn it is lives in `Game`.
///
/// ```
/// use kingrace::{Board, Color, ColoredPiece, GameConfig, Piece, Square};
///
/// let board = Board::initial(&GameConfig::racing());
/// assert_eq!(
///     board.piece_at(Square::A1),
///     Some(ColoredPiece::new(Piece::King, Color::White))
/// );
/// assert_eq!(board.piece_at(Square::E4), None);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    squares: [Option<ColoredPiece>; NUM_SQUARES],
}

/// White's half of the pawnless race.  Black's half is the same, mirrored across the board's
/// vertical axis.
const RACING_ARMY: [(Square, Piece); 6] = [
    (Square::A1, Piece::King),
    (Square::A2, Piece::Rook),
    (Square::B1, Piece::Bishop),
    (Square::B2, Piece::Bishop),
    (Square::C1, Piece::Knight),
    (Square::C2, Piece::Knight),
];

const STANDARD_BACKRANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// A board with nothing on it.
    pub fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
        }
    }

    /// The starting position of a game played with `config`.
    pub fn initial(config: &GameConfig) -> Board {
        let mut board = Board::empty();
        match config.layout {
            Layout::Racing => {
                for &(square, piece) in RACING_ARMY.iter() {
                    board.place(square, Some(ColoredPiece::new(piece, Color::White)));
                    let mirror = Square::make_square(
                        square.get_rank(),
                        File::from_index(7 - square.get_file().to_index()),
                    );
                    board.place(mirror, Some(ColoredPiece::new(piece, Color::Black)));
                }
            }
            Layout::Standard => {
                for color in [Color::White, Color::Black].iter() {
                    for (file, piece) in ALL_FILES.iter().zip(STANDARD_BACKRANK.iter()) {
                        board.place(
                            Square::make_square(color.to_my_backrank(), *file),
                            Some(ColoredPiece::new(*piece, *color)),
                        );
                        if config.pawns_enabled {
                            board.place(
                                Square::make_square(color.to_second_rank(), *file),
                                Some(ColoredPiece::new(Piece::Pawn, *color)),
                            );
                        }
                    }
                }
            }
        }
        board
    }

    /// What is on this square?
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.to_index()]
    }

    /// What kind of piece is on this square, ignoring its color?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).map(|p| p.piece)
    }

    /// Who owns the piece on this square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    /// Overwrite a square.  No questions asked: legality is not the board's business.
    #[inline]
    pub fn place(&mut self, square: Square, value: Option<ColoredPiece>) {
        self.squares[square.to_index()] = value;
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces<'a>(&'a self) -> impl Iterator<Item = (Square, ColoredPiece)> + 'a {
        ALL_SQUARES
            .iter()
            .filter_map(move |sq| self.piece_at(*sq).map(|p| (*sq, p)))
    }

    /// Where is `color`'s king?  `None` if it has been captured (or never placed).
    ///
    /// When there are several, the one nearest a1 is reported.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(Piece::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    /// How many of this piece does `color` have on the board?
    pub fn count(&self, piece: Piece, color: Color) -> usize {
        let wanted = ColoredPiece::new(piece, color);
        self.pieces().filter(|(_, p)| *p == wanted).count()
    }

    /// Move whatever stands on the source square onto the destination, and hand back what used
    /// to be there.  No legality checks are performed.
    pub fn relocate(&mut self, m: ChessMove) -> Option<ColoredPiece> {
        let moving = self.piece_at(m.get_source());
        let captured = self.piece_at(m.get_dest());
        self.place(m.get_dest(), moving);
        self.place(m.get_source(), None);
        captured
    }

    /// Make a copy of the board with a move relocated.
    ///
    /// ```
    /// use kingrace::{Board, ChessMove, GameConfig, Square};
    ///
    /// let board = Board::initial(&GameConfig::racing());
    /// let after = board.relocate_new(ChessMove::new(Square::C2, Square::D4));
    /// assert_eq!(after.piece_at(Square::C2), None);
    /// assert_eq!(after.piece_at(Square::D4), board.piece_at(Square::C2));
    /// ```
    #[inline]
    pub fn relocate_new(&self, m: ChessMove) -> Board {
        let mut result = *self;
        result.relocate(m);
        result
    }

    /// Pair the board with a glyph table for printing.
    pub fn display(&self, glyphs: GlyphSet) -> BoardDisplay {
        BoardDisplay::new(self, glyphs)
    }
}

impl Index<Square> for Board {
    type Output = Option<ColoredPiece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.to_index()]
    }
}

impl Default for Board {
    /// The pawnless race.
    fn default() -> Board {
        Board::initial(&GameConfig::default())
    }
}
