use crate::board::Board;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::file::{File, ALL_FILES, NUM_FILES};
use crate::game::Game;
use crate::piece::{ColoredPiece, Piece};
use crate::rank::{Rank, ALL_RANKS, NUM_RANKS};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a chess position that has *not* been validated for legality.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess board manually in code.
/// * You want to start a `Game` from somewhere other than the initial position.
/// * You want to convert to and from the position text format.
///
/// The text format is the piece-placement field of FEN followed by the side to move: ranks from
/// 8 down to 1 separated by `/`, uppercase letters for White, lowercase for Black, digits for runs
/// of empty squares.  The side to move may be left out, in which case White moves.
///
/// ```
/// use kingrace::{BoardBuilder, Board, Square, Color, ColoredPiece, Piece};
/// use std::convert::TryFrom;
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::A1, Piece::King, Color::White);
/// position.piece(Square::A8, Piece::Rook, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::A1], Some(ColoredPiece::new(Piece::King, Color::White)));
///
/// // Black has no king yet, so this is not a board a game can be played on.
/// assert!(Board::try_from(&position).is_err());
///
/// position.piece(Square::H1, Piece::King, Color::Black);
/// assert!(Board::try_from(&position).is_ok());
/// assert_eq!(position.to_string(), "r7/8/8/8/8/8/8/K6k w");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBuilder {
    pieces: [Option<ColoredPiece>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    ///
    /// * No pieces are on the board
    /// * `side_to_move` is Color::White
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Set up a board with everything pre-loaded.
    ///
    /// ```
    /// use kingrace::{BoardBuilder, Board, Square, Color, Piece};
    /// use std::convert::TryInto;
    ///
    /// # use kingrace::Error;
    /// # fn main() -> Result<(), Error> {
    /// let board: Board = BoardBuilder::setup(
    ///         &[
    ///             (Square::A1, Piece::King, Color::White),
    ///             (Square::H8, Piece::King, Color::Black)
    ///         ],
    ///         Color::Black)
    ///     .try_into()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, Piece, Color)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move,
        };

        for piece in pieces.into_iter() {
            result.pieces[piece.0.to_index()] = Some(ColoredPiece::new(piece.1, piece.2));
        }

        result
    }

    /// Get the current player
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece(&mut self, square: Square, piece: Piece, color: Color) -> &mut Self {
        self[square] = Some(ColoredPiece::new(piece, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self[square] = None;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<ColoredPiece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut count = 0;
        for rank in ALL_RANKS.iter().rev() {
            for file in ALL_FILES.iter() {
                let square = Square::make_square(*rank, *file).to_index();

                if self.pieces[square].is_some() && count != 0 {
                    write!(f, "{}", count)?;
                    count = 0;
                }

                if let Some(piece) = self.pieces[square] {
                    write!(f, "{}", piece)?;
                } else {
                    count += 1;
                }
            }

            if count != 0 {
                write!(f, "{}", count)?;
            }

            if *rank != Rank::First {
                write!(f, "/")?;
            }
            count = 0;
        }

        if self.side_to_move == Color::White {
            write!(f, " w")
        } else {
            write!(f, " b")
        }
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::from(&Game::default())
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition {
            position: value.to_string(),
        };
        let mut builder = BoardBuilder::new();

        let mut tokens = value.split_whitespace();
        let placement = tokens.next().ok_or_else(invalid)?;
        let side = tokens.next().unwrap_or("w");
        if tokens.next().is_some() {
            return Err(invalid());
        }

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != NUM_RANKS {
            return Err(invalid());
        }

        for (row, text) in ranks.iter().enumerate() {
            let rank = Rank::from_row(row);
            let mut file = 0;
            for x in text.chars() {
                match x {
                    '1'..='8' => {
                        file += (x as usize) - ('0' as usize);
                    }
                    _ => {
                        let piece = Piece::from_char(x).ok_or_else(invalid)?;
                        if file >= NUM_FILES {
                            return Err(invalid());
                        }
                        builder[Square::make_square(rank, File::from_index(file))] = Some(piece);
                        file += 1;
                    }
                }
            }
            if file != NUM_FILES {
                return Err(invalid());
            }
        }

        match side {
            "w" | "W" => builder.side_to_move(Color::White),
            "b" | "B" => builder.side_to_move(Color::Black),
            _ => return Err(invalid()),
        };

        Ok(builder)
    }
}

impl From<&Game> for BoardBuilder {
    fn from(game: &Game) -> Self {
        let mut result = BoardBuilder::new();
        for (square, piece) in game.board().pieces() {
            result[square] = Some(piece);
        }
        result.side_to_move(game.side_to_move());
        result
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    /// A game needs exactly one king of each color.  Anything else goes.
    fn try_from(fen: &BoardBuilder) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for sq in ALL_SQUARES.iter() {
            board.place(*sq, fen[*sq]);
        }

        for color in ALL_COLORS.iter() {
            let kings = board.count(Piece::King, *color);
            if kings != 1 {
                return Err(Error::InvalidBoard {
                    reason: format!("{} has {} kings, expected exactly 1", color, kings),
                });
            }
        }

        Ok(board)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(fen: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*fen)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(fen: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;

    const RACING: &str = "8/8/8/8/8/8/RBN2nbr/KBN2nbk w";

    #[test]
    fn check_initial_position() {
        let bb: BoardBuilder = BoardBuilder::default();
        assert_eq!(format!("{}", bb), RACING);

        let pass_through = format!("{}", BoardBuilder::from_str(RACING).unwrap());
        assert_eq!(pass_through, RACING);

        let standard = Game::with_config(crate::variant::GameConfig::standard().with_pawns(true));
        assert_eq!(
            BoardBuilder::from(&standard).to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
    }

    #[test]
    fn side_to_move_defaults_to_white() {
        let bb = BoardBuilder::from_str("k7/8/8/8/8/8/8/7K").unwrap();
        assert_eq!(bb.get_side_to_move(), Color::White);
        let bb = BoardBuilder::from_str("k7/8/8/8/8/8/8/7K b").unwrap();
        assert_eq!(bb.get_side_to_move(), Color::Black);
    }

    #[test]
    fn malformed_positions() {
        for text in [
            "",
            "8/8/8/8/8/8/8 w",
            "8/8/8/8/8/8/8/8/8 w",
            "9/8/8/8/8/8/8/8 w",
            "7/8/8/8/8/8/8/8 w",
            "8/8/8/8/8/8/8/7Kk w",
            "8/8/8/8/8/8/8/7X w",
            "8/8/8/8/8/8/8/8 x",
            "8/8/8/8/8/8/8/8 w extra",
        ]
        .iter()
        {
            assert_eq!(
                BoardBuilder::from_str(text),
                Err(Error::InvalidPosition {
                    position: text.to_string()
                }),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn needs_one_king_each() {
        let res: Result<Board, _> = BoardBuilder::new()
            .piece(Square::A1, Piece::King, Color::White)
            .piece(Square::A8, Piece::King, Color::Black)
            .try_into();
        assert!(res.is_ok());

        let res: Result<Board, _> = BoardBuilder::new()
            .piece(Square::A1, Piece::King, Color::White)
            .piece(Square::B1, Piece::King, Color::White)
            .piece(Square::A8, Piece::King, Color::Black)
            .try_into();
        assert!(res.is_err());

        let mut bb = BoardBuilder::new();
        bb.piece(Square::A1, Piece::King, Color::White)
            .piece(Square::A8, Piece::King, Color::Black)
            .clear_square(Square::A8);
        let res: Result<Board, _> = bb.try_into();
        assert_eq!(
            res,
            Err(Error::InvalidBoard {
                reason: "black has 0 kings, expected exactly 1".to_string()
            })
        );
    }

    #[test]
    fn setup_places_every_piece() {
        let bb = BoardBuilder::setup(
            &[
                (Square::E1, Piece::King, Color::White),
                (Square::E8, Piece::King, Color::Black),
                (Square::D1, Piece::Queen, Color::White),
            ],
            Color::White,
        );
        assert_eq!(bb.to_string(), "4k3/8/8/8/8/8/8/3QK3 w");
        let board: Board = bb.try_into().unwrap();
        assert_eq!(board.piece_on(Square::D1), Some(Piece::Queen));
    }
}
