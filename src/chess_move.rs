use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory
///
/// There is no promotion piece: pawns that reach the last rank simply stay pawns.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Build a move from two algebraic tokens, such as `"e2"` and `"e4"`.
    ///
    /// ```
    /// use kingrace::{ChessMove, Square};
    ///
    /// let mv = ChessMove::from_squares("c1", "b3").expect("valid squares");
    /// assert_eq!(mv, ChessMove::new(Square::C1, Square::B3));
    /// assert!(ChessMove::from_squares("c1", "b9").is_err());
    /// ```
    pub fn from_squares(source: &str, dest: &str) -> Result<ChessMove, Error> {
        Ok(ChessMove::new(source.parse()?, dest.parse()?))
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

/// Parse a move written as two adjacent squares, such as `"e2e4"`.
impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMove {
            text: s.to_string(),
        };
        let source = s.get(0..2).ok_or_else(invalid)?;
        let dest = s.get(2..).ok_or_else(invalid)?;
        ChessMove::from_squares(source, dest).map_err(|_| invalid())
    }
}
