use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board
///
/// A square can also be addressed the way a printed board reads: a zero-based `(row, col)` pair
/// with row 0 at the top (rank 8) and column 0 on the a-file.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A list of every square on the chessboard, a1 through h8.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl Square {
    /// Create a new square, given an index.  Indices past 63 wrap around.
    #[inline]
    pub fn new(sq: u8) -> Square {
        Square(sq & 63)
    }

    /// Make a square given a rank and a file
    ///
    /// ```
    /// use kingrace::{Square, Rank, File};
    ///
    /// assert_eq!(Square::make_square(Rank::Fourth, File::E), Square::E4);
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Make a square from a `(row, col)` pair, or `None` if either lies outside `0..8`.
    ///
    /// ```
    /// use kingrace::Square;
    ///
    /// assert_eq!(Square::from_coords(7, 0), Some(Square::A1));
    /// assert_eq!(Square::from_coords(0, 7), Some(Square::H8));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// assert_eq!(Square::from_coords(0, -1), None);
    /// ```
    pub fn from_coords(row: i32, col: i32) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::make_square(
                Rank::from_row(row as usize),
                File::from_index(col as usize),
            ))
        } else {
            None
        }
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// Zero-based row, counted from the top of the board (rank 8 is row 0).
    #[inline]
    pub fn row(&self) -> usize {
        self.get_rank().to_row()
    }

    /// Zero-based column, counted from the a-file.
    #[inline]
    pub fn col(&self) -> usize {
        self.get_file().to_index()
    }

    /// Walk `ranks` up and `files` right.  `None` if that falls off the board.
    pub fn offset(&self, ranks: i8, files: i8) -> Option<Square> {
        let rank = (self.0 >> 3) as i8 + ranks;
        let file = (self.0 & 7) as i8 + files;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square((rank as u8) << 3 | file as u8))
        } else {
            None
        }
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(color.forward(), 0)
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.get_file().to_char(),
            self.get_rank().to_index() + 1
        )
    }
}

/// Parse a two character algebraic token such as `"e2"`.
///
/// ```
/// use kingrace::{Square, Error};
/// use std::str::FromStr;
///
/// assert_eq!(Square::from_str("e2"), Ok(Square::E2));
/// assert!(Square::from_str("e9").is_err());
/// assert!(Square::from_str("e").is_err());
/// ```
impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare {
            square: s.to_string(),
        };

        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(invalid()),
        };

        let file = File::from_str(&file.to_string()).map_err(|_| invalid())?;
        let rank = Rank::from_str(&rank.to_string()).map_err(|_| invalid())?;
        Ok(Square::make_square(rank, file))
    }
}
