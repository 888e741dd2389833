use crate::error::Error;
use std::str::FromStr;

/// Describe a rank (row) on a chess board
///
/// Ranks count up from White's side of the board.  Rows count down from the top of a printed
/// board, so `Rank::Eighth` is row 0 and `Rank::First` is row 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  If the number is > 7, wrap
    /// around.
    #[inline]
    pub fn from_index(i: usize) -> Rank {
        ALL_RANKS[i & 7]
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The zero-based row of this rank, counted from the top of the board.
    #[inline]
    pub fn to_row(&self) -> usize {
        NUM_RANKS - 1 - self.to_index()
    }

    /// The rank printed on the given row.  If the row is > 7, wrap around.
    #[inline]
    pub fn from_row(row: usize) -> Rank {
        Rank::from_index(NUM_RANKS - 1 - (row & 7))
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('1') => Ok(Rank::First),
            Some('2') => Ok(Rank::Second),
            Some('3') => Ok(Rank::Third),
            Some('4') => Ok(Rank::Fourth),
            Some('5') => Ok(Rank::Fifth),
            Some('6') => Ok(Rank::Sixth),
            Some('7') => Ok(Rank::Seventh),
            Some('8') => Ok(Rank::Eighth),
            _ => Err(Error::InvalidRank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_count_from_the_top() {
        assert_eq!(Rank::Eighth.to_row(), 0);
        assert_eq!(Rank::First.to_row(), 7);
        for rank in ALL_RANKS.iter() {
            assert_eq!(Rank::from_row(rank.to_row()), *rank);
        }
    }

    #[test]
    fn parse() {
        assert_eq!(Rank::from_str("3"), Ok(Rank::Third));
        assert_eq!(Rank::from_str("9"), Err(Error::InvalidRank));
        assert_eq!(Rank::from_str(""), Err(Error::InvalidRank));
    }
}
