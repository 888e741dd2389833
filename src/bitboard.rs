use crate::square::*;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A good old-fashioned bitboard: one bit per `Square`, a1 in the least significant bit.
///
/// The move generator uses it to hold the set of destinations a piece may reach.
///
/// ```
/// use kingrace::{BitBoard, Square};
///
/// let bb = BitBoard::from_square(Square::A1) | BitBoard::from_square(Square::H8);
///
/// assert_eq!(bb.popcnt(), 2);
/// assert_eq!(bb.collect::<Vec<_>>(), vec![Square::A1, Square::H8]);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
pub struct BitBoard(pub u64);

/// An empty bitboard.  It is sometimes useful to use !EMPTY to get the universe of squares.
///
/// ```
///     use kingrace::EMPTY;
///
///     assert_eq!(EMPTY.popcnt(), 0);
///
///     assert_eq!((!EMPTY).popcnt(), 64);
/// ```
pub const EMPTY: BitBoard = BitBoard(0);

impl BitAnd for BitBoard {
    type Output = BitBoard;

    fn bitand(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 & other.0)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, other: BitBoard) {
        self.0 |= other.0;
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl BitBoard {
    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_index())
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`.  Only
    /// meaningful when the board is not `EMPTY`.
    #[inline]
    pub fn to_square(&self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }
}

/// For the `BitBoard`, iterate over every `Square` set.
impl Iterator for BitBoard {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.to_square();
            self.0 &= self.0 - 1;
            Some(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_square_order() {
        let bb = BitBoard::from_square(Square::C3)
            | BitBoard::from_square(Square::A1)
            | BitBoard::from_square(Square::H7);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::C3, Square::H7]);
    }

    #[test]
    fn masks() {
        let a1 = BitBoard::from_square(Square::A1);
        assert_eq!(a1 & !a1, EMPTY);
        let mut bb = EMPTY;
        bb |= a1;
        assert_eq!(bb, a1);
    }
}
