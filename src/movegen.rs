use crate::bitboard::{BitBoard, EMPTY};
use crate::chess_move::ChessMove;
use crate::game::Game;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;

#[derive(Copy, Clone, PartialEq, PartialOrd)]
struct SquareAndBitBoard {
    square: Square,
    bitboard: BitBoard,
}

/// An incremental move generator
///
/// Every move it yields is one `Game::make_move` would accept right now: the side to move owns
/// the piece, the piece can get there, and (if the game forbids checks) no king ends up attacked.
/// A finished game has no moves at all.
///
/// # Examples
///
/// ```
/// use kingrace::{Game, GameConfig, MoveGen};
///
/// let game = Game::with_config(GameConfig::standard().with_pawns(true));
///
/// // create an iterable
/// let iterable = MoveGen::new_legal(&game);
///
/// // make sure .len() works.
/// assert_eq!(iterable.len(), 20); // the .len() function does *not* consume the iterator
///
/// for m in iterable {
///     assert!(game.legal(m));
/// }
/// ```
pub struct MoveGen {
    moves: ArrayVec<SquareAndBitBoard, NUM_SQUARES>,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` structure, only generating legal moves
    pub fn new_legal(game: &Game) -> MoveGen {
        let mut result = MoveGen {
            moves: ArrayVec::new(),
            index: 0,
        };
        if game.state().is_over() {
            return result;
        }

        let color = game.side_to_move();
        for (square, piece) in game.board().pieces() {
            if piece.color != color {
                continue;
            }
            let mut bitboard = EMPTY;
            for dest in ALL_SQUARES.iter() {
                if game.legal(ChessMove::new(square, *dest)) {
                    bitboard |= BitBoard::from_square(*dest);
                }
            }
            result.push(square, bitboard);
        }
        result
    }

    fn push(&mut self, square: Square, bitboard: BitBoard) {
        if bitboard != EMPTY {
            self.moves.push(SquareAndBitBoard { square, bitboard });
        }
    }

    /// Count the move sequences of length `depth` from this game.  Sequences stop early when the
    /// game ends, so a decided game contributes nothing past that point.
    pub fn movegen_perft_test(game: &Game, depth: usize) -> usize {
        let iterable = MoveGen::new_legal(game);

        if depth == 1 {
            iterable.len()
        } else {
            let mut result: usize = 0;
            for m in iterable {
                let mut next = game.clone();
                next.make_move(m);
                result += MoveGen::movegen_perft_test(&next, depth - 1);
            }
            result
        }
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        self.moves[self.index..]
            .iter()
            .map(|x| x.bitboard.popcnt() as usize)
            .sum()
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next chess move.
    fn next(&mut self) -> Option<ChessMove> {
        let entry = self.moves.get_mut(self.index)?;
        let src = entry.square;
        let dest = entry.bitboard.to_square();

        entry.bitboard = entry.bitboard & !BitBoard::from_square(dest);
        if entry.bitboard == EMPTY {
            self.index += 1;
        }
        Some(ChessMove::new(src, dest))
    }
}
