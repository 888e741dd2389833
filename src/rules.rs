//! The move rule engine's predicates.
//!
//! Everything here is a pure function of a `Board`: nothing is mutated, and whose turn it is does
//! not matter.  `Game` layers turn order, the no-check restriction and the win condition on top.

use crate::board::Board;
use crate::color::{Color, ALL_COLORS};
use crate::piece::Piece;
use crate::square::Square;
use tracing::trace;

/// The squares strictly between two squares that share a rank, a file or a diagonal.
///
/// Neither endpoint is included.  Squares that are not aligned (or are equal) have nothing
/// between them.
///
/// ```
/// use kingrace::{between, Square};
///
/// let squares: Vec<Square> = between(Square::A1, Square::D4).collect();
/// assert_eq!(squares, vec![Square::B2, Square::C3]);
///
/// assert_eq!(between(Square::A1, Square::B3).count(), 0);
/// ```
pub fn between(source: Square, dest: Square) -> Between {
    let d_rank = dest.get_rank().to_index() as i8 - source.get_rank().to_index() as i8;
    let d_file = dest.get_file().to_index() as i8 - source.get_file().to_index() as i8;

    let aligned = (d_rank == 0) != (d_file == 0) || (d_rank != 0 && d_rank.abs() == d_file.abs());
    if !aligned {
        return Between {
            next: None,
            dest,
            step: (0, 0),
        };
    }

    let step = (d_rank.signum(), d_file.signum());
    Between {
        next: source.offset(step.0, step.1),
        dest,
        step,
    }
}

/// Iterator returned by `between`.
pub struct Between {
    next: Option<Square>,
    dest: Square,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next.filter(|sq| *sq != self.dest)?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

#[inline]
fn path_is_clear(board: &Board, source: Square, dest: Square) -> bool {
    between(source, dest).all(|sq| board.piece_at(sq).is_none())
}

/// Can the piece standing on `source` move to `dest` on this board?
///
/// This only looks at the geometry of the piece, the squares it passes over, and what stands on
/// the destination.  It does not care whose turn it is, and it does not care whether the move
/// would leave a king attacked.
///
/// * Moving to the square you are on is never legal.
/// * Landing on a piece of your own color is never legal.
/// * Rooks, bishops and queens need every square strictly between `source` and `dest` to be
///   empty.  Knights and kings jump or step, so nothing is in their way.
/// * Pawns step one square forward onto an empty square, two squares forward (from any rank)
///   when both squares are empty, or one square diagonally forward onto an enemy piece.
///
/// Capturing a king is a capture like any other.
///
/// ```
/// use kingrace::{is_legal_move, Board, GameConfig, Square};
///
/// let board = Board::initial(&GameConfig::racing());
///
/// // The knight on c2 may jump to d4.
/// assert!(is_legal_move(&board, Square::C2, Square::D4));
///
/// // The rook on a2 may not land on its own knight.
/// assert!(!is_legal_move(&board, Square::A2, Square::C2));
/// ```
pub fn is_legal_move(board: &Board, source: Square, dest: Square) -> bool {
    if source == dest {
        return false;
    }

    let mover = match board.piece_at(source) {
        Some(piece) => piece,
        None => return false,
    };
    let target = board.piece_at(dest);
    if let Some(target) = target {
        if !mover.is_enemy_of(target) {
            return false;
        }
    }

    let d_rank = dest.get_rank().to_index() as i8 - source.get_rank().to_index() as i8;
    let d_file = dest.get_file().to_index() as i8 - source.get_file().to_index() as i8;
    let straight = (d_rank == 0) != (d_file == 0);
    let diagonal = d_rank.abs() == d_file.abs();

    match mover.piece {
        Piece::Knight => {
            (d_rank.abs() == 2 && d_file.abs() == 1) || (d_rank.abs() == 1 && d_file.abs() == 2)
        }
        Piece::Rook => straight && path_is_clear(board, source, dest),
        Piece::Bishop => diagonal && path_is_clear(board, source, dest),
        Piece::Queen => (straight || diagonal) && path_is_clear(board, source, dest),
        Piece::King => d_rank.abs() <= 1 && d_file.abs() <= 1,
        Piece::Pawn => {
            let forward = mover.color.forward();
            if d_rank == forward && d_file == 0 {
                target.is_none()
            } else if d_rank == forward && d_file.abs() == 1 {
                target.is_some()
            } else if d_rank == 2 * forward && d_file == 0 {
                target.is_none() && path_is_clear(board, source, dest)
            } else {
                false
            }
        }
    }
}

/// Could any piece of `by` capture the piece on `square` right now?
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(attacker, _)| is_legal_move(board, attacker, square))
}

/// Is `color`'s king attacked?  A missing king is never in check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked(board, king, !color),
        None => false,
    }
}

/// Is either king attacked?
///
/// A king is in check exactly when some enemy piece could legally move onto its square, using
/// the same `is_legal_move` that ordinary moves go through.
///
/// ```
/// use kingrace::{kings_in_check, Board, GameConfig};
///
/// assert!(!kings_in_check(&Board::initial(&GameConfig::racing())));
/// ```
pub fn kings_in_check(board: &Board) -> bool {
    ALL_COLORS.iter().any(|color| {
        let checked = king_in_check(board, *color);
        if checked {
            trace!(king = %color, "king is attacked");
        }
        checked
    })
}
