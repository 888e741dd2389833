//! # King Race
//!
//! A rules engine for a two-player chess variant in which the first king to reach its target
//! rank wins.
//!
//! Two starting layouts are supported.  The pawnless race puts a king, a rook, two bishops and
//! two knights for each side on ranks 1 and 2, and both kings run for rank 8.  No move may leave
//! either king attacked.  The standard layout uses the usual chess army (pawns optional), and each
//! king runs for the enemy back rank.
//!
//! ## Example
//!
//! ```
//! use kingrace::{Game, GameState, MoveGen};
//!
//! let mut game = Game::new();
//! assert_eq!(game.attempt_move("a2", "a6"), Ok(true));
//! assert_eq!(game.state(), GameState::InProgress);
//!
//! // Black has plenty of answers.
//! assert!(MoveGen::new_legal(&game).len() > 0);
//! ```
//!

mod board;
pub use crate::board::*;

mod bitboard;
pub use crate::bitboard::{BitBoard, EMPTY};

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod display;
pub use crate::display::*;

mod file;
pub use crate::file::*;

mod game;
pub use crate::game::{Game, GameState, Rejection};

mod movegen;
pub use crate::movegen::MoveGen;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod rules;
pub use crate::rules::{between, Between, is_attacked, is_legal_move, king_in_check, kings_in_check};

mod square;
pub use crate::square::*;

mod variant;
pub use crate::variant::*;

mod board_builder;
pub use crate::board_builder::BoardBuilder;

mod error;
pub use crate::error::Error;
