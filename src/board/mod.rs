//! Board representation and rules.
//!
//! An 8x8 grid of occupants with per-piece move validation, threat
//! detection, and check/checkmate analysis. Castling, en passant and
//! promotion are not part of the rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Move};
//!
//! let mut board = Board::new();
//! let mv: Move = "e2 e4".parse().unwrap();
//! assert!(board.is_legal(mv, Color::White));
//! board.apply(mv);
//! assert_eq!(board.is_checkmate(Color::Black), Ok(false));
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod check;
mod config;
mod error;
mod layout;
mod make_unmake;
pub mod prelude;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use config::RulesConfig;
pub use error::{BoardError, LayoutError, MoveParseError, SquareError};
pub use make_unmake::{Trial, UnmakeInfo};
pub use state::{Board, Occupant};
pub use types::{Color, GameStatus, Move, Piece, Square};
