//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.find_king(Color::White), Ok(Square(7, 4)));
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, GameStatus, LayoutError, Move, MoveParseError, Piece,
    RulesConfig, Square, SquareError,
};
