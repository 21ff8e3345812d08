//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` - an ordered (from, to) pair
//! - `GameStatus` - verdict for the side to move

mod moves;
mod piece;
mod square;
mod status;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
pub use status::GameStatus;
