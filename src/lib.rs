#[macro_use]
mod macros;

pub mod board;
pub mod game;

pub use board::{Board, Color, GameStatus, Move, Piece, RulesConfig, Square};
pub use game::{Game, PlayError};
