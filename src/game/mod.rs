//! Game session and the interactive turn loop.
//!
//! `Game` owns the board, the side to move and the result. `run_loop` drives
//! it from a line-based reader, printing the board and status after every move.

mod cli;
mod session;

pub use cli::run_loop;
pub use session::{Game, GameState, MoveOutcome, PlayError};
