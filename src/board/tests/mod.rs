//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `validation.rs` - Per-piece move legality
//! - `threats.rs` - Square attack detection along every ray
//! - `checkmate.rs` - Check, checkmate and scripted positions
//! - `make_unmake.rs` - Move application and trial rollback
//! - `proptest.rs` - Property-based tests

mod threats;

use super::{Board, Move, Square};

/// Move between two algebraic squares, e.g. `mv("e2", "e4")`.
pub(super) fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("test square")
}

/// Board from `/`-separated rows, rank 8 first.
pub(super) fn layout(rows: &str) -> Board {
    Board::from_layout(rows)
}
