use std::ops::Deref;

use super::state::Occupant;
use super::{Board, Move};

/// What a move displaced, enough to put both squares back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved: Occupant,
    pub(crate) captured: Occupant,
}

impl UnmakeInfo {
    /// The occupant removed from the destination square, if any.
    #[must_use]
    pub const fn captured(&self) -> Occupant {
        self.captured
    }
}

impl Board {
    /// Relocate whatever stands on `mv.from()` to `mv.to()`, clearing the
    /// origin. Returns the discarded occupant of the destination.
    ///
    /// No legality check is made and the side to move is left unchanged.
    pub fn apply(&mut self, mv: Move) -> Occupant {
        self.make_move(mv).captured
    }

    /// [`Board::apply`], returning what [`Board::unmake_move`] needs to undo it.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let moved = self.clear_square(mv.from());
        let captured = self.replace(mv.to(), moved);
        UnmakeInfo { moved, captured }
    }

    /// Restore both squares touched by `mv` to their state before `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.replace(mv.to(), info.captured);
        self.replace(mv.from(), info.moved);
    }

    /// Play `mv` temporarily. The move is undone when the returned guard is
    /// dropped, including during unwinding.
    pub fn trial(&mut self, mv: Move) -> Trial<'_> {
        let info = self.make_move(mv);
        Trial {
            board: self,
            mv,
            info,
        }
    }
}

/// A move applied for inspection only; see [`Board::trial`].
///
/// Derefs to the board in its post-move state.
#[must_use = "the trial move is undone as soon as the guard is dropped"]
pub struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
    info: UnmakeInfo,
}

impl Trial<'_> {
    #[must_use]
    pub const fn captured(&self) -> Occupant {
        self.info.captured
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(self.mv, self.info);
    }
}
