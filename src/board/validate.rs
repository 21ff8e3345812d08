//! Per-piece move legality.

use super::{Board, Color, Move, Piece, RulesConfig, Square};

impl Board {
    /// Returns true if `mover` may play `mv` under the default rules.
    ///
    /// Both squares must be on the board. The piece on `mv.from()` must
    /// belong to `mover`, the destination must not hold one of `mover`'s own
    /// pieces, and the piece's movement rule must hold. Leaving one's own king in check is allowed; see
    /// [`RulesConfig::forbid_self_check`].
    #[must_use]
    pub fn is_legal(&self, mv: Move, mover: Color) -> bool {
        let Some(piece) = self.movable_piece(mv, mover) else {
            return false;
        };

        let legal = match piece {
            Piece::Pawn => self.is_valid_pawn_move(mv, mover),
            Piece::Rook => self.is_valid_rook_move(mv),
            Piece::Knight => is_knight_jump(mv),
            Piece::Bishop => self.is_valid_bishop_move(mv),
            Piece::Queen => self.is_valid_rook_move(mv) || self.is_valid_bishop_move(mv),
            Piece::King => is_king_step(mv),
        };
        if !legal {
            trace_event!("rejected {mv}: {piece} cannot move that way");
        }
        legal
    }

    /// [`Board::is_legal`] with explicit rules.
    #[must_use]
    pub fn is_legal_with(&self, mv: Move, mover: Color, config: &RulesConfig) -> bool {
        if !self.is_legal(mv, mover) {
            return false;
        }
        if config.forbid_self_check && self.exposes_own_king(mv, mover) {
            trace_event!("rejected {mv}: leaves {mover} king in check");
            return false;
        }
        true
    }

    /// The piece `mover` would move, if the endpoints permit a move at all.
    fn movable_piece(&self, mv: Move, mover: Color) -> Option<Piece> {
        if !mv.from().is_on_board() || !mv.to().is_on_board() {
            trace_event!("rejected {mv}: off the board");
            return None;
        }
        if mv.from() == mv.to() {
            trace_event!("rejected {mv}: null move");
            return None;
        }
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            trace_event!("rejected {mv}: no piece on {}", mv.from());
            return None;
        };
        if color != mover {
            trace_event!("rejected {mv}: {piece} on {} is not {mover}'s", mv.from());
            return None;
        }
        if self.color_on(mv.to()) == Some(mover) {
            trace_event!("rejected {mv}: {} holds a {mover} piece", mv.to());
            return None;
        }
        Some(piece)
    }

    fn exposes_own_king(&self, mv: Move, mover: Color) -> bool {
        let mut scratch = *self;
        scratch.apply(mv);
        // A side without a king has nothing to expose.
        matches!(scratch.is_in_check(mover), Ok(true))
    }

    fn is_valid_pawn_move(&self, mv: Move, color: Color) -> bool {
        let dir = color.pawn_direction();
        let (dr, dc) = (mv.row_delta(), mv.col_delta());

        if dc == 0 {
            if dr == dir {
                return self.is_empty(mv.to());
            }
            if dr == 2 * dir && mv.from().row() == color.pawn_start_row() {
                return mv
                    .from()
                    .offset(dir, 0)
                    .is_some_and(|mid| self.is_empty(mid) && self.is_empty(mv.to()));
            }
            return false;
        }

        // Diagonal steps are captures only.
        dc.abs() == 1 && dr == dir && self.color_on(mv.to()) == Some(color.opponent())
    }

    fn is_valid_rook_move(&self, mv: Move) -> bool {
        let (dr, dc) = (mv.row_delta(), mv.col_delta());
        (dr == 0 || dc == 0) && self.is_path_clear(mv)
    }

    fn is_valid_bishop_move(&self, mv: Move) -> bool {
        mv.row_delta().abs() == mv.col_delta().abs() && self.is_path_clear(mv)
    }

    /// Walks from `from` toward `to` in unit steps; every square strictly
    /// between must be empty. Only meaningful for straight or diagonal moves.
    fn is_path_clear(&self, mv: Move) -> bool {
        let step = (mv.row_delta().signum(), mv.col_delta().signum());
        let mut current: Square = mv.from();
        loop {
            match current.offset(step.0, step.1) {
                Some(next) if next == mv.to() => return true,
                Some(next) if self.is_empty(next) => current = next,
                _ => return false,
            }
        }
    }
}

/// (|drow|, |dcol|) is (1, 2) or (2, 1).
fn is_knight_jump(mv: Move) -> bool {
    let (dr, dc) = (mv.row_delta().abs(), mv.col_delta().abs());
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

/// One square in any direction.
fn is_king_step(mv: Move) -> bool {
    mv.row_delta().abs() <= 1 && mv.col_delta().abs() <= 1
}
