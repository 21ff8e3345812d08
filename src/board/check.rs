//! Check, checkmate and the bounded move scan behind them.

use super::error::BoardError;
use super::{Board, Color, GameStatus, Move, Piece, Square};

impl Board {
    /// Locate `color`'s king. The scan is row-major from a8 and the first
    /// match wins.
    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        Square::all()
            .find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
            .ok_or(BoardError::MissingKing { color })
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king_sq = self.find_king(color)?;
        Ok(self.is_square_attacked(king_sq, color))
    }

    /// Returns true if `color` is in check and no move accepted by
    /// [`Board::is_legal`] gets it out.
    ///
    /// Every candidate is played as a trial and undone before the next one is
    /// tried, so the board is unchanged when this returns. Costs up to 64 x 64
    /// validator calls; call once per half-move, not in a loop.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, BoardError> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }

        for from in Square::all() {
            if self.color_on(from) != Some(color) {
                continue;
            }
            for to in Square::all() {
                let mv = Move::new(from, to);
                if !self.is_legal(mv, color) {
                    continue;
                }
                let still_in_check = self.trial(mv).is_in_check(color)?;
                if !still_in_check {
                    trace_event!("{color} escapes check with {mv}");
                    return Ok(false);
                }
            }
        }

        debug_event!("{color} is checkmated");
        Ok(true)
    }

    /// Stalemate is not detected: this always returns false.
    ///
    /// TODO: report stalemate when `color` is not in check and
    /// `pseudo_legal_moves(color)` has no move that keeps the king safe.
    #[must_use]
    pub fn is_stalemate(&self, _color: Color) -> bool {
        false
    }

    /// Every move `color` could play under [`Board::is_legal`], in row-major
    /// order of origin then destination.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if self.color_on(from) != Some(color) {
                continue;
            }
            moves.extend(
                Square::all()
                    .map(|to| Move::new(from, to))
                    .filter(|&mv| self.is_legal(mv, color)),
            );
        }
        moves
    }

    /// Verdict for `color`, about to move.
    pub fn status(&mut self, color: Color) -> Result<GameStatus, BoardError> {
        if self.is_checkmate(color)? {
            return Ok(GameStatus::Checkmate {
                winner: color.opponent(),
            });
        }
        if self.is_stalemate(color) {
            return Ok(GameStatus::Stalemate);
        }
        if self.is_in_check(color)? {
            debug_event!("{color} is in check");
            return Ok(GameStatus::Check);
        }
        Ok(GameStatus::Ongoing)
    }
}
