//! Threat detection: can the opponent capture on a square next move?

use super::attack_tables::{squares_in, DIAGONAL_DIRS, KING_ATTACKS, KNIGHT_ATTACKS, STRAIGHT_DIRS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if any piece of `defender`'s opponent could capture on
    /// `square` on its next move.
    ///
    /// Whose turn it is and what stands on `square` are both ignored, so this
    /// answers for empty squares and for squares held by either side.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        let attacker = defender.opponent();
        self.attacked_by_pawn(square, attacker)
            || self.attacked_by_knight(square, attacker)
            || self.attacked_by_slider(square, attacker)
            || self.attacked_by_king(square, attacker)
    }

    fn attacked_by_pawn(&self, square: Square, attacker: Color) -> bool {
        // An attacking pawn sits one step behind the square along its own push direction.
        let back = -attacker.pawn_direction();
        [-1, 1].into_iter().any(|d_col| {
            square
                .offset(back, d_col)
                .is_some_and(|sq| self.piece_at(sq) == Some((attacker, Piece::Pawn)))
        })
    }

    fn attacked_by_knight(&self, square: Square, attacker: Color) -> bool {
        squares_in(KNIGHT_ATTACKS[square.as_index()])
            .any(|sq| self.piece_at(sq) == Some((attacker, Piece::Knight)))
    }

    fn attacked_by_king(&self, square: Square, attacker: Color) -> bool {
        squares_in(KING_ATTACKS[square.as_index()])
            .any(|sq| self.piece_at(sq) == Some((attacker, Piece::King)))
    }

    fn attacked_by_slider(&self, square: Square, attacker: Color) -> bool {
        let diagonal = DIAGONAL_DIRS
            .iter()
            .any(|&(dr, dc)| self.first_on_ray(square, dr, dc).is_some_and(|(color, piece)| {
                color == attacker && piece.attacks_diagonally()
            }));
        diagonal
            || STRAIGHT_DIRS
                .iter()
                .any(|&(dr, dc)| self.first_on_ray(square, dr, dc).is_some_and(|(color, piece)| {
                    color == attacker && piece.attacks_straight()
                }))
    }

    /// First occupant met walking from `from` (exclusive) in a unit direction.
    pub(crate) fn first_on_ray(&self, from: Square, dr: isize, dc: isize) -> Option<(Color, Piece)> {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if let Some(occupant) = self.piece_at(next) {
                return Some(occupant);
            }
            current = next;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_threats() {
        let board = Board::new();
        // f3 is covered by the g1 knight and the e2/g2 pawns.
        assert!(board.is_square_attacked(Square(5, 5), Color::Black));
        // e4 is not reachable by anything yet.
        assert!(!board.is_square_attacked(Square(4, 4), Color::Black));
        assert!(!board.is_square_attacked(Square(4, 4), Color::White));
        // f6 is covered by Black's g8 knight.
        assert!(board.is_square_attacked(Square(2, 5), Color::White));
    }

    #[test]
    fn test_pawn_attacks_forward_diagonals_only() {
        let mut board = Board::empty();
        board.set_piece(Square(4, 4), Color::White, Piece::Pawn);
        // White pawn on e4 covers d5 and f5.
        assert!(board.is_square_attacked(Square(3, 3), Color::Black));
        assert!(board.is_square_attacked(Square(3, 5), Color::Black));
        // Not the square in front, not behind.
        assert!(!board.is_square_attacked(Square(3, 4), Color::Black));
        assert!(!board.is_square_attacked(Square(5, 3), Color::Black));
        assert!(!board.is_square_attacked(Square(5, 5), Color::Black));

        let mut board = Board::empty();
        board.set_piece(Square(3, 4), Color::Black, Piece::Pawn);
        // Black pawn on e5 covers d4 and f4.
        assert!(board.is_square_attacked(Square(4, 3), Color::White));
        assert!(board.is_square_attacked(Square(4, 5), Color::White));
        assert!(!board.is_square_attacked(Square(2, 3), Color::White));
    }

    #[test]
    fn test_own_pieces_never_threaten() {
        let mut board = Board::empty();
        board.set_piece(Square(4, 4), Color::White, Piece::Queen);
        board.set_piece(Square(2, 3), Color::White, Piece::Knight);
        board.set_piece(Square(5, 5), Color::White, Piece::King);
        assert!(!board.is_square_attacked(Square(4, 0), Color::White));
        assert!(!board.is_square_attacked(Square(4, 5), Color::White));
        assert!(board.is_square_attacked(Square(4, 0), Color::Black));
    }

    #[test]
    fn test_knight_and_king_threats() {
        let mut board = Board::empty();
        board.set_piece(Square(0, 0), Color::Black, Piece::Knight);
        board.set_piece(Square(7, 7), Color::Black, Piece::King);
        assert!(board.is_square_attacked(Square(2, 1), Color::White));
        assert!(board.is_square_attacked(Square(1, 2), Color::White));
        assert!(!board.is_square_attacked(Square(1, 1), Color::White));
        assert!(board.is_square_attacked(Square(6, 6), Color::White));
        assert!(!board.is_square_attacked(Square(5, 5), Color::White));
    }

    #[test]
    fn test_first_on_ray() {
        let mut board = Board::empty();
        board.set_piece(Square(0, 4), Color::Black, Piece::Rook);
        board.set_piece(Square(2, 4), Color::White, Piece::Pawn);
        assert_eq!(
            board.first_on_ray(Square(6, 4), -1, 0),
            Some((Color::White, Piece::Pawn))
        );
        assert_eq!(board.first_on_ray(Square(6, 4), 1, 0), None);
    }
}
