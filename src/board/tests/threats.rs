//! Attack detection along every ray and for every attacker kind.

use crate::board::attack_tables::{DIAGONAL_DIRS, STRAIGHT_DIRS};
use crate::board::{Board, Color, Piece, Square};

const TARGET: Square = Square(3, 3);

/// Board with a lone piece placed `distance` steps from `TARGET` along a direction.
fn with_piece_on_ray(dir: (isize, isize), distance: isize, color: Color, piece: Piece) -> Option<(Board, Square)> {
    let sq = TARGET.offset(dir.0 * distance, dir.1 * distance)?;
    let mut board = Board::empty();
    board.set_piece(sq, color, piece);
    Some((board, sq))
}

#[test]
fn test_matching_slider_hits_along_every_ray() {
    for dir in DIAGONAL_DIRS {
        for attacker in [Piece::Bishop, Piece::Queen] {
            let (board, _) = with_piece_on_ray(dir, 3, Color::Black, attacker).unwrap();
            assert!(board.is_square_attacked(TARGET, Color::White), "{attacker} along {dir:?}");
        }
    }
    for dir in STRAIGHT_DIRS {
        for attacker in [Piece::Rook, Piece::Queen] {
            let (board, _) = with_piece_on_ray(dir, 3, Color::Black, attacker).unwrap();
            assert!(board.is_square_attacked(TARGET, Color::White), "{attacker} along {dir:?}");
        }
    }
}

#[test]
fn test_wrong_geometry_slider_misses() {
    for dir in DIAGONAL_DIRS {
        let (board, _) = with_piece_on_ray(dir, 3, Color::Black, Piece::Rook).unwrap();
        assert!(!board.is_square_attacked(TARGET, Color::White), "rook along {dir:?}");
    }
    for dir in STRAIGHT_DIRS {
        let (board, _) = with_piece_on_ray(dir, 3, Color::Black, Piece::Bishop).unwrap();
        assert!(!board.is_square_attacked(TARGET, Color::White), "bishop along {dir:?}");
    }
}

#[test]
fn test_nearest_blocker_stops_every_ray() {
    for dir in DIAGONAL_DIRS.into_iter().chain(STRAIGHT_DIRS) {
        for (color, blocker) in [
            (Color::White, Piece::Pawn),
            (Color::White, Piece::Queen),
            (Color::Black, Piece::Knight),
        ] {
            let (mut board, _) = with_piece_on_ray(dir, 3, Color::Black, Piece::Queen).unwrap();
            let between = TARGET.offset(dir.0, dir.1).unwrap();
            board.set_piece(between, color, blocker);
            // None of these blockers attacks the target itself.
            assert!(
                !board.is_square_attacked(TARGET, Color::White),
                "{color} {blocker} should block {dir:?}"
            );
        }
    }
}

#[test]
fn test_adjacent_slider_attacks() {
    for dir in DIAGONAL_DIRS.into_iter().chain(STRAIGHT_DIRS) {
        let (board, _) = with_piece_on_ray(dir, 1, Color::White, Piece::Queen).unwrap();
        assert!(board.is_square_attacked(TARGET, Color::Black));
        assert!(!board.is_square_attacked(TARGET, Color::White));
    }
}

#[test]
fn test_square_occupant_is_irrelevant() {
    let mut board = Board::empty();
    board.set_piece(Square(0, 3), Color::Black, Piece::Rook);
    assert!(board.is_square_attacked(TARGET, Color::White));
    board.set_piece(TARGET, Color::Black, Piece::Knight);
    assert!(board.is_square_attacked(TARGET, Color::White));
    board.set_piece(TARGET, Color::White, Piece::King);
    assert!(board.is_square_attacked(TARGET, Color::White));
}

#[test]
fn test_turn_is_ignored() {
    let mut board = Board::empty().with_side_to_move(Color::White);
    board.set_piece(Square(5, 5), Color::White, Piece::Knight);
    assert!(board.is_square_attacked(TARGET, Color::Black));
    board.set_side_to_move(Color::Black);
    assert!(board.is_square_attacked(TARGET, Color::Black));
}

#[test]
fn test_pawn_on_edge_file() {
    let mut board = Board::empty();
    board.set_piece(Square(4, 0), Color::White, Piece::Pawn);
    assert!(board.is_square_attacked(Square(3, 1), Color::Black));
    assert!(!board.is_square_attacked(Square(3, 7), Color::Black));
}

#[test]
fn test_knight_attacks_from_every_offset() {
    for (dr, dc) in [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)] {
        let sq = TARGET.offset(dr, dc).unwrap();
        let mut board = Board::empty();
        board.set_piece(sq, Color::Black, Piece::Knight);
        // Surround the target; knights jump.
        for (br, bc) in [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)] {
            board.set_piece(TARGET.offset(br, bc).unwrap(), Color::White, Piece::Pawn);
        }
        assert!(board.is_square_attacked(TARGET, Color::White), "knight on {sq}");
    }

    let mut board = Board::empty();
    board.set_piece(Square(1, 3), Color::Black, Piece::Knight);
    assert!(!board.is_square_attacked(TARGET, Color::White));
}

#[test]
fn test_king_attacks_adjacent_only() {
    for (dr, dc) in [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)] {
        let mut board = Board::empty();
        board.set_piece(TARGET.offset(dr, dc).unwrap(), Color::White, Piece::King);
        assert!(board.is_square_attacked(TARGET, Color::Black));
    }
    let mut board = Board::empty();
    board.set_piece(Square(1, 3), Color::White, Piece::King);
    assert!(!board.is_square_attacked(TARGET, Color::Black));
}
