use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Diagonal unit steps, matched by bishops and queens.
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal unit steps, matched by rooks and queens.
pub(crate) const STRAIGHT_DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

fn pop_lsb_u64(bb: &mut u64) -> usize {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    idx
}

fn build_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (idx, mask) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                *mask |= 1u64 << to.as_index();
            }
        }
    }
    table
}

/// Squares a knight on each square reaches, as a mask over `Square::as_index`.
pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| build_table(&KNIGHT_OFFSETS));

/// Squares adjacent to each square, as a mask over `Square::as_index`.
pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| build_table(&KING_OFFSETS));

/// Iterate the squares set in a table mask.
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            Some(Square::from_index(pop_lsb_u64(&mut mask)))
        }
    })
}
