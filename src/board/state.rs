#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// Occupant of a single square.
pub type Occupant = Option<(Color, Piece)>;

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of occupants plus the side to move.
///
/// Indexed as `squares[row][col]`; row 0 is Black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Occupant; 8]; 8],
    pub(crate) side_to_move: Color,
}

impl Board {
    /// Standard opening layout, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_ROW.iter().enumerate() {
            board.set_piece(Square(Color::White.back_row(), col), Color::White, *piece);
            board.set_piece(Square(Color::Black.back_row(), col), Color::Black, *piece);
            board.set_piece(Square(Color::White.pawn_start_row(), col), Color::White, Piece::Pawn);
            board.set_piece(Square(Color::Black.pawn_start_row(), col), Color::Black, Piece::Pawn);
        }
        board
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Builder-style variant of [`Board::set_side_to_move`].
    #[must_use]
    pub const fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Occupant {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Place a piece, replacing whatever was on the square.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Empty a square, returning its previous occupant.
    pub fn clear_square(&mut self, sq: Square) -> Occupant {
        self.squares[sq.0][sq.1].take()
    }

    pub(crate) fn replace(&mut self, sq: Square, occupant: Occupant) -> Occupant {
        std::mem::replace(&mut self.squares[sq.0][sq.1], occupant)
    }

    /// Every occupied square with its occupant, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|&(_, c, _)| c == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
