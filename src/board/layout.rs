//! Text layout of the board: the printed grid and its bare rows.

use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Color, Piece, Square};

const EMPTY_CHAR: char = '-';
const FILE_LABELS: &str = "   a b c d e f g h";
const BORDER: &str = " +-----------------+";

impl Board {
    /// Parse a board from 8 rows of square characters, row 0 (rank 8) first.
    ///
    /// Rows are separated by `/`, or by newlines when the text has no `/`.
    /// Blank lines are ignored but empty `/` fields are not. Uppercase letters
    /// are White, lowercase Black, `-` is empty; spaces inside a row are
    /// ignored. The result has White to move.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = if layout.contains('/') {
            layout.trim().split('/').map(str::trim).collect()
        } else {
            layout.lines().map(str::trim).filter(|row| !row.is_empty()).collect()
        };
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(LayoutError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, c) in cells.into_iter().enumerate() {
                if c == EMPTY_CHAR {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(row, col), color, piece);
            }
        }
        Ok(board)
    }

    /// Parse a board layout.
    ///
    /// # Panics
    /// Panics if the layout is invalid. Use `try_from_layout` for fallible parsing.
    #[must_use]
    pub fn from_layout(layout: &str) -> Self {
        Self::try_from_layout(layout).expect("Invalid board layout")
    }

    /// Board character for a square: piece letter or `-`.
    #[must_use]
    pub fn square_char(&self, sq: Square) -> char {
        self.piece_at(sq)
            .map_or(EMPTY_CHAR, |(color, piece)| piece.to_board_char(color))
    }

    /// The 8 bare rows, rank 8 first, e.g. `"rnbqkbnr"`.
    #[must_use]
    pub fn layout(&self) -> Vec<String> {
        (0..8)
            .map(|row| (0..8).map(|col| self.square_char(Square(row, col))).collect())
            .collect()
    }

    /// The rows joined with `/`, accepted back by [`Board::try_from_layout`].
    #[must_use]
    pub fn to_layout_string(&self) -> String {
        self.layout().join("/")
    }

    /// The board with file and rank labels, as shown to players.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_LABELS}")?;
        writeln!(f, "{BORDER}")?;
        for row in 0..8 {
            let rank = 8 - row;
            write!(f, "{rank}| ")?;
            for col in 0..8 {
                write!(f, "{} ", self.square_char(Square(row, col)))?;
            }
            writeln!(f, "| {rank}")?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "{FILE_LABELS}")
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}
