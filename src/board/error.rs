//! Error types for board operations.

use std::fmt;

use super::Color;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move request parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Request does not have the `e2 e4` shape
    InvalidFormat { input: String },
    /// One of the two squares is not on the board
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { input } => {
                write!(f, "Move '{input}' must have the form 'e2 e4'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}' in move")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for board layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row must have exactly 8 squares
    WrongRowLength { row: usize, found: usize },
    /// Character is neither a piece letter nor '-'
    InvalidPiece { char: char },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 8 squares, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for positions that break the one-king-per-side invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No king of this color is on the board
    MissingKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    // SquareError tests
    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_col_bounds() {
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    // MoveParseError tests
    #[test]
    fn test_move_error_invalid_format() {
        let err = MoveParseError::InvalidFormat {
            input: "e2e4".to_string(),
        };
        assert!(err.to_string().contains("e2e4"));
        assert!(err.to_string().contains("e2 e4"));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    // LayoutError tests
    #[test]
    fn test_layout_error_row_count() {
        let err = LayoutError::WrongRowCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_layout_error_invalid_piece() {
        let err = LayoutError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    // BoardError tests
    #[test]
    fn test_missing_king_names_color() {
        let err = BoardError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_error_clone() {
        let err = LayoutError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
