//! One game from the opening layout to a result.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, BoardError, Color, GameStatus, Move, MoveParseError, Occupant, Piece, RulesConfig,
};

/// Error type for a rejected move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// The request is not of the form `e2 e4`
    Parse(MoveParseError),
    /// The rules do not allow this move for the side to move
    IllegalMove { mv: Move, mover: Color },
    /// The game already has a result
    GameOver { status: GameStatus },
    /// The position breaks a board invariant (e.g. a side has no king)
    Board(BoardError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Parse(e) => write!(f, "Invalid move request: {e}"),
            PlayError::IllegalMove { mv, mover } => {
                write!(f, "Illegal move '{mv}' for {mover}")
            }
            PlayError::GameOver { status } => write!(f, "Game is over ({status})"),
            PlayError::Board(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Parse(e) => Some(e),
            PlayError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for PlayError {
    fn from(e: MoveParseError) -> Self {
        PlayError::Parse(e)
    }
}

impl From<BoardError> for PlayError {
    fn from(e: BoardError) -> Self {
        PlayError::Board(e)
    }
}

/// Turn and result flags the turn loop reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub side_to_move: Color,
    pub game_over: bool,
}

/// Result of one accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub mover: Color,
    pub captured: Occupant,
    /// Verdict for the side that moves next.
    pub status: GameStatus,
}

/// A game session: a board, the rules it is played under, and its result.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    config: RulesConfig,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// New game from the opening layout under the default rules.
    #[must_use]
    pub fn new() -> Self {
        Game::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Game {
            board: Board::new(),
            config,
            status: GameStatus::Ongoing,
        }
    }

    /// Continue from an arbitrary position; the side to move is taken from
    /// the board.
    pub fn from_board(mut board: Board, config: RulesConfig) -> Result<Self, BoardError> {
        let status = board.status(board.side_to_move())?;
        Ok(Game {
            board,
            config,
            status,
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Verdict for the side to move, or the final result.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        GameState {
            side_to_move: self.side_to_move(),
            game_over: self.is_over(),
        }
    }

    /// Parse a request such as `"e2 e4"` and play it.
    pub fn play(&mut self, request: &str) -> Result<MoveOutcome, PlayError> {
        let mv: Move = request.parse()?;
        self.play_move(mv)
    }

    /// Validate and play `mv` for the side to move, then evaluate the
    /// position for the opponent and hand the turn over.
    ///
    /// On error the board is left exactly as it was.
    pub fn play_move(&mut self, mv: Move) -> Result<MoveOutcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver {
                status: self.status,
            });
        }

        let mover = self.side_to_move();
        if !self.board.is_legal_with(mv, mover, &self.config) {
            return Err(PlayError::IllegalMove { mv, mover });
        }

        let info = self.board.make_move(mv);
        let opponent = mover.opponent();
        let status = if matches!(info.captured(), Some((_, Piece::King))) {
            GameStatus::KingCaptured { winner: mover }
        } else {
            match self.board.status(opponent) {
                Ok(status) => status,
                Err(e) => {
                    self.board.unmake_move(mv, info);
                    return Err(e.into());
                }
            }
        };

        debug_event!("{mover} played {mv}: {status}");
        self.board.set_side_to_move(opponent);
        self.status = status;
        Ok(MoveOutcome {
            mv,
            mover,
            captured: info.captured(),
            status,
        })
    }
}
