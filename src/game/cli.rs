use std::io::{self, BufRead, Write};

use super::session::{Game, GameState, PlayError};
use crate::board::{GameStatus, RulesConfig};

/// Run the interactive turn loop until the game ends or `input` is exhausted.
///
/// Each line of `input` is one move request (`e2 e4`). Board, prompts and
/// verdicts are written to `output`.
pub fn run_loop<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: RulesConfig,
) -> io::Result<GameState> {
    let mut game = Game::with_config(config);
    let mut lines = input.lines();

    writeln!(output, "{}", game.board())?;
    while !game.is_over() {
        let mover = game.side_to_move();
        writeln!(output, "{mover} to move.")?;
        writeln!(output, "Enter move (e.g., 'e2 e4'): ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match game.play(line.trim()) {
            Ok(outcome) => {
                writeln!(output, "{}", game.board())?;
                match outcome.status {
                    GameStatus::Checkmate { winner } => {
                        writeln!(output, "Checkmate! {winner} wins!")?;
                    }
                    GameStatus::Stalemate => {
                        writeln!(output, "Stalemate! The game is a draw.")?;
                    }
                    GameStatus::KingCaptured { winner } => {
                        writeln!(output, "King captured! {winner} wins!")?;
                    }
                    GameStatus::Check => {
                        writeln!(output, "{} is in check.", mover.opponent())?;
                    }
                    GameStatus::Ongoing => {}
                }
            }
            Err(PlayError::Parse(_)) => {
                writeln!(
                    output,
                    "Invalid input format! Please enter move in the format 'e2 e4'."
                )?;
            }
            Err(PlayError::IllegalMove { .. }) => {
                writeln!(output, "Invalid move! Try again.")?;
            }
            Err(PlayError::GameOver { .. }) => break,
            Err(e @ PlayError::Board(_)) => {
                return Err(io::Error::new(io::ErrorKind::InvalidData, e));
            }
        }
    }

    Ok(game.state())
}
