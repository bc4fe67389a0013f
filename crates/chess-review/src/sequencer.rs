//! Move-by-move submission of the reviewed game.
//!
//! The walker owns the replay board and the move list. Each resumption
//! plays one move, hands the engine the resulting position, and asks for a
//! fixed-depth search. Resuming past the last move tells the engine to
//! quit instead.

use uci::GuiCommand;

use crate::board::Board;
use crate::engine::EngineLink;
use crate::error::ReviewError;

/// What a resumption of the walker did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next move was submitted for evaluation.
    Submitted,
    /// Every move has been submitted and the engine was told to quit.
    Exhausted,
}

/// Walks the move list in lockstep with the engine's move decisions.
///
/// The session resumes the walker once at startup and once per decision,
/// and acknowledges the pending evaluation before each resumption.
/// Resuming after exhaustion, or while an evaluation is still pending, is
/// a sequencing misuse.
pub struct MoveWalker<B> {
    board: B,
    moves: Vec<String>,
    cursor: usize,
    pending: bool,
    done: bool,
}

impl<B: Board> MoveWalker<B> {
    pub fn new(board: B, moves: Vec<String>) -> Self {
        MoveWalker {
            board,
            moves,
            cursor: 0,
            pending: false,
            done: false,
        }
    }

    /// Marks the pending evaluation as answered.
    pub fn acknowledge(&mut self) {
        self.pending = false;
    }

    /// Submits the next move, or reports exhaustion after the last one.
    pub fn advance(&mut self, link: &EngineLink, depth: u32) -> Result<Step, ReviewError> {
        if self.done {
            return Err(ReviewError::Misuse("walker resumed after exhaustion"));
        }
        if self.pending {
            return Err(ReviewError::Misuse(
                "walker resumed with an evaluation pending",
            ));
        }
        match self.moves.get(self.cursor) {
            Some(san) => {
                self.board.apply(san)?;
                tracing::debug!(ply = self.cursor, san = %san, "Submitting move");
                link.send(GuiCommand::PositionFen(self.board.fen()))?;
                link.send(GuiCommand::GoDepth(depth))?;
                self.cursor += 1;
                self.pending = true;
                Ok(Step::Submitted)
            }
            None => {
                link.send(GuiCommand::Quit)?;
                self.done = true;
                Ok(Step::Exhausted)
            }
        }
    }
}
