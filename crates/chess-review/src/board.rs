//! Board state tracking for move replay.
//!
//! The driver replays the reviewed game one move at a time and hands the
//! engine a full FEN after every move. This module provides the board
//! abstraction that replay runs on, plus the standard-rules implementation
//! backed by `shakmaty`.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, EnPassantMode, Position};
use thiserror::Error;

/// Errors from replaying one move of standard algebraic notation.
#[derive(Error, Debug)]
pub enum BoardError {
    /// The text is not standard algebraic notation.
    #[error("Unreadable move {0:?}")]
    Notation(String),
    /// The move is well formed but cannot be played in this position.
    #[error("Illegal move {0:?}")]
    Illegal(String),
}

/// A position the reviewed game can be replayed on.
///
/// The driver needs exactly two things from a board: apply the next move
/// in standard algebraic notation, and render the resulting position as
/// FEN for the engine.
pub trait Board {
    fn apply(&mut self, san: &str) -> Result<(), BoardError>;
    fn fen(&self) -> String;
}

/// Standard-rules board starting from the initial position.
#[derive(Debug, Clone, Default)]
pub struct StandardBoard {
    position: Chess,
}

impl Board for StandardBoard {
    fn apply(&mut self, san: &str) -> Result<(), BoardError> {
        // Annotation suffixes like "e4!?" are not part of the notation.
        let bare = san.trim_end_matches(|c| c == '!' || c == '?');
        let parsed: SanPlus = bare
            .parse()
            .map_err(|_| BoardError::Notation(san.to_string()))?;
        let mv = parsed
            .san
            .to_move(&self.position)
            .map_err(|_| BoardError::Illegal(san.to_string()))?;
        self.position = self
            .position
            .clone()
            .play(&mv)
            .map_err(|_| BoardError::Illegal(san.to_string()))?;
        Ok(())
    }

    fn fen(&self) -> String {
        Fen(self.position.clone().into_setup(EnPassantMode::Legal)).to_string()
    }
}
