//! Error types for the review driver.

use thiserror::Error;

use crate::board::BoardError;

/// Errors that can occur while reviewing a game.
///
/// This enum covers move-list validation, protocol-level failures of the
/// engine conversation, driver sequencing misuse, and process startup.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The move list could not be replayed on a board.
    #[error("Invalid move list: {0}")]
    Parse(String),
    /// The engine conversation left the expected flow.
    #[error("Engine protocol error: {0}")]
    Protocol(String),
    /// A driver component was resumed out of order.
    #[error("Sequencing misuse: {0}")]
    Misuse(&'static str),
    /// The engine process could not be started.
    #[error("Failed to start engine: {0}")]
    Spawn(#[from] std::io::Error),
}

impl From<BoardError> for ReviewError {
    fn from(err: BoardError) -> Self {
        ReviewError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_errors_become_parse_errors() {
        let err: ReviewError = BoardError::Notation("zz9".to_string()).into();
        match err {
            ReviewError::Parse(msg) => assert!(msg.contains("zz9")),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn spawn_errors_wrap_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such engine");
        let err: ReviewError = io.into();
        assert!(err.to_string().contains("Failed to start engine"));
    }
}
