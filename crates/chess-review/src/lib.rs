//! Chess Review - engine-backed game review.
//!
//! This crate replays a recorded game through a UCI engine, collects the
//! engine's evaluation after every move, and turns the evaluation swings
//! into per-move judgements for each side.
//!
//! # Modules
//!
//! - [`board`] - Move replay and FEN rendering
//! - [`engine`] - Engine process spawning and channel plumbing
//! - [`sequencer`] - Move-by-move submission to the engine
//! - [`session`] - The conversation state machine and entry point
//! - [`config`] - TOML configuration loading
//! - [`error`] - Driver error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use chess_review::config::ReviewConfig;
//! use chess_review::session::review_game;
//! use review_core::{Color, GameRecord};
//!
//! # async fn demo() -> Result<(), chess_review::error::ReviewError> {
//! let record = GameRecord::from_moves_text("e4 e5 Nf3 Nc6", None, None);
//! let report = review_game(record, &ReviewConfig::default()).await?;
//! let counts = report.counts(Color::White);
//! println!("White blunders: {}", counts.blunders);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod sequencer;
pub mod session;

pub use board::{Board, BoardError, StandardBoard};
pub use config::{ConfigError, ReviewConfig};
pub use engine::{EngineLink, EngineProcess};
pub use error::ReviewError;
pub use sequencer::{MoveWalker, Step};
pub use session::{review_game, ReviewSession};
