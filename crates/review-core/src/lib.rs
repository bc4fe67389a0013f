//! Core scoring for chess game review.
//!
//! Turns engine evaluations into bounded winning chances, judges each move
//! by the swing it caused, and accumulates both into a final [`GameReport`].
//! Everything here is pure: no I/O, no protocol, no engine process. The
//! driver crate feeds accepted evaluations in play order and consumes the
//! report once the game is done.

pub mod chances;
pub mod color;
pub mod judgement;
pub mod record;
pub mod report;

pub use chances::winning_chance;
pub use color::Color;
pub use judgement::Judgement;
pub use record::GameRecord;
pub use report::{EvalSample, GameReport, JudgementCounts, ReviewSheet};
