//! The engine conversation driving one review.
//!
//! One session owns one walker, one review sheet, and the conversation
//! with one engine. It consumes engine output a line at a time, accepts
//! evaluations only at the target depth, and resumes the walker on every
//! move decision until the game is exhausted.

use std::time::Duration;

use review_core::{GameRecord, GameReport, ReviewSheet};
use uci::{EngineLine, GuiCommand};

use crate::board::{Board, StandardBoard};
use crate::config::ReviewConfig;
use crate::engine::{EngineLink, EngineProcess};
use crate::error::ReviewError;
use crate::sequencer::{MoveWalker, Step};

/// Where the engine conversation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Uninitialized,
    AwaitingReady,
    Ready,
    Analyzing,
    Finished,
}

/// One review of one game against one engine.
pub struct ReviewSession<B> {
    state: SessionState,
    walker: MoveWalker<B>,
    sheet: ReviewSheet,
    white: Option<String>,
    black: Option<String>,
    move_count: usize,
    depth: u32,
    wait: Duration,
}

impl<B: Board + Default> ReviewSession<B> {
    /// Validates the record and prepares a session for it.
    ///
    /// The whole move list is replayed on a scratch board first, so an
    /// unreadable or illegal move is rejected before any engine process
    /// is started.
    pub fn new(record: GameRecord, depth: u32, wait: Duration) -> Result<Self, ReviewError> {
        if record.moves.is_empty() {
            return Err(ReviewError::Parse("move list is empty".to_string()));
        }
        let mut scratch = B::default();
        for san in &record.moves {
            scratch.apply(san)?;
        }
        let GameRecord {
            moves,
            white,
            black,
        } = record;
        let move_count = moves.len();
        Ok(ReviewSession {
            state: SessionState::Uninitialized,
            walker: MoveWalker::new(B::default(), moves),
            sheet: ReviewSheet::new(),
            white,
            black,
            move_count,
            depth,
            wait,
        })
    }

    /// Drives the conversation to completion and returns the report.
    ///
    /// Returns a protocol error if the engine goes silent for longer
    /// than the configured wait or closes its output stream early.
    pub async fn run(mut self, mut link: EngineLink) -> Result<GameReport, ReviewError> {
        tracing::info!(moves = self.move_count, depth = self.depth, "Starting review");
        link.send(GuiCommand::Uci)?;
        link.send(GuiCommand::IsReady)?;
        self.state = SessionState::AwaitingReady;

        loop {
            let line = match tokio::time::timeout(self.wait, link.recv()).await {
                Err(_) => {
                    return Err(ReviewError::Protocol(format!(
                        "No engine output within {}ms",
                        self.wait.as_millis()
                    )));
                }
                Ok(None) => {
                    return Err(ReviewError::Protocol(
                        "Engine closed its output stream".to_string(),
                    ));
                }
                Ok(Some(line)) => line,
            };
            if let Some(report) = self.handle_line(&link, &line)? {
                return Ok(report);
            }
        }
    }

    fn handle_line(
        &mut self,
        link: &EngineLink,
        line: &str,
    ) -> Result<Option<GameReport>, ReviewError> {
        match EngineLine::classify(line) {
            EngineLine::Ready => self.on_ready(link),
            EngineLine::Info { depth, score } => {
                self.on_info(depth, score);
                Ok(None)
            }
            EngineLine::MoveDecision => self.on_decision(link),
            EngineLine::Unrecognized => {
                tracing::trace!(line, "Ignoring engine output");
                Ok(None)
            }
        }
    }

    /// First readiness acknowledgement configures the engine and submits
    /// the first move. Later ones are inert.
    fn on_ready(&mut self, link: &EngineLink) -> Result<Option<GameReport>, ReviewError> {
        if self.state != SessionState::AwaitingReady {
            tracing::trace!("Ignoring readiness signal outside the handshake");
            return Ok(None);
        }
        link.send(GuiCommand::NewGame)?;
        link.send(GuiCommand::analyse_mode())?;
        self.state = SessionState::Ready;
        self.resume_walker(link)
    }

    /// An evaluation is accepted only while a search is in flight, and
    /// only when it carries both a score and the target depth.
    fn on_info(&mut self, depth: Option<u32>, score: Option<i32>) {
        if self.state != SessionState::Analyzing {
            return;
        }
        let (depth, score) = match (depth, score) {
            (Some(depth), Some(score)) => (depth, score),
            _ => return,
        };
        if depth != self.depth {
            tracing::trace!(depth, "Discarding off-depth evaluation");
            return;
        }
        let sample = self.sheet.record(score, depth);
        tracing::debug!(
            ply = sample.ply,
            side = %sample.side,
            score = sample.score,
            "Accepted evaluation"
        );
    }

    fn on_decision(&mut self, link: &EngineLink) -> Result<Option<GameReport>, ReviewError> {
        if self.state != SessionState::Analyzing {
            tracing::trace!("Ignoring move decision outside analysis");
            return Ok(None);
        }
        self.walker.acknowledge();
        self.resume_walker(link)
    }

    fn resume_walker(&mut self, link: &EngineLink) -> Result<Option<GameReport>, ReviewError> {
        match self.walker.advance(link, self.depth)? {
            Step::Submitted => {
                self.state = SessionState::Analyzing;
                Ok(None)
            }
            Step::Exhausted => {
                self.state = SessionState::Finished;
                let sheet = std::mem::take(&mut self.sheet);
                tracing::info!(samples = sheet.len(), "Review finished");
                Ok(Some(sheet.into_report(self.white.take(), self.black.take())))
            }
        }
    }
}

/// Reviews one game with the engine named in `config`.
///
/// The record is validated before the engine is started, so a malformed
/// game never costs a process spawn.
pub async fn review_game(
    record: GameRecord,
    config: &ReviewConfig,
) -> Result<GameReport, ReviewError> {
    let session: ReviewSession<StandardBoard> =
        ReviewSession::new(record, config.depth, config.response_timeout())?;
    let (process, link) = EngineProcess::spawn(&config.engine_path)?;
    let result = session.run(link).await;
    process.shutdown().await;
    result
}
