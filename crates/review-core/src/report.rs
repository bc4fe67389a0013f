//! Accumulation of accepted evaluations into the final review report.

use serde::Serialize;

use crate::chances::winning_chance;
use crate::color::Color;
use crate::judgement::Judgement;

/// One engine evaluation accepted at the target depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalSample {
    /// Zero-based index into the interleaved timeline.
    pub ply: usize,
    /// The side whose move produced this evaluation.
    pub side: Color,
    /// Signed evaluation in the engine's centipawn-style unit.
    pub score: i32,
    /// Search depth the engine reported for the line.
    pub depth: u32,
}

/// Running state of one review: the winning-chance timeline and the
/// per-side judgement sequences.
///
/// Both judgement sequences are seeded with a single `None`, since a
/// side's first move has no earlier measurement to compare against. The
/// side to move starts at White and flips on every accepted evaluation.
#[derive(Debug)]
pub struct ReviewSheet {
    advantages: Vec<f64>,
    white: Vec<Judgement>,
    black: Vec<Judgement>,
    turn: Color,
    prev_score: i32,
}

impl ReviewSheet {
    pub fn new() -> Self {
        ReviewSheet {
            advantages: Vec::new(),
            white: vec![Judgement::None],
            black: vec![Judgement::None],
            turn: Color::White,
            prev_score: 0,
        }
    }

    /// Side whose move the next accepted evaluation belongs to.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of evaluations folded in so far.
    pub fn len(&self) -> usize {
        self.advantages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advantages.is_empty()
    }

    /// Folds one accepted evaluation into the sheet.
    ///
    /// The judgement compares the magnitude of the new chance against the
    /// magnitude of the previous accepted one, so a swing whose sign flips
    /// between the two samples is measured only by its size change. No
    /// judgement is appended until the timeline holds an entry for each
    /// side's first move.
    pub fn record(&mut self, score: i32, depth: u32) -> EvalSample {
        let sample = EvalSample {
            ply: self.advantages.len(),
            side: self.turn,
            score,
            depth,
        };
        let chance = winning_chance(score);
        let prev = winning_chance(self.prev_score);
        let delta = chance.abs() - prev.abs();
        if self.advantages.len() > 1 {
            let judgement = Judgement::from_delta(delta);
            match self.turn {
                Color::White => self.white.push(judgement),
                Color::Black => self.black.push(judgement),
            }
        }
        self.advantages.push(chance);
        self.turn = self.turn.opposite();
        self.prev_score = score;
        sample
    }

    /// Consumes the sheet into the immutable report, attaching the player
    /// names passed through from the game source.
    pub fn into_report(
        self,
        white_player: Option<String>,
        black_player: Option<String>,
    ) -> GameReport {
        GameReport {
            white_player,
            black_player,
            advantages: self.advantages,
            white_judgements: self.white,
            black_judgements: self.black,
        }
    }
}

impl Default for ReviewSheet {
    fn default() -> Self {
        ReviewSheet::new()
    }
}

/// Finished review of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_player: Option<String>,
    /// Winning chance after every ply, both sides interleaved in play order.
    pub advantages: Vec<f64>,
    /// White's judgements, aligned with White's moves.
    pub white_judgements: Vec<Judgement>,
    /// Black's judgements, aligned with Black's moves.
    pub black_judgements: Vec<Judgement>,
}

impl GameReport {
    /// Judgements for one side, aligned with that side's moves.
    pub fn judgements(&self, side: Color) -> &[Judgement] {
        match side {
            Color::White => &self.white_judgements,
            Color::Black => &self.black_judgements,
        }
    }

    /// Tallies the non-`None` judgements for one side.
    pub fn counts(&self, side: Color) -> JudgementCounts {
        let mut counts = JudgementCounts::default();
        for judgement in self.judgements(side) {
            match judgement {
                Judgement::Inaccuracy => counts.inaccuracies += 1,
                Judgement::Mistake => counts.mistakes += 1,
                Judgement::Blunder => counts.blunders += 1,
                Judgement::None => {}
            }
        }
        counts
    }
}

/// Per-side totals shown in summary views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JudgementCounts {
    pub inaccuracies: usize,
    pub mistakes: usize,
    pub blunders: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(scores: &[i32]) -> ReviewSheet {
        let mut sheet = ReviewSheet::new();
        for &score in scores {
            sheet.record(score, 14);
        }
        sheet
    }

    #[test]
    fn first_move_of_each_side_stays_unjudged() {
        let sheet = record_all(&[0, -10]);
        let report = sheet.into_report(None, None);
        assert_eq!(report.white_judgements, vec![Judgement::None]);
        assert_eq!(report.black_judgements, vec![Judgement::None]);
        assert_eq!(report.advantages.len(), 2);
    }

    #[test]
    fn judgements_start_with_the_third_sample() {
        let sheet = record_all(&[0, -10, 40]);
        let report = sheet.into_report(None, None);
        assert_eq!(report.white_judgements, vec![Judgement::None, Judgement::None]);
        assert_eq!(report.black_judgements, vec![Judgement::None]);
    }

    #[test]
    fn large_swing_is_a_blunder() {
        // Black's second move jumps the chance magnitude from 0.0 to ~0.38.
        let sheet = record_all(&[0, 500, 0, 200]);
        let report = sheet.into_report(None, None);
        assert_eq!(report.white_judgements, vec![Judgement::None, Judgement::None]);
        assert_eq!(report.black_judgements, vec![Judgement::None, Judgement::Blunder]);
    }

    #[test]
    fn sample_carries_ply_side_and_depth() {
        let mut sheet = ReviewSheet::new();
        let first = sheet.record(25, 14);
        let second = sheet.record(-40, 14);
        assert_eq!(first.ply, 0);
        assert_eq!(first.side, Color::White);
        assert_eq!(second.ply, 1);
        assert_eq!(second.side, Color::Black);
        assert_eq!(second.score, -40);
        assert_eq!(second.depth, 14);
    }

    #[test]
    fn turn_alternates_per_sample() {
        let mut sheet = ReviewSheet::new();
        assert_eq!(sheet.turn(), Color::White);
        sheet.record(0, 14);
        assert_eq!(sheet.turn(), Color::Black);
        sheet.record(0, 14);
        assert_eq!(sheet.turn(), Color::White);
    }

    #[test]
    fn counts_ignore_none() {
        let report = GameReport {
            white_player: None,
            black_player: None,
            advantages: Vec::new(),
            white_judgements: vec![
                Judgement::None,
                Judgement::Inaccuracy,
                Judgement::Blunder,
                Judgement::Inaccuracy,
            ],
            black_judgements: vec![Judgement::None, Judgement::Mistake],
        };
        let white = report.counts(Color::White);
        assert_eq!(white.inaccuracies, 2);
        assert_eq!(white.mistakes, 0);
        assert_eq!(white.blunders, 1);
        let black = report.counts(Color::Black);
        assert_eq!(black.mistakes, 1);
    }

    #[test]
    fn report_keeps_player_names() {
        let sheet = record_all(&[10]);
        let report = sheet.into_report(Some("Alice".into()), Some("Bob".into()));
        assert_eq!(report.white_player.as_deref(), Some("Alice"));
        assert_eq!(report.black_player.as_deref(), Some("Bob"));
    }

    #[test]
    fn report_serializes_without_missing_names() {
        let report = record_all(&[0]).into_report(None, None);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("white_player"));
        assert!(json.contains("advantages"));
        assert!(json.contains("white_judgements"));
    }
}
