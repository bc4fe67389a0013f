//! Discrete quality tiers for played moves.

use serde::Serialize;
use std::fmt;

/// How much a move damaged its side's winning chances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Judgement {
    None,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl Judgement {
    /// Classifies a winning-chance swing.
    ///
    /// Thresholds are checked most severe first with inclusive lower
    /// bounds; the cascade order is load-bearing because the ranges
    /// overlap.
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.3 {
            Judgement::Blunder
        } else if delta >= 0.2 {
            Judgement::Mistake
        } else if delta >= 0.1 {
            Judgement::Inaccuracy
        } else {
            Judgement::None
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Judgement::None => "None",
            Judgement::Inaccuracy => "Inaccuracy",
            Judgement::Mistake => "Mistake",
            Judgement::Blunder => "Blunder",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_swing() {
        assert_eq!(Judgement::from_delta(0.35), Judgement::Blunder);
        assert_eq!(Judgement::from_delta(0.25), Judgement::Mistake);
        assert_eq!(Judgement::from_delta(0.15), Judgement::Inaccuracy);
        assert_eq!(Judgement::from_delta(0.05), Judgement::None);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(Judgement::from_delta(0.3), Judgement::Blunder);
        assert_eq!(Judgement::from_delta(0.2), Judgement::Mistake);
        assert_eq!(Judgement::from_delta(0.1), Judgement::Inaccuracy);
    }

    #[test]
    fn improvements_are_not_judged() {
        assert_eq!(Judgement::from_delta(0.0), Judgement::None);
        assert_eq!(Judgement::from_delta(-0.4), Judgement::None);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Judgement::Blunder).unwrap(), "\"Blunder\"");
        assert_eq!(format!("{}", Judgement::Inaccuracy), "Inaccuracy");
    }
}
