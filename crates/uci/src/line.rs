//! Classification of engine output lines.

/// What one line of engine output means to the driver.
///
/// Each line gets exactly one classification, checked in this order:
/// readiness, evaluation payload, move decision, inert. An `info` line
/// with neither a usable depth nor a usable score falls through to the
/// later checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineLine {
    /// The engine answered `isready`. Only the exact line `readyok`
    /// counts; the token embedded in a longer line does not.
    Ready,
    /// A search report with at least one usable field.
    Info {
        /// Depth, when the line opens with `info depth <n>`.
        depth: Option<u32>,
        /// Score value from the first `score <kind> <n>` triple,
        /// whatever the kind. Mate distances come through unscaled.
        score: Option<i32>,
    },
    /// The engine committed to a move. Any line mentioning `bestmove`
    /// qualifies, including `bestmove (none)`.
    MoveDecision,
    /// Anything else: banners, option listings, `uciok`, chatter.
    Unrecognized,
}

impl EngineLine {
    /// Classify one line of engine output.
    pub fn classify(line: &str) -> EngineLine {
        if line == "readyok" {
            return EngineLine::Ready;
        }
        if line.starts_with("info ") {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let depth = leading_depth(&tokens);
            let score = score_value(&tokens);
            if depth.is_some() || score.is_some() {
                return EngineLine::Info { depth, score };
            }
        }
        if line.contains("bestmove") {
            return EngineLine::MoveDecision;
        }
        EngineLine::Unrecognized
    }
}

/// Depth is only trusted when it opens the report, as engines print it.
fn leading_depth(tokens: &[&str]) -> Option<u32> {
    match tokens {
        ["info", "depth", value, ..] => value.parse().ok(),
        _ => None,
    }
}

/// First `score <kind> <n>` triple anywhere in the line.
fn score_value(tokens: &[&str]) -> Option<i32> {
    for (i, token) in tokens.iter().enumerate() {
        if *token != "score" {
            continue;
        }
        let kind = tokens.get(i + 1)?;
        if !is_word(kind) {
            continue;
        }
        if let Some(value) = tokens.get(i + 2).and_then(|v| v.parse().ok()) {
            return Some(value);
        }
    }
    None
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_readyok_is_ready() {
        assert_eq!(EngineLine::classify("readyok"), EngineLine::Ready);
    }

    #[test]
    fn readyok_must_stand_alone() {
        assert_eq!(EngineLine::classify("readyok now"), EngineLine::Unrecognized);
        assert_eq!(EngineLine::classify(" readyok"), EngineLine::Unrecognized);
    }

    #[test]
    fn full_search_report() {
        let line = "info depth 14 seldepth 19 multipv 1 score cp 40 nodes 123456 nps 987654 \
                    time 125 pv e2e4 e7e5";
        assert_eq!(
            EngineLine::classify(line),
            EngineLine::Info {
                depth: Some(14),
                score: Some(40),
            }
        );
    }

    #[test]
    fn negative_scores_keep_their_sign() {
        assert_eq!(
            EngineLine::classify("info depth 14 score cp -10 nodes 5000"),
            EngineLine::Info {
                depth: Some(14),
                score: Some(-10),
            }
        );
    }

    #[test]
    fn mate_distances_come_through_unscaled() {
        assert_eq!(
            EngineLine::classify("info depth 12 seldepth 20 score mate -3 nodes 4242"),
            EngineLine::Info {
                depth: Some(12),
                score: Some(-3),
            }
        );
    }

    #[test]
    fn depth_must_open_the_report() {
        assert_eq!(
            EngineLine::classify("info nodes 99 depth 5 score cp 13"),
            EngineLine::Info {
                depth: None,
                score: Some(13),
            }
        );
    }

    #[test]
    fn depth_alone_is_enough() {
        assert_eq!(
            EngineLine::classify("info depth 14 currmove e2e4 currmovenumber 1"),
            EngineLine::Info {
                depth: Some(14),
                score: None,
            }
        );
    }

    #[test]
    fn truncated_score_is_dropped() {
        assert_eq!(
            EngineLine::classify("info depth 8 score cp"),
            EngineLine::Info {
                depth: Some(8),
                score: None,
            }
        );
    }

    #[test]
    fn info_without_payload_is_inert() {
        assert_eq!(
            EngineLine::classify("info string NNUE evaluation using nn-5af11540bbfe.nnue"),
            EngineLine::Unrecognized
        );
        assert_eq!(EngineLine::classify("info currmove e2e4"), EngineLine::Unrecognized);
    }

    #[test]
    fn bestmove_is_a_move_decision() {
        assert_eq!(
            EngineLine::classify("bestmove e2e4 ponder e7e5"),
            EngineLine::MoveDecision
        );
        assert_eq!(EngineLine::classify("bestmove (none)"), EngineLine::MoveDecision);
    }

    #[test]
    fn handshake_chatter_is_inert() {
        assert_eq!(
            EngineLine::classify("Stockfish 16 by the Stockfish developers (see AUTHORS file)"),
            EngineLine::Unrecognized
        );
        assert_eq!(
            EngineLine::classify("option name Hash type spin default 16 min 1 max 33554432"),
            EngineLine::Unrecognized
        );
        assert_eq!(EngineLine::classify("uciok"), EngineLine::Unrecognized);
        assert_eq!(EngineLine::classify(""), EngineLine::Unrecognized);
    }
}
