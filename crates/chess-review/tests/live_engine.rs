//! Reviews against a real Stockfish binary.
//!
//! These tests require Stockfish to be installed and available in PATH.
//! Run with: `cargo test -p chess-review --test live_engine -- --ignored`

use chess_review::config::ReviewConfig;
use chess_review::session::review_game;
use review_core::{GameRecord, Judgement};

/// Check if Stockfish is available in PATH.
fn stockfish_available() -> bool {
    std::process::Command::new("stockfish")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok()
}

#[tokio::test]
#[ignore = "requires Stockfish"]
async fn reviews_a_short_game_with_stockfish() {
    if !stockfish_available() {
        eprintln!("Skipping test: Stockfish not available");
        return;
    }

    let config = ReviewConfig {
        engine_path: "stockfish".to_string(),
        depth: 10,
        response_timeout_ms: 30_000,
    };
    let record = GameRecord::from_moves_text("e4 e5 Nf3 Nc6", None, None);
    let report = review_game(record, &config).await.expect("review failed");

    // A live engine may report the target depth more than once per search,
    // so only the shape of the result is checked here.
    assert!(!report.advantages.is_empty());
    assert!(report.advantages.iter().all(|a| a.abs() < 1.0));
    assert_eq!(report.white_judgements.first(), Some(&Judgement::None));
    assert_eq!(report.black_judgements.first(), Some(&Judgement::None));
}
