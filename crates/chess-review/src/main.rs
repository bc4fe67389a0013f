//! Chess Review - judges every move of a finished game.
//!
//! Replays the game through a UCI engine at a fixed search depth, converts
//! the evaluations into winning chances, and prints per-move judgements
//! for both sides.

use std::path::PathBuf;

use anyhow::Context;
use chess_review::config::ReviewConfig;
use chess_review::session::review_game;
use clap::Parser;
use review_core::{Color, GameRecord, GameReport};

/// Reviews a chess game with a UCI engine.
#[derive(Parser)]
#[command(name = "chess-review")]
#[command(about = "Reviews a chess game with a UCI engine")]
struct Args {
    /// The game's moves in standard algebraic notation, whitespace separated
    #[arg(long, conflicts_with = "moves_file")]
    moves: Option<String>,

    /// File containing the moves, whitespace separated
    #[arg(long)]
    moves_file: Option<PathBuf>,

    /// Name of the player with the white pieces
    #[arg(long)]
    white: Option<String>,

    /// Name of the player with the black pieces
    #[arg(long)]
    black: Option<String>,

    /// Engine executable, overriding the configuration file
    #[arg(long)]
    engine: Option<String>,

    /// Search depth, overriding the configuration file
    #[arg(long)]
    depth: Option<u32>,

    /// Path to the configuration file
    #[arg(long, default_value = "review.toml")]
    config: PathBuf,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = ReviewConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(engine) = args.engine {
        config.engine_path = engine;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }

    let moves_text = match (args.moves, args.moves_file) {
        (Some(moves), _) => moves,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => anyhow::bail!("provide the game with --moves or --moves-file"),
    };
    let record = GameRecord::from_moves_text(&moves_text, args.white, args.black);

    tracing::info!(
        "Reviewing {} moves with {}",
        record.len(),
        config.engine_path
    );
    let report = review_game(record, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &GameReport) {
    print_side(report, Color::White);
    print_side(report, Color::Black);
    println!();
    println!("Advantage after each move:");
    for (i, advantage) in report.advantages.iter().enumerate() {
        println!("{:>4}. {:.2}", i + 1, advantage);
    }
}

fn print_side(report: &GameReport, side: Color) {
    let name = match side {
        Color::White => report.white_player.as_deref(),
        Color::Black => report.black_player.as_deref(),
    };
    match name {
        Some(name) => println!("{} ({})", side, name),
        None => println!("{}", side),
    }
    let counts = report.counts(side);
    println!("  Inaccuracies: {}", counts.inaccuracies);
    println!("  Mistakes:     {}", counts.mistakes);
    println!("  Blunders:     {}", counts.blunders);
}
