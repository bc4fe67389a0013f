//! Outbound UCI command formatting.

use std::fmt;

/// Commands the driver sends to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiCommand {
    /// Start the UCI handshake.
    Uci,
    /// Ask the engine to synchronize.
    IsReady,
    /// Reset engine state for a fresh game.
    NewGame,
    /// Set a named engine option.
    SetOption { name: String, value: String },
    /// Load a full position from FEN.
    PositionFen(String),
    /// Search the current position to a fixed depth.
    GoDepth(u32),
    /// Quit the engine.
    Quit,
}

impl GuiCommand {
    /// The `setoption` that switches an engine into analysis mode.
    pub fn analyse_mode() -> Self {
        GuiCommand::SetOption {
            name: "UCI_AnalyseMode".to_string(),
            value: "true".to_string(),
        }
    }

    /// Render the command as one protocol line, without the newline.
    pub fn to_uci(&self) -> String {
        match self {
            GuiCommand::Uci => "uci".to_string(),
            GuiCommand::IsReady => "isready".to_string(),
            GuiCommand::NewGame => "ucinewgame".to_string(),
            GuiCommand::SetOption { name, value } => {
                format!("setoption name {} value {}", name, value)
            }
            GuiCommand::PositionFen(fen) => format!("position fen {}", fen),
            GuiCommand::GoDepth(depth) => format!("go depth {}", depth),
            GuiCommand::Quit => "quit".to_string(),
        }
    }
}

impl fmt::Display for GuiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}
