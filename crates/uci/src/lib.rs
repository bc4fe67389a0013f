//! Driver-side UCI (Universal Chess Interface) protocol support.
//!
//! This crate covers the half of the protocol a review driver needs: the
//! commands it writes to an engine's stdin and a classifier for the lines
//! the engine writes back. It deliberately does not model the engine side.
//!
//! # Outbound commands
//!
//! - `uci` - Start the protocol handshake
//! - `isready` - Ask the engine to synchronize
//! - `ucinewgame` - Reset engine state for a fresh game
//! - `setoption name <name> value <value>` - Configure the engine
//! - `position fen <fen>` - Load a position
//! - `go depth <d>` - Search to a fixed depth
//! - `quit` - Exit engine
//!
//! # Inbound lines
//!
//! Engine output is classified rather than fully parsed: a line either
//! signals readiness, carries a depth/score evaluation, announces a move
//! decision, or is inert. See [`EngineLine::classify`].

mod command;
mod line;

pub use command::GuiCommand;
pub use line::EngineLine;
