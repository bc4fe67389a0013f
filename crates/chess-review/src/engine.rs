//! Engine process management.
//!
//! Spawns a UCI engine as a child process and bridges its stdin and stdout
//! to channels. The rest of the driver only ever sees the channel ends, so
//! tests can substitute a scripted engine for a live one.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use uci::GuiCommand;

use crate::error::ReviewError;

/// How long a quitting engine gets before it is killed.
const EXIT_GRACE: Duration = Duration::from_secs(2);

/// Channel ends the driver talks to an engine through.
pub struct EngineLink {
    commands: mpsc::UnboundedSender<String>,
    lines: mpsc::UnboundedReceiver<String>,
}

impl EngineLink {
    /// Builds a link over raw channel ends.
    pub fn new(
        commands: mpsc::UnboundedSender<String>,
        lines: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        EngineLink { commands, lines }
    }

    /// Queues one command for the engine's stdin.
    pub fn send(&self, command: GuiCommand) -> Result<(), ReviewError> {
        let rendered = command.to_uci();
        tracing::trace!(command = %rendered, "Sending engine command");
        self.commands
            .send(rendered)
            .map_err(|_| ReviewError::Protocol("Engine command channel closed".to_string()))
    }

    /// Next line of engine output, or `None` once the engine closes its
    /// output stream.
    pub async fn recv(&mut self) -> Option<String> {
        self.lines.recv().await
    }
}

/// A running engine process.
pub struct EngineProcess {
    child: Child,
}

impl EngineProcess {
    /// Spawns the engine executable and wires its pipes to an [`EngineLink`].
    ///
    /// One task forwards queued commands to the child's stdin, another
    /// forwards stdout lines back. Both stop on their own when either side
    /// of the conversation goes away. The child is killed if the process
    /// handle is dropped while it is still running.
    pub fn spawn(program: &str) -> Result<(Self, EngineLink), ReviewError> {
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ReviewError::Protocol("Engine stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ReviewError::Protocol("Engine stdout unavailable".to_string()))?;

        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<String>();
        let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            while let Some(command) = command_rx.recv().await {
                if stdin.write_all(command.as_bytes()).await.is_err() {
                    break;
                }
                if stdin.write_all(b"\n").await.is_err() {
                    break;
                }
                if stdin.flush().await.is_err() {
                    break;
                }
            }
        });

        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        });

        Ok((EngineProcess { child }, EngineLink::new(command_tx, line_rx)))
    }

    /// Waits for the engine to exit after `quit`, killing it if the grace
    /// period runs out.
    pub async fn shutdown(mut self) {
        match tokio::time::timeout(EXIT_GRACE, self.child.wait()).await {
            Ok(Ok(status)) => tracing::debug!(%status, "Engine exited"),
            Ok(Err(err)) => tracing::warn!(%err, "Could not observe engine exit"),
            Err(_) => {
                tracing::warn!("Engine still running after quit, killing it");
                let _ = self.child.kill().await;
            }
        }
    }
}
