//! Single-run and continuous refresh loop.
//!
//! Responsibilities:
//! - Run fetch-and-render cycles, once or every `interval`.
//! - Clear the terminal between cycles in continuous mode when stdout is a TTY.
//! - Stop promptly when the cancellation token fires, mid-sleep or mid-cycle.
//!
//! Does NOT handle:
//! - Installing the Ctrl+C handler or choosing the exit code (see `main`).
//!
//! Invariants:
//! - A cycle error ends the loop; there is no retry or backoff.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use render_client::RenderClient;
use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::display::View;
use crate::snapshot::{Snapshot, header_line};

/// How many cycles to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One cycle, then exit.
    Once,
    /// Repeat every `interval` until cancelled.
    Watch { interval: Duration },
}

impl Mode {
    fn is_watch(self) -> bool {
        matches!(self, Mode::Watch { .. })
    }
}

/// How the loop ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// Run the refresh loop, writing each frame to `out`.
pub async fn run<W: Write>(
    client: &RenderClient,
    mode: Mode,
    view: &View,
    cancel: &CancellationToken,
    out: &mut W,
) -> Result<Outcome> {
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        debug!(cycle, "Starting refresh cycle");

        let frame = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(Outcome::Interrupted),
            frame = render_cycle(client, mode, view) => frame?,
        };

        if mode.is_watch() && view.is_tty {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        out.write_all(frame.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write output")?;

        let Mode::Watch { interval } = mode else {
            return Ok(Outcome::Completed);
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(Outcome::Interrupted),
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

async fn render_cycle(client: &RenderClient, mode: Mode, view: &View) -> Result<String> {
    let snapshot = Snapshot::fetch(client, &view.tz).await?;
    let header = header_line(&view.tz, mode.is_watch());
    Ok(snapshot.render(&header, view))
}
