//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a lightweight cancellation token that the Ctrl+C task flips and
//!   the refresh loop awaits.
//! - Centralize the messages printed when the user interrupts the program.
//!
//! Does NOT handle:
//! - This module does not install signal handlers by itself.
//! - This module does not decide *when* to check for cancellation; callers must do so.
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Print the message shown when continuous mode is stopped with Ctrl+C.
pub fn print_stopped_message() {
    eprintln!("\nStopped");
}

/// Print the message shown when a single run is interrupted.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
