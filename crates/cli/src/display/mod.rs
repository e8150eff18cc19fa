//! Terminal rendering for the status tables.
//!
//! Responsibilities:
//! - Detect terminal capabilities and decide whether to emit colors.
//! - Format timestamps, status tiers and padded tables as plain strings.
//!
//! Does NOT handle:
//! - Fetching data from the API (see `snapshot` module).
//! - Writing to the terminal or clearing it (see `watch` module).

pub mod status;
pub mod styles;
pub mod table;
pub mod timestamp;

use chrono_tz::Tz;
use console::Term;
use render_config::env_var_or_none;

pub use status::Tier;
pub use styles::Styles;
pub use table::{Cell, Table};

/// Rendering context shared by every cycle.
#[derive(Debug, Clone)]
pub struct View {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Zone timestamps are converted to.
    pub tz: Tz,
}

impl View {
    /// Create the view based on CLI flags, environment and terminal state.
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();

        let mut styles = Styles::default();
        if use_colors(no_color, is_tty, no_color_env()) {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            tz: timestamp::local_zone(),
        }
    }

    /// Plain view for a fixed zone; never clears the screen.
    #[cfg(test)]
    pub fn plain(tz: Tz) -> Self {
        Self {
            styles: Styles::default(),
            is_tty: false,
            tz,
        }
    }
}

/// Colors are emitted only on a TTY, and only when neither `--no-color`
/// nor `NO_COLOR` opted out.
pub fn use_colors(no_color_flag: bool, is_tty: bool, no_color_env: bool) -> bool {
    !no_color_flag && is_tty && !no_color_env
}

fn no_color_env() -> bool {
    env_var_or_none("NO_COLOR").is_some()
}
