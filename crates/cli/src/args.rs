//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not read connection settings (see `render_config::ConfigLoader`).
//! - Does not run the refresh loop (see `watch` module).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "render-status")]
#[command(about = "Monitor Render services, deploys and cron jobs", long_about = None)]
#[command(version)]
#[command(
    after_help = "Environment:\n  RENDER_API_KEY   API key (required, may come from .env)\n  RENDER_BASE_URL  API base URL (default https://api.render.com/v1)\n  RENDER_TIMEOUT   Request timeout in seconds (default 30)\n  NO_COLOR         Disable colored output\n\nExamples:\n  render-status\n  render-status --once\n  render-status --once --no-color > status.txt\n"
)]
pub struct Cli {
    /// Run once and exit (no live updates)
    #[arg(long)]
    pub once: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
