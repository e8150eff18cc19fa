//! render-status - terminal dashboard for Render services.
//!
//! Responsibilities:
//! - Load `.env`, parse the command line and build a validated configuration.
//! - Install logging and the Ctrl+C handler.
//! - Run the refresh loop and translate its outcome into an exit code.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Table layout (see `display` and `snapshot`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing.
//! - Configuration errors are reported before any network call.
//! - Logs go to stderr; stdout carries only the tables.

mod args;
mod cancellation;
mod display;
mod error;
mod snapshot;
mod watch;

use std::time::Duration;

use anyhow::Context;
use args::Cli;
use cancellation::{CancellationToken, print_cancelled_message, print_stopped_message};
use clap::Parser;
use display::View;
use error::{ExitCode, ExitCodeExt, exit_code_for, hint_for};
use render_client::RenderClient;
use render_config::{ConfigLoader, constants::REFRESH_INTERVAL_SECS};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use watch::{Mode, Outcome};

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            report_error(&e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let mode = if cli.once {
        Mode::Once
    } else {
        Mode::Watch {
            interval: Duration::from_secs(REFRESH_INTERVAL_SECS),
        }
    };
    let view = View::new(cli.no_color);

    let result = watch::run(&client, mode, &view, &cancel, &mut std::io::stdout()).await;
    match &result {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Interrupted) if mode == Mode::Once => print_cancelled_message(),
        Ok(Outcome::Interrupted) => print_stopped_message(),
        Err(e) => report_error(e),
    }

    std::process::exit(exit_code_for(mode, &result).as_i32());
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {:#}", err);
    if let Some(hint) = hint_for(err) {
        eprintln!("{}", hint);
    }
}

fn build_client() -> anyhow::Result<RenderClient> {
    let config = ConfigLoader::new()
        .from_env()
        .and_then(ConfigLoader::build)
        .context("Failed to build configuration")?;

    RenderClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create API client")
}
