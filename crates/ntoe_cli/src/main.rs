//! ntoe - command-line driver
//!
//! Thin wrapper over the `ntoe` library: suggest a move, show slot weights,
//! or let the computer play both sides.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = PlayConfig::load(&cli.board)?;
    debug!(?config, "Configuration resolved");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Suggest { board, player } => {
            play::suggest(&config, &board, player, &mut stdout)?;
        }
        Command::Weights { board, player } => {
            play::weights(&config, &board, player, &mut stdout)?;
        }
        Command::Selfplay { board, first } => {
            let outcome = play::selfplay(&config, board.as_deref(), first, &mut stdout)?;
            info!(%outcome, "Self-play complete");
        }
    }

    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` and quiet by default.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
