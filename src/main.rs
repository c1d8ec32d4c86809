//! ClipMark CLI
//!
//! A command-line tool for marking in/out points on a video and submitting
//! the resulting time intervals to an external backend for clipping.
//!
//! # Features
//!
//! - Interactive marking session with the `x` (mark) / `c` (commit) shortcuts
//! - Silent-reset mark tracking: two increasing marks form a pending pair
//! - Interval persistence as a JSON array of [start, end] pairs
//! - Multipart export to a clipping backend, with optional audio overlay
//!
//! # Usage
//!
//! ```bash
//! clipmark session --in video.mp4
//! clipmark export --in video.mp4 --intervals marks.json
//! clipmark inspect --intervals marks.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clipmark_cli::cli::{commands, Cli, Commands};

/// Main entry point for the ClipMark CLI application
fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute the requested command
    match &cli.command {
        Commands::Session(args) => {
            info!("Executing session command");
            commands::execute_session(&cli, args)?;
        }
        Commands::Export(args) => {
            info!("Executing export command");
            commands::execute_export(&cli, args)?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::execute_inspect(args)?;
        }
        Commands::List(args) => {
            info!("Executing list command");
            commands::execute_list(args)?;
        }
    }

    Ok(())
}
