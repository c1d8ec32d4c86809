//! CLI module for ClipMark
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

pub mod args;
pub mod commands;

/// ClipMark CLI
///
/// A command-line tool for marking in/out points on a video and submitting
/// the resulting interval set to a clipping backend.
#[derive(Parser)]
#[command(name = "clipmark")]
#[command(about = "ClipMark - mark video intervals and send them for clipping")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Clipping backend base URL
    #[arg(long, env = "CLIPMARK_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Directory rendered clips are written into
    #[arg(long, env = "CLIPMARK_OUTPUT_DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Export request timeout in seconds
    #[arg(long, env = "CLIPMARK_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides carried by the global arguments
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend_url: self.backend_url.clone(),
            output_dir: self.output_dir.clone(),
            request_timeout_secs: self.timeout_secs,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive marking session
    Session(args::SessionArgs),
    /// Export a saved interval set as a rendered clip
    Export(args::ExportArgs),
    /// Inspect a saved interval set
    Inspect(args::InspectArgs),
    /// List video files under a directory
    List(args::ListArgs),
}
