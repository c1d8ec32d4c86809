//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the session command
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Media file to mark
    #[arg(short = 'i', long = "in")]
    pub input: Option<PathBuf>,

    /// Audio overlay file
    #[arg(short, long)]
    pub audio: Option<PathBuf>,

    /// Interval file to start from
    #[arg(long)]
    pub intervals: Option<PathBuf>,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Media file to clip
    #[arg(short = 'i', long = "in")]
    pub input: PathBuf,

    /// Interval file to submit
    #[arg(long)]
    pub intervals: PathBuf,

    /// Audio overlay file
    #[arg(short, long)]
    pub audio: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Interval file to inspect
    #[arg(long)]
    pub intervals: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to search for video files
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}
