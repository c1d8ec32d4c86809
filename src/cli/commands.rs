//! Command execution

use std::sync::Arc;

use anyhow::Result;

use crate::adapters::{json_store, HttpClipService};
use crate::app::ExportInteractor;
use crate::config::AppConfig;
use crate::media;
use crate::session;

use super::args::{ExportArgs, InspectArgs, ListArgs, SessionArgs};
use super::Cli;

/// Run the interactive marking session
pub fn execute_session(cli: &Cli, args: &SessionArgs) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref(), &cli.overrides())?;
    session::run(
        &config,
        args.input.clone(),
        args.audio.clone(),
        args.intervals.clone(),
    )?;
    Ok(())
}

/// One-shot export of a saved interval set
pub fn execute_export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref(), &cli.overrides())?;
    let intervals = json_store::load_interval_file(&args.intervals)?;

    let clip_service = Arc::new(HttpClipService::new(&config));
    let interactor = ExportInteractor::new(clip_service, config.output_dir.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    let output = runtime.block_on(interactor.export(
        Some(args.input.as_path()),
        args.audio.as_deref(),
        &intervals,
    ))?;

    println!("Clip written to {}", output.display());
    Ok(())
}

/// Print a saved interval set
pub fn execute_inspect(args: &InspectArgs) -> Result<()> {
    let intervals = json_store::load_interval_file(&args.intervals)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&intervals)?);
        return Ok(());
    }

    for (index, interval) in intervals.iter().enumerate() {
        println!(
            "Interval {}: {:.3}s - {:.3}s ({:.3}s)",
            index + 1,
            interval.start,
            interval.end,
            interval.duration()
        );
    }
    println!(
        "Total duration: {:.3}s over {} interval(s)",
        intervals.total_duration(),
        intervals.len()
    );
    Ok(())
}

/// List video files under a directory
pub fn execute_list(args: &ListArgs) -> Result<()> {
    let files = media::find_media_files(&args.dir)?;

    if files.is_empty() {
        println!("No video files found under {}", args.dir.display());
        return Ok(());
    }
    for file in &files {
        println!("{}", file.display());
    }
    Ok(())
}
