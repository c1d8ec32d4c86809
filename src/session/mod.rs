// Interactive editing session - marking, committing, and exporting intervals
//
// The session is the single source of truth for editing state; commands read
// and mutate it directly, with no mirrored copies.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::adapters::json_store;
use crate::adapters::HttpClipService;
use crate::app::ExportInteractor;
use crate::config::AppConfig;
use crate::domain::model::{Interval, IntervalSet, MarkTracker, TimeSpec};
use crate::error::ClipMarkResult;
use crate::media;

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Mark at an explicit time, or at the playhead when `None`
    Mark(Option<TimeSpec>),
    /// Commit the pending pair as an interval
    Commit,
    /// Move the playhead
    Seek(TimeSpec),
    /// Remove the interval with the given displayed (1-based) number
    Remove(usize),
    /// Print marks, intervals, and totals
    Show,
    /// Save intervals to a JSON file
    Save(Option<PathBuf>),
    /// Load intervals from a JSON file
    Load(PathBuf),
    /// Switch the media file
    Open(PathBuf),
    /// Attach or replace the audio overlay
    Audio(PathBuf),
    /// Submit to the clipping backend
    Export,
    /// Print command help
    Help,
    /// Leave the session
    Quit,
}

impl SessionCommand {
    /// Parse one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        let require_arg = |what: &str| -> Result<&str, String> {
            if rest.is_empty() {
                Err(format!("'{}' needs {}", keyword, what))
            } else {
                Ok(rest)
            }
        };

        let command = match keyword {
            "x" | "mark" => {
                if rest.is_empty() {
                    SessionCommand::Mark(None)
                } else {
                    SessionCommand::Mark(Some(TimeSpec::parse(rest).map_err(|e| e.to_string())?))
                }
            }
            "c" | "commit" => SessionCommand::Commit,
            "seek" => {
                let time = TimeSpec::parse(require_arg("a time")?).map_err(|e| e.to_string())?;
                SessionCommand::Seek(time)
            }
            "rm" | "remove" => {
                let number = require_arg("an interval number")?
                    .parse::<usize>()
                    .map_err(|_| "Interval number must be a positive integer".to_string())?;
                SessionCommand::Remove(number)
            }
            "show" | "list" | "ls" => SessionCommand::Show,
            "save" => SessionCommand::Save(if rest.is_empty() {
                None
            } else {
                Some(PathBuf::from(rest))
            }),
            "load" => SessionCommand::Load(PathBuf::from(require_arg("a file path")?)),
            "open" => SessionCommand::Open(PathBuf::from(require_arg("a file path")?)),
            "audio" => SessionCommand::Audio(PathBuf::from(require_arg("a file path")?)),
            "export" => SessionCommand::Export,
            "help" | "?" => SessionCommand::Help,
            "q" | "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("Unknown command '{}'; try 'help'", other)),
        };
        Ok(Some(command))
    }
}

/// Editing state for one marking session
#[derive(Debug, Default)]
pub struct EditSession {
    media: Option<PathBuf>,
    audio: Option<PathBuf>,
    playhead: f64,
    tracker: MarkTracker,
    intervals: IntervalSet,
}

impl EditSession {
    /// Create a session, optionally pre-loaded with media and audio files
    pub fn new(media: Option<PathBuf>, audio: Option<PathBuf>) -> Self {
        Self {
            media,
            audio,
            ..Self::default()
        }
    }

    /// Mark at the given time, or at the playhead when `None`.
    ///
    /// The playhead follows the mark. Returns the marked time.
    pub fn mark(&mut self, time: Option<TimeSpec>) -> f64 {
        let time = time.map(|t| t.as_seconds()).unwrap_or(self.playhead);
        self.playhead = time;
        self.tracker.mark(time);
        time
    }

    /// Commit the pending pair as an interval.
    ///
    /// With fewer than two pending marks this is a silent no-op (diagnostic
    /// log only), matching the marking contract.
    pub fn commit(&mut self) -> Option<Interval> {
        match self.tracker.take_pair() {
            Some(interval) => {
                self.intervals.push(interval);
                Some(interval)
            }
            None => {
                debug!("commit ignored: fewer than two pending marks");
                None
            }
        }
    }

    /// Move the playhead
    pub fn seek(&mut self, time: TimeSpec) {
        self.playhead = time.as_seconds();
    }

    /// Remove by displayed (1-based) number; out of range is a silent no-op.
    pub fn remove(&mut self, number: usize) -> Option<Interval> {
        match number.checked_sub(1) {
            Some(index) => self.intervals.remove(index),
            None => {
                debug!("remove ignored: interval numbering starts at 1");
                None
            }
        }
    }

    /// Replace the interval set (after a successful load)
    pub fn replace_intervals(&mut self, intervals: IntervalSet) {
        self.intervals = intervals;
    }

    /// Switch the media file
    pub fn set_media(&mut self, path: PathBuf) {
        self.media = Some(path);
    }

    /// Attach or replace the audio overlay
    pub fn set_audio(&mut self, path: PathBuf) {
        self.audio = Some(path);
    }

    pub fn media(&self) -> Option<&Path> {
        self.media.as_deref()
    }

    pub fn audio(&self) -> Option<&Path> {
        self.audio.as_deref()
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Pending marks, oldest first
    pub fn pending(&self) -> &[f64] {
        self.tracker.pending()
    }

    /// Committed intervals
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }
}

/// Run the interactive session until `quit` or end of input.
pub fn run(
    config: &AppConfig,
    media: Option<PathBuf>,
    audio: Option<PathBuf>,
    intervals_file: Option<PathBuf>,
) -> ClipMarkResult<()> {
    let mut session = EditSession::new(media, audio);
    if let Some(path) = intervals_file {
        session.replace_intervals(json_store::load_interval_file(&path)?);
    }

    let clip_service = Arc::new(HttpClipService::new(config));
    let interactor = ExportInteractor::new(clip_service, config.output_dir.clone());
    let runtime = tokio::runtime::Runtime::new()?;

    match session.media() {
        Some(path) => println!("Media: {}", path.display()),
        None => println!("No media loaded; use 'open FILE' before exporting"),
    }
    println!("Type 'help' for commands");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        debug!(input = line.trim(), "Session input");

        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => dispatch(&mut session, &interactor, &runtime, command),
            Err(notice) => println!("error: {}", notice),
        }
    }

    info!(
        intervals = session.intervals().len(),
        "Session finished"
    );
    Ok(())
}

/// Apply one command to the session, printing user-facing feedback.
///
/// Errors of every kind are surfaced as notices and the session continues.
fn dispatch(
    session: &mut EditSession,
    interactor: &ExportInteractor,
    runtime: &tokio::runtime::Runtime,
    command: SessionCommand,
) {
    match command {
        SessionCommand::Mark(time) => {
            let marked = session.mark(time);
            println!(
                "marked {:.3}s ({} pending)",
                marked,
                session.pending().len()
            );
        }
        SessionCommand::Commit => {
            if let Some(interval) = session.commit() {
                println!(
                    "Interval {}: {:.3}s - {:.3}s ({:.3}s)",
                    session.intervals().len(),
                    interval.start,
                    interval.end,
                    interval.duration()
                );
            }
        }
        SessionCommand::Seek(time) => {
            session.seek(time);
            println!("playhead at {:.3}s", session.playhead());
        }
        SessionCommand::Remove(number) => {
            if let Some(interval) = session.remove(number) {
                println!(
                    "removed interval {} ({:.3}s - {:.3}s)",
                    number, interval.start, interval.end
                );
            }
        }
        SessionCommand::Show => print_state(session),
        SessionCommand::Save(path) => {
            let path = path.unwrap_or_else(default_save_path);
            match json_store::save_interval_file(session.intervals(), &path) {
                Ok(()) => println!(
                    "saved {} interval(s) to {}",
                    session.intervals().len(),
                    path.display()
                ),
                Err(e) => println!("error: {}", e),
            }
        }
        SessionCommand::Load(path) => match json_store::load_interval_file(&path) {
            Ok(set) => {
                println!("loaded {} interval(s) from {}", set.len(), path.display());
                session.replace_intervals(set);
            }
            Err(e) => println!("error: {}", e),
        },
        SessionCommand::Open(path) => {
            if media::require_file(&path).is_ok() {
                println!("Media: {}", path.display());
                session.set_media(path);
            } else {
                println!("error: no such file: {}", path.display());
            }
        }
        SessionCommand::Audio(path) => {
            if media::require_file(&path).is_ok() {
                if !media::is_audio_file(&path) {
                    debug!(path = %path.display(), "audio overlay has an unrecognized extension");
                }
                println!("Audio: {}", path.display());
                session.set_audio(path);
            } else {
                println!("error: no such file: {}", path.display());
            }
        }
        SessionCommand::Export => {
            let result = runtime.block_on(interactor.export(
                session.media(),
                session.audio(),
                session.intervals(),
            ));
            match result {
                Ok(output) => println!("Clip written to {}", output.display()),
                Err(e) => println!("error: {}", e),
            }
        }
        SessionCommand::Help => print_help(),
        // Quit is consumed by the run loop
        SessionCommand::Quit => {}
    }
}

fn print_state(session: &EditSession) {
    match session.media() {
        Some(path) => println!("Media: {}", path.display()),
        None => println!("Media: none"),
    }
    if let Some(path) = session.audio() {
        println!("Audio: {}", path.display());
    }
    println!("Playhead: {:.3}s", session.playhead());

    if session.pending().is_empty() {
        println!("Current marks: none");
    } else {
        println!("Current marks:");
        for mark in session.pending() {
            println!("  {:.3}s", mark);
        }
    }

    if session.intervals().is_empty() {
        println!("Intervals: none");
    } else {
        for (index, interval) in session.intervals().iter().enumerate() {
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
            session.intervals().total_duration(),
            session.intervals().len()
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  x, mark [TIME]   mark at TIME (or the playhead); two increasing marks form a pair");
    println!("  c, commit        commit the pending pair as an interval");
    println!("  seek TIME        move the playhead");
    println!("  show, list       show pending marks and committed intervals");
    println!("  rm, remove N     remove interval N (as displayed)");
    println!("  save [FILE]      save intervals as a JSON array of [start, end] pairs");
    println!("  load FILE        load intervals from a JSON file");
    println!("  open FILE        switch the media file");
    println!("  audio FILE       attach or replace the audio overlay");
    println!("  export           submit to the clipping backend and download the clip");
    println!("  help             show this help");
    println!("  quit             leave the session");
    println!("TIME formats: seconds (90.5), MM:SS.ms (1:30.5), HH:MM:SS.ms (0:01:30.5)");
}

fn default_save_path() -> PathBuf {
    PathBuf::from(format!(
        "intervals_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ))
}
