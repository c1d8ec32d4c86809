// JSON store adapter - Interval-set persistence
//
// The on-disk format is a UTF-8 JSON array of 2-element numeric arrays:
// [[start, end], ...], times in seconds.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::domain::model::{Interval, IntervalSet};
use crate::error::{ClipMarkError, ClipMarkResult};

/// Serialize the interval set and write it to `path`.
///
/// The write goes through a temp file in the target directory and is renamed
/// into place.
pub fn save_interval_file(set: &IntervalSet, path: &Path) -> ClipMarkResult<()> {
    let json = serde_json::to_string(set)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| ClipMarkError::IoError(e.error))?;

    info!(path = %path.display(), intervals = set.len(), "Saved interval file");
    Ok(())
}

/// Read and parse an interval file.
pub fn load_interval_file(path: &Path) -> ClipMarkResult<IntervalSet> {
    let bytes = fs::read(path)?;
    let set = parse_interval_json(&bytes)?;
    info!(path = %path.display(), intervals = set.len(), "Loaded interval file");
    Ok(set)
}

/// Parse interval JSON bytes.
///
/// The top level must be a JSON array; any other shape is rejected. Each
/// entry must be a 2-element array of numbers, rejected with its index
/// otherwise. On error the caller's in-memory set is left untouched.
pub fn parse_interval_json(bytes: &[u8]) -> ClipMarkResult<IntervalSet> {
    let value: Value = serde_json::from_slice(bytes)?;
    let entries = value.as_array().ok_or(ClipMarkError::IntervalFileNotArray)?;

    let mut intervals = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let pair = entry
            .as_array()
            .filter(|pair| pair.len() == 2)
            .ok_or(ClipMarkError::InvalidIntervalEntry { index })?;
        let start = pair[0]
            .as_f64()
            .ok_or(ClipMarkError::InvalidIntervalEntry { index })?;
        let end = pair[1]
            .as_f64()
            .ok_or(ClipMarkError::InvalidIntervalEntry { index })?;
        intervals.push(Interval::new(start, end));
    }

    Ok(IntervalSet::from_intervals(intervals))
}
