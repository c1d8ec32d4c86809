// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Time specification with precision - represents time in seconds with fractional precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpec {
    pub seconds: f64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Total seconds represented by this TimeSpec
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Parse a time string in seconds, MM:SS.ms, or HH:MM:SS.ms format
    pub fn parse(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();

        // Try parsing as seconds (float)
        if let Ok(seconds) = trimmed.parse::<f64>() {
            if seconds < 0.0 {
                return Err(DomainError::BadArgs("Time cannot be negative".to_string()));
            }
            if !seconds.is_finite() {
                return Err(DomainError::BadArgs("Time must be finite".to_string()));
            }
            return Ok(Self::from_seconds(seconds));
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() == 2 {
            // MM:SS.ms format
            let minutes = parts[0].parse::<u32>().map_err(|_| {
                DomainError::InvalidTimeFormat(format!("Invalid minutes in '{}'", trimmed))
            })?;
            let seconds_part = parts[1].parse::<f64>().map_err(|_| {
                DomainError::InvalidTimeFormat(format!("Invalid seconds in '{}'", trimmed))
            })?;

            if !(0.0..60.0).contains(&seconds_part) {
                return Err(DomainError::BadArgs(
                    "Seconds must be in the range 0-59".to_string(),
                ));
            }

            Ok(Self::from_seconds(minutes as f64 * 60.0 + seconds_part))
        } else if parts.len() == 3 {
            // HH:MM:SS.ms format
            let hours = parts[0].parse::<u32>().map_err(|_| {
                DomainError::InvalidTimeFormat(format!("Invalid hours in '{}'", trimmed))
            })?;
            let minutes = parts[1].parse::<u32>().map_err(|_| {
                DomainError::InvalidTimeFormat(format!("Invalid minutes in '{}'", trimmed))
            })?;
            let seconds_part = parts[2].parse::<f64>().map_err(|_| {
                DomainError::InvalidTimeFormat(format!("Invalid seconds in '{}'", trimmed))
            })?;

            if minutes >= 60 {
                return Err(DomainError::BadArgs(
                    "Minutes must be less than 60".to_string(),
                ));
            }
            if !(0.0..60.0).contains(&seconds_part) {
                return Err(DomainError::BadArgs(
                    "Seconds must be in the range 0-59".to_string(),
                ));
            }

            Ok(Self::from_seconds(
                hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds_part,
            ))
        } else {
            Err(DomainError::InvalidTimeFormat(
                "Supported formats: seconds (e.g. 123.45), MM:SS.ms (e.g. 2:30.5), HH:MM:SS.ms (e.g. 1:02:30.5)"
                    .to_string(),
            ))
        }
    }

    /// Format as HH:MM:SS.ms (hours omitted when zero)
    pub fn format_hms(&self) -> String {
        let total_ms = (self.seconds * 1000.0).round() as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let milliseconds = total_ms % 1000;

        if hours > 0 {
            format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
        } else {
            format!("{}:{:02}.{:03}", minutes, seconds, milliseconds)
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

/// A committed selection: an ordered (start, end) pair in media-relative seconds.
///
/// Persisted and transmitted as a 2-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "(f64, f64)", from = "(f64, f64)")]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Render as the wire token understood by the clipping backend
    pub fn to_token(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

/// Tracks the pending selection marks for the interval under construction.
///
/// The pending sequence holds at most two timestamps. A mark extends the
/// sequence only when there is room and it is strictly greater than the most
/// recent mark; any other mark silently restarts the selection from itself.
#[derive(Debug, Clone, Default)]
pub struct MarkTracker {
    marks: Vec<f64>,
}

impl MarkTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mark at `time` seconds.
    ///
    /// Never fails: out-of-order and surplus marks replace the pending
    /// sequence instead of raising an error.
    pub fn mark(&mut self, time: f64) {
        let extends = self.marks.len() < 2 && self.marks.last().map_or(true, |&last| time > last);
        if extends {
            self.marks.push(time);
        } else {
            self.marks.clear();
            self.marks.push(time);
        }
    }

    /// Take the pending pair as an interval, clearing the tracker.
    ///
    /// Returns `None` without touching state when fewer than two marks are
    /// pending.
    pub fn take_pair(&mut self) -> Option<Interval> {
        if self.marks.len() < 2 {
            return None;
        }
        let interval = Interval::new(self.marks[0], self.marks[1]);
        self.marks.clear();
        Some(interval)
    }

    /// The pending marks, oldest first
    pub fn pending(&self) -> &[f64] {
        &self.marks
    }

    /// Discard all pending marks
    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

/// Ordered collection of committed intervals.
///
/// Insertion order is meaningful for display and export; entries are neither
/// deduplicated nor merged and may overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-ordered intervals
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Append an interval at the end
    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Remove and return the interval at `index`.
    ///
    /// Out-of-range indices are a silent no-op (diagnostic log only); they
    /// should not occur from the command surface but must never crash.
    pub fn remove(&mut self, index: usize) -> Option<Interval> {
        if index < self.intervals.len() {
            Some(self.intervals.remove(index))
        } else {
            tracing::debug!(
                index,
                len = self.intervals.len(),
                "remove ignored: index out of range"
            );
            None
        }
    }

    /// Number of committed intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the set holds no intervals
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The interval at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    /// Iterate intervals in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Sum of interval lengths in seconds; `0.0` for an empty set
    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Render the comma-separated `start-end` token list for the backend
    pub fn to_tokens(&self) -> String {
        self.intervals
            .iter()
            .map(Interval::to_token)
            .collect::<Vec<_>>()
            .join(",")
    }
}
