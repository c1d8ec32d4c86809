//! ClipMark CLI Library
//!
//! A command-line tool for marking in/out points on a video and submitting
//! the resulting interval set to an external clipping backend.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ports;
pub mod session;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{Interval, IntervalSet, MarkTracker, TimeSpec};
pub use error::{ClipMarkError, ClipMarkResult};
