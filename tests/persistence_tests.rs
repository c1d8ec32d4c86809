//! Integration tests for interval-set persistence

use clipmark_cli::adapters::json_store;
use clipmark_cli::{ClipMarkError, Interval, IntervalSet};
use tempfile::TempDir;

fn sample_set() -> IntervalSet {
    IntervalSet::from_intervals(vec![Interval::new(0.5, 2.25), Interval::new(10.0, 12.0)])
}

// Round-tripping

#[test]
fn test_save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("intervals.json");

    let set = sample_set();
    json_store::save_interval_file(&set, &path).unwrap();
    let loaded = json_store::load_interval_file(&path).unwrap();

    assert_eq!(loaded, set);
}

#[test]
fn test_save_writes_json_array_of_pairs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("intervals.json");

    json_store::save_interval_file(&sample_set(), &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    assert_eq!(contents, "[[0.5,2.25],[10.0,12.0]]");
}

#[test]
fn test_save_empty_set() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("intervals.json");

    json_store::save_interval_file(&IntervalSet::new(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

// Rejection contract: the in-memory set is only ever replaced on success

#[test]
fn test_object_payload_is_rejected_and_set_kept() {
    let current = sample_set();

    let result = json_store::parse_interval_json(b"{}");
    assert!(matches!(result, Err(ClipMarkError::IntervalFileNotArray)));

    // Replacement only happens on Ok, so the working set is untouched
    assert_eq!(current, sample_set());
}

#[test]
fn test_primitive_payload_is_rejected() {
    assert!(matches!(
        json_store::parse_interval_json(b"\"intervals\""),
        Err(ClipMarkError::IntervalFileNotArray)
    ));
    assert!(matches!(
        json_store::parse_interval_json(b"null"),
        Err(ClipMarkError::IntervalFileNotArray)
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        json_store::parse_interval_json(b"[[0.5, 2.25"),
        Err(ClipMarkError::MalformedIntervalFile(_))
    ));
}

#[test]
fn test_entries_must_be_numeric_pairs() {
    let err = json_store::parse_interval_json(b"[[0.5, 2.25], [1, 2, 3]]").unwrap_err();
    assert!(matches!(
        err,
        ClipMarkError::InvalidIntervalEntry { index: 1 }
    ));

    let err = json_store::parse_interval_json(b"[{\"start\": 1}]").unwrap_err();
    assert!(matches!(
        err,
        ClipMarkError::InvalidIntervalEntry { index: 0 }
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = json_store::load_interval_file(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(ClipMarkError::IoError(_))));
}

#[test]
fn test_integer_pairs_load_as_floats() {
    let set = json_store::parse_interval_json(b"[[10, 12]]").unwrap();
    assert_eq!(set.get(0), Some(&Interval::new(10.0, 12.0)));
}
