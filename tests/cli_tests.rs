//! Binary-level tests for the clipmark CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clipmark() -> Command {
    Command::cargo_bin("clipmark").unwrap()
}

// Argument surface

#[test]
fn test_help_lists_subcommands() {
    clipmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_export_requires_input_arguments() {
    clipmark().arg("export").assert().failure();
}

// Inspect

#[test]
fn test_inspect_prints_intervals_and_total() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("marks.json");
    std::fs::write(&path, "[[1, 2], [3, 5]]").unwrap();

    clipmark()
        .arg("inspect")
        .arg("--intervals")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Interval 1: 1.000s - 2.000s"))
        .stdout(predicate::str::contains("Interval 2: 3.000s - 5.000s"))
        .stdout(predicate::str::contains("Total duration: 3.000s over 2 interval(s)"));
}

#[test]
fn test_inspect_json_output_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("marks.json");
    std::fs::write(&path, "[[0.5, 2.25]]").unwrap();

    clipmark()
        .arg("inspect")
        .arg("--intervals")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5"))
        .stdout(predicate::str::contains("2.25"));
}

#[test]
fn test_inspect_rejects_non_array_payload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("marks.json");
    std::fs::write(&path, "{}").unwrap();

    clipmark()
        .arg("inspect")
        .arg("--intervals")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("top-level JSON array"));
}

// Export preconditions (no backend is running in these tests)

#[test]
fn test_export_missing_intervals_file_fails_before_any_request() {
    let temp_dir = TempDir::new().unwrap();

    clipmark()
        .arg("export")
        .arg("--in")
        .arg(temp_dir.path().join("video.mp4"))
        .arg("--intervals")
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_export_missing_media_fails_before_any_request() {
    let temp_dir = TempDir::new().unwrap();
    let intervals = temp_dir.path().join("marks.json");
    std::fs::write(&intervals, "[[1, 2]]").unwrap();

    clipmark()
        .arg("export")
        .arg("--in")
        .arg(temp_dir.path().join("absent.mp4"))
        .arg("--intervals")
        .arg(&intervals)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

// Interactive session over piped stdin

#[test]
fn test_session_marks_commits_and_shows() {
    clipmark()
        .arg("session")
        .write_stdin("x 1\nx 2\nc\nx 3\nx 5\nc\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interval 1: 1.000s - 2.000s"))
        .stdout(predicate::str::contains("Interval 2: 3.000s - 5.000s"))
        .stdout(predicate::str::contains("Total duration: 3.000s over 2 interval(s)"));
}

#[test]
fn test_session_out_of_order_mark_restarts_selection() {
    clipmark()
        .arg("session")
        .write_stdin("x 5\nx 3\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("marked 3.000s (1 pending)"));
}

#[test]
fn test_session_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("marks.json");
    let script = format!(
        "x 0.5\nx 2.25\nc\nsave {p}\nrm 1\nload {p}\nshow\nquit\n",
        p = path.display()
    );

    clipmark()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("saved 1 interval(s)"))
        .stdout(predicate::str::contains("loaded 1 interval(s)"))
        .stdout(predicate::str::contains("Interval 1: 0.500s - 2.250s"));
}

#[test]
fn test_session_load_rejection_keeps_intervals() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    std::fs::write(&path, "{}").unwrap();
    let script = format!("x 1\nx 2\nc\nload {}\nshow\nquit\n", path.display());

    clipmark()
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("top-level JSON array"))
        .stdout(predicate::str::contains("Interval 1: 1.000s - 2.000s"));
}

#[test]
fn test_session_export_without_media_prints_notice() {
    clipmark()
        .arg("session")
        .write_stdin("x 1\nx 2\nc\nexport\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No media file loaded"));
}

// Media listing

#[test]
fn test_list_finds_video_files_only() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("a.mp4"), b"x").unwrap();
    std::fs::write(temp_dir.path().join("b.txt"), b"x").unwrap();

    clipmark()
        .arg("list")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mp4"))
        .stdout(predicate::str::contains("b.txt").not());
}

#[test]
fn test_list_missing_directory_fails() {
    clipmark()
        .arg("list")
        .arg("no_such_directory_here")
        .assert()
        .failure();
}
