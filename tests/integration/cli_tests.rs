//! Integration tests for the propgen CLI.
//!
//! Every test runs the binary in its own temporary working directory, so
//! the built-in default paths (`input.csv`, `output.properties`) never
//! touch shared state.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn propgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("propgen").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn read_output(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_no_args_uses_default_paths() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "a,1\nb,2\n").unwrap();

    propgen(&dir).assert().success();

    assert_eq!(read_output(&dir, "output.properties"), "a=1\nb=2\n");
}

#[test]
fn test_missing_default_source_fails() {
    let dir = TempDir::new().unwrap();

    propgen(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("input.csv"));
}

// ============================================================================
// Flag aliases
// ============================================================================

#[test]
fn test_csv_flag_aliases() {
    for alias in ["--csv", "-c", "-C", "--CSV"] {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.csv"), "k,v\n").unwrap();

        propgen(&dir).args([alias, "data.csv"]).assert().success();

        assert_eq!(read_output(&dir, "output.properties"), "k=v\n");
    }
}

#[test]
fn test_delimiter_flag_aliases() {
    for alias in ["--delimiter", "-d", "-D", "--DELIMITER"] {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("input.csv"), "k;v\n").unwrap();

        propgen(&dir).args([alias, ";"]).assert().success();

        assert_eq!(read_output(&dir, "output.properties"), "k=v\n");
    }
}

#[test]
fn test_output_flag_aliases() {
    for alias in ["--output", "-o", "-O", "--OUTPUT"] {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("input.csv"), "k,v\n").unwrap();

        propgen(&dir)
            .args([alias, "app.properties"])
            .assert()
            .success();

        assert_eq!(read_output(&dir, "app.properties"), "k=v\n");
    }
}

// ============================================================================
// Resolution behavior
// ============================================================================

#[test]
fn test_last_delimiter_wins() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "k|v\n").unwrap();

    propgen(&dir)
        .args(["--delimiter", ";", "--delimiter", "|"])
        .assert()
        .success();

    assert_eq!(read_output(&dir, "output.properties"), "k=v\n");
}

#[test]
fn test_trailing_flag_warns_and_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "k,v\n").unwrap();

    propgen(&dir)
        .arg("--csv")
        .assert()
        .success()
        .stderr(predicate::str::contains("no value provided for flag --csv"));

    assert_eq!(read_output(&dir, "output.properties"), "k=v\n");
}

#[test]
fn test_unrecognized_tokens_are_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("data.csv"), "k,v\n").unwrap();

    propgen(&dir)
        .args(["noise", "--csv", "data.csv", "--bogus", "trailing"])
        .assert()
        .success();

    assert_eq!(read_output(&dir, "output.properties"), "k=v\n");
}

// ============================================================================
// Conversion behavior
// ============================================================================

#[test]
fn test_malformed_rows_are_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("input.csv"),
        "a,1\nb,2\nmalformed\nc,3,extra\n",
    )
    .unwrap();

    propgen(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed line"));

    assert_eq!(read_output(&dir, "output.properties"), "a=1\nb=2\nc=3\n");
}

#[test]
fn test_duplicate_keys_keep_later_row() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "k,1\nk,2\n").unwrap();

    propgen(&dir).assert().success();

    assert_eq!(read_output(&dir, "output.properties"), "k=2\n");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "b,2\na,1\n").unwrap();

    propgen(&dir).assert().success();
    let first = std::fs::read(dir.path().join("output.properties")).unwrap();

    propgen(&dir).assert().success();
    let second = std::fs::read(dir.path().join("output.properties")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_all_flags_combined() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pairs.csv"), "host;localhost\nport;8080\n").unwrap();

    propgen(&dir)
        .args(["-c", "pairs.csv", "-d", ";", "-o", "server.properties"])
        .assert()
        .success();

    assert_eq!(
        read_output(&dir, "server.properties"),
        "host=localhost\nport=8080\n"
    );
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_nonexistent_source_fails_nonzero() {
    let dir = TempDir::new().unwrap();

    propgen(&dir)
        .args(["--csv", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.csv"));
}

#[test]
fn test_unwritable_destination_fails_nonzero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.csv"), "k,v\n").unwrap();

    propgen(&dir)
        .args(["--output", "missing-dir/out.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}
