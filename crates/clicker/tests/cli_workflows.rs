//! End-to-end tests for the clicker binary
//!
//! Each test runs the real binary in its own process, so the process-wide
//! debounce timestamp starts fresh every time.

#[macro_use]
mod common;

use anyhow::Result;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn replay_default_interval_scenario() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "replay", "short@0,short@200,short@350,short@649,short@650")
        .assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 350, 650]);
    assert_eq!(result.suppressed_taps(), vec![200, 649]);
    assert!(result.stdout.contains("This is a short Toast"));
    assert!(result.stdout.contains("3 shown, 2 suppressed"));
    Ok(())
}

#[test]
fn replay_long_button_is_unguarded_by_default() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "replay", "long@0 long@10 long@20").assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 10, 20]);
    assert!(result.stdout.contains("This is a long Toast"));
    Ok(())
}

#[test]
fn replay_process_scope_suppresses_across_buttons() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "--guard-long", "replay", "short@0,long@100,long@300")
        .assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 300]);
    assert_eq!(result.suppressed_taps(), vec![100]);
    Ok(())
}

#[test]
fn replay_per_target_scope_keeps_buttons_apart() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(
        home.path(),
        "--guard-long",
        "--scope",
        "per-target",
        "replay",
        "short@0,long@100,short@150"
    )
    .assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 100]);
    assert_eq!(result.suppressed_taps(), vec![150]);
    Ok(())
}

#[test]
fn replay_honours_interval_and_messages() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(
        home.path(),
        "--interval-ms",
        "50",
        "--short-message",
        "Hello there",
        "replay",
        "short@0,short@49,short@50"
    )
    .assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 50]);
    assert!(result.stdout.contains("Hello there"));
    Ok(())
}

#[test]
fn replay_reads_config_file() -> Result<()> {
    let home = TempDir::new()?;
    let config_path = home.path().join("custom.toml");
    let mut file = std::fs::File::create(&config_path)?;
    writeln!(file, "[debounce]\ninterval_ms = 1000")?;
    writeln!(file, "[toast]\nshort_message = \"From file\"")?;
    writeln!(file, "[platform]\napi_level = 28")?;

    let path = config_path.display().to_string();
    let result = clicker!(home.path(), "--config", &path, "replay", "short@0,short@999,short@1000")
        .assert_success()?;

    assert_eq!(result.shown_taps(), vec![0, 1000]);
    assert!(result.stdout.contains("From file"));
    assert!(result.stdout.contains("API 28"));
    Ok(())
}

#[test]
fn guard_long_flag_overrides_config_both_ways() -> Result<()> {
    let home = TempDir::new()?;
    let config_path = home.path().join("guarded.toml");
    let mut file = std::fs::File::create(&config_path)?;
    writeln!(file, "[debounce]\nguard_long_button = true")?;
    let path = config_path.display().to_string();

    let guarded = clicker!(home.path(), "--config", &path, "replay", "long@0,long@100")
        .assert_success()?;
    assert_eq!(guarded.shown_taps(), vec![0]);
    assert_eq!(guarded.suppressed_taps(), vec![100]);

    let unguarded = clicker!(
        home.path(),
        "--config",
        &path,
        "--guard-long=false",
        "replay",
        "long@0,long@100"
    )
    .assert_success()?;
    assert_eq!(unguarded.shown_taps(), vec![0, 100]);
    Ok(())
}

#[test]
fn replay_rejects_bad_script() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "replay", "short@10,long@5").assert_failure()?;
    assert!(result.stderr.contains("Invalid tap script"));

    let result = clicker!(home.path(), "replay", "sideways@0").assert_failure()?;
    assert!(result.stderr.contains("unknown button"));
    Ok(())
}

#[test]
fn invalid_config_is_rejected() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "--interval-ms", "70000", "replay", "short@0")
        .assert_failure()?;
    assert!(result.stderr.contains("Invalid configuration"));
    Ok(())
}

#[test]
fn config_example_and_show() -> Result<()> {
    let home = TempDir::new()?;

    let example = clicker!(home.path(), "config", "--example").assert_success()?;
    assert!(example.stdout.contains("[debounce]"));
    assert!(example.stdout.contains("interval_ms = 300"));

    let shown = clicker!(home.path(), "--scope", "per-target", "config").assert_success()?;
    assert!(shown.stdout.contains("per-target"));
    assert!(shown.stdout.contains("This is a short Toast"));
    Ok(())
}

#[test]
fn interactive_taps_from_stdin() -> Result<()> {
    let home = TempDir::new()?;
    let result = clicker!(home.path(), "interactive")
        .stdin("s\nl\nwhat\nq\nl\n")
        .assert_success()?;

    assert_eq!(result.stdout.matches("This is a short Toast").count(), 1);
    // The second "l" comes after "q" and is never read.
    assert_eq!(result.stdout.matches("This is a long Toast").count(), 1);
    assert!(result.stderr.contains("unknown input 'what'"));
    Ok(())
}
