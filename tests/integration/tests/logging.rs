//! `setup_logging` against a real filesystem.

use chrono::Utc;
use relay_minifier::logging::{compute_rolled_file_path, setup_logging};
use serial_test::serial;
use std::{env, fs};
use tempfile::tempdir;

fn clear_log_env() {
    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_DATA_DIR");
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[test]
#[serial]
fn test_file_mode_creates_dated_log_file() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("nested").join("logs");
    let log_dir = log_dir.to_str().unwrap();

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", log_dir);

    setup_logging();

    let expected = compute_rolled_file_path(log_dir, &today());
    assert!(expected.is_file(), "missing {}", expected.display());
    assert!(expected
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("relay-minifier-"));

    clear_log_env();
}

#[test]
#[serial]
fn test_unwritable_log_dir_falls_back_without_panicking() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();
    let log_dir = blocker.join("logs");
    let log_dir = log_dir.to_str().unwrap();

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_DATA_DIR", log_dir);

    setup_logging();

    assert!(!compute_rolled_file_path(log_dir, &today()).exists());
    assert!(blocker.is_file());

    clear_log_env();
}
