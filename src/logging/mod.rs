//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_LOG_LEVEL, DEFAULT_LOG_MODE, LOG_FILE_NAME};

/// Parses a textual log level, defaulting to `Info` for anything unknown.
pub fn parse_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Builds the dated log file path, e.g. `logs/relay-minifier-2024-01-31.log`.
pub fn compute_rolled_file_path(base_dir: &str, date_str: &str) -> PathBuf {
    let stem = LOG_FILE_NAME.trim_end_matches(".log");
    Path::new(base_dir).join(format!("{}-{}.log", stem, date_str))
}

pub fn setup_logging() {
    let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| DEFAULT_LOG_MODE.to_string());
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let level_filter = parse_level_filter(&log_level);

    if log_mode.to_lowercase() == "file" {
        let base_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
        let date_str = Utc::now().format("%Y-%m-%d").to_string();
        let rolled_file_path = compute_rolled_file_path(&base_dir, &date_str);

        if let Some(parent) = rolled_file_path.parent() {
            if let Err(e) = create_dir_all(parent) {
                eprintln!("Failed to create log directory {}: {}", parent.display(), e);
            }
        }

        match File::create(&rolled_file_path) {
            Ok(log_file) => {
                if let Err(e) = WriteLogger::init(level_filter, Config::default(), log_file) {
                    eprintln!("Failed to initialize file logger: {}", e);
                }
            }
            Err(e) => {
                eprintln!(
                    "Unable to create log file {}: {}, falling back to stdout",
                    rolled_file_path.display(),
                    e
                );
                if let Err(e) = SimpleLogger::init(level_filter, Config::default()) {
                    eprintln!("Failed to initialize simple logger: {}", e);
                }
            }
        }
    } else if let Err(e) = SimpleLogger::init(level_filter, Config::default()) {
        eprintln!("Failed to initialize simple logger: {}", e);
    }

    info!("Logging is successfully configured (mode: {})", log_mode);
}
