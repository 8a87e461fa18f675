//! Test logging initialization
//!
//! Uses `std::sync::Once` so every test can call [`init_test_logging`].

use std::sync::Once;

use relay_minifier::logging::parse_level_filter;
use simplelog::{Config, TestLogger};

static INIT: Once = Once::new();

/// Routes `log` output through the test harness. `LOG_LEVEL` picks the level.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let _ = TestLogger::init(parse_level_filter(&level), Config::default());
    });
}
