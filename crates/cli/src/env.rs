// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Log filter directives (default: `warn`).
pub fn log_filter() -> String {
    std::env::var("IT2_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

/// Send logs to this file instead of stderr.
pub fn log_file() -> Option<PathBuf> {
    std::env::var("IT2_LOG_FILE")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Monitors ---

/// Activity watcher interval (default: 500ms).
pub fn activity_poll() -> Duration {
    parse_duration_ms("IT2_ACTIVITY_POLL_MS").unwrap_or(Duration::from_millis(500))
}
