// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::path::PathBuf;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

/// Cookie iTerm2 exports into every session it launches.
pub fn cookie() -> Option<String> {
    non_empty("ITERM2_COOKIE")
}

/// Companion key for the cookie, when iTerm2 provided one.
pub fn key() -> Option<String> {
    non_empty("ITERM2_KEY")
}

/// API socket path: `IT2_SOCKET`, else the per-user default under
/// `~/Library/Application Support/iTerm2/private/socket`.
pub fn socket_path() -> Option<PathBuf> {
    if let Some(path) = non_empty("IT2_SOCKET") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| {
        home.join("Library")
            .join("Application Support")
            .join("iTerm2")
            .join("private")
            .join("socket")
    })
}

/// Connect + handshake budget (default: 5000ms).
pub fn connect_timeout() -> Duration {
    parse_duration_ms("IT2_TIMEOUT_CONNECT_MS").unwrap_or(Duration::from_secs(5))
}

/// Per-request budget (default: 10000ms).
pub fn rpc_timeout() -> Duration {
    parse_duration_ms("IT2_TIMEOUT_RPC_MS").unwrap_or(Duration::from_secs(10))
}
