// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes carried through `anyhow` errors.

use it2_adapters::HostError;
use it2_core::{ProfileValueError, ResolveError};
use thiserror::Error;

pub mod codes {
    pub const GENERAL: i32 = 1;
    /// No connection to iTerm2, or not running inside it.
    pub const CONNECTION: i32 = 2;
    /// Target missing, or no current window/tab/session.
    pub const NOT_FOUND: i32 = 3;
    pub const INVALID_INPUT: i32 = 4;
}

/// An error that ends the process with a specific exit code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(codes::GENERAL, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_INPUT, message)
    }
}

fn host_code(err: &HostError) -> i32 {
    match err {
        HostError::NotConnected(_) | HostError::Handshake(_) | HostError::Io(_) => {
            codes::CONNECTION
        }
        HostError::NotFound(_) => codes::NOT_FOUND,
        HostError::InvalidArgument(_) => codes::INVALID_INPUT,
        HostError::Timeout(_) | HostError::Protocol(_) | HostError::Rpc { .. } | HostError::Closed => {
            codes::GENERAL
        }
    }
}

/// The exit code for `err`: the first error in its chain that carries one.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ExitError>() {
            return e.code;
        }
        if let Some(e) = cause.downcast_ref::<HostError>() {
            return host_code(e);
        }
        if cause.is::<ResolveError>() {
            return codes::NOT_FOUND;
        }
        if cause.is::<ProfileValueError>() {
            return codes::INVALID_INPUT;
        }
    }
    codes::GENERAL
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
