// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod app;
pub mod monitor;
pub mod profile;
pub mod session;
pub mod tab;
pub mod window;

use anyhow::Result;
use clap::Args;
use it2_adapters::{HostAdapter, VariableScope};
use it2_core::{Layout, SessionId, Tab, Window, WindowId};
use serde_json::Value;

use crate::exit_error::ExitError;

/// `-s/--session` and `-a/--all`, shared by commands that fan out.
#[derive(Args, Debug, Clone, Default)]
pub struct Targets {
    /// Session ID, alias (`w0t0p0:<uuid>`), `active`, or `all`
    #[arg(short = 's', long = "session")]
    pub session: Option<String>,
    /// Act on every session
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}

/// `-s/--session` alone, for commands that act on one session.
#[derive(Args, Debug, Clone, Default)]
pub struct Target {
    /// Session ID or alias (default: the active session)
    #[arg(short = 's', long = "session")]
    pub session: Option<String>,
}

pub(crate) fn current_window(layout: &Layout) -> Result<&Window> {
    Ok(layout
        .current_window()
        .ok_or_else(|| ExitError::not_found("No current window"))?)
}

pub(crate) fn current_tab(layout: &Layout) -> Result<&Tab> {
    Ok(current_window(layout)?
        .current_tab()
        .ok_or_else(|| ExitError::not_found("No current tab"))?)
}

/// The named window, or the current one when `id` is `None`.
pub(crate) fn window_or_current<'a>(layout: &'a Layout, id: Option<&str>) -> Result<&'a Window> {
    match id {
        Some(id) => Ok(layout
            .window(id)
            .ok_or_else(|| ExitError::not_found(format!("Window '{id}' not found")))?),
        None => current_window(layout),
    }
}

pub(crate) fn window_id(layout: &Layout, id: Option<&str>) -> Result<WindowId> {
    Ok(window_or_current(layout, id)?.id.clone())
}

/// A session variable, `Null` when unset.
pub(crate) async fn session_var(
    host: &dyn HostAdapter,
    session: &SessionId,
    name: &str,
) -> Result<Value> {
    Ok(host
        .get_variable(&VariableScope::Session(session.clone()), name)
        .await?)
}

/// `session.name` as a string, empty when unset.
pub(crate) async fn session_name(host: &dyn HostAdapter, session: &SessionId) -> Result<String> {
    let value = session_var(host, session, "session.name").await?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
