// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target session resolution.
//!
//! Every command that takes `--session`/`--all` funnels through
//! [`resolve_targets`], so "which sessions do I act on" and its error text are
//! the same everywhere.

use thiserror::Error;

use crate::layout::{Layout, Session};
use crate::session_id::{self, ACTIVE, ALL};

/// Why no target session could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Session '{0}' not found")]
    SessionNotFound(String),
    #[error("No active window found")]
    NoActiveWindow,
    #[error("No active tab found")]
    NoActiveTab,
    #[error("No active session found")]
    NoActiveSession,
}

/// Look up a session by user-supplied id, accepting alias forms.
///
/// Tries the normalized id first. If that misses and normalization changed
/// the value, retries with the raw input. A miss is `None`, not an error.
pub fn lookup<'a>(layout: &'a Layout, id: Option<&str>) -> Option<&'a Session> {
    let raw = id?;
    let normalized = session_id::normalize(Some(raw))?;
    if let Some(session) = layout.session_by_id(normalized) {
        return Some(session);
    }
    if normalized != raw {
        return layout.session_by_id(raw);
    }
    None
}

/// Resolve the sessions a command should act on.
///
/// Rules, first match wins:
/// 1. `all` flag or `id == "all"`: every session, in containment order (may be empty).
/// 2. any other id except `"active"`: that one session, or [`ResolveError::SessionNotFound`].
/// 3. otherwise: the current session of the current tab of the current window.
pub fn resolve_targets<'a>(
    layout: &'a Layout,
    id: Option<&str>,
    all: bool,
) -> Result<Vec<&'a Session>, ResolveError> {
    if all || id == Some(ALL) {
        return Ok(layout.sessions().collect());
    }

    if let Some(requested) = id.filter(|id| *id != ACTIVE) {
        return lookup(layout, Some(requested))
            .map(|session| vec![session])
            .ok_or_else(|| ResolveError::SessionNotFound(requested.to_string()));
    }

    let window = layout
        .current_window()
        .ok_or(ResolveError::NoActiveWindow)?;
    let tab = window.current_tab().ok_or(ResolveError::NoActiveTab)?;
    let session = tab.current_session().ok_or(ResolveError::NoActiveSession)?;
    Ok(vec![session])
}

/// Resolve to exactly one session: the first target.
///
/// Used by commands that operate on a single session (monitors, split, read).
pub fn resolve_one<'a>(layout: &'a Layout, id: Option<&str>) -> Result<&'a Session, ResolveError> {
    let targets = resolve_targets(layout, id, false)?;
    targets
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::SessionNotFound(id.unwrap_or(ACTIVE).to_string()))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
