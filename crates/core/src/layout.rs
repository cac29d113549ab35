// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot of the host's window → tab → session hierarchy.
//!
//! The host owns these objects. A [`Layout`] is a read-only copy taken at the
//! start of a command; containment is strict (a window owns ordered tabs, a
//! tab owns ordered sessions) and each level has at most one "current" child.

use serde::{Deserialize, Serialize};

use crate::geometry::{Frame, Size};
use crate::id::{SessionId, TabId, WindowId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub grid_size: Size,
    pub frame: Option<Frame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub sessions: Vec<Session>,
    pub current_session: Option<SessionId>,
}

impl Tab {
    /// The focused session within this tab, if the host reported one.
    pub fn current_session(&self) -> Option<&Session> {
        let id = self.current_session.as_ref()?;
        self.sessions.iter().find(|s| &s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub number: Option<i32>,
    pub frame: Option<Frame>,
    pub tabs: Vec<Tab>,
    pub current_tab: Option<TabId>,
}

impl Window {
    /// The selected tab within this window, if the host reported one.
    pub fn current_tab(&self) -> Option<&Tab> {
        let id = self.current_tab.as_ref()?;
        self.tabs.iter().find(|t| &t.id == id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.tabs.iter().flat_map(|t| t.sessions.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub windows: Vec<Window>,
    pub current_window: Option<WindowId>,
}

impl Layout {
    /// The key terminal window, if any.
    pub fn current_window(&self) -> Option<&Window> {
        let id = self.current_window.as_ref()?;
        self.window(id.as_str())
    }

    /// Current window → current tab → current session, stopping at the first gap.
    pub fn current_session(&self) -> Option<&Session> {
        self.current_window()?.current_tab()?.current_session()
    }

    pub fn window(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .find(|t| t.id == *id)
    }

    /// Exact-match lookup, the equivalent of the host's by-id accessor.
    pub fn session_by_id(&self, id: &str) -> Option<&Session> {
        self.sessions().find(|s| s.id == *id)
    }

    /// Every session in window order, then tab order, then session order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.windows.iter().flat_map(|w| w.sessions())
    }

    pub fn window_of_tab(&self, tab_id: &str) -> Option<&Window> {
        self.windows
            .iter()
            .find(|w| w.tabs.iter().any(|t| t.id == *tab_id))
    }

    pub fn tab_of_session(&self, session_id: &str) -> Option<&Tab> {
        self.windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .find(|t| t.sessions.iter().any(|s| s.id == *session_id))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
