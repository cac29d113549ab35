// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::geometry::{Frame, Size};
use crate::layout::{Layout, Session, Tab, Window};
use crate::{SessionId, TabId, WindowId};

// ── Layout factory functions ────────────────────────────────────────────────

/// An 80x24 session with an empty title.
pub fn session(id: &str) -> Session {
    Session {
        id: SessionId::new(id),
        title: String::new(),
        grid_size: Size {
            width: 80,
            height: 24,
        },
        frame: None,
    }
}

/// A tab whose first session is current.
pub fn tab(id: &str, sessions: Vec<Session>) -> Tab {
    let current_session = sessions.first().map(|s| s.id.clone());
    Tab {
        id: TabId::new(id),
        sessions,
        current_session,
    }
}

/// A window at (100, 200) sized 800x600 whose first tab is current.
pub fn window(id: &str, tabs: Vec<Tab>) -> Window {
    let current_tab = tabs.first().map(|t| t.id.clone());
    Window {
        id: WindowId::new(id),
        number: None,
        frame: Some(Frame::new(100, 200, 800, 600)),
        tabs,
        current_tab,
    }
}

/// A layout whose first window is current.
pub fn layout(windows: Vec<Window>) -> Layout {
    let current_window = windows.first().map(|w| w.id.clone());
    Layout {
        windows,
        current_window,
    }
}

/// One window, one tab, one session: the shape most command tests need.
pub fn single_session_layout(window_id: &str, tab_id: &str, session_id: &str) -> Layout {
    layout(vec![window(window_id, vec![tab(tab_id, vec![session(session_id)])])])
}
