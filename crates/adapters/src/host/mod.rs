// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host application adapters

mod iterm;

pub use iterm::ItermHost;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHost, HostCall};

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use indexmap::IndexMap;
use it2_core::{Frame, HostEvent, Layout, SessionId, TabId, WindowId};
use serde_json::Value;
use thiserror::Error;

/// Errors from host operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Not running inside iTerm2: {0}")]
    NotConnected(String),
    #[error("handshake failed: {0}")]
    Handshake(String),
    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out waiting for {0}")]
    Timeout(&'static str),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("{op} failed: {status}")]
    Rpc { op: &'static str, status: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("connection closed")]
    Closed,
}

/// Which object a variable lives on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableScope {
    App,
    Session(SessionId),
    Tab(TabId),
    Window(WindowId),
}

/// Arguments for opening a tab. With no window id the host opens a new window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTab {
    pub window_id: Option<WindowId>,
    pub profile: Option<String>,
    pub command: Option<String>,
}

/// Handles of a freshly created tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTab {
    pub window_id: WindowId,
    pub tab_id: TabId,
    pub session_id: SessionId,
}

/// One profile's properties, key to JSON value, in host order.
pub type ProfileRecord = IndexMap<String, Value>;

/// Where `set_profile_properties` writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTarget {
    /// Stored profiles, by GUID.
    Guids(Vec<String>),
    /// The session's own copy of its profile.
    Session(SessionId),
}

/// A monitor to open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subscription {
    Keystrokes { session: SessionId },
    ScreenUpdates { session: SessionId },
    Prompts { session: SessionId },
    Variable { scope: VariableScope, name: String },
}

/// Events from one subscription. Lazy, unbounded, and ends when the
/// connection does. Dropping it unsubscribes locally.
pub type EventStream = BoxStream<'static, HostEvent>;

/// Adapter for the terminal application being driven.
///
/// One handle per invocation, passed explicitly to every command.
#[async_trait]
pub trait HostAdapter: Send + Sync {
    // -- layout --

    /// Snapshot windows, tabs, sessions and what is focused.
    async fn layout(&self) -> Result<Layout, HostError>;

    // -- app --

    async fn activate_app(&self) -> Result<(), HostError>;

    /// Invoke a main-menu item by its identifier (e.g. `"Hide iTerm2"`).
    async fn select_menu_item(&self, identifier: &str) -> Result<(), HostError>;

    /// `Value::Null` when the preference is unset.
    async fn get_preference(&self, key: &str) -> Result<Value, HostError>;

    async fn set_preference(&self, key: &str, value: &Value) -> Result<(), HostError>;

    /// Replace all broadcast domains. An empty slice turns broadcasting off.
    async fn set_broadcast_domains(&self, domains: &[Vec<SessionId>]) -> Result<(), HostError>;

    // -- variables --

    /// `Value::Null` when the variable is unset.
    async fn get_variable(&self, scope: &VariableScope, name: &str) -> Result<Value, HostError>;

    async fn set_variable(
        &self,
        scope: &VariableScope,
        name: &str,
        value: &Value,
    ) -> Result<(), HostError>;

    // -- sessions --

    /// Type text into a session as if from the keyboard.
    async fn send_text(&self, session: &SessionId, text: &str) -> Result<(), HostError>;

    /// Split a session's pane, returning the new session.
    async fn split_pane(
        &self,
        session: &SessionId,
        vertical: bool,
        profile: Option<&str>,
    ) -> Result<SessionId, HostError>;

    /// Visible screen lines, or the trailing `lines` of scrollback + screen.
    async fn screen_contents(
        &self,
        session: &SessionId,
        lines: Option<u32>,
    ) -> Result<Vec<String>, HostError>;

    async fn activate_session(&self, session: &SessionId) -> Result<(), HostError>;

    async fn close_sessions(&self, ids: &[SessionId], force: bool) -> Result<(), HostError>;

    // -- windows and tabs --

    /// `Ok(None)` when the host reported success but produced nothing.
    async fn create_tab(&self, request: &CreateTab) -> Result<Option<CreatedTab>, HostError>;

    async fn activate_window(&self, id: &WindowId) -> Result<(), HostError>;

    async fn activate_tab(&self, id: &TabId) -> Result<(), HostError>;

    async fn close_windows(&self, ids: &[WindowId], force: bool) -> Result<(), HostError>;

    async fn close_tabs(&self, ids: &[TabId], force: bool) -> Result<(), HostError>;

    async fn window_frame(&self, id: &WindowId) -> Result<Frame, HostError>;

    async fn set_window_frame(&self, id: &WindowId, frame: Frame) -> Result<(), HostError>;

    async fn window_fullscreen(&self, id: &WindowId) -> Result<bool, HostError>;

    async fn set_window_fullscreen(&self, id: &WindowId, on: bool) -> Result<(), HostError>;

    // -- arrangements --

    async fn save_arrangement(&self, name: &str) -> Result<(), HostError>;

    async fn list_arrangements(&self) -> Result<Vec<String>, HostError>;

    async fn restore_arrangement(&self, name: &str) -> Result<(), HostError>;

    // -- profiles --

    /// Stored profiles. Empty `properties` means all of them; empty `guids`
    /// means every profile.
    async fn list_profiles(
        &self,
        properties: &[&str],
        guids: &[String],
    ) -> Result<Vec<ProfileRecord>, HostError>;

    async fn set_profile_properties(
        &self,
        target: &ProfileTarget,
        assignments: &[(String, Value)],
    ) -> Result<(), HostError>;

    // -- monitors --

    async fn subscribe(&self, subscription: Subscription) -> Result<EventStream, HostError>;
}
