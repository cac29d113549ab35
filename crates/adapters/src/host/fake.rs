// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    CreateTab, CreatedTab, EventStream, HostAdapter, HostError, ProfileRecord, ProfileTarget,
    Subscription, VariableScope,
};
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use it2_core::layout::{Session, Tab, Window};
use it2_core::{Frame, HostEvent, Layout, SessionId, Size, TabId, WindowId};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ActivateApp,
    SelectMenuItem {
        identifier: String,
    },
    SetPreference {
        key: String,
        value: Value,
    },
    SetBroadcastDomains {
        domains: Vec<Vec<SessionId>>,
    },
    SetVariable {
        scope: VariableScope,
        name: String,
        value: Value,
    },
    SendText {
        session: SessionId,
        text: String,
    },
    SplitPane {
        session: SessionId,
        vertical: bool,
        profile: Option<String>,
    },
    ScreenContents {
        session: SessionId,
        lines: Option<u32>,
    },
    ActivateSession {
        session: SessionId,
    },
    CloseSessions {
        ids: Vec<SessionId>,
        force: bool,
    },
    CreateTab {
        request: CreateTab,
    },
    ActivateWindow {
        id: WindowId,
    },
    ActivateTab {
        id: TabId,
    },
    CloseWindows {
        ids: Vec<WindowId>,
        force: bool,
    },
    CloseTabs {
        ids: Vec<TabId>,
        force: bool,
    },
    SetWindowFrame {
        id: WindowId,
        frame: Frame,
    },
    SetWindowFullscreen {
        id: WindowId,
        on: bool,
    },
    SaveArrangement {
        name: String,
    },
    RestoreArrangement {
        name: String,
    },
    SetProfileProperties {
        target: ProfileTarget,
        assignments: Vec<(String, Value)>,
    },
    Subscribe {
        subscription: Subscription,
    },
}

#[derive(Default)]
struct FakeHostState {
    layout: Layout,
    variables: HashMap<(VariableScope, String), VecDeque<Value>>,
    preferences: HashMap<String, Value>,
    screens: HashMap<SessionId, Vec<String>>,
    fullscreen: HashMap<WindowId, bool>,
    arrangements: Vec<String>,
    profiles: Vec<ProfileRecord>,
    events: HashMap<Subscription, Vec<HostEvent>>,
    hold_streams_open: bool,
    fail_window_creation: bool,
    calls: Vec<HostCall>,
    next_id: u64,
}

impl FakeHostState {
    fn mint(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn new_session(&mut self) -> Session {
        Session {
            id: SessionId::new(self.mint("session")),
            title: String::new(),
            grid_size: Size {
                width: 80,
                height: 24,
            },
            frame: None,
        }
    }

    fn new_tab(&mut self) -> Tab {
        let session = self.new_session();
        Tab {
            id: TabId::new(self.mint("tab")),
            current_session: Some(session.id.clone()),
            sessions: vec![session],
        }
    }

    fn window_mut(&mut self, id: &WindowId) -> Result<&mut Window, HostError> {
        self.layout
            .windows
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| HostError::NotFound(format!("Window '{id}' not found")))
    }

    fn require_session(&self, id: &SessionId) -> Result<(), HostError> {
        match self.layout.session_by_id(id.as_str()) {
            Some(_) => Ok(()),
            None => Err(HostError::NotFound(format!("Session '{id}' not found"))),
        }
    }
}

/// Fake host adapter for testing
#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Arc<Mutex<FakeHostState>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake serving `layout`.
    pub fn with_layout(layout: Layout) -> Self {
        let host = Self::new();
        host.set_layout(layout);
        host
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.lock().calls.clone()
    }

    /// Current layout, including changes made through the adapter
    pub fn current_layout(&self) -> Layout {
        self.inner.lock().layout.clone()
    }

    pub fn set_layout(&self, layout: Layout) {
        self.inner.lock().layout = layout;
    }

    pub fn set_variable_value(&self, scope: VariableScope, name: &str, value: Value) {
        self.queue_variable_values(scope, name, vec![value]);
    }

    /// Successive reads return `values` in order; the last one repeats.
    pub fn queue_variable_values(&self, scope: VariableScope, name: &str, values: Vec<Value>) {
        self.inner
            .lock()
            .variables
            .insert((scope, name.to_string()), values.into());
    }

    pub fn set_preference_value(&self, key: &str, value: Value) {
        self.inner
            .lock()
            .preferences
            .insert(key.to_string(), value);
    }

    pub fn set_screen(&self, session: &str, lines: &[&str]) {
        self.inner.lock().screens.insert(
            SessionId::new(session),
            lines.iter().map(|l| l.to_string()).collect(),
        );
    }

    pub fn set_fullscreen(&self, window: &str, on: bool) {
        self.inner.lock().fullscreen.insert(WindowId::new(window), on);
    }

    pub fn add_arrangement(&self, name: &str) {
        self.inner.lock().arrangements.push(name.to_string());
    }

    pub fn add_profile(&self, record: ProfileRecord) {
        self.inner.lock().profiles.push(record);
    }

    pub fn profiles(&self) -> Vec<ProfileRecord> {
        self.inner.lock().profiles.clone()
    }

    /// Events delivered, in order, to the next matching subscription.
    pub fn push_events(&self, subscription: Subscription, events: Vec<HostEvent>) {
        self.inner
            .lock()
            .events
            .entry(subscription)
            .or_default()
            .extend(events);
    }

    /// Keep streams pending after their scripted events instead of ending.
    pub fn hold_streams_open(&self) {
        self.inner.lock().hold_streams_open = true;
    }

    /// Make `create_tab` report success without producing anything.
    pub fn fail_window_creation(&self) {
        self.inner.lock().fail_window_creation = true;
    }
}

#[async_trait]
impl HostAdapter for FakeHost {
    async fn layout(&self) -> Result<Layout, HostError> {
        Ok(self.inner.lock().layout.clone())
    }

    async fn activate_app(&self) -> Result<(), HostError> {
        self.inner.lock().calls.push(HostCall::ActivateApp);
        Ok(())
    }

    async fn select_menu_item(&self, identifier: &str) -> Result<(), HostError> {
        self.inner.lock().calls.push(HostCall::SelectMenuItem {
            identifier: identifier.to_string(),
        });
        Ok(())
    }

    async fn get_preference(&self, key: &str) -> Result<Value, HostError> {
        let inner = self.inner.lock();
        Ok(inner.preferences.get(key).cloned().unwrap_or(Value::Null))
    }

    async fn set_preference(&self, key: &str, value: &Value) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SetPreference {
            key: key.to_string(),
            value: value.clone(),
        });
        inner.preferences.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn set_broadcast_domains(&self, domains: &[Vec<SessionId>]) -> Result<(), HostError> {
        self.inner.lock().calls.push(HostCall::SetBroadcastDomains {
            domains: domains.to_vec(),
        });
        Ok(())
    }

    async fn get_variable(&self, scope: &VariableScope, name: &str) -> Result<Value, HostError> {
        let mut inner = self.inner.lock();
        let key = (scope.clone(), name.to_string());
        let Some(queue) = inner.variables.get_mut(&key) else {
            return Ok(Value::Null);
        };
        let value = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(value.unwrap_or(Value::Null))
    }

    async fn set_variable(
        &self,
        scope: &VariableScope,
        name: &str,
        value: &Value,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SetVariable {
            scope: scope.clone(),
            name: name.to_string(),
            value: value.clone(),
        });
        inner.variables.insert(
            (scope.clone(), name.to_string()),
            VecDeque::from([value.clone()]),
        );
        Ok(())
    }

    async fn send_text(&self, session: &SessionId, text: &str) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SendText {
            session: session.clone(),
            text: text.to_string(),
        });
        inner.require_session(session)
    }

    async fn split_pane(
        &self,
        session: &SessionId,
        vertical: bool,
        profile: Option<&str>,
    ) -> Result<SessionId, HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SplitPane {
            session: session.clone(),
            vertical,
            profile: profile.map(str::to_string),
        });
        inner.require_session(session)?;

        let created = inner.new_session();
        let id = created.id.clone();
        if let Some(tab) = inner
            .layout
            .windows
            .iter_mut()
            .flat_map(|w| w.tabs.iter_mut())
            .find(|t| t.sessions.iter().any(|s| &s.id == session))
        {
            tab.sessions.push(created);
        }
        Ok(id)
    }

    async fn screen_contents(
        &self,
        session: &SessionId,
        lines: Option<u32>,
    ) -> Result<Vec<String>, HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::ScreenContents {
            session: session.clone(),
            lines,
        });
        inner.require_session(session)?;
        let screen = inner.screens.get(session).cloned().unwrap_or_default();
        Ok(match lines {
            Some(n) => {
                let start = screen.len().saturating_sub(n as usize);
                screen[start..].to_vec()
            }
            None => screen,
        })
    }

    async fn activate_session(&self, session: &SessionId) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::ActivateSession {
            session: session.clone(),
        });
        inner.require_session(session)?;
        let layout = &mut inner.layout;
        for window in &mut layout.windows {
            for tab in &mut window.tabs {
                if tab.sessions.iter().any(|s| &s.id == session) {
                    tab.current_session = Some(session.clone());
                    window.current_tab = Some(tab.id.clone());
                    layout.current_window = Some(window.id.clone());
                }
            }
        }
        Ok(())
    }

    async fn close_sessions(&self, ids: &[SessionId], force: bool) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::CloseSessions {
            ids: ids.to_vec(),
            force,
        });
        for tab in inner
            .layout
            .windows
            .iter_mut()
            .flat_map(|w| w.tabs.iter_mut())
        {
            tab.sessions.retain(|s| !ids.contains(&s.id));
        }
        Ok(())
    }

    async fn create_tab(&self, request: &CreateTab) -> Result<Option<CreatedTab>, HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::CreateTab {
            request: request.clone(),
        });
        if inner.fail_window_creation {
            return Ok(None);
        }

        let tab = inner.new_tab();
        let tab_id = tab.id.clone();
        let session_id = tab.sessions[0].id.clone();
        let window_id = match &request.window_id {
            Some(id) => {
                let window = inner.window_mut(id)?;
                window.current_tab = Some(tab_id.clone());
                window.tabs.push(tab);
                id.clone()
            }
            None => {
                let id = WindowId::new(inner.mint("window"));
                inner.layout.windows.push(Window {
                    id: id.clone(),
                    number: None,
                    frame: Some(Frame::new(0, 0, 800, 600)),
                    current_tab: Some(tab_id.clone()),
                    tabs: vec![tab],
                });
                id
            }
        };
        Ok(Some(CreatedTab {
            window_id,
            tab_id,
            session_id,
        }))
    }

    async fn activate_window(&self, id: &WindowId) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner
            .calls
            .push(HostCall::ActivateWindow { id: id.clone() });
        inner.window_mut(id)?;
        inner.layout.current_window = Some(id.clone());
        Ok(())
    }

    async fn activate_tab(&self, id: &TabId) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::ActivateTab { id: id.clone() });
        let layout = &mut inner.layout;
        let window = layout
            .windows
            .iter_mut()
            .find(|w| w.tabs.iter().any(|t| &t.id == id))
            .ok_or_else(|| HostError::NotFound(format!("Tab '{id}' not found")))?;
        window.current_tab = Some(id.clone());
        layout.current_window = Some(window.id.clone());
        Ok(())
    }

    async fn close_windows(&self, ids: &[WindowId], force: bool) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::CloseWindows {
            ids: ids.to_vec(),
            force,
        });
        inner.layout.windows.retain(|w| !ids.contains(&w.id));
        Ok(())
    }

    async fn close_tabs(&self, ids: &[TabId], force: bool) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::CloseTabs {
            ids: ids.to_vec(),
            force,
        });
        for window in &mut inner.layout.windows {
            window.tabs.retain(|t| !ids.contains(&t.id));
        }
        Ok(())
    }

    async fn window_frame(&self, id: &WindowId) -> Result<Frame, HostError> {
        let mut inner = self.inner.lock();
        Ok(inner.window_mut(id)?.frame.unwrap_or_default())
    }

    async fn set_window_frame(&self, id: &WindowId, frame: Frame) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SetWindowFrame {
            id: id.clone(),
            frame,
        });
        inner.window_mut(id)?.frame = Some(frame);
        Ok(())
    }

    async fn window_fullscreen(&self, id: &WindowId) -> Result<bool, HostError> {
        let mut inner = self.inner.lock();
        inner.window_mut(id)?;
        Ok(inner.fullscreen.get(id).copied().unwrap_or(false))
    }

    async fn set_window_fullscreen(&self, id: &WindowId, on: bool) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SetWindowFullscreen {
            id: id.clone(),
            on,
        });
        inner.window_mut(id)?;
        inner.fullscreen.insert(id.clone(), on);
        Ok(())
    }

    async fn save_arrangement(&self, name: &str) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SaveArrangement {
            name: name.to_string(),
        });
        if !inner.arrangements.iter().any(|a| a == name) {
            inner.arrangements.push(name.to_string());
        }
        Ok(())
    }

    async fn list_arrangements(&self) -> Result<Vec<String>, HostError> {
        Ok(self.inner.lock().arrangements.clone())
    }

    async fn restore_arrangement(&self, name: &str) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::RestoreArrangement {
            name: name.to_string(),
        });
        if inner.arrangements.iter().any(|a| a == name) {
            Ok(())
        } else {
            Err(HostError::NotFound(format!(
                "Arrangement '{name}' not found"
            )))
        }
    }

    async fn list_profiles(
        &self,
        properties: &[&str],
        guids: &[String],
    ) -> Result<Vec<ProfileRecord>, HostError> {
        let inner = self.inner.lock();
        let profiles = inner
            .profiles
            .iter()
            .filter(|p| {
                guids.is_empty()
                    || p.get(it2_core::profile::keys::GUID)
                        .and_then(Value::as_str)
                        .is_some_and(|g| guids.iter().any(|w| w == g))
            })
            .map(|p| {
                if properties.is_empty() {
                    p.clone()
                } else {
                    p.iter()
                        .filter(|(k, _)| properties.contains(&k.as_str()))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect()
                }
            })
            .collect();
        Ok(profiles)
    }

    async fn set_profile_properties(
        &self,
        target: &ProfileTarget,
        assignments: &[(String, Value)],
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::SetProfileProperties {
            target: target.clone(),
            assignments: assignments.to_vec(),
        });
        match target {
            ProfileTarget::Guids(guids) => {
                for profile in &mut inner.profiles {
                    let matches = profile
                        .get(it2_core::profile::keys::GUID)
                        .and_then(Value::as_str)
                        .is_some_and(|g| guids.iter().any(|w| w == g));
                    if matches {
                        for (key, value) in assignments {
                            profile.insert(key.clone(), value.clone());
                        }
                    }
                }
                Ok(())
            }
            ProfileTarget::Session(id) => inner.require_session(id),
        }
    }

    async fn subscribe(&self, subscription: Subscription) -> Result<EventStream, HostError> {
        let mut inner = self.inner.lock();
        inner.calls.push(HostCall::Subscribe {
            subscription: subscription.clone(),
        });
        let events = inner.events.remove(&subscription).unwrap_or_default();
        let scripted = stream::iter(events);
        if inner.hold_streams_open {
            Ok(scripted.chain(stream::pending()).boxed())
        } else {
            Ok(scripted.boxed())
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
