// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversions between wire messages and domain types.

use super::connection::EventFilter;
use super::proto::{
    self, focus_changed_notification, list_sessions_response, notification_request,
    split_tree_node::split_tree_link::Child, variable_request, FocusResponse,
    ListSessionsResponse, Notification, NotificationRequest, NotificationType, PromptMonitorMode,
    SplitTreeNode,
};
use crate::host::{HostError, Subscription, VariableScope};
use it2_core::layout::{Session, Tab, Window};
use it2_core::{Frame, HostEvent, Layout, PromptEvent, SessionId, Size, TabId, WindowId};
use serde_json::Value;

// ── Layout ──────────────────────────────────────────────────────────────────

/// Build a layout from the session tree plus the focus snapshot.
pub fn layout(sessions: ListSessionsResponse, focus: FocusResponse) -> Layout {
    let mut layout = Layout {
        windows: sessions.windows.into_iter().map(window).collect(),
        current_window: None,
    };
    for notification in focus.notifications {
        apply_focus(&mut layout, notification.event);
    }
    layout
}

fn window(w: list_sessions_response::Window) -> Window {
    Window {
        id: WindowId::new(w.window_id.unwrap_or_default()),
        number: w.number,
        frame: w.frame.as_ref().map(frame),
        tabs: w.tabs.into_iter().map(tab).collect(),
        current_tab: None,
    }
}

fn tab(t: list_sessions_response::Tab) -> Tab {
    let mut sessions = Vec::new();
    if let Some(root) = t.root {
        collect_sessions(root, &mut sessions);
    }
    Tab {
        id: TabId::new(t.tab_id.unwrap_or_default()),
        sessions,
        current_session: None,
    }
}

/// Depth-first, in split order.
fn collect_sessions(node: SplitTreeNode, out: &mut Vec<Session>) {
    for link in node.links {
        match link.child {
            Some(Child::Session(summary)) => out.push(Session {
                id: SessionId::new(summary.unique_identifier.unwrap_or_default()),
                title: summary.title.unwrap_or_default(),
                grid_size: summary.grid_size.as_ref().map(size).unwrap_or_default(),
                frame: summary.frame.as_ref().map(frame),
            }),
            Some(Child::Node(child)) => collect_sessions(child, out),
            None => {}
        }
    }
}

fn apply_focus(layout: &mut Layout, event: Option<focus_changed_notification::Event>) {
    use focus_changed_notification::{Event, WindowStatus};
    match event {
        Some(Event::Window(w)) => {
            let resigned = w.window_status == Some(WindowStatus::TerminalWindowResignedKey as i32);
            if let (false, Some(id)) = (resigned, w.window_id) {
                layout.current_window = Some(WindowId::new(id));
            }
        }
        Some(Event::SelectedTab(tab_id)) => {
            if let Some(window) = layout
                .windows
                .iter_mut()
                .find(|w| w.tabs.iter().any(|t| t.id == *tab_id))
            {
                window.current_tab = Some(TabId::new(tab_id));
            }
        }
        Some(Event::Session(session_id)) => {
            if let Some(tab) = layout
                .windows
                .iter_mut()
                .flat_map(|w| w.tabs.iter_mut())
                .find(|t| t.sessions.iter().any(|s| s.id == *session_id))
            {
                tab.current_session = Some(SessionId::new(session_id));
            }
        }
        Some(Event::ApplicationActive(_)) | None => {}
    }
}

fn frame(f: &proto::Frame) -> Frame {
    let origin = f.origin.as_ref();
    let size = f.size.as_ref();
    Frame::new(
        origin.and_then(|o| o.x).unwrap_or(0),
        origin.and_then(|o| o.y).unwrap_or(0),
        size.and_then(|s| s.width).unwrap_or(0),
        size.and_then(|s| s.height).unwrap_or(0),
    )
}

fn size(s: &proto::Size) -> Size {
    Size {
        width: s.width.unwrap_or(0),
        height: s.height.unwrap_or(0),
    }
}

// ── JSON values ─────────────────────────────────────────────────────────────

/// Values cross the wire as JSON text. Text that is not JSON is kept as a
/// plain string.
pub fn json_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse the `frame` window property. Coordinates may arrive as floats.
pub fn frame_from_json(raw: &str) -> Result<Frame, HostError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| HostError::Protocol(format!("frame is not JSON: {e}")))?;
    let number = |section: &str, field: &str| -> Result<i32, HostError> {
        value[section][field]
            .as_f64()
            .map(|n| n.round() as i32)
            .ok_or_else(|| HostError::Protocol(format!("frame is missing {section}.{field}")))
    };
    Ok(Frame::new(
        number("origin", "x")?,
        number("origin", "y")?,
        number("size", "width")?,
        number("size", "height")?,
    ))
}

pub fn frame_to_json(frame: Frame) -> String {
    serde_json::json!({
        "origin": {"x": frame.origin.x, "y": frame.origin.y},
        "size": {"width": frame.size.width, "height": frame.size.height},
    })
    .to_string()
}

// ── Variables ───────────────────────────────────────────────────────────────

pub fn variable_scope(scope: &VariableScope) -> variable_request::Scope {
    match scope {
        VariableScope::App => variable_request::Scope::App(true),
        VariableScope::Session(id) => variable_request::Scope::SessionId(id.to_string()),
        VariableScope::Tab(id) => variable_request::Scope::TabId(id.to_string()),
        VariableScope::Window(id) => variable_request::Scope::WindowId(id.to_string()),
    }
}

fn monitor_scope(scope: &VariableScope) -> (proto::VariableScope, Option<String>) {
    match scope {
        VariableScope::App => (proto::VariableScope::App, None),
        VariableScope::Session(id) => (proto::VariableScope::Session, Some(id.to_string())),
        VariableScope::Tab(id) => (proto::VariableScope::Tab, Some(id.to_string())),
        VariableScope::Window(id) => (proto::VariableScope::Window, Some(id.to_string())),
    }
}

// ── Subscriptions ───────────────────────────────────────────────────────────

/// The subscribe request for `sub`.
pub fn notification_request(sub: &Subscription) -> NotificationRequest {
    use notification_request::Arguments;
    let (session, kind, arguments) = match sub {
        Subscription::Keystrokes { session } => (
            Some(session.to_string()),
            NotificationType::NotifyOnKeystroke,
            Some(Arguments::KeystrokeMonitorRequest(
                proto::KeystrokeMonitorRequest {
                    advanced: Some(false),
                },
            )),
        ),
        Subscription::ScreenUpdates { session } => (
            Some(session.to_string()),
            NotificationType::NotifyOnScreenUpdate,
            None,
        ),
        Subscription::Prompts { session } => (
            Some(session.to_string()),
            NotificationType::NotifyOnPrompt,
            Some(Arguments::PromptMonitorRequest(proto::PromptMonitorRequest {
                modes: vec![
                    PromptMonitorMode::Prompt as i32,
                    PromptMonitorMode::CommandStart as i32,
                    PromptMonitorMode::CommandEnd as i32,
                ],
            })),
        ),
        Subscription::Variable { scope, name } => {
            let (scope, identifier) = monitor_scope(scope);
            (
                None,
                NotificationType::NotifyOnVariableChange,
                Some(Arguments::VariableMonitorRequest(
                    proto::VariableMonitorRequest {
                        name: Some(name.clone()),
                        scope: Some(scope as i32),
                        identifier,
                    },
                )),
            )
        }
    };
    NotificationRequest {
        session,
        subscribe: Some(true),
        notification_type: Some(kind as i32),
        arguments,
    }
}

/// Select and translate the notifications belonging to `sub`.
pub fn event_filter(sub: &Subscription) -> EventFilter {
    match sub.clone() {
        Subscription::Keystrokes { session } => Box::new(move |n: &Notification| {
            let k = n.keystroke_notification.as_ref()?;
            (k.session.as_deref() == Some(session.as_str())).then(|| HostEvent::Keystroke {
                characters: k.characters.clone().unwrap_or_default(),
            })
        }),
        Subscription::ScreenUpdates { session } => Box::new(move |n: &Notification| {
            let u = n.screen_update_notification.as_ref()?;
            (u.session.as_deref() == Some(session.as_str())).then_some(HostEvent::ScreenUpdated)
        }),
        Subscription::Prompts { session } => Box::new(move |n: &Notification| {
            use proto::prompt_notification::Event;
            let p = n.prompt_notification.as_ref()?;
            if p.session.as_deref() != Some(session.as_str()) {
                return None;
            }
            let event = match p.event.as_ref()? {
                Event::Prompt(_) => PromptEvent::Prompt,
                Event::CommandStart(start) => PromptEvent::CommandStarted {
                    command: start.command.clone().unwrap_or_default(),
                },
                Event::CommandEnd(end) => PromptEvent::CommandFinished {
                    status: end.status.unwrap_or(0),
                },
            };
            Some(HostEvent::Prompt(event))
        }),
        Subscription::Variable { scope, name } => {
            let (scope, identifier) = monitor_scope(&scope);
            Box::new(move |n: &Notification| {
                let v = n.variable_changed_notification.as_ref()?;
                let same_scope = v.scope == Some(scope as i32);
                let same_object = identifier.is_none() || v.identifier == identifier;
                let same_name = v.name.as_deref() == Some(name.as_str());
                (same_scope && same_object && same_name).then(|| HostEvent::VariableChanged {
                    value: v.json_new_value.as_deref().map(json_value).unwrap_or(Value::Null),
                })
            })
        }
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
