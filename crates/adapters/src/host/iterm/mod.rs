// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! iTerm2 adapter over the scripting API socket.

mod connection;
mod convert;
mod proto;

use connection::ConnectOptions;

use super::{
    CreateTab, CreatedTab, EventStream, HostAdapter, HostError, ProfileRecord, ProfileTarget,
    Subscription, VariableScope,
};
use crate::env;
use async_trait::async_trait;
use connection::Connection;
use futures_util::stream::{self, StreamExt};
use it2_core::{Frame, Layout, SessionId, TabId, WindowId};
use proto::client_originated_message::Submessage as Request;
use proto::server_originated_message::Submessage as Reply;
use serde_json::Value;
use std::path::Path;

/// Unwrap the expected reply variant or fail with a protocol error.
macro_rules! expect_reply {
    ($reply:expr, $variant:ident, $op:expr) => {
        match $reply {
            Reply::$variant(inner) => inner,
            other => {
                return Err(HostError::Protocol(format!(
                    "{}: unexpected reply {:?}",
                    $op, other
                )))
            }
        }
    };
}

/// Status code 0 means OK for every response type.
fn check(op: &'static str, status: Option<i32>) -> Result<(), HostError> {
    match status.unwrap_or(0) {
        0 => Ok(()),
        code => Err(HostError::Rpc {
            op,
            status: format!("status {code}"),
        }),
    }
}

/// Like [`check`], with one status code that means the target is missing.
fn check_found(
    op: &'static str,
    status: Option<i32>,
    not_found_code: i32,
    missing: impl FnOnce() -> String,
) -> Result<(), HostError> {
    match status {
        Some(code) if code == not_found_code => Err(HostError::NotFound(missing())),
        other => check(op, other),
    }
}

fn session_missing(id: &SessionId) -> impl FnOnce() -> String + '_ {
    move || format!("Session '{id}' not found")
}

fn window_missing(id: &WindowId) -> impl FnOnce() -> String + '_ {
    move || format!("Window '{id}' not found")
}

/// Live connection to a running iTerm2.
pub struct ItermHost {
    conn: Connection,
}

impl ItermHost {
    /// Connect using the cookie and socket iTerm2 exposes to its sessions.
    pub async fn connect() -> Result<Self, HostError> {
        let cookie = env::cookie()
            .ok_or_else(|| HostError::NotConnected("ITERM2_COOKIE is not set".into()))?;
        let path = env::socket_path().ok_or_else(|| {
            HostError::NotConnected("cannot locate the API socket (no home directory)".into())
        })?;
        let options = ConnectOptions {
            cookie,
            key: env::key(),
            connect_timeout: env::connect_timeout(),
            rpc_timeout: env::rpc_timeout(),
        };
        Self::connect_to(&path, &options).await
    }

    pub(crate) async fn connect_to(path: &Path, options: &ConnectOptions) -> Result<Self, HostError> {
        let conn = Connection::open(path, options).await?;
        Ok(Self { conn })
    }

    async fn activate(
        &self,
        op: &'static str,
        request: proto::ActivateRequest,
    ) -> Result<Option<i32>, HostError> {
        let reply = self.conn.call(op, Request::ActivateRequest(request)).await?;
        Ok(expect_reply!(reply, ActivateResponse, op).status)
    }

    async fn close(&self, op: &'static str, request: proto::CloseRequest) -> Result<(), HostError> {
        let reply = self.conn.call(op, Request::CloseRequest(request)).await?;
        let response = expect_reply!(reply, CloseResponse, op);
        // Per-object statuses: OK=0, NOT_FOUND=1, USER_DECLINED=2.
        match response.statuses.iter().copied().find(|s| *s != 0) {
            None => Ok(()),
            Some(1) => Err(HostError::NotFound(format!("{op}: target not found"))),
            Some(2) => Err(HostError::Rpc {
                op,
                status: "declined by user".into(),
            }),
            Some(code) => check(op, Some(code)),
        }
    }

    async fn preferences(
        &self,
        op: &'static str,
        kind: proto::preferences_request::request::Kind,
    ) -> Result<proto::preferences_response::preference_result::Kind, HostError> {
        let request = proto::PreferencesRequest {
            requests: vec![proto::preferences_request::Request { kind: Some(kind) }],
        };
        let reply = self.conn.call(op, Request::PreferencesRequest(request)).await?;
        expect_reply!(reply, PreferencesResponse, op)
            .results
            .into_iter()
            .next()
            .and_then(|r| r.kind)
            .ok_or_else(|| HostError::Protocol(format!("{op}: no result")))
    }

    async fn variables(
        &self,
        op: &'static str,
        scope: &VariableScope,
        request: proto::VariableRequest,
    ) -> Result<Vec<String>, HostError> {
        let reply = self.conn.call(op, Request::VariableRequest(request)).await?;
        let response = expect_reply!(reply, VariableResponse, op);
        // SESSION_NOT_FOUND=3, TAB_NOT_FOUND=4, WINDOW_NOT_FOUND=5
        match (response.status, scope) {
            (Some(3), VariableScope::Session(id)) => Err(HostError::NotFound(session_missing(id)())),
            (Some(4), VariableScope::Tab(id)) => {
                Err(HostError::NotFound(format!("Tab '{id}' not found")))
            }
            (Some(5), VariableScope::Window(id)) => Err(HostError::NotFound(window_missing(id)())),
            (status, _) => check(op, status).map(|()| response.values),
        }
    }

    async fn get_window_property(&self, id: &WindowId, name: &str) -> Result<String, HostError> {
        const OP: &str = "get_property";
        let request = proto::GetPropertyRequest {
            target: Some(proto::property_target::Target::WindowId(id.to_string())),
            name: Some(name.into()),
        };
        let reply = self.conn.call(OP, Request::GetPropertyRequest(request)).await?;
        let response = expect_reply!(reply, GetPropertyResponse, OP);
        // UNRECOGNIZED_NAME=1, INVALID_TARGET=2
        check_found(OP, response.status, 2, window_missing(id))?;
        response
            .json_value
            .ok_or_else(|| HostError::Protocol(format!("{OP}: missing value for {name}")))
    }

    async fn set_window_property(
        &self,
        id: &WindowId,
        name: &str,
        json: String,
    ) -> Result<(), HostError> {
        const OP: &str = "set_property";
        let request = proto::SetPropertyRequest {
            target: Some(proto::property_target::SetTarget::WindowId(id.to_string())),
            name: Some(name.into()),
            json_value: Some(json),
        };
        let reply = self.conn.call(OP, Request::SetPropertyRequest(request)).await?;
        let status = expect_reply!(reply, SetPropertyResponse, OP).status;
        // UNRECOGNIZED_NAME=1, INVALID_VALUE=2, INVALID_TARGET=3
        match status {
            Some(2) => Err(HostError::InvalidArgument(format!("invalid value for {name}"))),
            other => check_found(OP, other, 3, window_missing(id)),
        }
    }

    async fn arrangement(
        &self,
        op: &'static str,
        action: proto::SavedArrangementAction,
        name: Option<&str>,
    ) -> Result<Vec<String>, HostError> {
        let request = proto::SavedArrangementRequest {
            name: name.map(Into::into),
            action: Some(action as i32),
            window_id: None,
        };
        let reply = self.conn.call(op, Request::SavedArrangementRequest(request)).await?;
        let response = expect_reply!(reply, SavedArrangementResponse, op);
        // ARRANGEMENT_NOT_FOUND=1
        check_found(op, response.status, 1, || {
            format!("Arrangement '{}' not found", name.unwrap_or_default())
        })?;
        Ok(response.names)
    }
}

#[async_trait]
impl HostAdapter for ItermHost {
    async fn layout(&self) -> Result<Layout, HostError> {
        let reply = self
            .conn
            .call("list_sessions", Request::ListSessionsRequest(proto::ListSessionsRequest {}))
            .await?;
        let sessions = expect_reply!(reply, ListSessionsResponse, "list_sessions");
        let reply = self
            .conn
            .call("focus", Request::FocusRequest(proto::FocusRequest {}))
            .await?;
        let focus = expect_reply!(reply, FocusResponse, "focus");
        Ok(convert::layout(sessions, focus))
    }

    async fn activate_app(&self) -> Result<(), HostError> {
        let status = self
            .activate(
                "activate_app",
                proto::ActivateRequest {
                    activate_app: Some(proto::activate_request::App {
                        raise_all_windows: Some(true),
                        ignoring_other_apps: Some(false),
                    }),
                    ..Default::default()
                },
            )
            .await?;
        check("activate_app", status)
    }

    async fn select_menu_item(&self, identifier: &str) -> Result<(), HostError> {
        const OP: &str = "menu_item";
        let request = proto::MenuItemRequest {
            identifier: Some(identifier.into()),
            query_only: Some(false),
        };
        let reply = self.conn.call(OP, Request::MenuItemRequest(request)).await?;
        let status = expect_reply!(reply, MenuItemResponse, OP).status;
        // BAD_IDENTIFIER=1, DISABLED=2
        check_found(OP, status, 1, || format!("Menu item '{identifier}' not found"))
    }

    async fn get_preference(&self, key: &str) -> Result<Value, HostError> {
        use proto::preferences_request::request::{GetPreference, Kind};
        use proto::preferences_response::preference_result::Kind as Outcome;
        let kind = self
            .preferences(
                "get_preference",
                Kind::GetPreference(GetPreference {
                    key: Some(key.into()),
                }),
            )
            .await?;
        match kind {
            Outcome::GetPreferenceResult(r) => {
                Ok(r.json_value.as_deref().map(convert::json_value).unwrap_or(Value::Null))
            }
            Outcome::UnrecognizedRequest(_) | Outcome::SetPreferenceResult(_) => Err(
                HostError::Protocol("get_preference: unexpected result kind".into()),
            ),
        }
    }

    async fn set_preference(&self, key: &str, value: &Value) -> Result<(), HostError> {
        use proto::preferences_request::request::{Kind, SetPreference};
        use proto::preferences_response::preference_result::Kind as Outcome;
        let kind = self
            .preferences(
                "set_preference",
                Kind::SetPreference(SetPreference {
                    key: Some(key.into()),
                    json_value: Some(value.to_string()),
                }),
            )
            .await?;
        match kind {
            Outcome::SetPreferenceResult(r) => check("set_preference", r.status),
            Outcome::UnrecognizedRequest(_) | Outcome::GetPreferenceResult(_) => Err(
                HostError::Protocol("set_preference: unexpected result kind".into()),
            ),
        }
    }

    async fn set_broadcast_domains(&self, domains: &[Vec<SessionId>]) -> Result<(), HostError> {
        const OP: &str = "set_broadcast_domains";
        let request = proto::SetBroadcastDomainsRequest {
            broadcast_domains: domains
                .iter()
                .map(|domain| proto::BroadcastDomain {
                    session_ids: domain.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        };
        let reply = self
            .conn
            .call(OP, Request::SetBroadcastDomainsRequest(request))
            .await?;
        check(OP, expect_reply!(reply, SetBroadcastDomainsResponse, OP).status)
    }

    async fn get_variable(&self, scope: &VariableScope, name: &str) -> Result<Value, HostError> {
        let request = proto::VariableRequest {
            scope: Some(convert::variable_scope(scope)),
            set: Vec::new(),
            get: vec![name.into()],
        };
        let values = self.variables("get_variable", scope, request).await?;
        Ok(values
            .first()
            .map(|raw| convert::json_value(raw))
            .unwrap_or(Value::Null))
    }

    async fn set_variable(
        &self,
        scope: &VariableScope,
        name: &str,
        value: &Value,
    ) -> Result<(), HostError> {
        let request = proto::VariableRequest {
            scope: Some(convert::variable_scope(scope)),
            set: vec![proto::variable_request::Set {
                name: Some(name.into()),
                value: Some(value.to_string()),
            }],
            get: Vec::new(),
        };
        self.variables("set_variable", scope, request).await.map(drop)
    }

    async fn send_text(&self, session: &SessionId, text: &str) -> Result<(), HostError> {
        const OP: &str = "send_text";
        let request = proto::SendTextRequest {
            session: Some(session.to_string()),
            text: Some(text.into()),
            suppress_broadcast: Some(false),
        };
        let reply = self.conn.call(OP, Request::SendTextRequest(request)).await?;
        let status = expect_reply!(reply, SendTextResponse, OP).status;
        check_found(OP, status, 1, session_missing(session))
    }

    async fn split_pane(
        &self,
        session: &SessionId,
        vertical: bool,
        profile: Option<&str>,
    ) -> Result<SessionId, HostError> {
        const OP: &str = "split_pane";
        let direction = if vertical {
            proto::SplitDirection::Vertical
        } else {
            proto::SplitDirection::Horizontal
        };
        let request = proto::SplitPaneRequest {
            session: Some(session.to_string()),
            split_direction: Some(direction as i32),
            before: Some(false),
            profile_name: profile.map(Into::into),
        };
        let reply = self.conn.call(OP, Request::SplitPaneRequest(request)).await?;
        let response = expect_reply!(reply, SplitPaneResponse, OP);
        // SESSION_NOT_FOUND=1, INVALID_PROFILE_NAME=2
        if response.status == Some(2) {
            return Err(HostError::NotFound(format!(
                "Profile '{}' not found",
                profile.unwrap_or_default()
            )));
        }
        check_found(OP, response.status, 1, session_missing(session))?;
        response
            .session_id
            .into_iter()
            .next()
            .map(SessionId::new)
            .ok_or_else(|| HostError::Protocol(format!("{OP}: no session returned")))
    }

    async fn screen_contents(
        &self,
        session: &SessionId,
        lines: Option<u32>,
    ) -> Result<Vec<String>, HostError> {
        const OP: &str = "get_buffer";
        let line_range = match lines {
            Some(n) => proto::LineRange {
                screen_contents_only: None,
                trailing_lines: Some(i32::try_from(n).unwrap_or(i32::MAX)),
            },
            None => proto::LineRange {
                screen_contents_only: Some(true),
                trailing_lines: None,
            },
        };
        let request = proto::GetBufferRequest {
            session: Some(session.to_string()),
            line_range: Some(line_range),
        };
        let reply = self.conn.call(OP, Request::GetBufferRequest(request)).await?;
        let response = expect_reply!(reply, GetBufferResponse, OP);
        check_found(OP, response.status, 1, session_missing(session))?;
        Ok(response
            .contents
            .into_iter()
            .map(|line| line.text.unwrap_or_default())
            .collect())
    }

    async fn activate_session(&self, session: &SessionId) -> Result<(), HostError> {
        let status = self
            .activate(
                "activate_session",
                proto::ActivateRequest {
                    identifier: Some(proto::activate_request::Identifier::SessionId(
                        session.to_string(),
                    )),
                    order_window_front: Some(true),
                    select_tab: Some(true),
                    select_session: Some(true),
                    activate_app: None,
                },
            )
            .await?;
        check_found("activate_session", status, 1, session_missing(session))
    }

    async fn close_sessions(&self, ids: &[SessionId], force: bool) -> Result<(), HostError> {
        let request = proto::CloseRequest {
            sessions: Some(proto::close_request::Sessions {
                session_ids: ids.iter().map(ToString::to_string).collect(),
            }),
            force: Some(force),
            ..Default::default()
        };
        self.close("close_sessions", request).await
    }

    async fn create_tab(&self, request: &CreateTab) -> Result<Option<CreatedTab>, HostError> {
        const OP: &str = "create_tab";
        let wire = proto::CreateTabRequest {
            profile_name: request.profile.clone(),
            window_id: request.window_id.as_ref().map(ToString::to_string),
            tab_index: None,
            command: request.command.clone(),
        };
        let reply = self.conn.call(OP, Request::CreateTabRequest(wire)).await?;
        let response = expect_reply!(reply, CreateTabResponse, OP);
        // INVALID_PROFILE_NAME=1, INVALID_WINDOW_ID=2
        match response.status {
            Some(1) => {
                return Err(HostError::NotFound(format!(
                    "Profile '{}' not found",
                    request.profile.as_deref().unwrap_or_default()
                )))
            }
            Some(2) => {
                return Err(HostError::NotFound(format!(
                    "Window '{}' not found",
                    request.window_id.as_ref().map(WindowId::as_str).unwrap_or_default()
                )))
            }
            status => check(OP, status)?,
        }
        Ok(match (response.window_id, response.tab_id, response.session_id) {
            (Some(window), Some(tab), Some(session)) => Some(CreatedTab {
                window_id: WindowId::new(window),
                tab_id: TabId::new(tab.to_string()),
                session_id: SessionId::new(session),
            }),
            _ => None,
        })
    }

    async fn activate_window(&self, id: &WindowId) -> Result<(), HostError> {
        let status = self
            .activate(
                "activate_window",
                proto::ActivateRequest {
                    identifier: Some(proto::activate_request::Identifier::WindowId(id.to_string())),
                    order_window_front: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        check_found("activate_window", status, 1, window_missing(id))
    }

    async fn activate_tab(&self, id: &TabId) -> Result<(), HostError> {
        let status = self
            .activate(
                "activate_tab",
                proto::ActivateRequest {
                    identifier: Some(proto::activate_request::Identifier::TabId(id.to_string())),
                    order_window_front: Some(true),
                    select_tab: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        check_found("activate_tab", status, 1, || format!("Tab '{id}' not found"))
    }

    async fn close_windows(&self, ids: &[WindowId], force: bool) -> Result<(), HostError> {
        let request = proto::CloseRequest {
            windows: Some(proto::close_request::Windows {
                window_ids: ids.iter().map(ToString::to_string).collect(),
            }),
            force: Some(force),
            ..Default::default()
        };
        self.close("close_windows", request).await
    }

    async fn close_tabs(&self, ids: &[TabId], force: bool) -> Result<(), HostError> {
        let request = proto::CloseRequest {
            tabs: Some(proto::close_request::Tabs {
                tab_ids: ids.iter().map(ToString::to_string).collect(),
            }),
            force: Some(force),
            ..Default::default()
        };
        self.close("close_tabs", request).await
    }

    async fn window_frame(&self, id: &WindowId) -> Result<Frame, HostError> {
        let raw = self.get_window_property(id, "frame").await?;
        convert::frame_from_json(&raw)
    }

    async fn set_window_frame(&self, id: &WindowId, frame: Frame) -> Result<(), HostError> {
        self.set_window_property(id, "frame", convert::frame_to_json(frame))
            .await
    }

    async fn window_fullscreen(&self, id: &WindowId) -> Result<bool, HostError> {
        let raw = self.get_window_property(id, "fullscreen").await?;
        Ok(convert::json_value(&raw).as_bool().unwrap_or(false))
    }

    async fn set_window_fullscreen(&self, id: &WindowId, on: bool) -> Result<(), HostError> {
        self.set_window_property(id, "fullscreen", on.to_string())
            .await
    }

    async fn save_arrangement(&self, name: &str) -> Result<(), HostError> {
        self.arrangement("save_arrangement", proto::SavedArrangementAction::Save, Some(name))
            .await
            .map(drop)
    }

    async fn list_arrangements(&self) -> Result<Vec<String>, HostError> {
        self.arrangement("list_arrangements", proto::SavedArrangementAction::List, None)
            .await
    }

    async fn restore_arrangement(&self, name: &str) -> Result<(), HostError> {
        self.arrangement(
            "restore_arrangement",
            proto::SavedArrangementAction::Restore,
            Some(name),
        )
        .await
        .map(drop)
    }

    async fn list_profiles(
        &self,
        properties: &[&str],
        guids: &[String],
    ) -> Result<Vec<ProfileRecord>, HostError> {
        const OP: &str = "list_profiles";
        let request = proto::ListProfilesRequest {
            properties: properties.iter().map(|p| (*p).to_string()).collect(),
            guids: guids.to_vec(),
        };
        let reply = self.conn.call(OP, Request::ListProfilesRequest(request)).await?;
        let response = expect_reply!(reply, ListProfilesResponse, OP);
        Ok(response
            .profiles
            .into_iter()
            .map(|profile| {
                profile
                    .properties
                    .into_iter()
                    .filter_map(|p| {
                        let key = p.key?;
                        let value = p.json_value.as_deref().map(convert::json_value)?;
                        Some((key, value))
                    })
                    .collect()
            })
            .collect())
    }

    async fn set_profile_properties(
        &self,
        target: &ProfileTarget,
        assignments: &[(String, Value)],
    ) -> Result<(), HostError> {
        use proto::set_profile_property_request::{GuidList, Target};
        const OP: &str = "set_profile_property";
        let request = proto::SetProfilePropertyRequest {
            target: Some(match target {
                ProfileTarget::Guids(guids) => Target::GuidList(GuidList {
                    guids: guids.clone(),
                }),
                ProfileTarget::Session(id) => Target::Session(id.to_string()),
            }),
            assignments: assignments
                .iter()
                .map(|(key, value)| proto::ProfileProperty {
                    key: Some(key.clone()),
                    json_value: Some(value.to_string()),
                })
                .collect(),
        };
        let reply = self
            .conn
            .call(OP, Request::SetProfilePropertyRequest(request))
            .await?;
        let status = expect_reply!(reply, SetProfilePropertyResponse, OP).status;
        // SESSION_NOT_FOUND=1, REQUEST_MALFORMED=2, BAD_GUID=3
        match (status, target) {
            (Some(1), ProfileTarget::Session(id)) => Err(HostError::NotFound(session_missing(id)())),
            (Some(3), ProfileTarget::Guids(_)) => {
                Err(HostError::NotFound("Profile not found".into()))
            }
            (status, _) => check(OP, status),
        }
    }

    async fn subscribe(&self, subscription: Subscription) -> Result<EventStream, HostError> {
        const OP: &str = "subscribe";
        // Register first so nothing sent right after the reply is missed.
        let rx = self
            .conn
            .add_subscriber(convert::event_filter(&subscription))?;
        let request = convert::notification_request(&subscription);
        let reply = self.conn.call(OP, Request::NotificationRequest(request)).await?;
        let status = expect_reply!(reply, NotificationResponse, OP).status;
        // SESSION_NOT_FOUND=1, ALREADY_SUBSCRIBED=4
        match (status, &subscription) {
            (Some(4), _) => {}
            (
                Some(1),
                Subscription::Keystrokes { session }
                | Subscription::ScreenUpdates { session }
                | Subscription::Prompts { session },
            ) => return Err(HostError::NotFound(session_missing(session)())),
            (status, _) => check(OP, status)?,
        }
        tracing::debug!(?subscription, "subscribed");
        Ok(stream::unfold(rx, |mut rx| async move {
            let event = rx.recv().await?;
            Some((event, rx))
        })
        .boxed())
    }
}
