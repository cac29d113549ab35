// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire messages for the iTerm2 scripting API.
//!
//! Field numbers follow iTerm2's `api.proto` (proto2). Only the messages and
//! fields this client reads or writes are declared; prost skips the rest when
//! decoding, so newer servers stay compatible.

// ── Envelope ────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct ClientOriginatedMessage {
    #[prost(int64, optional, tag = "1")]
    pub id: Option<i64>,
    #[prost(
        oneof = "client_originated_message::Submessage",
        tags = "100, 103, 105, 106, 107, 108, 109, 111, 112, 114, 115, 116, 117, 118, 121, 126, 130, 131"
    )]
    pub submessage: Option<client_originated_message::Submessage>,
}

pub mod client_originated_message {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Submessage {
        #[prost(message, tag = "100")]
        GetBufferRequest(super::GetBufferRequest),
        #[prost(message, tag = "103")]
        NotificationRequest(super::NotificationRequest),
        #[prost(message, tag = "105")]
        SetProfilePropertyRequest(super::SetProfilePropertyRequest),
        #[prost(message, tag = "106")]
        ListSessionsRequest(super::ListSessionsRequest),
        #[prost(message, tag = "107")]
        SendTextRequest(super::SendTextRequest),
        #[prost(message, tag = "108")]
        CreateTabRequest(super::CreateTabRequest),
        #[prost(message, tag = "109")]
        SplitPaneRequest(super::SplitPaneRequest),
        #[prost(message, tag = "111")]
        SetPropertyRequest(super::SetPropertyRequest),
        #[prost(message, tag = "112")]
        GetPropertyRequest(super::GetPropertyRequest),
        #[prost(message, tag = "114")]
        ActivateRequest(super::ActivateRequest),
        #[prost(message, tag = "115")]
        VariableRequest(super::VariableRequest),
        #[prost(message, tag = "116")]
        SavedArrangementRequest(super::SavedArrangementRequest),
        #[prost(message, tag = "117")]
        FocusRequest(super::FocusRequest),
        #[prost(message, tag = "118")]
        ListProfilesRequest(super::ListProfilesRequest),
        #[prost(message, tag = "121")]
        MenuItemRequest(super::MenuItemRequest),
        #[prost(message, tag = "126")]
        PreferencesRequest(super::PreferencesRequest),
        #[prost(message, tag = "130")]
        SetBroadcastDomainsRequest(super::SetBroadcastDomainsRequest),
        #[prost(message, tag = "131")]
        CloseRequest(super::CloseRequest),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ServerOriginatedMessage {
    #[prost(int64, optional, tag = "1")]
    pub id: Option<i64>,
    #[prost(string, optional, tag = "2")]
    pub error: Option<String>,
    #[prost(
        oneof = "server_originated_message::Submessage",
        tags = "100, 103, 105, 106, 107, 108, 109, 111, 112, 114, 115, 116, 117, 118, 121, 126, 130, 131, 1000"
    )]
    pub submessage: Option<server_originated_message::Submessage>,
}

pub mod server_originated_message {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Submessage {
        #[prost(message, tag = "100")]
        GetBufferResponse(super::GetBufferResponse),
        #[prost(message, tag = "103")]
        NotificationResponse(super::StatusResponse),
        #[prost(message, tag = "105")]
        SetProfilePropertyResponse(super::StatusResponse),
        #[prost(message, tag = "106")]
        ListSessionsResponse(super::ListSessionsResponse),
        #[prost(message, tag = "107")]
        SendTextResponse(super::StatusResponse),
        #[prost(message, tag = "108")]
        CreateTabResponse(super::CreateTabResponse),
        #[prost(message, tag = "109")]
        SplitPaneResponse(super::SplitPaneResponse),
        #[prost(message, tag = "111")]
        SetPropertyResponse(super::StatusResponse),
        #[prost(message, tag = "112")]
        GetPropertyResponse(super::GetPropertyResponse),
        #[prost(message, tag = "114")]
        ActivateResponse(super::StatusResponse),
        #[prost(message, tag = "115")]
        VariableResponse(super::VariableResponse),
        #[prost(message, tag = "116")]
        SavedArrangementResponse(super::SavedArrangementResponse),
        #[prost(message, tag = "117")]
        FocusResponse(super::FocusResponse),
        #[prost(message, tag = "118")]
        ListProfilesResponse(super::ListProfilesResponse),
        #[prost(message, tag = "121")]
        MenuItemResponse(super::StatusResponse),
        #[prost(message, tag = "126")]
        PreferencesResponse(super::PreferencesResponse),
        #[prost(message, tag = "130")]
        SetBroadcastDomainsResponse(super::StatusResponse),
        #[prost(message, tag = "131")]
        CloseResponse(super::CloseResponse),
        #[prost(message, tag = "1000")]
        Notification(super::Notification),
    }
}

/// Every response whose only field we read is `status = 1`.
///
/// Each response type has its own status enum; all of them use 0 for OK.
#[derive(Clone, PartialEq, prost::Message)]
pub struct StatusResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
}

// ── Geometry ────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct Point {
    #[prost(int32, optional, tag = "1")]
    pub x: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub y: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Size {
    #[prost(int32, optional, tag = "1")]
    pub width: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub height: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Frame {
    #[prost(message, optional, tag = "1")]
    pub origin: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub size: Option<Size>,
}

// ── Sessions and focus ──────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListSessionsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListSessionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub windows: Vec<list_sessions_response::Window>,
}

pub mod list_sessions_response {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Window {
        #[prost(message, repeated, tag = "1")]
        pub tabs: Vec<Tab>,
        #[prost(string, optional, tag = "2")]
        pub window_id: Option<String>,
        #[prost(message, optional, tag = "3")]
        pub frame: Option<super::Frame>,
        #[prost(int32, optional, tag = "4")]
        pub number: Option<i32>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Tab {
        #[prost(string, optional, tag = "2")]
        pub tab_id: Option<String>,
        #[prost(message, optional, tag = "3")]
        pub root: Option<super::SplitTreeNode>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitTreeNode {
    #[prost(bool, optional, tag = "1")]
    pub vertical: Option<bool>,
    #[prost(message, repeated, tag = "2")]
    pub links: Vec<split_tree_node::SplitTreeLink>,
}

pub mod split_tree_node {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct SplitTreeLink {
        #[prost(oneof = "split_tree_link::Child", tags = "1, 2")]
        pub child: Option<split_tree_link::Child>,
    }

    pub mod split_tree_link {
        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Child {
            #[prost(message, tag = "1")]
            Session(super::super::SessionSummary),
            #[prost(message, tag = "2")]
            Node(super::super::SplitTreeNode),
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SessionSummary {
    #[prost(string, optional, tag = "1")]
    pub unique_identifier: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub frame: Option<Frame>,
    #[prost(message, optional, tag = "3")]
    pub grid_size: Option<Size>,
    #[prost(string, optional, tag = "4")]
    pub title: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FocusRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FocusResponse {
    #[prost(message, repeated, tag = "1")]
    pub notifications: Vec<FocusChangedNotification>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FocusChangedNotification {
    #[prost(oneof = "focus_changed_notification::Event", tags = "1, 2, 3, 4")]
    pub event: Option<focus_changed_notification::Event>,
}

pub mod focus_changed_notification {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Event {
        #[prost(bool, tag = "1")]
        ApplicationActive(bool),
        #[prost(message, tag = "2")]
        Window(Window),
        #[prost(string, tag = "3")]
        SelectedTab(String),
        #[prost(string, tag = "4")]
        Session(String),
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Window {
        #[prost(enumeration = "WindowStatus", optional, tag = "1")]
        pub window_status: Option<i32>,
        #[prost(string, optional, tag = "2")]
        pub window_id: Option<String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum WindowStatus {
        TerminalWindowBecameKey = 0,
        TerminalWindowIsCurrent = 1,
        TerminalWindowResignedKey = 2,
    }
}

// ── Text, buffers, splits ───────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct SendTextRequest {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub text: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub suppress_broadcast: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetBufferRequest {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub line_range: Option<LineRange>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LineRange {
    #[prost(bool, optional, tag = "1")]
    pub screen_contents_only: Option<bool>,
    #[prost(int32, optional, tag = "2")]
    pub trailing_lines: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetBufferResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(message, repeated, tag = "3")]
    pub contents: Vec<LineContents>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LineContents {
    #[prost(string, optional, tag = "1")]
    pub text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SplitDirection {
    Vertical = 0,
    Horizontal = 1,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitPaneRequest {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
    #[prost(enumeration = "SplitDirection", optional, tag = "2")]
    pub split_direction: Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub before: Option<bool>,
    #[prost(string, optional, tag = "4")]
    pub profile_name: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitPaneResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, repeated, tag = "2")]
    pub session_id: Vec<String>,
}

// ── Windows and tabs ────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateTabRequest {
    #[prost(string, optional, tag = "1")]
    pub profile_name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub window_id: Option<String>,
    #[prost(uint32, optional, tag = "3")]
    pub tab_index: Option<u32>,
    #[prost(string, optional, tag = "4")]
    pub command: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateTabResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub window_id: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub tab_id: Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub session_id: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ActivateRequest {
    #[prost(oneof = "activate_request::Identifier", tags = "1, 2, 3")]
    pub identifier: Option<activate_request::Identifier>,
    #[prost(bool, optional, tag = "4")]
    pub order_window_front: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub select_tab: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub select_session: Option<bool>,
    #[prost(message, optional, tag = "7")]
    pub activate_app: Option<activate_request::App>,
}

pub mod activate_request {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Identifier {
        #[prost(string, tag = "1")]
        WindowId(String),
        #[prost(string, tag = "2")]
        TabId(String),
        #[prost(string, tag = "3")]
        SessionId(String),
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct App {
        #[prost(bool, optional, tag = "1")]
        pub raise_all_windows: Option<bool>,
        #[prost(bool, optional, tag = "2")]
        pub ignoring_other_apps: Option<bool>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CloseRequest {
    #[prost(message, optional, tag = "1")]
    pub tabs: Option<close_request::Tabs>,
    #[prost(message, optional, tag = "2")]
    pub sessions: Option<close_request::Sessions>,
    #[prost(message, optional, tag = "3")]
    pub windows: Option<close_request::Windows>,
    #[prost(bool, optional, tag = "4")]
    pub force: Option<bool>,
}

pub mod close_request {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Tabs {
        #[prost(string, repeated, tag = "1")]
        pub tab_ids: Vec<String>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Sessions {
        #[prost(string, repeated, tag = "1")]
        pub session_ids: Vec<String>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Windows {
        #[prost(string, repeated, tag = "1")]
        pub window_ids: Vec<String>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CloseResponse {
    #[prost(int32, repeated, packed = "false", tag = "1")]
    pub statuses: Vec<i32>,
}

// ── Properties and variables ────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPropertyRequest {
    #[prost(oneof = "property_target::Target", tags = "1, 3")]
    pub target: Option<property_target::Target>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPropertyResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub json_value: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SetPropertyRequest {
    #[prost(oneof = "property_target::SetTarget", tags = "1, 4")]
    pub target: Option<property_target::SetTarget>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub json_value: Option<String>,
}

/// Get and set disagree on the session tag, hence two oneofs.
pub mod property_target {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Target {
        #[prost(string, tag = "1")]
        WindowId(String),
        #[prost(string, tag = "3")]
        SessionId(String),
    }

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum SetTarget {
        #[prost(string, tag = "1")]
        WindowId(String),
        #[prost(string, tag = "4")]
        SessionId(String),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VariableRequest {
    #[prost(oneof = "variable_request::Scope", tags = "1, 2, 3, 6")]
    pub scope: Option<variable_request::Scope>,
    #[prost(message, repeated, tag = "4")]
    pub set: Vec<variable_request::Set>,
    #[prost(string, repeated, tag = "5")]
    pub get: Vec<String>,
}

pub mod variable_request {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Scope {
        #[prost(string, tag = "1")]
        SessionId(String),
        #[prost(string, tag = "2")]
        TabId(String),
        #[prost(bool, tag = "3")]
        App(bool),
        #[prost(string, tag = "6")]
        WindowId(String),
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Set {
        #[prost(string, optional, tag = "1")]
        pub name: Option<String>,
        #[prost(string, optional, tag = "2")]
        pub value: Option<String>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VariableResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, repeated, tag = "2")]
    pub values: Vec<String>,
}

// ── App-level ───────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct MenuItemRequest {
    #[prost(string, optional, tag = "1")]
    pub identifier: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub query_only: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PreferencesRequest {
    #[prost(message, repeated, tag = "1")]
    pub requests: Vec<preferences_request::Request>,
}

pub mod preferences_request {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Request {
        #[prost(oneof = "request::Kind", tags = "1, 2")]
        pub kind: Option<request::Kind>,
    }

    pub mod request {
        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Kind {
            #[prost(message, tag = "1")]
            SetPreference(SetPreference),
            #[prost(message, tag = "2")]
            GetPreference(GetPreference),
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct SetPreference {
            #[prost(string, optional, tag = "1")]
            pub key: Option<String>,
            #[prost(string, optional, tag = "2")]
            pub json_value: Option<String>,
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct GetPreference {
            #[prost(string, optional, tag = "1")]
            pub key: Option<String>,
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PreferencesResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<preferences_response::PreferenceResult>,
}

pub mod preferences_response {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct PreferenceResult {
        #[prost(oneof = "preference_result::Kind", tags = "1, 2, 3")]
        pub kind: Option<preference_result::Kind>,
    }

    pub mod preference_result {
        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum Kind {
            #[prost(message, tag = "1")]
            UnrecognizedRequest(Empty),
            #[prost(message, tag = "2")]
            SetPreferenceResult(super::super::StatusResponse),
            #[prost(message, tag = "3")]
            GetPreferenceResult(GetPreferenceResult),
        }

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct Empty {}

        #[derive(Clone, PartialEq, prost::Message)]
        pub struct GetPreferenceResult {
            #[prost(string, optional, tag = "1")]
            pub json_value: Option<String>,
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SetBroadcastDomainsRequest {
    #[prost(message, repeated, tag = "1")]
    pub broadcast_domains: Vec<BroadcastDomain>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BroadcastDomain {
    #[prost(string, repeated, tag = "1")]
    pub session_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SavedArrangementAction {
    Restore = 0,
    Save = 1,
    List = 2,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SavedArrangementRequest {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(enumeration = "SavedArrangementAction", optional, tag = "2")]
    pub action: Option<i32>,
    #[prost(string, optional, tag = "3")]
    pub window_id: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SavedArrangementResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(string, repeated, tag = "2")]
    pub names: Vec<String>,
}

// ── Profiles ────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListProfilesRequest {
    #[prost(string, repeated, tag = "1")]
    pub properties: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub guids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListProfilesResponse {
    #[prost(message, repeated, tag = "1")]
    pub profiles: Vec<list_profiles_response::Profile>,
}

pub mod list_profiles_response {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Profile {
        #[prost(message, repeated, tag = "1")]
        pub properties: Vec<super::ProfileProperty>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProfileProperty {
    #[prost(string, optional, tag = "1")]
    pub key: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub json_value: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SetProfilePropertyRequest {
    #[prost(oneof = "set_profile_property_request::Target", tags = "1, 4")]
    pub target: Option<set_profile_property_request::Target>,
    #[prost(message, repeated, tag = "5")]
    pub assignments: Vec<ProfileProperty>,
}

pub mod set_profile_property_request {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Target {
        #[prost(string, tag = "1")]
        Session(String),
        #[prost(message, tag = "4")]
        GuidList(GuidList),
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GuidList {
        #[prost(string, repeated, tag = "1")]
        pub guids: Vec<String>,
    }
}

// ── Notifications ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum NotificationType {
    NotifyOnKeystroke = 1,
    NotifyOnScreenUpdate = 2,
    NotifyOnPrompt = 3,
    NotifyOnVariableChange = 13,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum VariableScope {
    Session = 1,
    Tab = 2,
    Window = 3,
    App = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum PromptMonitorMode {
    Prompt = 1,
    CommandStart = 2,
    CommandEnd = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NotificationRequest {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub subscribe: Option<bool>,
    #[prost(enumeration = "NotificationType", optional, tag = "3")]
    pub notification_type: Option<i32>,
    #[prost(oneof = "notification_request::Arguments", tags = "5, 6, 9")]
    pub arguments: Option<notification_request::Arguments>,
}

pub mod notification_request {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Arguments {
        #[prost(message, tag = "5")]
        KeystrokeMonitorRequest(super::KeystrokeMonitorRequest),
        #[prost(message, tag = "6")]
        VariableMonitorRequest(super::VariableMonitorRequest),
        #[prost(message, tag = "9")]
        PromptMonitorRequest(super::PromptMonitorRequest),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct KeystrokeMonitorRequest {
    #[prost(bool, optional, tag = "2")]
    pub advanced: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VariableMonitorRequest {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(enumeration = "VariableScope", optional, tag = "2")]
    pub scope: Option<i32>,
    #[prost(string, optional, tag = "3")]
    pub identifier: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PromptMonitorRequest {
    #[prost(enumeration = "PromptMonitorMode", repeated, packed = "false", tag = "1")]
    pub modes: Vec<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Notification {
    #[prost(message, optional, tag = "1")]
    pub keystroke_notification: Option<KeystrokeNotification>,
    #[prost(message, optional, tag = "2")]
    pub screen_update_notification: Option<ScreenUpdateNotification>,
    #[prost(message, optional, tag = "3")]
    pub prompt_notification: Option<PromptNotification>,
    #[prost(message, optional, tag = "12")]
    pub variable_changed_notification: Option<VariableChangedNotification>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct KeystrokeNotification {
    #[prost(string, optional, tag = "1")]
    pub characters: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub session: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ScreenUpdateNotification {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PromptNotification {
    #[prost(string, optional, tag = "1")]
    pub session: Option<String>,
    #[prost(oneof = "prompt_notification::Event", tags = "2, 3, 4")]
    pub event: Option<prompt_notification::Event>,
}

pub mod prompt_notification {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Event {
        #[prost(message, tag = "2")]
        Prompt(Prompt),
        #[prost(message, tag = "3")]
        CommandStart(CommandStart),
        #[prost(message, tag = "4")]
        CommandEnd(CommandEnd),
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Prompt {}

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct CommandStart {
        #[prost(string, optional, tag = "1")]
        pub command: Option<String>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct CommandEnd {
        #[prost(int32, optional, tag = "1")]
        pub status: Option<i32>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VariableChangedNotification {
    #[prost(enumeration = "VariableScope", optional, tag = "1")]
    pub scope: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub identifier: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub json_new_value: Option<String>,
}
