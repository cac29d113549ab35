// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use it2_adapters::FakeHost;
use it2_core::test_support::{layout, single_session_layout, tab, window};
use it2_core::Layout;
use serde_json::json;

use super::*;
use crate::exit_error::exit_code;

#[test]
fn current_tab_of_single_session_layout() {
    let layout = single_session_layout("w1", "t1", "s1");
    assert_eq!(current_tab(&layout).unwrap().id, *"t1");
}

#[test]
fn no_window_is_not_found() {
    let err = current_window(&Layout::default()).unwrap_err();
    assert_eq!(err.to_string(), "No current window");
    assert_eq!(exit_code(&err), 3);
}

#[test]
fn window_without_tabs_has_no_current_tab() {
    let layout = layout(vec![window("w1", vec![])]);
    let err = current_tab(&layout).unwrap_err();
    assert_eq!(err.to_string(), "No current tab");
    assert_eq!(exit_code(&err), 3);
}

#[test]
fn window_or_current_prefers_explicit_id() {
    let layout = layout(vec![
        window("w1", vec![tab("t1", vec![])]),
        window("w2", vec![tab("t2", vec![])]),
    ]);
    assert_eq!(window_id(&layout, Some("w2")).unwrap(), *"w2");
    assert_eq!(window_id(&layout, None).unwrap(), *"w1");
}

#[test]
fn window_or_current_unknown_id() {
    let layout = single_session_layout("w1", "t1", "s1");
    let err = window_or_current(&layout, Some("nope")).unwrap_err();
    assert_eq!(err.to_string(), "Window 'nope' not found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn session_name_defaults_to_empty() {
    let host = FakeHost::with_layout(single_session_layout("w1", "t1", "s1"));
    let id = SessionId::new("s1");
    assert_eq!(session_name(&host, &id).await.unwrap(), "");

    host.set_variable_value(
        VariableScope::Session(id.clone()),
        "session.name",
        json!("zsh"),
    );
    assert_eq!(session_name(&host, &id).await.unwrap(), "zsh");
}
