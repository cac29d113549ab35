// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use it2_adapters::{FakeHost, HostCall};
use it2_core::test_support::{layout, session, single_session_layout, tab, window};
use it2_core::Layout;
use serde_json::json;
use serial_test::serial;
use yare::parameterized;

use super::*;
use crate::exit_error::exit_code;

async fn run_as(host: &FakeHost, command: SessionCommand, format: OutputFormat) -> Result<String> {
    let mut out = Vec::new();
    handle(command, host, format, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

async fn run(host: &FakeHost, command: SessionCommand) -> Result<String> {
    run_as(host, command, OutputFormat::Text).await
}

fn host() -> FakeHost {
    FakeHost::with_layout(layout(vec![
        window("w1", vec![tab("t1", vec![session("s1"), session("s2")])]),
        window("w2", vec![tab("t2", vec![session("s3")])]),
    ]))
}

fn targets(session: Option<&str>, all: bool) -> Targets {
    Targets {
        session: session.map(str::to_string),
        all,
    }
}

fn sent(host: &FakeHost) -> Vec<(String, String)> {
    host.calls()
        .into_iter()
        .filter_map(|c| match c {
            HostCall::SendText { session, text } => Some((session.to_string(), text)),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn send_goes_to_active_session_quietly() {
    let host = host();
    let out = run(
        &host,
        SessionCommand::Send(SendArgs {
            text: "ls".into(),
            targets: Targets::default(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(out, "");
    assert_eq!(sent(&host), vec![("s1".into(), "ls".into())]);
}

#[parameterized(
    all_flag = { None, true },
    all_keyword = { Some("all"), false },
)]
#[test_macro(tokio::test)]
async fn send_to_all_sessions(session: Option<&str>, all: bool) {
    let host = host();
    run(
        &host,
        SessionCommand::Send(SendArgs {
            text: "x".into(),
            targets: targets(session, all),
        }),
    )
    .await
    .unwrap();
    let ids: Vec<String> = sent(&host).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);
}

#[tokio::test]
async fn run_appends_carriage_return() {
    let host = host();
    run(
        &host,
        SessionCommand::Run(RunArgs {
            command: "make".into(),
            targets: targets(Some("s3"), false),
        }),
    )
    .await
    .unwrap();
    assert_eq!(sent(&host), vec![("s3".into(), "make\r".into())]);
}

#[tokio::test]
async fn clear_sends_form_feed() {
    let host = host();
    run(
        &host,
        SessionCommand::Clear(ClearArgs {
            targets: targets(Some("s2"), false),
        }),
    )
    .await
    .unwrap();
    assert_eq!(sent(&host), vec![("s2".into(), "\x0c".into())]);
}

#[tokio::test]
async fn send_to_unknown_session_is_not_found() {
    let host = host();
    let err = run(
        &host,
        SessionCommand::Send(SendArgs {
            text: "x".into(),
            targets: targets(Some("ghost"), false),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Session 'ghost' not found");
    assert_eq!(exit_code(&err), 3);
    assert!(sent(&host).is_empty());
}

#[tokio::test]
async fn send_without_current_window() {
    let host = FakeHost::with_layout(Layout::default());
    let err = run(
        &host,
        SessionCommand::Send(SendArgs {
            text: "x".into(),
            targets: Targets::default(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "No active window found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn split_reports_new_pane() {
    let host = host();
    let out = run(
        &host,
        SessionCommand::Split(SplitArgs {
            vertical: true,
            profile: None,
            target: Target::default(),
        }),
    )
    .await
    .unwrap();

    let created = host.current_layout().windows[0].tabs[0].sessions[2].id.clone();
    assert_eq!(out, format!("Created new pane: {created}\n"));
    assert_eq!(
        host.calls(),
        vec![HostCall::SplitPane {
            session: SessionId::new("s1"),
            vertical: true,
            profile: None,
        }]
    );
}

#[tokio::test]
#[serial]
async fn list_text_table() {
    let host = FakeHost::with_layout(single_session_layout("w1", "t1", "s1"));
    let scope = VariableScope::Session(SessionId::new("s1"));
    host.set_variable_value(scope.clone(), "session.name", json!("zsh"));
    host.set_variable_value(scope.clone(), "session.title", json!("~/src"));
    host.set_variable_value(scope.clone(), "session.tty", json!("/dev/ttys001"));
    host.set_variable_value(scope, "session.tmux", json!("yes"));

    let out = run(&host, SessionCommand::List).await.unwrap();
    assert_eq!(
        out,
        "ID  NAME  TITLE  TTY            SIZE  TMUX\n\
         s1  zsh   ~/src  /dev/ttys001  80x24  yes\n"
    );
}

#[tokio::test]
async fn list_json_with_unset_variables() {
    let host = FakeHost::with_layout(single_session_layout("w1", "t1", "s1"));
    let out = run_as(&host, SessionCommand::List, OutputFormat::Json)
        .await
        .unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        rows,
        json!([{
            "id": "s1",
            "name": "",
            "title": "",
            "tty": "",
            "rows": 24,
            "cols": 80,
            "is_tmux": false,
        }])
    );
}

#[tokio::test]
async fn close_resolved_session() {
    let host = host();
    let out = run(
        &host,
        SessionCommand::Close {
            target: Target {
                session: Some("s2".into()),
            },
            force: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(out, "Session closed\n");
    assert_eq!(
        host.calls(),
        vec![HostCall::CloseSessions {
            ids: vec![SessionId::new("s2")],
            force: true,
        }]
    );
}

#[tokio::test]
async fn focus_activates_session() {
    let host = host();
    let out = run(&host, SessionCommand::Focus { id: "s3".into() })
        .await
        .unwrap();
    assert_eq!(out, "Focused session: s3\n");
    assert_eq!(
        host.current_layout().current_session().map(|s| s.id.to_string()),
        Some("s3".to_string())
    );
}

#[tokio::test]
async fn read_prints_screen_lines() {
    let host = host();
    host.set_screen("s1", &["$ make", "ok", "$"]);
    let out = run(
        &host,
        SessionCommand::Read {
            target: Target::default(),
            lines: Some(2),
        },
    )
    .await
    .unwrap();
    assert_eq!(out, "ok\n$\n");
}

#[tokio::test]
async fn get_var_displays_value() {
    let host = host();
    host.set_variable_value(
        VariableScope::Session(SessionId::new("s1")),
        "session.columns",
        json!(80),
    );
    let out = run(
        &host,
        SessionCommand::GetVar {
            name: "session.columns".into(),
            target: Target::default(),
        },
    )
    .await
    .unwrap();
    assert_eq!(out, "80\n");
}

#[parameterized(
    bare = { "project", "user.project" },
    prefixed = { "user.project", "user.project" },
)]
#[test_macro(tokio::test)]
async fn set_var_writes_user_variable(name: &str, stored: &str) {
    let host = host();
    run(
        &host,
        SessionCommand::SetVar {
            name: name.into(),
            value: "it2".into(),
            target: Target::default(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        host.calls(),
        vec![HostCall::SetVariable {
            scope: VariableScope::Session(SessionId::new("s1")),
            name: stored.into(),
            value: json!("it2"),
        }]
    );
}
