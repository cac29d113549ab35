// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use it2_adapters::{FakeHost, HostCall};
use it2_core::test_support::{layout, session, tab, window};
use it2_core::Layout;
use serial_test::serial;

use super::*;
use crate::exit_error::exit_code;

async fn run_as(host: &FakeHost, command: TabCommand, format: OutputFormat) -> Result<String> {
    let mut out = Vec::new();
    handle(command, host, format, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

async fn run(host: &FakeHost, command: TabCommand) -> Result<String> {
    run_as(host, command, OutputFormat::Text).await
}

fn host() -> FakeHost {
    FakeHost::with_layout(layout(vec![
        window(
            "w1",
            vec![tab("t1", vec![session("s1"), session("s2")]), tab("t2", vec![session("s3")])],
        ),
        window("w2", vec![tab("t3", vec![session("s4")])]),
    ]))
}

#[tokio::test]
async fn new_tab_defaults_to_current_window() {
    let host = host();
    let out = run(&host, TabCommand::New(NewTab::default())).await.unwrap();

    let created = host.current_layout().windows[0].tabs[2].id.clone();
    assert_eq!(out, format!("Created new tab: {created}\n"));
    assert_eq!(
        host.calls(),
        vec![HostCall::CreateTab {
            request: CreateTab {
                window_id: Some(WindowId::new("w1")),
                profile: None,
                command: None,
            }
        }]
    );
}

#[tokio::test]
async fn new_tab_in_named_window() {
    let host = host();
    run(
        &host,
        TabCommand::New(NewTab {
            window: Some("w2".into()),
            profile: Some("Dev".into()),
            command: None,
        }),
    )
    .await
    .unwrap();
    assert_eq!(host.current_layout().windows[1].tabs.len(), 2);
}

#[tokio::test]
async fn new_tab_unknown_window() {
    let host = host();
    let err = run(
        &host,
        TabCommand::New(NewTab {
            window: Some("w9".into()),
            ..NewTab::default()
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Window 'w9' not found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn new_tab_without_windows_opens_one() {
    let host = FakeHost::with_layout(Layout::default());
    run(&host, TabCommand::New(NewTab::default())).await.unwrap();
    assert_eq!(host.current_layout().windows.len(), 1);
}

#[tokio::test]
#[serial]
async fn list_text_table() {
    let host = host();
    let out = run(&host, TabCommand::List).await.unwrap();
    assert_eq!(
        out,
        "ID  WINDOW  SESSIONS  ACTIVE\n\
         t1  w1             2  yes\n\
         t2  w1             1  no\n\
         t3  w2             1  yes\n"
    );
}

#[tokio::test]
async fn list_json() {
    let host = host();
    let out = run_as(&host, TabCommand::List, OutputFormat::Json)
        .await
        .unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        rows[1],
        serde_json::json!({"id": "t2", "window_id": "w1", "sessions": 1, "is_active": false})
    );
}

#[tokio::test]
async fn close_current_tab() {
    let host = host();
    let out = run(&host, TabCommand::Close { id: None, force: false })
        .await
        .unwrap();
    assert_eq!(out, "Tab closed\n");
    assert_eq!(
        host.calls(),
        vec![HostCall::CloseTabs {
            ids: vec![TabId::new("t1")],
            force: false,
        }]
    );
}

#[tokio::test]
async fn close_unknown_tab() {
    let host = host();
    let err = run(
        &host,
        TabCommand::Close {
            id: Some("t9".into()),
            force: true,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Tab 't9' not found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn close_without_current_tab() {
    let host = FakeHost::with_layout(layout(vec![window("w1", vec![])]));
    let err = run(&host, TabCommand::Close { id: None, force: false })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No current tab");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn select_activates_tab() {
    let host = host();
    let out = run(&host, TabCommand::Select { id: "t2".into() })
        .await
        .unwrap();
    assert_eq!(out, "Selected tab: t2\n");
    assert_eq!(
        host.calls(),
        vec![HostCall::ActivateTab {
            id: TabId::new("t2")
        }]
    );
}
