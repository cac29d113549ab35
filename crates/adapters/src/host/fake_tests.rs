// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use it2_core::test_support::single_session_layout;
use it2_core::PromptEvent;
use serde_json::json;

fn host() -> FakeHost {
    FakeHost::with_layout(single_session_layout("w1", "t1", "s1"))
}

#[tokio::test]
async fn create_tab_without_window_opens_window() {
    let host = host();
    let created = host
        .create_tab(&CreateTab::default())
        .await
        .unwrap()
        .unwrap();

    let layout = host.current_layout();
    assert_eq!(layout.windows.len(), 2);
    assert_eq!(layout.window(created.window_id.as_str()).unwrap().tabs.len(), 1);
    assert!(layout.session_by_id(created.session_id.as_str()).is_some());
}

#[tokio::test]
async fn create_tab_in_existing_window() {
    let host = host();
    let request = CreateTab {
        window_id: Some(WindowId::new("w1")),
        ..CreateTab::default()
    };
    let created = host.create_tab(&request).await.unwrap().unwrap();
    assert_eq!(created.window_id, "w1");

    let layout = host.current_layout();
    let window = layout.window("w1").unwrap();
    assert_eq!(window.tabs.len(), 2);
    assert_eq!(window.current_tab().unwrap().id, created.tab_id);
}

#[tokio::test]
async fn create_tab_in_missing_window_is_not_found() {
    let host = host();
    let request = CreateTab {
        window_id: Some(WindowId::new("nope")),
        ..CreateTab::default()
    };
    let err = host.create_tab(&request).await.unwrap_err();
    assert!(matches!(err, HostError::NotFound(msg) if msg == "Window 'nope' not found"));
}

#[tokio::test]
async fn fail_window_creation_yields_none() {
    let host = host();
    host.fail_window_creation();
    assert!(host.create_tab(&CreateTab::default()).await.unwrap().is_none());
    assert_eq!(host.current_layout().windows.len(), 1);
}

#[tokio::test]
async fn send_text_records_and_checks_session() {
    let host = host();
    host.send_text(&SessionId::new("s1"), "ls\r").await.unwrap();
    let err = host.send_text(&SessionId::new("s9"), "x").await.unwrap_err();
    assert!(matches!(err, HostError::NotFound(_)));

    assert_eq!(
        host.calls()[0],
        HostCall::SendText {
            session: SessionId::new("s1"),
            text: "ls\r".into()
        }
    );
}

#[tokio::test]
async fn split_adds_session_to_same_tab() {
    let host = host();
    let new_id = host
        .split_pane(&SessionId::new("s1"), true, None)
        .await
        .unwrap();
    let layout = host.current_layout();
    assert_eq!(layout.tab_of_session(new_id.as_str()).unwrap().id, "t1");
}

#[tokio::test]
async fn queued_variable_values_repeat_last() {
    let host = host();
    let scope = VariableScope::Session(SessionId::new("s1"));
    host.queue_variable_values(scope.clone(), "session.isActive", vec![json!(false), json!(true)]);

    let reads = [
        host.get_variable(&scope, "session.isActive").await.unwrap(),
        host.get_variable(&scope, "session.isActive").await.unwrap(),
        host.get_variable(&scope, "session.isActive").await.unwrap(),
    ];
    assert_eq!(reads, [json!(false), json!(true), json!(true)]);
}

#[tokio::test]
async fn unset_variable_reads_null() {
    let host = host();
    let value = host.get_variable(&VariableScope::App, "missing").await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn screen_contents_trailing_lines() {
    let host = host();
    host.set_screen("s1", &["one", "two", "three"]);
    let lines = host
        .screen_contents(&SessionId::new("s1"), Some(2))
        .await
        .unwrap();
    assert_eq!(lines, vec!["two", "three"]);
}

#[tokio::test]
async fn restore_unknown_arrangement() {
    let host = host();
    host.add_arrangement("work");
    host.restore_arrangement("work").await.unwrap();
    let err = host.restore_arrangement("play").await.unwrap_err();
    assert_eq!(err.to_string(), "Arrangement 'play' not found");
}

#[tokio::test]
async fn profile_listing_filters_properties() {
    let host = host();
    let mut record = ProfileRecord::new();
    record.insert("Guid".into(), json!("g1"));
    record.insert("Name".into(), json!("Default"));
    record.insert("Normal Font".into(), json!("Monaco 12"));
    host.add_profile(record);

    let listed = host.list_profiles(&["Name"], &[]).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].len(), 1);
    assert_eq!(listed[0]["Name"], "Default");

    let none = host.list_profiles(&[], &["g2".into()]).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn set_profile_properties_updates_by_guid() {
    let host = host();
    let mut record = ProfileRecord::new();
    record.insert("Guid".into(), json!("g1"));
    host.add_profile(record);

    host.set_profile_properties(
        &ProfileTarget::Guids(vec!["g1".into()]),
        &[("Badge Text".into(), json!("prod"))],
    )
    .await
    .unwrap();
    assert_eq!(host.profiles()[0]["Badge Text"], "prod");
}

#[tokio::test]
async fn subscription_replays_scripted_events_then_ends() {
    use futures_util::StreamExt;

    let host = host();
    let sub = Subscription::Prompts {
        session: SessionId::new("s1"),
    };
    host.push_events(sub.clone(), vec![HostEvent::Prompt(PromptEvent::Prompt)]);

    let events: Vec<HostEvent> = host.subscribe(sub).await.unwrap().collect().await;
    assert_eq!(events, vec![HostEvent::Prompt(PromptEvent::Prompt)]);
}

#[tokio::test]
async fn activate_tab_moves_focus() {
    let host = FakeHost::with_layout(it2_core::test_support::layout(vec![
        it2_core::test_support::window("w1", vec![it2_core::test_support::tab("t1", vec![])]),
        it2_core::test_support::window("w2", vec![it2_core::test_support::tab("t2", vec![])]),
    ]));
    host.activate_tab(&TabId::new("t2")).await.unwrap();
    let layout = host.current_layout();
    assert_eq!(layout.current_window().unwrap().id, "w2");
}
