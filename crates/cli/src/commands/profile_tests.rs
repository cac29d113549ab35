// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use it2_adapters::{FakeHost, HostCall};
use it2_core::test_support::single_session_layout;
use serde_json::json;
use serial_test::serial;
use yare::parameterized;

use super::*;
use crate::exit_error::exit_code;

async fn run_as(host: &FakeHost, command: ProfileCommand, format: OutputFormat) -> Result<String> {
    let mut out = Vec::new();
    handle(command, host, format, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

async fn run(host: &FakeHost, command: ProfileCommand) -> Result<String> {
    run_as(host, command, OutputFormat::Text).await
}

fn rgb(hex: &str) -> Value {
    hex.parse::<Color>().unwrap().to_json()
}

fn record(guid: &str, name: &str) -> ProfileRecord {
    [
        (keys::GUID, json!(guid)),
        (keys::NAME, json!(name)),
        (keys::NORMAL_FONT, json!("Monaco 12")),
        (keys::BACKGROUND_COLOR, rgb("#1a1a1a")),
        (keys::FOREGROUND_COLOR, rgb("#c7c8c9")),
        (keys::TRANSPARENCY, json!(0.1)),
        (keys::BLUR, json!(false)),
        (keys::CURSOR_COLOR, rgb("#bbbbbb")),
        (keys::SELECTION_COLOR, rgb("#1a0133")),
        (keys::BADGE_TEXT, json!("")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn host() -> FakeHost {
    let host = FakeHost::with_layout(single_session_layout("w1", "t1", "s1"));
    host.add_profile(record("G-1", "Default"));
    host.add_profile(record("G-2", "Dev"));
    host
}

fn stored(host: &FakeHost, guid: &str, key: &str) -> Value {
    host.profiles()
        .into_iter()
        .find(|p| p.get(keys::GUID) == Some(&json!(guid)))
        .and_then(|p| p.get(key).cloned())
        .unwrap_or(Value::Null)
}

#[tokio::test]
#[serial]
async fn list_text_table() {
    let out = run(&host(), ProfileCommand::List).await.unwrap();
    assert_eq!(out, "GUID  NAME\nG-1   Default\nG-2   Dev\n");
}

#[tokio::test]
async fn list_json() {
    let out = run_as(&host(), ProfileCommand::List, OutputFormat::Json)
        .await
        .unwrap();
    let rows: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        rows,
        json!([{"guid": "G-1", "name": "Default"}, {"guid": "G-2", "name": "Dev"}])
    );
}

#[tokio::test]
async fn show_text() {
    let out = run(&host(), ProfileCommand::Show { name: "Dev".into() })
        .await
        .unwrap();
    assert_eq!(
        out,
        "Profile: Dev\n\
         GUID: G-2\n\
         Font: Monaco 12pt\n\
         Background: #1a1a1a\n\
         Foreground: #c7c8c9\n\
         Transparency: 0.1\n\
         Blur: false\n\
         Cursor Color: #bbbbbb\n\
         Selection Color: #1a0133\n"
    );
}

#[tokio::test]
async fn show_text_includes_badge_when_set() {
    let host = FakeHost::new();
    let mut dev = record("G-2", "Dev");
    dev.insert(keys::BADGE_TEXT.into(), json!("prod"));
    host.add_profile(dev);

    let out = run(&host, ProfileCommand::Show { name: "Dev".into() })
        .await
        .unwrap();
    assert!(out.ends_with("Badge Text: prod\n"), "{out}");
}

#[tokio::test]
async fn show_json_fields() {
    let out = run_as(
        &host(),
        ProfileCommand::Show {
            name: "Default".into(),
        },
        OutputFormat::Json,
    )
    .await
    .unwrap();
    let details: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        details,
        json!({
            "guid": "G-1",
            "name": "Default",
            "font": "Monaco 12",
            "font_size": 12.0,
            "background_color": "#1a1a1a",
            "foreground_color": "#c7c8c9",
            "transparency": 0.1,
            "blur": false,
            "cursor_color": "#bbbbbb",
            "selection_color": "#1a0133",
            "badge_text": "",
        })
    );
}

#[tokio::test]
async fn show_unknown_profile() {
    let err = run(&host(), ProfileCommand::Show { name: "Nope".into() })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Profile 'Nope' not found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn apply_copies_properties_to_current_session() {
    let host = host();
    let out = run(
        &host,
        ProfileCommand::Apply {
            name: "Dev".into(),
            session: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(out, "Applied profile 'Dev' to session\n");

    let calls = host.calls();
    let [HostCall::SetProfileProperties {
        target,
        assignments,
    }] = calls.as_slice()
    else {
        panic!("unexpected calls: {calls:?}");
    };
    assert_eq!(*target, ProfileTarget::Session(SessionId::new("s1")));
    assert!(assignments.iter().all(|(k, _)| k != keys::GUID));
    assert!(assignments
        .iter()
        .any(|(k, v)| k == keys::NAME && *v == json!("Dev")));
}

#[tokio::test]
async fn apply_unknown_session() {
    let err = run(
        &host(),
        ProfileCommand::Apply {
            name: "Dev".into(),
            session: Some("ghost".into()),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Session 'ghost' not found");
    assert_eq!(exit_code(&err), 3);
}

#[tokio::test]
async fn apply_unknown_profile_checked_first() {
    let host = FakeHost::new();
    let err = run(
        &host,
        ProfileCommand::Apply {
            name: "Dev".into(),
            session: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Profile 'Dev' not found");
}

#[tokio::test]
async fn apply_without_current_window() {
    let host = FakeHost::new();
    host.add_profile(record("G-2", "Dev"));
    let err = run(
        &host,
        ProfileCommand::Apply {
            name: "Dev".into(),
            session: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "No current window");
    assert_eq!(exit_code(&err), 3);
}

#[parameterized(
    font_size = { "font-size", "14", keys::NORMAL_FONT, json!("Monaco 14") },
    font_family = { "font-family", "Menlo", keys::NORMAL_FONT, json!("Menlo 12") },
    bg = { "bg-color", "#000000", keys::BACKGROUND_COLOR, rgb("#000000") },
    fg_no_hash = { "fg-color", "ffffff", keys::FOREGROUND_COLOR, rgb("#ffffff") },
    transparency = { "transparency", "0.25", keys::TRANSPARENCY, json!(0.25) },
    blur = { "blur", "TRUE", keys::BLUR, json!(true) },
    badge = { "badge-text", "prod", keys::BADGE_TEXT, json!("prod") },
)]
#[test_macro(tokio::test)]
async fn set_updates_one_property(property: &str, value: &str, key: &str, expected: Value) {
    let host = host();
    let out = run(
        &host,
        ProfileCommand::Set {
            name: "Dev".into(),
            property: property.into(),
            value: value.into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(out, format!("Set {property} = {value} for profile 'Dev'\n"));
    assert_eq!(stored(&host, "G-2", key), expected);
    assert_eq!(stored(&host, "G-1", key), record("G-1", "Default")[key]);
}

#[tokio::test]
async fn set_unknown_property_is_invalid_input() {
    let err = run(
        &host(),
        ProfileCommand::Set {
            name: "Dev".into(),
            property: "opacity".into(),
            value: "1".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Unknown property: opacity");
    assert_eq!(exit_code(&err), 4);
}

#[parameterized(
    bad_color = { "bg-color", "red" },
    short_color = { "cursor-color", "#fff" },
    bad_size = { "font-size", "big" },
    bad_transparency = { "transparency", "clear" },
)]
#[test_macro(tokio::test)]
async fn set_bad_value_is_invalid_input(property: &str, value: &str) {
    let host = host();
    let err = run(
        &host,
        ProfileCommand::Set {
            name: "Dev".into(),
            property: property.into(),
            value: value.into(),
        },
    )
    .await
    .unwrap_err();
    assert!(
        err.to_string().starts_with("Failed to set property: "),
        "{err}"
    );
    assert_eq!(exit_code(&err), 4);
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn set_unknown_profile_is_not_found() {
    let err = run(
        &host(),
        ProfileCommand::Set {
            name: "Nope".into(),
            property: "opacity".into(),
            value: "1".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Profile 'Nope' not found");
    assert_eq!(exit_code(&err), 3);
}
