// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events pushed by the host to monitor subscriptions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shell-integration prompt lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PromptEvent {
    /// A new prompt was drawn.
    Prompt,
    CommandStarted { command: String },
    CommandFinished { status: i32 },
}

/// One event from a monitor stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Keystroke { characters: String },
    /// The screen changed; fetch contents to see what.
    ScreenUpdated,
    Prompt(PromptEvent),
    VariableChanged { value: Value },
}

/// Render a variable value the way a user typed it: strings bare, the rest
/// as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
