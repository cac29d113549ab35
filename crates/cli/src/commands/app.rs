// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 app` - Application-level commands

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use it2_adapters::{HostAdapter, VariableScope};
use it2_core::{lookup, SessionId};
use serde_json::{json, Value};

use super::{current_tab, session_name};
use crate::exit_error::ExitError;

const MENU_HIDE: &str = "Hide iTerm2";
const MENU_QUIT: &str = "Quit iTerm2";
const PREF_THEME: &str = "TabStyleWithAutomaticOption";
const PREF_VERSION: &str = "iTerm Version";

#[derive(Args)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Subcommand)]
pub enum AppCommand {
    /// Activate iTerm2 (bring to front)
    Activate,
    /// Hide iTerm2
    Hide,
    /// Quit iTerm2
    Quit {
        /// Force quit without confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Show iTerm2 version
    Version,
    /// Show or set the iTerm2 theme
    Theme {
        /// Theme to set; omit to show the current one
        value: Option<Theme>,
    },
    /// Show the focused window, tab, and session
    GetFocus,
    /// Input broadcasting
    Broadcast {
        #[command(subcommand)]
        command: BroadcastCommand,
    },
}

#[derive(Subcommand)]
pub enum BroadcastCommand {
    /// Broadcast input to every session in the current tab
    On,
    /// Stop broadcasting input
    Off,
    /// Create a broadcast group from the given sessions
    Add {
        #[arg(required = true)]
        session_ids: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
    LightHc,
    DarkHc,
    Automatic,
    Minimal,
}

impl Theme {
    fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::LightHc => "light-hc",
            Self::DarkHc => "dark-hc",
            Self::Automatic => "automatic",
            Self::Minimal => "minimal",
        }
    }

    /// Preference value iTerm2 stores for this theme.
    fn preference_value(self) -> i64 {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::LightHc => 2,
            Self::DarkHc => 3,
            Self::Automatic => 4,
            Self::Minimal => 5,
        }
    }
}

pub async fn handle(
    command: AppCommand,
    host: &dyn HostAdapter,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<()> {
    match command {
        AppCommand::Activate => {
            host.activate_app().await?;
            writeln!(out, "iTerm2 activated")?;
        }
        AppCommand::Hide => {
            host.select_menu_item(MENU_HIDE).await?;
            writeln!(out, "iTerm2 hidden")?;
        }
        AppCommand::Quit { force } => {
            if !force && !confirm(out, input, "Quit iTerm2?")? {
                return Err(ExitError::general("Aborted!").into());
            }
            host.select_menu_item(MENU_QUIT).await?;
            writeln!(out, "iTerm2 quit command sent")?;
        }
        AppCommand::Version => {
            let version = match host.get_preference(PREF_VERSION).await? {
                Value::String(s) if !s.is_empty() => s,
                Value::Null | Value::String(_) => "unknown".to_string(),
                other => other.to_string(),
            };
            writeln!(out, "iTerm2 version: {version}")?;
        }
        AppCommand::Theme { value: None } => {
            let theme = host.get_variable(&VariableScope::App, "effectiveTheme").await?;
            let parts: Vec<&str> = theme.as_str().unwrap_or_default().split_whitespace().collect();
            writeln!(out, "Current theme: {}", parts.join(", "))?;
        }
        AppCommand::Theme { value: Some(theme) } => {
            host.set_preference(PREF_THEME, &json!(theme.preference_value()))
                .await?;
            writeln!(out, "Theme set to: {}", theme.name())?;
        }
        AppCommand::GetFocus => get_focus(host, out).await?,
        AppCommand::Broadcast { command } => broadcast(command, host, out).await?,
    }
    Ok(())
}

/// Ask a yes/no question, defaulting to no.
fn confirm(out: &mut impl Write, input: &mut impl BufRead, question: &str) -> Result<bool> {
    write!(out, "{question} [y/N]: ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

async fn get_focus(host: &dyn HostAdapter, out: &mut impl Write) -> Result<()> {
    let layout = host.layout().await?;
    let Some(window) = layout.current_window() else {
        writeln!(out, "No current window")?;
        return Ok(());
    };
    writeln!(out, "Current window: {}", window.id)?;

    let Some(tab) = window.current_tab() else {
        writeln!(out, "No current tab")?;
        return Ok(());
    };
    writeln!(out, "Current tab: {}", tab.id)?;

    let Some(session) = tab.current_session() else {
        writeln!(out, "No current session")?;
        return Ok(());
    };
    writeln!(out, "Current session: {}", session.id)?;

    let name = session_name(host, &session.id).await?;
    if !name.is_empty() {
        writeln!(out, "Session name: {name}")?;
    }
    Ok(())
}

async fn broadcast(
    command: BroadcastCommand,
    host: &dyn HostAdapter,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        BroadcastCommand::On => {
            let layout = host.layout().await?;
            let domain: Vec<SessionId> = current_tab(&layout)?
                .sessions
                .iter()
                .map(|s| s.id.clone())
                .collect();
            host.set_broadcast_domains(&[domain]).await?;
            writeln!(out, "Broadcasting enabled for current tab")?;
        }
        BroadcastCommand::Off => {
            host.set_broadcast_domains(&[]).await?;
            writeln!(out, "Broadcasting disabled")?;
        }
        BroadcastCommand::Add { session_ids } => {
            let layout = host.layout().await?;
            let mut domain = Vec::with_capacity(session_ids.len());
            for id in &session_ids {
                let session = lookup(&layout, Some(id))
                    .ok_or_else(|| ExitError::not_found(format!("Session '{id}' not found")))?;
                domain.push(session.id.clone());
            }
            host.set_broadcast_domains(&[domain]).await?;
            writeln!(
                out,
                "Created broadcast group with {} sessions",
                session_ids.len()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
