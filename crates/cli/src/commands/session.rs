// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 session` - Session commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use it2_adapters::{HostAdapter, VariableScope};
use it2_core::{display_value, resolve_one, resolve_targets, SessionId};
use serde::Serialize;
use serde_json::Value;

use super::{session_var, Target, Targets};
use crate::output::{print_list, OutputFormat};
use crate::table::{Column, Table};

/// Form feed: asks the shell to clear the screen.
const CLEAR_SCREEN: &str = "\x0c";

#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Send text to a session without pressing return
    Send(SendArgs),
    /// Run a command in a session (sends text plus return)
    Run(RunArgs),
    /// Clear a session's screen
    Clear(ClearArgs),
    /// Split a session's pane
    Split(SplitArgs),
    /// List all sessions
    List,
    /// Close a session
    Close {
        #[command(flatten)]
        target: Target,
        /// Close without confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Focus a session
    Focus {
        /// Session ID or alias
        id: String,
    },
    /// Print a session's screen contents
    Read {
        #[command(flatten)]
        target: Target,
        /// Trailing lines of scrollback and screen to print
        #[arg(short = 'n', long)]
        lines: Option<u32>,
    },
    /// Print a session variable
    GetVar {
        name: String,
        #[command(flatten)]
        target: Target,
    },
    /// Set a user variable on a session
    SetVar {
        name: String,
        value: String,
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// Text to send
    pub text: String,
    #[command(flatten)]
    pub targets: Targets,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Command line to run
    pub command: String,
    #[command(flatten)]
    pub targets: Targets,
}

#[derive(Args, Debug, Default)]
pub struct ClearArgs {
    #[command(flatten)]
    pub targets: Targets,
}

#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Split vertically (side by side)
    #[arg(short = 'v', long)]
    pub vertical: bool,
    /// Profile for the new pane
    #[arg(short = 'p', long)]
    pub profile: Option<String>,
    #[command(flatten)]
    pub target: Target,
}

#[derive(Debug, Serialize)]
struct SessionRow {
    id: String,
    name: String,
    title: String,
    tty: String,
    rows: i32,
    cols: i32,
    is_tmux: bool,
}

pub async fn handle(
    command: SessionCommand,
    host: &dyn HostAdapter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        SessionCommand::Send(args) => send_to_targets(host, &args.targets, &args.text).await?,
        SessionCommand::Run(args) => {
            let text = format!("{}\r", args.command);
            send_to_targets(host, &args.targets, &text).await?;
        }
        SessionCommand::Clear(args) => send_to_targets(host, &args.targets, CLEAR_SCREEN).await?,
        SessionCommand::Split(args) => {
            let session = target_session(host, &args.target).await?;
            let created = host
                .split_pane(&session, args.vertical, args.profile.as_deref())
                .await?;
            writeln!(out, "Created new pane: {created}")?;
        }
        SessionCommand::List => list(host, format, out).await?,
        SessionCommand::Close { target, force } => {
            let session = target_session(host, &target).await?;
            host.close_sessions(&[session], force).await?;
            writeln!(out, "Session closed")?;
        }
        SessionCommand::Focus { id } => {
            let session = target_session(host, &Target { session: Some(id) }).await?;
            host.activate_session(&session).await?;
            writeln!(out, "Focused session: {session}")?;
        }
        SessionCommand::Read { target, lines } => {
            let session = target_session(host, &target).await?;
            for line in host.screen_contents(&session, lines).await? {
                writeln!(out, "{line}")?;
            }
        }
        SessionCommand::GetVar { name, target } => {
            let session = target_session(host, &target).await?;
            let value = session_var(host, &session, &name).await?;
            writeln!(out, "{}", display_value(&value))?;
        }
        SessionCommand::SetVar {
            name,
            value,
            target,
        } => {
            let session = target_session(host, &target).await?;
            let name = user_variable(&name);
            host.set_variable(&VariableScope::Session(session), &name, &Value::String(value))
                .await?;
        }
    }
    Ok(())
}

/// Only `user.*` variables are writable; bare names get the prefix.
fn user_variable(name: &str) -> String {
    if name.starts_with("user.") {
        name.to_string()
    } else {
        format!("user.{name}")
    }
}

async fn target_session(host: &dyn HostAdapter, target: &Target) -> Result<SessionId> {
    let layout = host.layout().await?;
    Ok(resolve_one(&layout, target.session.as_deref())?.id.clone())
}

async fn send_to_targets(host: &dyn HostAdapter, targets: &Targets, text: &str) -> Result<()> {
    let layout = host.layout().await?;
    let sessions = resolve_targets(&layout, targets.session.as_deref(), targets.all)?;
    tracing::debug!(targets = sessions.len(), "sending text");
    for session in sessions {
        host.send_text(&session.id, text).await?;
    }
    Ok(())
}

fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => display_value(other),
    }
}

async fn list(host: &dyn HostAdapter, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let layout = host.layout().await?;
    let mut rows = Vec::new();
    for session in layout.sessions() {
        let id = &session.id;
        rows.push(SessionRow {
            id: id.to_string(),
            name: as_text(&session_var(host, id, "session.name").await?),
            title: as_text(&session_var(host, id, "session.title").await?),
            tty: as_text(&session_var(host, id, "session.tty").await?),
            rows: session.grid_size.height,
            cols: session.grid_size.width,
            is_tmux: session_var(host, id, "session.tmux").await? == "yes",
        });
    }

    print_list(out, format, &rows, "No sessions", |out, rows| {
        let mut table = Table::new(vec![
            Column::muted("ID"),
            Column::left("NAME").with_max(30),
            Column::left("TITLE").with_max(40),
            Column::left("TTY"),
            Column::right("SIZE"),
            Column::status("TMUX"),
        ]);
        for row in rows {
            table.row(vec![
                row.id.clone(),
                row.name.clone(),
                row.title.clone(),
                row.tty.clone(),
                format!("{}x{}", row.cols, row.rows),
                if row.is_tmux { "yes" } else { "no" }.to_string(),
            ]);
        }
        table.render(out)
    })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
