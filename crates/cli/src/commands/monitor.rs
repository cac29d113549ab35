// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 monitor` - Follow host events until stopped
//!
//! Every loop ends on the stop signal (prints "Monitoring stopped") or when
//! the host closes the event stream.

use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use it2_adapters::{HostAdapter, Subscription, VariableScope};
use it2_core::{display_value, resolve_one, HostEvent, PromptEvent, SessionId};
use regex::Regex;
use serde_json::Value;

use super::{session_name, session_var, Target};
use crate::exit_error::ExitError;
use crate::poll::{Next, Poller, StopSignal, Tick};

#[derive(Args)]
pub struct MonitorArgs {
    #[command(subcommand)]
    pub command: MonitorCommand,
}

#[derive(Subcommand)]
pub enum MonitorCommand {
    /// Print a session's screen, or follow it as it changes
    Output {
        /// Follow output continuously
        #[arg(short = 'f', long)]
        follow: bool,
        #[command(flatten)]
        target: Target,
        /// Only print lines matching this regex
        #[arg(short = 'p', long)]
        pattern: Option<String>,
    },
    /// Print keystrokes typed into a session
    Keystroke {
        /// Only print keystrokes matching this regex
        #[arg(short = 'p', long)]
        pattern: Option<String>,
        #[command(flatten)]
        target: Target,
    },
    /// Print a variable's value each time it changes
    Variable {
        name: String,
        #[command(flatten)]
        target: Target,
        /// Watch an app-level variable instead of a session variable
        #[arg(long)]
        app_level: bool,
    },
    /// Print shell prompts and command boundaries (needs shell integration)
    Prompt {
        #[command(flatten)]
        target: Target,
    },
    /// Report sessions turning active or idle
    Activity {
        /// Watch every session, not just the current one
        #[arg(short = 'a', long)]
        all: bool,
    },
}

pub async fn handle(
    command: MonitorCommand,
    host: &dyn HostAdapter,
    out: &mut impl Write,
    stop: StopSignal,
) -> Result<()> {
    match command {
        MonitorCommand::Output {
            follow,
            target,
            pattern,
        } => {
            let session = target_session(host, &target).await?;
            let regex = compile(pattern.as_deref())?;
            if follow {
                follow_output(host, &session, regex.as_ref(), out, stop).await
            } else {
                let lines = host.screen_contents(&session, None).await?;
                print_screen(&lines, regex.as_ref(), out, false)?;
                Ok(())
            }
        }
        MonitorCommand::Keystroke { pattern, target } => {
            let session = target_session(host, &target).await?;
            let regex = compile(pattern.as_deref())?;
            keystrokes(host, session, regex.as_ref(), out, stop).await
        }
        MonitorCommand::Variable {
            name,
            target,
            app_level,
        } => {
            let scope = if app_level {
                writeln!(out, "Monitoring app variable '{name}'...")?;
                VariableScope::App
            } else {
                let session = target_session(host, &target).await?;
                writeln!(out, "Monitoring session variable '{name}'...")?;
                VariableScope::Session(session)
            };
            variable(host, scope, name, out, stop).await
        }
        MonitorCommand::Prompt { target } => {
            let session = target_session(host, &target).await?;
            prompts(host, session, out, stop).await
        }
        MonitorCommand::Activity { all } => {
            activity(host, all, crate::env::activity_poll(), out, stop).await
        }
    }
}

async fn target_session(host: &dyn HostAdapter, target: &Target) -> Result<SessionId> {
    let layout = host.layout().await?;
    Ok(resolve_one(&layout, target.session.as_deref())?.id.clone())
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| ExitError::invalid_input(format!("Invalid regex pattern: {e}")))
        })
        .transpose()
        .map_err(Into::into)
}

/// Null, false, zero and empty values count as unset.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn stopped(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nMonitoring stopped")?;
    Ok(())
}

/// Matching lines when filtering; otherwise the whole screen, which a
/// follower skips when blank.
fn print_screen(
    lines: &[String],
    regex: Option<&Regex>,
    out: &mut impl Write,
    skip_blank: bool,
) -> std::io::Result<()> {
    match regex {
        Some(regex) => {
            for line in lines.iter().filter(|l| regex.is_match(l)) {
                writeln!(out, "{line}")?;
            }
        }
        None => {
            let text = lines.join("\n");
            if !(skip_blank && text.trim().is_empty()) {
                writeln!(out, "{text}")?;
            }
        }
    }
    out.flush()
}

async fn follow_output(
    host: &dyn HostAdapter,
    session: &SessionId,
    regex: Option<&Regex>,
    out: &mut impl Write,
    mut stop: StopSignal,
) -> Result<()> {
    writeln!(out, "Monitoring output from session {session}...")?;
    writeln!(out, "Press Ctrl+C to stop")?;
    let mut events = host
        .subscribe(Subscription::ScreenUpdates {
            session: session.clone(),
        })
        .await?;
    loop {
        match stop.next(&mut events).await {
            Next::Item(HostEvent::ScreenUpdated) => {
                let lines = host.screen_contents(session, None).await?;
                print_screen(&lines, regex, out, true)?;
            }
            Next::Item(_) => {}
            Next::Ended => return Ok(()),
            Next::Interrupted => return stopped(out),
        }
    }
}

async fn keystrokes(
    host: &dyn HostAdapter,
    session: SessionId,
    regex: Option<&Regex>,
    out: &mut impl Write,
    mut stop: StopSignal,
) -> Result<()> {
    writeln!(out, "Monitoring keystrokes in session {session}...")?;
    writeln!(out, "Press Ctrl+C to stop")?;
    let mut events = host.subscribe(Subscription::Keystrokes { session }).await?;
    loop {
        match stop.next(&mut events).await {
            Next::Item(HostEvent::Keystroke { characters }) => {
                if regex.map_or(true, |r| r.is_match(&characters)) {
                    writeln!(out, "Keystroke: {characters}")?;
                    out.flush()?;
                }
            }
            Next::Item(_) => {}
            Next::Ended => return Ok(()),
            Next::Interrupted => return stopped(out),
        }
    }
}

async fn variable(
    host: &dyn HostAdapter,
    scope: VariableScope,
    name: String,
    out: &mut impl Write,
    mut stop: StopSignal,
) -> Result<()> {
    let current = host.get_variable(&scope, &name).await?;
    writeln!(out, "Current value: {}", display_value(&current))?;
    writeln!(out, "Press Ctrl+C to stop")?;
    let mut events = host.subscribe(Subscription::Variable { scope, name }).await?;
    loop {
        match stop.next(&mut events).await {
            Next::Item(HostEvent::VariableChanged { value }) => {
                writeln!(out, "Changed to: {}", display_value(&value))?;
                out.flush()?;
            }
            Next::Item(_) => {}
            Next::Ended => return Ok(()),
            Next::Interrupted => return stopped(out),
        }
    }
}

async fn prompts(
    host: &dyn HostAdapter,
    session: SessionId,
    out: &mut impl Write,
    mut stop: StopSignal,
) -> Result<()> {
    let installed = session_var(host, &session, "user.shell_integration_installed").await?;
    if !truthy(&installed) {
        writeln!(out, "Warning: Shell integration may not be installed.")?;
        writeln!(out, "Install it from: iTerm2 > Install Shell Integration")?;
    }
    writeln!(out, "Monitoring prompts in session {session}...")?;
    writeln!(out, "Press Ctrl+C to stop")?;
    let mut events = host.subscribe(Subscription::Prompts { session }).await?;
    loop {
        match stop.next(&mut events).await {
            Next::Item(HostEvent::Prompt(event)) => {
                match event {
                    PromptEvent::Prompt => writeln!(out, "New prompt detected")?,
                    PromptEvent::CommandStarted { command } => {
                        writeln!(out, "Command started: {command}")?
                    }
                    PromptEvent::CommandFinished { status } => {
                        writeln!(out, "Command finished (exit status: {status})")?
                    }
                }
                out.flush()?;
            }
            Next::Item(_) => {}
            Next::Ended => return Ok(()),
            Next::Interrupted => return stopped(out),
        }
    }
}

/// Polls `session.isActive` instead of subscribing; the layout is re-read
/// every round so new sessions are picked up.
async fn activity(
    host: &dyn HostAdapter,
    all: bool,
    interval: std::time::Duration,
    out: &mut impl Write,
    stop: StopSignal,
) -> Result<()> {
    if all {
        writeln!(out, "Monitoring activity in all sessions...")?;
    } else {
        writeln!(out, "Monitoring activity in current session...")?;
    }
    writeln!(out, "Press Ctrl+C to stop")?;

    let mut seen: HashMap<SessionId, Value> = HashMap::new();
    let mut poller = Poller::new(interval, stop);
    loop {
        let layout = host.layout().await?;
        let watched: Vec<SessionId> = if all {
            layout.sessions().map(|s| s.id.clone()).collect()
        } else {
            layout.current_session().map(|s| s.id.clone()).into_iter().collect()
        };

        for id in watched {
            let active = session_var(host, &id, "session.isActive").await?;
            match seen.insert(id.clone(), active.clone()) {
                Some(previous) if previous != active => {
                    let name = session_name(host, &id).await?;
                    let name = if name.is_empty() { id.to_string() } else { name };
                    if truthy(&active) {
                        writeln!(out, "Session active: {name}")?;
                    } else {
                        writeln!(out, "Session idle: {name}")?;
                    }
                    out.flush()?;
                }
                _ => {}
            }
        }

        if poller.tick().await == Tick::Interrupted {
            return stopped(out);
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
