// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! it2 - Control iTerm2 from the command line

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod poll;
mod table;

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::session::{ClearArgs, RunArgs, SendArgs, SessionCommand, SplitArgs};
use commands::tab::NewTab;
use commands::window::NewWindow;
use commands::{app, monitor, profile, session, tab, window, Target};
use it2_adapters::{HostAdapter, ItermHost, TracedHost};
use output::OutputFormat;
use poll::StopSignal;

#[derive(Parser)]
#[command(
    name = "it2",
    version,
    about = "Control iTerm2 from the command line",
    styles = color::styles()
)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Application control
    App(app::AppArgs),
    /// Window management
    Window(window::WindowArgs),
    /// Tab management
    Tab(tab::TabArgs),
    /// Session management
    Session(session::SessionArgs),
    /// Profile management
    Profile(profile::ProfileArgs),
    /// Watch output, keystrokes, variables, prompts or activity
    Monitor(monitor::MonitorArgs),

    /// Send text to a session (same as `session send`)
    Send(SendArgs),
    /// Run a command in a session (same as `session run`)
    Run(RunArgs),
    /// Clear a session's screen (same as `session clear`)
    Clear(ClearArgs),
    /// Split the current session (same as `session split`)
    Split(SplitArgs),
    /// Split the current session vertically (same as `session split -v`)
    Vsplit {
        /// Profile for the new pane
        #[arg(short = 'p', long)]
        profile: Option<String>,
        #[command(flatten)]
        target: Target,
    },
    /// List sessions (same as `session list`)
    Ls,
    /// Open a new window (same as `window new`)
    New(NewWindow),
    /// Open a new tab (same as `tab new`)
    Newtab(NewTab),
}

pub(crate) fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = exit_error::exit_code(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {msg}");
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context
/// isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        let _ = write!(buf, "\n\nCaused by:\n    {i}: {cause}");
    }
    buf
}

async fn run() -> Result<()> {
    let matches = cli_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let format = OutputFormat::from_json_flag(cli.json);

    let Some(command) = cli.command else {
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let _log_guard = logging::init()?;
    tracing::debug!(command = matches.subcommand_name(), "dispatch");

    let host = TracedHost::new(ItermHost::connect().await?);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(command, &host, format, &mut out).await?;
    out.flush()?;
    Ok(())
}

async fn dispatch(
    command: Commands,
    host: &dyn HostAdapter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::App(args) => {
            let stdin = std::io::stdin();
            app::handle(args.command, host, out, &mut stdin.lock()).await
        }
        Commands::Window(args) => window::handle(args.command, host, format, out).await,
        Commands::Tab(args) => tab::handle(args.command, host, format, out).await,
        Commands::Profile(args) => profile::handle(args.command, host, format, out).await,
        Commands::Monitor(args) => {
            monitor::handle(args.command, host, out, StopSignal::ctrl_c()).await
        }
        Commands::New(args) => window::new_window(args, host, out).await,
        Commands::Newtab(args) => tab::new_tab(args, host, out).await,
        other => match session_command(other) {
            Some(command) => session::handle(command, host, format, out).await,
            None => Ok(()),
        },
    }
}

/// The session command behind `session ...` and its shortcuts.
fn session_command(command: Commands) -> Option<SessionCommand> {
    Some(match command {
        Commands::Session(args) => args.command,
        Commands::Send(args) => SessionCommand::Send(args),
        Commands::Run(args) => SessionCommand::Run(args),
        Commands::Clear(args) => SessionCommand::Clear(args),
        Commands::Split(args) => SessionCommand::Split(args),
        Commands::Vsplit { profile, target } => SessionCommand::Split(SplitArgs {
            vertical: true,
            profile,
            target,
        }),
        Commands::Ls => SessionCommand::List,
        _ => return None,
    })
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
