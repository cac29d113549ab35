// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 window` - Window management commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use it2_adapters::{CreateTab, HostAdapter};
use serde::Serialize;

use super::window_id;
use crate::exit_error::ExitError;
use crate::output::{print_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct WindowArgs {
    #[command(subcommand)]
    pub command: WindowCommand,
}

#[derive(Subcommand)]
pub enum WindowCommand {
    /// Create a new window
    New(NewWindow),
    /// List all windows
    List,
    /// Close a window (default: the current one)
    Close {
        /// Window ID
        id: Option<String>,
        /// Close without confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Focus a window
    Focus {
        /// Window ID
        id: String,
    },
    /// Move a window's top-left corner
    #[command(allow_negative_numbers = true)]
    Move {
        x: i32,
        y: i32,
        /// Window ID (default: the current one)
        id: Option<String>,
    },
    /// Resize a window
    Resize {
        width: i32,
        height: i32,
        /// Window ID (default: the current one)
        id: Option<String>,
    },
    /// Enter, leave, or toggle fullscreen
    Fullscreen {
        mode: FullscreenMode,
        /// Window ID (default: the current one)
        id: Option<String>,
    },
    /// Save, restore, and list window arrangements
    Arrange {
        #[command(subcommand)]
        command: ArrangeCommand,
    },
}

#[derive(Args, Debug, Default)]
pub struct NewWindow {
    /// Profile to open the window with
    #[arg(short = 'p', long)]
    pub profile: Option<String>,
    /// Command to run instead of the login shell
    #[arg(short = 'c', long)]
    pub command: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FullscreenMode {
    On,
    Off,
    Toggle,
}

#[derive(Subcommand)]
pub enum ArrangeCommand {
    /// Save every window as a named arrangement
    Save { name: String },
    /// Restore a saved arrangement
    Restore { name: String },
    /// List saved arrangements
    List,
}

#[derive(Debug, Serialize)]
struct WindowRow {
    id: String,
    tabs: usize,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    is_fullscreen: bool,
}

pub async fn handle(
    command: WindowCommand,
    host: &dyn HostAdapter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        WindowCommand::New(args) => new_window(args, host, out).await?,
        WindowCommand::List => list(host, format, out).await?,
        WindowCommand::Close { id, force } => {
            let layout = host.layout().await?;
            let id = window_id(&layout, id.as_deref())?;
            host.close_windows(&[id], force).await?;
            writeln!(out, "Window closed")?;
        }
        WindowCommand::Focus { id } => {
            let layout = host.layout().await?;
            let id = window_id(&layout, Some(&id))?;
            host.activate_window(&id).await?;
            writeln!(out, "Focused window: {id}")?;
        }
        WindowCommand::Move { x, y, id } => {
            let layout = host.layout().await?;
            let id = window_id(&layout, id.as_deref())?;
            let frame = host.window_frame(&id).await?;
            host.set_window_frame(&id, frame.moved_to(x, y)).await?;
            writeln!(out, "Moved window to ({x}, {y})")?;
        }
        WindowCommand::Resize { width, height, id } => {
            let layout = host.layout().await?;
            let id = window_id(&layout, id.as_deref())?;
            let frame = host.window_frame(&id).await?;
            host.set_window_frame(&id, frame.resized_to(width, height))
                .await?;
            writeln!(out, "Resized window to {width}x{height}")?;
        }
        WindowCommand::Fullscreen { mode, id } => {
            let layout = host.layout().await?;
            let id = window_id(&layout, id.as_deref())?;
            let current = host.window_fullscreen(&id).await?;
            let wanted = match mode {
                FullscreenMode::On => true,
                FullscreenMode::Off => false,
                FullscreenMode::Toggle => !current,
            };
            let state = if wanted { "enabled" } else { "disabled" };
            if wanted == current {
                writeln!(out, "Fullscreen already {state}")?;
            } else {
                host.set_window_fullscreen(&id, wanted).await?;
                writeln!(out, "Fullscreen {state}")?;
            }
        }
        WindowCommand::Arrange { command } => arrange(command, host, out).await?,
    }
    Ok(())
}

pub async fn new_window(args: NewWindow, host: &dyn HostAdapter, out: &mut impl Write) -> Result<()> {
    let request = CreateTab {
        window_id: None,
        profile: args.profile,
        command: args.command,
    };
    let created = host
        .create_tab(&request)
        .await?
        .ok_or_else(|| ExitError::general("Failed to create window"))?;
    writeln!(out, "Created new window: {}", created.window_id)?;
    Ok(())
}

async fn list(host: &dyn HostAdapter, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let layout = host.layout().await?;
    let mut rows = Vec::with_capacity(layout.windows.len());
    for window in &layout.windows {
        let frame = host.window_frame(&window.id).await?;
        rows.push(WindowRow {
            id: window.id.to_string(),
            tabs: window.tabs.len(),
            x: frame.origin.x,
            y: frame.origin.y,
            width: frame.size.width,
            height: frame.size.height,
            is_fullscreen: host.window_fullscreen(&window.id).await?,
        });
    }

    print_list(out, format, &rows, "No windows", |out, rows| {
        let mut table = Table::new(vec![
            Column::muted("ID"),
            Column::right("TABS"),
            Column::left("POSITION"),
            Column::left("SIZE"),
            Column::status("FULLSCREEN"),
        ]);
        for row in rows {
            table.row(vec![
                row.id.clone(),
                row.tabs.to_string(),
                format!("{},{}", row.x, row.y),
                format!("{}x{}", row.width, row.height),
                if row.is_fullscreen { "yes" } else { "no" }.to_string(),
            ]);
        }
        table.render(out)
    })
}

async fn arrange(command: ArrangeCommand, host: &dyn HostAdapter, out: &mut impl Write) -> Result<()> {
    match command {
        ArrangeCommand::Save { name } => {
            host.save_arrangement(&name).await?;
            writeln!(out, "Saved arrangement: {name}")?;
        }
        ArrangeCommand::Restore { name } => {
            let known = host.list_arrangements().await?;
            if !known.contains(&name) {
                return Err(ExitError::not_found(format!("Arrangement '{name}' not found")).into());
            }
            host.restore_arrangement(&name).await?;
            writeln!(out, "Restored arrangement: {name}")?;
        }
        ArrangeCommand::List => {
            let names = host.list_arrangements().await?;
            if names.is_empty() {
                writeln!(out, "No saved arrangements")?;
            } else {
                writeln!(out, "Saved arrangements:")?;
                for name in names {
                    writeln!(out, "  - {name}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
