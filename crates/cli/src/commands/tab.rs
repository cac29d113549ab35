// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 tab` - Tab management commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use it2_adapters::{CreateTab, HostAdapter};
use it2_core::{Layout, TabId, WindowId};
use serde::Serialize;

use super::{current_tab, window_id};
use crate::exit_error::ExitError;
use crate::output::{print_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct TabArgs {
    #[command(subcommand)]
    pub command: TabCommand,
}

#[derive(Subcommand)]
pub enum TabCommand {
    /// Create a new tab
    New(NewTab),
    /// List all tabs
    List,
    /// Close a tab (default: the current one)
    Close {
        /// Tab ID
        id: Option<String>,
        /// Close without confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Select a tab
    Select {
        /// Tab ID
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct NewTab {
    /// Window to add the tab to (default: the current one)
    #[arg(short = 'w', long)]
    pub window: Option<String>,
    /// Profile to open the tab with
    #[arg(short = 'p', long)]
    pub profile: Option<String>,
    /// Command to run instead of the login shell
    #[arg(short = 'c', long)]
    pub command: Option<String>,
}

#[derive(Debug, Serialize)]
struct TabRow {
    id: String,
    window_id: String,
    sessions: usize,
    is_active: bool,
}

pub async fn handle(
    command: TabCommand,
    host: &dyn HostAdapter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        TabCommand::New(args) => new_tab(args, host, out).await?,
        TabCommand::List => list(host, format, out).await?,
        TabCommand::Close { id, force } => {
            let layout = host.layout().await?;
            let id = tab_id(&layout, id.as_deref())?;
            host.close_tabs(&[id], force).await?;
            writeln!(out, "Tab closed")?;
        }
        TabCommand::Select { id } => {
            let layout = host.layout().await?;
            let id = tab_id(&layout, Some(&id))?;
            host.activate_tab(&id).await?;
            writeln!(out, "Selected tab: {id}")?;
        }
    }
    Ok(())
}

/// The named tab, or the current one when `id` is `None`.
fn tab_id(layout: &Layout, id: Option<&str>) -> Result<TabId> {
    match id {
        Some(id) => layout
            .tab(id)
            .map(|t| t.id.clone())
            .ok_or_else(|| ExitError::not_found(format!("Tab '{id}' not found")).into()),
        None => Ok(current_tab(layout)?.id.clone()),
    }
}

pub async fn new_tab(args: NewTab, host: &dyn HostAdapter, out: &mut impl Write) -> Result<()> {
    let layout = host.layout().await?;
    let window_id: Option<WindowId> = match args.window.as_deref() {
        Some(id) => Some(window_id(&layout, Some(id))?),
        None => layout.current_window().map(|w| w.id.clone()),
    };
    let request = CreateTab {
        window_id,
        profile: args.profile,
        command: args.command,
    };
    let created = host
        .create_tab(&request)
        .await?
        .ok_or_else(|| ExitError::general("Failed to create tab"))?;
    writeln!(out, "Created new tab: {}", created.tab_id)?;
    Ok(())
}

async fn list(host: &dyn HostAdapter, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let layout = host.layout().await?;
    let rows: Vec<TabRow> = layout
        .windows
        .iter()
        .flat_map(|w| {
            w.tabs.iter().map(move |t| TabRow {
                id: t.id.to_string(),
                window_id: w.id.to_string(),
                sessions: t.sessions.len(),
                is_active: w.current_tab.as_ref() == Some(&t.id),
            })
        })
        .collect();

    print_list(out, format, &rows, "No tabs", |out, rows| {
        let mut table = Table::new(vec![
            Column::muted("ID"),
            Column::left("WINDOW"),
            Column::right("SESSIONS"),
            Column::status("ACTIVE"),
        ]);
        for row in rows {
            table.row(vec![
                row.id.clone(),
                row.window_id.clone(),
                row.sessions.to_string(),
                if row.is_active { "yes" } else { "no" }.to_string(),
            ]);
        }
        table.render(out)
    })
}

#[cfg(test)]
#[path = "tab_tests.rs"]
mod tests;
