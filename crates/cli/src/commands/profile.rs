// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `it2 profile` - Profile commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use it2_adapters::{HostAdapter, ProfileRecord, ProfileTarget};
use it2_core::profile::keys;
use it2_core::{lookup, Color, Font, Layout, ProfileProperty, ProfileValueError, SessionId};
use serde::Serialize;
use serde_json::Value;

use super::current_tab;
use crate::exit_error::ExitError;
use crate::output::{print_json, print_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// List all profiles
    List,
    /// Show profile details
    Show {
        /// Profile name
        name: String,
    },
    /// Apply a profile to a session
    Apply {
        /// Profile name
        name: String,
        /// Target session ID (default: active)
        #[arg(short = 's', long)]
        session: Option<String>,
    },
    /// Set a profile property
    ///
    /// Properties: font-size, font-family, bg-color, fg-color, transparency,
    /// blur, cursor-color, selection-color, badge-text
    Set {
        /// Profile name
        name: String,
        /// Property to change
        property: String,
        /// New value (colors as #rrggbb, blur as true/false)
        value: String,
    },
}

#[derive(Debug, Serialize)]
struct ProfileRow {
    guid: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct ProfileDetails {
    guid: String,
    name: String,
    font: String,
    font_size: f64,
    background_color: String,
    foreground_color: String,
    transparency: Value,
    blur: Value,
    cursor_color: String,
    selection_color: String,
    badge_text: String,
}

impl ProfileDetails {
    fn from_record(record: &ProfileRecord) -> Self {
        let font = text(record, keys::NORMAL_FONT);
        Self {
            guid: text(record, keys::GUID),
            name: text(record, keys::NAME),
            font_size: Font::parse(&font).size,
            font,
            background_color: color(record, keys::BACKGROUND_COLOR),
            foreground_color: color(record, keys::FOREGROUND_COLOR),
            transparency: record.get(keys::TRANSPARENCY).cloned().unwrap_or(Value::Null),
            blur: record.get(keys::BLUR).cloned().unwrap_or(Value::Null),
            cursor_color: color(record, keys::CURSOR_COLOR),
            selection_color: color(record, keys::SELECTION_COLOR),
            badge_text: text(record, keys::BADGE_TEXT),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        let font = Font::parse(&self.font);
        writeln!(out, "Profile: {}", self.name)?;
        writeln!(out, "GUID: {}", self.guid)?;
        writeln!(out, "Font: {} {}pt", font.family, font.size)?;
        writeln!(out, "Background: {}", self.background_color)?;
        writeln!(out, "Foreground: {}", self.foreground_color)?;
        writeln!(out, "Transparency: {}", self.transparency)?;
        writeln!(out, "Blur: {}", self.blur)?;
        writeln!(out, "Cursor Color: {}", self.cursor_color)?;
        writeln!(out, "Selection Color: {}", self.selection_color)?;
        if !self.badge_text.is_empty() {
            writeln!(out, "Badge Text: {}", self.badge_text)?;
        }
        Ok(())
    }
}

fn text(record: &ProfileRecord, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn color(record: &ProfileRecord, key: &str) -> String {
    record
        .get(key)
        .and_then(Color::from_json)
        .map(|c| c.to_string())
        .unwrap_or_default()
}

pub async fn handle(
    command: ProfileCommand,
    host: &dyn HostAdapter,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ProfileCommand::List => list(host, format, out).await?,
        ProfileCommand::Show { name } => {
            let record = find_profile(host, &name, &[]).await?;
            let details = ProfileDetails::from_record(&record);
            match format {
                OutputFormat::Json => print_json(out, &details)?,
                OutputFormat::Text => details.write_text(out)?,
            }
        }
        ProfileCommand::Apply { name, session } => apply(host, &name, session.as_deref(), out).await?,
        ProfileCommand::Set {
            name,
            property,
            value,
        } => set(host, &name, &property, &value, out).await?,
    }
    Ok(())
}

/// The stored profile called `name`. An empty `properties` fetches all of them.
async fn find_profile(
    host: &dyn HostAdapter,
    name: &str,
    properties: &[&str],
) -> Result<ProfileRecord> {
    let mut wanted = properties.to_vec();
    if !wanted.is_empty() && !wanted.contains(&keys::NAME) {
        wanted.push(keys::NAME);
    }
    host.list_profiles(&wanted, &[])
        .await?
        .into_iter()
        .find(|p| p.get(keys::NAME).and_then(Value::as_str) == Some(name))
        .ok_or_else(|| ExitError::not_found(format!("Profile '{name}' not found")).into())
}

async fn list(host: &dyn HostAdapter, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let rows: Vec<ProfileRow> = host
        .list_profiles(&[keys::GUID, keys::NAME], &[])
        .await?
        .iter()
        .map(|p| ProfileRow {
            guid: text(p, keys::GUID),
            name: text(p, keys::NAME),
        })
        .collect();

    print_list(out, format, &rows, "No profiles", |out, rows| {
        let mut table = Table::new(vec![Column::muted("GUID"), Column::left("NAME")]);
        for row in rows {
            table.row(vec![row.guid.clone(), row.name.clone()]);
        }
        table.render(out)
    })
}

/// The `-s` session, or the current window's current tab's current session.
fn apply_target(layout: &Layout, session: Option<&str>) -> Result<SessionId> {
    if let Some(id) = session {
        return Ok(lookup(layout, Some(id))
            .ok_or_else(|| ExitError::not_found(format!("Session '{id}' not found")))?
            .id
            .clone());
    }
    let session = current_tab(layout)?
        .current_session()
        .ok_or_else(|| ExitError::not_found("No current session"))?;
    Ok(session.id.clone())
}

async fn apply(
    host: &dyn HostAdapter,
    name: &str,
    session: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let record = find_profile(host, name, &[]).await?;
    let layout = host.layout().await?;
    let target = apply_target(&layout, session)?;

    let assignments: Vec<(String, Value)> = record
        .into_iter()
        .filter(|(key, _)| key != keys::GUID)
        .collect();
    host.set_profile_properties(&ProfileTarget::Session(target), &assignments)
        .await?;
    writeln!(out, "Applied profile '{name}' to session")?;
    Ok(())
}

async fn set(
    host: &dyn HostAdapter,
    name: &str,
    property: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    let record = find_profile(host, name, &[keys::GUID, keys::NORMAL_FONT]).await?;
    let property: ProfileProperty = property
        .parse()
        .map_err(|e: ProfileValueError| ExitError::invalid_input(e.to_string()))?;

    let failed = |e: &dyn std::fmt::Display| {
        ExitError::invalid_input(format!("Failed to set property: {e}"))
    };
    let encoded = property
        .encode(value, &text(&record, keys::NORMAL_FONT))
        .map_err(|e| failed(&e))?;
    let guid = text(&record, keys::GUID);
    host.set_profile_properties(
        &ProfileTarget::Guids(vec![guid]),
        &[(property.key().to_string(), encoded)],
    )
    .await
    .map_err(|e| failed(&e))?;

    writeln!(out, "Set {property} = {value} for profile '{name}'")?;
    Ok(())
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
