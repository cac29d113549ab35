// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Print `items` as JSON, or hand them to `render` for text. An empty text
/// list prints `empty` instead.
pub fn print_list<T, W, F>(
    out: &mut W,
    format: OutputFormat,
    items: &[T],
    empty: &str,
    render: F,
) -> Result<()>
where
    T: Serialize,
    W: Write,
    F: FnOnce(&mut W, &[T]) -> std::io::Result<()>,
{
    match format {
        OutputFormat::Json => print_json(out, items),
        OutputFormat::Text if items.is_empty() => {
            writeln!(out, "{empty}")?;
            Ok(())
        }
        OutputFormat::Text => {
            render(out, items)?;
            Ok(())
        }
    }
}
