// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Profile property values.
//!
//! The host stores profile settings as JSON under fixed keys (`"Normal Font"`,
//! `"Background Color"`, ...). This module turns the CLI's `profile set NAME
//! PROP VALUE` arguments into those key/JSON pairs and reads them back for
//! `profile show`.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;

/// Host keys for the properties the CLI reads or writes.
pub mod keys {
    pub const GUID: &str = "Guid";
    pub const NAME: &str = "Name";
    pub const NORMAL_FONT: &str = "Normal Font";
    pub const BACKGROUND_COLOR: &str = "Background Color";
    pub const FOREGROUND_COLOR: &str = "Foreground Color";
    pub const CURSOR_COLOR: &str = "Cursor Color";
    pub const SELECTION_COLOR: &str = "Selection Color";
    pub const TRANSPARENCY: &str = "Transparency";
    pub const BLUR: &str = "Blur";
    pub const BADGE_TEXT: &str = "Badge Text";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValueError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
    #[error("invalid number for {property}: {value}")]
    InvalidNumber { property: String, value: String },
}

// ── Font ────────────────────────────────────────────────────────────────────

/// A font setting, stored by the host as `"<family> <size>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Font {
    /// Split on the last space. A tail that is not a number means the whole
    /// string is the family and the size is zero.
    pub fn parse(raw: &str) -> Self {
        if let Some((family, size)) = raw.rsplit_once(' ') {
            if let Ok(size) = size.parse::<f64>() {
                return Self {
                    family: family.to_string(),
                    size,
                };
            }
        }
        Self {
            family: raw.to_string(),
            size: 0.0,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

// ── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// The host's dictionary form: components in `0.0..=1.0`.
    pub fn to_json(self) -> Value {
        json!({
            "Red Component": f64::from(self.red) / 255.0,
            "Green Component": f64::from(self.green) / 255.0,
            "Blue Component": f64::from(self.blue) / 255.0,
            "Alpha Component": 1.0,
            "Color Space": "sRGB",
        })
    }

    /// Read the host's dictionary form. Missing components read as zero.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let component = |key: &str| {
            let v = obj.get(key).and_then(Value::as_f64).unwrap_or(0.0);
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        Some(Self {
            red: component("Red Component"),
            green: component("Green Component"),
            blue: component("Blue Component"),
        })
    }
}

impl FromStr for Color {
    type Err = ProfileValueError;

    /// `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || ProfileValueError::InvalidColor(hex.to_string());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

// ── Settable properties ─────────────────────────────────────────────────────

/// A property name accepted by `profile set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileProperty {
    FontSize,
    FontFamily,
    BackgroundColor,
    ForegroundColor,
    Transparency,
    Blur,
    CursorColor,
    SelectionColor,
    BadgeText,
}

impl ProfileProperty {
    pub const ALL: [ProfileProperty; 9] = [
        Self::FontSize,
        Self::FontFamily,
        Self::BackgroundColor,
        Self::ForegroundColor,
        Self::Transparency,
        Self::Blur,
        Self::CursorColor,
        Self::SelectionColor,
        Self::BadgeText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::FontFamily => "font-family",
            Self::BackgroundColor => "bg-color",
            Self::ForegroundColor => "fg-color",
            Self::Transparency => "transparency",
            Self::Blur => "blur",
            Self::CursorColor => "cursor-color",
            Self::SelectionColor => "selection-color",
            Self::BadgeText => "badge-text",
        }
    }

    /// The host key this property writes.
    pub fn key(self) -> &'static str {
        match self {
            Self::FontSize | Self::FontFamily => keys::NORMAL_FONT,
            Self::BackgroundColor => keys::BACKGROUND_COLOR,
            Self::ForegroundColor => keys::FOREGROUND_COLOR,
            Self::Transparency => keys::TRANSPARENCY,
            Self::Blur => keys::BLUR,
            Self::CursorColor => keys::CURSOR_COLOR,
            Self::SelectionColor => keys::SELECTION_COLOR,
            Self::BadgeText => keys::BADGE_TEXT,
        }
    }

    /// Build the JSON value to store for `value`.
    ///
    /// Font edits replace one half of the existing font string, so the
    /// current value of `"Normal Font"` is needed for those two properties.
    pub fn encode(self, value: &str, current_font: &str) -> Result<Value, ProfileValueError> {
        let color = |v: &str| v.parse::<Color>().map(Color::to_json);
        match self {
            Self::FontSize => {
                let size: f64 = value.parse().map_err(|_| self.invalid_number(value))?;
                let font = Font::parse(current_font);
                Ok(Value::String(format!("{} {}", font.family, size)))
            }
            Self::FontFamily => {
                let font = Font {
                    family: value.to_string(),
                    size: Font::parse(current_font).size,
                };
                Ok(Value::String(font.to_string()))
            }
            Self::BackgroundColor
            | Self::ForegroundColor
            | Self::CursorColor
            | Self::SelectionColor => color(value),
            Self::Transparency => {
                let t: f64 = value.parse().map_err(|_| self.invalid_number(value))?;
                Ok(json!(t))
            }
            Self::Blur => Ok(Value::Bool(value.eq_ignore_ascii_case("true"))),
            Self::BadgeText => Ok(Value::String(value.to_string())),
        }
    }

    fn invalid_number(self, value: &str) -> ProfileValueError {
        ProfileValueError::InvalidNumber {
            property: self.name().to_string(),
            value: value.to_string(),
        }
    }
}

impl FromStr for ProfileProperty {
    type Err = ProfileValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ProfileValueError::UnknownProperty(s.to_string()))
    }
}

impl fmt::Display for ProfileProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
