// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identifier normalization.
//!
//! The host's session lookup accepts a bare UUID, but users and shells hand
//! us aliases: `ITERM_SESSION_ID` looks like `w0t0p0:UUID` and term ids look
//! like `w0t0p0.UUID`. Both reduce to the UUID. The keywords `active` and
//! `all` are selection modes, not identifiers, and pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Keyword selecting the focused session.
pub const ACTIVE: &str = "active";

/// Keyword selecting every session.
pub const ALL: &str = "all";

const UUID_PATTERN: &str =
    "[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}";

#[allow(clippy::expect_used)]
static ENV_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^w\d+t\d+p\d+:(?P<uuid>{UUID_PATTERN})$"))
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static TERMID_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^w\d+t\d+p\d+\.(?P<uuid>{UUID_PATTERN})$"))
        .expect("constant regex pattern is valid")
});

/// Selection keyword accepted where a session id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Active,
    All,
}

/// The recognized shape of a user-supplied session identifier.
///
/// Variants are tried in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIdForm<'a> {
    /// `active` or `all`
    Keyword(Keyword),
    /// `w<N>t<N>p<N>:<UUID>` (the `ITERM_SESSION_ID` environment variable)
    EnvAlias { uuid: &'a str },
    /// `w<N>t<N>p<N>.<UUID>` (term id)
    TermIdAlias { uuid: &'a str },
    /// Anything else, assumed canonical or opaque
    Other(&'a str),
}

impl<'a> SessionIdForm<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            ACTIVE => return Self::Keyword(Keyword::Active),
            ALL => return Self::Keyword(Keyword::All),
            _ => {}
        }
        if let Some(uuid) = capture_uuid(&ENV_ALIAS, raw) {
            return Self::EnvAlias { uuid };
        }
        if let Some(uuid) = capture_uuid(&TERMID_ALIAS, raw) {
            return Self::TermIdAlias { uuid };
        }
        Self::Other(raw)
    }

    /// The value the host lookup should be given.
    pub fn canonical(&self) -> &'a str {
        match *self {
            Self::Keyword(Keyword::Active) => ACTIVE,
            Self::Keyword(Keyword::All) => ALL,
            Self::EnvAlias { uuid } | Self::TermIdAlias { uuid } => uuid,
            Self::Other(raw) => raw,
        }
    }
}

fn capture_uuid<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    re.captures(raw)
        .and_then(|caps| caps.name("uuid"))
        .map(|m| m.as_str())
}

/// Normalize a session id alias to the canonical UUID when possible.
///
/// `None` stays `None`; keywords and unrecognized shapes come back unchanged.
pub fn normalize(id: Option<&str>) -> Option<&str> {
    id.map(|raw| SessionIdForm::parse(raw).canonical())
}

#[cfg(test)]
#[path = "session_id_tests.rs"]
mod tests;
