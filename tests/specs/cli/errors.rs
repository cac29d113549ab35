//! CLI error handling specs
//!
//! Verify the parser rejects unknown commands and bad values before any
//! connection is attempted.

use crate::prelude::*;

#[test]
fn unknown_command_is_rejected() {
    cli()
        .args(&["frobnicate"])
        .exits(2)
        .stderr_has("unrecognized subcommand 'frobnicate'");
}

#[test]
fn profile_create_does_not_exist() {
    cli()
        .args(&["profile", "create", "Dev"])
        .exits(2)
        .stderr_has("unrecognized subcommand 'create'");
}

#[test]
fn invalid_theme_is_rejected() {
    cli()
        .args(&["app", "theme", "sepia"])
        .exits(2)
        .stderr_has("invalid value 'sepia'");
}

#[test]
fn missing_argument_is_rejected() {
    cli()
        .args(&["session", "send"])
        .exits(2)
        .stderr_has("<TEXT>");
}
