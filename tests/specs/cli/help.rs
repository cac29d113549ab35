//! CLI help output specs
//!
//! Verify help text displays for all command groups.

use crate::prelude::*;

#[test]
fn it2_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn it2_help_lists_groups_and_shortcuts() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage: it2")
        .stdout_has("session")
        .stdout_has("monitor")
        .stdout_has("vsplit")
        .stdout_has("newtab")
        .stdout_has("--json");
}

#[test]
fn it2_help_without_color_has_no_escapes() {
    let run = cli().args(&["--help"]).passes();
    assert!(!run.stdout().contains('\x1b'), "{}", run.stdout());
}

#[test]
fn session_help_shows_subcommands() {
    cli()
        .args(&["session", "--help"])
        .passes()
        .stdout_has("send")
        .stdout_has("split")
        .stdout_has("get-var")
        .stdout_has("set-var");
}

#[test]
fn window_help_shows_subcommands() {
    cli()
        .args(&["window", "--help"])
        .passes()
        .stdout_has("fullscreen")
        .stdout_has("arrange");
}

#[test]
fn monitor_help_shows_subcommands() {
    cli()
        .args(&["monitor", "--help"])
        .passes()
        .stdout_has("output")
        .stdout_has("keystroke")
        .stdout_has("variable")
        .stdout_has("prompt")
        .stdout_has("activity");
}

#[test]
fn profile_set_help_lists_properties() {
    cli()
        .args(&["profile", "set", "--help"])
        .passes()
        .stdout_has("font-size")
        .stdout_has("badge-text");
}

#[test]
fn help_does_not_need_iterm() {
    cli()
        .args(&["app", "--help"])
        .passes()
        .stderr_lacks("Not running inside iTerm2");
}

#[test]
fn it2_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
