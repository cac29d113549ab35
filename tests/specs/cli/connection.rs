//! Connection gate specs
//!
//! Every command needs the cookie iTerm2 exports; without it, or without a
//! reachable API socket, it2 exits 2.

use crate::prelude::*;

#[test]
fn no_cookie_exits_two() {
    cli()
        .args(&["ls"])
        .exits(2)
        .stderr_has("Error: Not running inside iTerm2");
}

#[test]
fn no_cookie_exits_two_for_json_output() {
    cli()
        .args(&["--json", "window", "list"])
        .exits(2)
        .stderr_has("Not running inside iTerm2");
}

#[test]
fn no_cookie_prints_nothing_on_stdout() {
    cli().args(&["app", "version"]).exits(2).stdout_eq("");
}

#[test]
fn missing_socket_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("socket");
    cli()
        .inside_iterm(&socket)
        .args(&["session", "list"])
        .exits(2)
        .stderr_has("cannot reach");
}

#[test]
fn log_file_receives_connection_failure() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("logs").join("it2.log");
    cli()
        .inside_iterm(&dir.path().join("socket"))
        .env("IT2_LOG", "debug")
        .env("IT2_LOG_FILE", &log)
        .args(&["tab", "list"])
        .exits(2);
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("dispatch"), "{contents}");
}

#[test]
fn silent_socket_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("socket");
    // Connections queue in the backlog and never get an answer.
    let _listener = std::os::unix::net::UnixListener::bind(&socket).unwrap();
    cli()
        .inside_iterm(&socket)
        .env("IT2_TIMEOUT_CONNECT_MS", "100")
        .args(&["ls"])
        .exits(2)
        .stderr_has("within 100ms");
}
