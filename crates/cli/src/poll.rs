// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loop helpers for the monitor commands.
//!
//! Every monitor waits on either a host event stream or a timer, and ends
//! when the user presses Ctrl+C. Tests swap Ctrl+C for a channel.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use tokio::signal::unix::{signal, SignalKind};

/// Result of waiting for the next poll tick.
#[derive(Debug, PartialEq, Eq)]
pub enum Tick {
    /// Ready for the next poll iteration.
    Ready,
    /// The stop signal fired.
    Interrupted,
}

/// Result of waiting for the next stream item.
#[derive(Debug, PartialEq)]
pub enum Next<T> {
    Item(T),
    /// The host closed the stream.
    Ended,
    /// The stop signal fired.
    Interrupted,
}

/// A one-shot "stop monitoring" signal.
///
/// Must not be awaited again once it has fired.
pub struct StopSignal(Pin<Box<dyn Future<Output = ()> + Send>>);

impl StopSignal {
    /// Fires on Ctrl+C. If the handler cannot be installed it never fires.
    /// The handler is installed on construction, not on first poll.
    pub fn ctrl_c() -> Self {
        match signal(SignalKind::interrupt()) {
            Ok(mut interrupt) => Self::from_future(async move {
                if interrupt.recv().await.is_none() {
                    std::future::pending::<()>().await;
                }
            }),
            Err(e) => {
                tracing::warn!(error = %e, "cannot install Ctrl+C handler");
                Self::never()
            }
        }
    }

    pub fn from_future(fut: impl Future<Output = ()> + Send + 'static) -> Self {
        Self(Box::pin(fut))
    }

    /// Never fires.
    pub fn never() -> Self {
        Self::from_future(std::future::pending())
    }

    /// Wait for the next item of `stream`, or for the signal.
    pub async fn next<S>(&mut self, stream: &mut S) -> Next<S::Item>
    where
        S: Stream + Unpin,
    {
        tokio::select! {
            _ = &mut self.0 => Next::Interrupted,
            item = stream.next() => match item {
                Some(item) => Next::Item(item),
                None => Next::Ended,
            },
        }
    }
}

/// A polling loop helper with interval timing and stop handling.
pub struct Poller {
    interval: Duration,
    stop: StopSignal,
}

impl Poller {
    pub fn new(interval: Duration, stop: StopSignal) -> Self {
        Self { interval, stop }
    }

    /// Wait for the next poll tick.
    ///
    /// Returns [`Tick::Ready`] after sleeping for the configured interval, or
    /// [`Tick::Interrupted`] if the stop signal fired during the sleep.
    pub async fn tick(&mut self) -> Tick {
        tokio::select! {
            _ = &mut self.stop.0 => Tick::Interrupted,
            _ = tokio::time::sleep(self.interval) => Tick::Ready,
        }
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
