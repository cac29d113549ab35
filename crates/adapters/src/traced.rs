// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::host::{
    CreateTab, CreatedTab, EventStream, HostAdapter, HostError, ProfileRecord, ProfileTarget,
    Subscription, VariableScope,
};
use async_trait::async_trait;
use it2_core::{Frame, Layout, SessionId, TabId, WindowId};
use serde_json::Value;
use std::future::Future;
use tracing::Instrument;

/// Wrapper that adds tracing to any HostAdapter
#[derive(Clone)]
pub struct TracedHost<H> {
    inner: H,
}

impl<H> TracedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

/// Run one host call inside `span`, logging its duration and any failure.
async fn traced<T, F>(span: tracing::Span, call: F) -> Result<T, HostError>
where
    F: Future<Output = Result<T, HostError>>,
{
    async {
        let start = std::time::Instant::now();
        let result = call.await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::debug!(elapsed_ms, "ok"),
            Err(e) => tracing::warn!(elapsed_ms, error = %e, "failed"),
        }
        result
    }
    .instrument(span)
    .await
}

#[async_trait]
impl<H: HostAdapter> HostAdapter for TracedHost<H> {
    async fn layout(&self) -> Result<Layout, HostError> {
        let span = tracing::debug_span!("host.layout");
        let layout = traced(span, self.inner.layout()).await?;
        tracing::trace!(
            windows = layout.windows.len(),
            sessions = layout.sessions().count(),
            "layout"
        );
        Ok(layout)
    }

    async fn activate_app(&self) -> Result<(), HostError> {
        traced(tracing::info_span!("host.activate_app"), self.inner.activate_app()).await
    }

    async fn select_menu_item(&self, identifier: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.menu_item", identifier);
        traced(span, self.inner.select_menu_item(identifier)).await
    }

    async fn get_preference(&self, key: &str) -> Result<Value, HostError> {
        let span = tracing::debug_span!("host.get_preference", key);
        traced(span, self.inner.get_preference(key)).await
    }

    async fn set_preference(&self, key: &str, value: &Value) -> Result<(), HostError> {
        let span = tracing::info_span!("host.set_preference", key, %value);
        traced(span, self.inner.set_preference(key, value)).await
    }

    async fn set_broadcast_domains(&self, domains: &[Vec<SessionId>]) -> Result<(), HostError> {
        let span = tracing::info_span!("host.broadcast", domains = domains.len());
        traced(span, self.inner.set_broadcast_domains(domains)).await
    }

    async fn get_variable(&self, scope: &VariableScope, name: &str) -> Result<Value, HostError> {
        let span = tracing::debug_span!("host.get_variable", ?scope, name);
        traced(span, self.inner.get_variable(scope, name)).await
    }

    async fn set_variable(
        &self,
        scope: &VariableScope,
        name: &str,
        value: &Value,
    ) -> Result<(), HostError> {
        let span = tracing::info_span!("host.set_variable", ?scope, name);
        traced(span, self.inner.set_variable(scope, name, value)).await
    }

    async fn send_text(&self, session: &SessionId, text: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.send_text", %session, text_len = text.len());
        traced(span, self.inner.send_text(session, text)).await
    }

    async fn split_pane(
        &self,
        session: &SessionId,
        vertical: bool,
        profile: Option<&str>,
    ) -> Result<SessionId, HostError> {
        let span = tracing::info_span!("host.split", %session, vertical, ?profile);
        let created = traced(span, self.inner.split_pane(session, vertical, profile)).await?;
        tracing::info!(new_session = %created, "pane split");
        Ok(created)
    }

    async fn screen_contents(
        &self,
        session: &SessionId,
        lines: Option<u32>,
    ) -> Result<Vec<String>, HostError> {
        let span = tracing::debug_span!("host.screen", %session, ?lines);
        traced(span, self.inner.screen_contents(session, lines)).await
    }

    async fn activate_session(&self, session: &SessionId) -> Result<(), HostError> {
        let span = tracing::info_span!("host.activate_session", %session);
        traced(span, self.inner.activate_session(session)).await
    }

    async fn close_sessions(&self, ids: &[SessionId], force: bool) -> Result<(), HostError> {
        let span = tracing::info_span!("host.close_sessions", count = ids.len(), force);
        traced(span, self.inner.close_sessions(ids, force)).await
    }

    async fn create_tab(&self, request: &CreateTab) -> Result<Option<CreatedTab>, HostError> {
        let span = tracing::info_span!(
            "host.create_tab",
            window = ?request.window_id,
            profile = ?request.profile,
        );
        traced(span, self.inner.create_tab(request)).await
    }

    async fn activate_window(&self, id: &WindowId) -> Result<(), HostError> {
        let span = tracing::info_span!("host.activate_window", %id);
        traced(span, self.inner.activate_window(id)).await
    }

    async fn activate_tab(&self, id: &TabId) -> Result<(), HostError> {
        let span = tracing::info_span!("host.activate_tab", %id);
        traced(span, self.inner.activate_tab(id)).await
    }

    async fn close_windows(&self, ids: &[WindowId], force: bool) -> Result<(), HostError> {
        let span = tracing::info_span!("host.close_windows", count = ids.len(), force);
        traced(span, self.inner.close_windows(ids, force)).await
    }

    async fn close_tabs(&self, ids: &[TabId], force: bool) -> Result<(), HostError> {
        let span = tracing::info_span!("host.close_tabs", count = ids.len(), force);
        traced(span, self.inner.close_tabs(ids, force)).await
    }

    async fn window_frame(&self, id: &WindowId) -> Result<Frame, HostError> {
        let span = tracing::debug_span!("host.window_frame", %id);
        traced(span, self.inner.window_frame(id)).await
    }

    async fn set_window_frame(&self, id: &WindowId, frame: Frame) -> Result<(), HostError> {
        let span = tracing::info_span!("host.set_window_frame", %id, ?frame);
        traced(span, self.inner.set_window_frame(id, frame)).await
    }

    async fn window_fullscreen(&self, id: &WindowId) -> Result<bool, HostError> {
        let span = tracing::debug_span!("host.window_fullscreen", %id);
        traced(span, self.inner.window_fullscreen(id)).await
    }

    async fn set_window_fullscreen(&self, id: &WindowId, on: bool) -> Result<(), HostError> {
        let span = tracing::info_span!("host.set_window_fullscreen", %id, on);
        traced(span, self.inner.set_window_fullscreen(id, on)).await
    }

    async fn save_arrangement(&self, name: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.save_arrangement", name);
        traced(span, self.inner.save_arrangement(name)).await
    }

    async fn list_arrangements(&self) -> Result<Vec<String>, HostError> {
        let span = tracing::debug_span!("host.list_arrangements");
        traced(span, self.inner.list_arrangements()).await
    }

    async fn restore_arrangement(&self, name: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.restore_arrangement", name);
        traced(span, self.inner.restore_arrangement(name)).await
    }

    async fn list_profiles(
        &self,
        properties: &[&str],
        guids: &[String],
    ) -> Result<Vec<ProfileRecord>, HostError> {
        let span = tracing::debug_span!(
            "host.list_profiles",
            properties = properties.len(),
            guids = guids.len()
        );
        traced(span, self.inner.list_profiles(properties, guids)).await
    }

    async fn set_profile_properties(
        &self,
        target: &ProfileTarget,
        assignments: &[(String, Value)],
    ) -> Result<(), HostError> {
        let keys: Vec<&str> = assignments.iter().map(|(k, _)| k.as_str()).collect();
        let span = tracing::info_span!("host.set_profile", ?target, ?keys);
        traced(span, self.inner.set_profile_properties(target, assignments)).await
    }

    async fn subscribe(&self, subscription: Subscription) -> Result<EventStream, HostError> {
        let span = tracing::info_span!("host.subscribe", ?subscription);
        traced(span, self.inner.subscribe(subscription)).await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
