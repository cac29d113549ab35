// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! it2-core: host-independent model for the it2 CLI

pub mod event;
pub mod geometry;
pub mod id;
pub mod layout;
pub mod profile;
pub mod resolve;
pub mod session_id;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use event::{display_value, HostEvent, PromptEvent};
pub use geometry::{Frame, Point, Size};
pub use id::{SessionId, TabId, WindowId};
pub use layout::{Layout, Session, Tab, Window};
pub use profile::{Color, Font, ProfileProperty, ProfileValueError};
pub use resolve::{lookup, resolve_one, resolve_targets, ResolveError};
pub use session_id::{normalize, SessionIdForm};
