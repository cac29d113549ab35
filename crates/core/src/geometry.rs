// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Window and grid geometry.
//!
//! The serde shape matches the JSON the host uses for the `frame` window
//! property: `{"origin": {"x": .., "y": ..}, "size": {"width": .., "height": ..}}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Same size, new origin.
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self {
            origin: Point { x, y },
            ..self
        }
    }

    /// Same origin, new size.
    pub fn resized_to(self, width: i32, height: i32) -> Self {
        Self {
            size: Size { width, height },
            ..self
        }
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
