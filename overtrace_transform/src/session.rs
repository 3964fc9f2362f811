// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Snapshot taken when a pinch gesture starts.
///
/// Every update of the same pinch is computed relative to this snapshot, so a
/// recognizer that reports the cumulative factor since pinch start never
/// accumulates rounding error across updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    /// Scale of the overlay when the pinch began.
    pub start_scale: f64,
}

/// Snapshot taken when a pan gesture starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    /// Translation of the overlay when the pan began.
    pub start: Vec2,
}

impl PanSession {
    /// Horizontal translation at pan start.
    #[must_use]
    pub fn start_x(&self) -> f64 {
        self.start.x
    }

    /// Vertical translation at pan start.
    #[must_use]
    pub fn start_y(&self) -> f64 {
        self.start.y
    }
}
