// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::session::{PanSession, PinchSession};

/// Scale half of the overlay transform, driven by pinch gestures.
///
/// Besides the live scale this tracks the committed `locked_scale` baseline
/// that zoom lock reverts to when a pinch ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    current: f64,
    locked: f64,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScaleState {
    /// Creates a scale state whose live and committed scale are both `scale`.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            current: scale,
            locked: scale,
        }
    }

    /// Returns the live scale, including any uncommitted pinch in flight.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns the last committed scale.
    #[must_use]
    pub fn locked(&self) -> f64 {
        self.locked
    }

    /// Snapshots the live scale at the start of a pinch.
    #[must_use]
    pub fn begin_pinch(&self) -> PinchSession {
        PinchSession {
            start_scale: self.current,
        }
    }

    /// Applies the cumulative pinch factor reported since `session` began.
    ///
    /// Non-positive or non-finite factors are ignored. Returns the live scale.
    pub fn update_pinch(&mut self, session: PinchSession, pinch_factor: f64) -> f64 {
        if pinch_factor > 0.0 && pinch_factor.is_finite() {
            self.current = session.start_scale * pinch_factor;
        }
        self.current
    }

    /// Finishes a pinch.
    ///
    /// Without zoom lock the live scale is committed as the new baseline.
    /// With zoom lock the live scale reverts to the last committed baseline.
    pub fn end_pinch(&mut self, zoom_lock: bool) {
        if zoom_lock {
            self.current = self.locked;
        } else {
            self.locked = self.current;
        }
    }
}

/// Translation half of the overlay transform, driven by pan gestures.
///
/// Translation is unclamped; the overlay may be panned off screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    translation: Vec2,
}

impl PanState {
    /// Creates a pan state at `translation`.
    #[must_use]
    pub fn new(translation: Vec2) -> Self {
        Self { translation }
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Snapshots the translation at the start of a pan.
    #[must_use]
    pub fn begin_pan(&self) -> PanSession {
        PanSession {
            start: self.translation,
        }
    }

    /// Applies the cumulative translation reported since `session` began.
    ///
    /// Pans commit live, so there is no matching `end_pan`.
    pub fn update_pan(&mut self, session: PanSession, delta: Vec2) -> Vec2 {
        self.translation = session.start + delta;
        self.translation
    }
}

/// Plain snapshot of the overlay transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation in view pixels.
    pub translate_x: f64,
    /// Vertical translation in view pixels.
    pub translate_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl TransformState {
    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }
}
