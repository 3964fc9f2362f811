// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::session::{PanSession, PinchSession};
use crate::state::{PanState, ScaleState, TransformState};

/// Owns the overlay transform and applies pinch and pan gestures to it.
///
/// The scale and translation halves are stored separately. Pinch and pan
/// streams may overlap, and [`TransformController::split_mut`] hands out
/// disjoint borrows so each stream can be driven on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformController {
    scale: ScaleState,
    pan: PanState,
}

impl TransformController {
    /// Creates a controller at identity: scale `1.0`, no translation, and a
    /// committed zoom baseline of `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller from an explicit transform.
    ///
    /// The committed zoom baseline is set to `state.scale`.
    #[must_use]
    pub fn from_state(state: TransformState) -> Self {
        Self {
            scale: ScaleState::new(state.scale),
            pan: PanState::new(state.translation()),
        }
    }

    /// Returns a snapshot of the live transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        let t = self.pan.translation();
        TransformState {
            scale: self.scale.current(),
            translate_x: t.x,
            translate_y: t.y,
        }
    }

    /// Returns the live scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.current()
    }

    /// Returns the committed zoom baseline that zoom lock reverts to.
    #[must_use]
    pub fn locked_scale(&self) -> f64 {
        self.scale.locked()
    }

    /// Returns the live translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.pan.translation()
    }

    /// Borrows the scale and translation halves independently.
    pub fn split_mut(&mut self) -> (&mut ScaleState, &mut PanState) {
        (&mut self.scale, &mut self.pan)
    }

    /// Starts a pinch gesture.
    #[must_use]
    pub fn begin_pinch(&self) -> PinchSession {
        self.scale.begin_pinch()
    }

    /// Updates the live scale to `session.start_scale * pinch_factor`.
    ///
    /// `pinch_factor` is the cumulative ratio since the pinch started. Returns
    /// the live scale.
    pub fn update_pinch(&mut self, session: PinchSession, pinch_factor: f64) -> f64 {
        self.scale.update_pinch(session, pinch_factor)
    }

    /// Ends a pinch gesture, committing or reverting per `zoom_lock`.
    pub fn end_pinch(&mut self, zoom_lock: bool) {
        self.scale.end_pinch(zoom_lock);
    }

    /// Starts a pan gesture.
    #[must_use]
    pub fn begin_pan(&self) -> PanSession {
        self.pan.begin_pan()
    }

    /// Updates the live translation to `session.start + delta`.
    pub fn update_pan(&mut self, session: PanSession, delta: Vec2) -> Vec2 {
        self.pan.update_pan(session, delta)
    }

    /// Resets to identity, including the committed zoom baseline.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Composes the overlay transform with the scale applied about the origin.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.pan.translation()) * Affine::scale(self.scale.current())
    }

    /// Composes the overlay transform with the scale applied about `pivot`.
    ///
    /// Renderers that lay the overlay out over the whole viewport pass the
    /// viewport center, so zooming grows the image around its middle.
    #[must_use]
    pub fn affine_about(&self, pivot: Point) -> Affine {
        let pivot = pivot.to_vec2();
        Affine::translate(self.pan.translation() + pivot)
            * Affine::scale(self.scale.current())
            * Affine::translate(-pivot)
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        TransformDebugInfo {
            state: self.state(),
            locked_scale: self.scale.locked(),
            affine: self.affine(),
        }
    }
}

/// Debug snapshot of a [`TransformController`].
#[derive(Clone, Copy, Debug)]
pub struct TransformDebugInfo {
    /// Live transform.
    pub state: TransformState,
    /// Committed zoom baseline.
    pub locked_scale: f64,
    /// Composed transform about the origin.
    pub affine: Affine,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::TransformController;
    use crate::TransformState;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unit_pinch_right_after_begin_is_identity() {
        let mut tc = TransformController::from_state(TransformState {
            scale: 1.7,
            translate_x: 0.0,
            translate_y: 0.0,
        });
        let session = tc.begin_pinch();
        assert_eq!(tc.update_pinch(session, 1.0), 1.7);
    }

    #[test]
    fn committed_pinch_becomes_next_lock_baseline() {
        let mut tc = TransformController::new();

        let first = tc.begin_pinch();
        tc.update_pinch(first, 2.0);
        tc.end_pinch(false);
        assert_eq!(tc.locked_scale(), 2.0);

        // The next locked pinch reverts to the freshly committed scale.
        let second = tc.begin_pinch();
        tc.update_pinch(second, 0.25);
        assert_eq!(tc.scale(), 0.5);
        tc.end_pinch(true);
        assert_eq!(tc.scale(), 2.0);
    }

    #[test]
    fn locked_pinch_reverts_regardless_of_distance() {
        let mut tc = TransformController::new();
        for factor in [0.01, 0.9, 1.1, 50.0] {
            let s = tc.begin_pinch();
            tc.update_pinch(s, factor);
            tc.end_pinch(true);
            assert_eq!(tc.scale(), 1.0);
        }
    }

    #[test]
    fn sequential_pans_add_up() {
        let mut tc = TransformController::new();
        let a = tc.begin_pan();
        tc.update_pan(a, Vec2::new(3.0, -2.0));
        let b = tc.begin_pan();
        tc.update_pan(b, Vec2::new(-10.0, 7.5));
        assert_eq!(tc.translation(), Vec2::new(-7.0, 5.5));
    }

    #[test]
    fn pinch_and_pan_touch_disjoint_fields() {
        let mut tc = TransformController::new();
        let pinch = tc.begin_pinch();
        let pan = tc.begin_pan();
        {
            let (scale, translation) = tc.split_mut();
            scale.update_pinch(pinch, 2.0);
            translation.update_pan(pan, Vec2::new(4.0, 4.0));
        }
        tc.end_pinch(false);
        let state = tc.state();
        assert_eq!(state.scale, 2.0);
        assert_eq!(state.translation(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn affine_translates_after_scaling() {
        let mut tc = TransformController::new();
        let pinch = tc.begin_pinch();
        tc.update_pinch(pinch, 2.0);
        let pan = tc.begin_pan();
        tc.update_pan(pan, Vec2::new(10.0, 20.0));

        let p = tc.affine() * Point::new(1.0, 1.0);
        assert!(close(p.x, 12.0) && close(p.y, 22.0));
    }

    #[test]
    fn affine_about_keeps_pivot_fixed_without_pan() {
        let mut tc = TransformController::new();
        let pinch = tc.begin_pinch();
        tc.update_pinch(pinch, 3.0);

        let pivot = Point::new(200.0, 400.0);
        let mapped = tc.affine_about(pivot) * pivot;
        assert!(close(mapped.x, pivot.x) && close(mapped.y, pivot.y));

        let corner = tc.affine_about(pivot) * Point::new(0.0, 0.0);
        assert!(close(corner.x, -400.0) && close(corner.y, -800.0));
    }

    #[test]
    fn reset_restores_identity_and_baseline() {
        let mut tc = TransformController::new();
        let pinch = tc.begin_pinch();
        tc.update_pinch(pinch, 4.0);
        tc.end_pinch(false);
        let pan = tc.begin_pan();
        tc.update_pan(pan, Vec2::new(1.0, 1.0));

        tc.reset();
        assert_eq!(tc.state(), TransformState::default());
        assert_eq!(tc.locked_scale(), 1.0);

        let info = tc.debug_info();
        assert_eq!(info.locked_scale, 1.0);
        assert_eq!(info.affine, kurbo::Affine::IDENTITY);
    }
}
