// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for pinch and pan composition.

use kurbo::Vec2;
use overtrace_transform::{TransformController, TransformState};
use proptest::prelude::*;

fn scale_strategy() -> impl Strategy<Value = f64> {
    0.05f64..20.0
}

fn factor_strategy() -> impl Strategy<Value = f64> {
    0.01f64..50.0
}

fn delta_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0)
}

fn at_scale(scale: f64) -> TransformController {
    TransformController::from_state(TransformState {
        scale,
        ..TransformState::default()
    })
}

proptest! {
    /// Property: a unit pinch right after begin leaves scale unchanged.
    #[test]
    fn prop_unit_pinch_is_identity(scale in scale_strategy()) {
        let mut tc = at_scale(scale);
        let session = tc.begin_pinch();
        prop_assert_eq!(tc.update_pinch(session, 1.0), scale);
    }

    /// Property: an unlocked pinch commits `start * factor` as the baseline.
    #[test]
    fn prop_unlocked_pinch_commits(scale in scale_strategy(), factor in factor_strategy()) {
        let mut tc = at_scale(scale);
        let session = tc.begin_pinch();
        tc.update_pinch(session, factor);
        tc.end_pinch(false);
        prop_assert_eq!(tc.locked_scale(), scale * factor);
        prop_assert_eq!(tc.scale(), scale * factor);
    }

    /// Property: a locked pinch always reverts to the baseline it started from.
    #[test]
    fn prop_locked_pinch_reverts(
        scale in scale_strategy(),
        factors in proptest::collection::vec(factor_strategy(), 1..8),
    ) {
        let mut tc = at_scale(scale);
        let session = tc.begin_pinch();
        for f in &factors {
            tc.update_pinch(session, *f);
        }
        tc.end_pinch(true);
        prop_assert_eq!(tc.scale(), scale);
        prop_assert_eq!(tc.locked_scale(), scale);
    }

    /// Property: pinches never disturb translation, pans never disturb scale.
    #[test]
    fn prop_streams_are_independent(
        factor in factor_strategy(),
        (dx, dy) in delta_strategy(),
        lock in any::<bool>(),
    ) {
        let mut tc = TransformController::new();
        let pan = tc.begin_pan();
        tc.update_pan(pan, Vec2::new(dx, dy));
        let pinch = tc.begin_pinch();
        tc.update_pinch(pinch, factor);
        tc.end_pinch(lock);
        prop_assert_eq!(tc.translation(), Vec2::new(dx, dy));

        let scale = tc.scale();
        let pan = tc.begin_pan();
        tc.update_pan(pan, Vec2::new(-dx, dy));
        prop_assert_eq!(tc.scale(), scale);
    }

    /// Property: sequential pans compose additively.
    #[test]
    fn prop_sequential_pans_add(
        (dx1, dy1) in delta_strategy(),
        (dx2, dy2) in delta_strategy(),
    ) {
        let mut tc = TransformController::new();
        let first = tc.begin_pan();
        tc.update_pan(first, Vec2::new(dx1, dy1));
        let second = tc.begin_pan();
        tc.update_pan(second, Vec2::new(dx2, dy2));

        let t = tc.translation();
        prop_assert!((t.x - (dx1 + dx2)).abs() < 1e-9);
        prop_assert!((t.y - (dy1 + dy2)).abs() < 1e-9);
    }
}
