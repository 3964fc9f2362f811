// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

use crate::lines::{GridLines, generate};

/// Spacing of the alignment grid, kept within the slider range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    spacing: f64,
}

impl GridSpec {
    /// Smallest accepted spacing, in view pixels.
    pub const MIN_SPACING: f64 = 20.0;
    /// Largest accepted spacing, in view pixels.
    pub const MAX_SPACING: f64 = 100.0;
    /// Increment the spacing slider moves in.
    pub const STEP: f64 = 10.0;
    /// Spacing used when nothing else is configured.
    pub const DEFAULT_SPACING: f64 = 40.0;

    /// Creates a grid spacing, rejecting spacings outside
    /// [`MIN_SPACING`](Self::MIN_SPACING)..=[`MAX_SPACING`](Self::MAX_SPACING).
    ///
    /// Both bounds are accepted exactly.
    pub fn new(spacing: f64) -> Result<Self, SpacingOutOfRange> {
        if (Self::MIN_SPACING..=Self::MAX_SPACING).contains(&spacing) {
            Ok(Self { spacing })
        } else {
            Err(SpacingOutOfRange { spacing })
        }
    }

    /// Creates a grid spacing from an arbitrary value the way the slider would:
    /// clamped into range and moved to the nearest step.
    ///
    /// NaN maps to [`DEFAULT_SPACING`](Self::DEFAULT_SPACING).
    #[must_use]
    pub fn snapped(spacing: f64) -> Self {
        if spacing.is_nan() {
            return Self::default();
        }
        let clamped = spacing.clamp(Self::MIN_SPACING, Self::MAX_SPACING);
        let mut best = Self::MIN_SPACING;
        let mut candidate = Self::MIN_SPACING;
        while candidate <= Self::MAX_SPACING {
            if (candidate - clamped).abs() < (best - clamped).abs() {
                best = candidate;
            }
            candidate += Self::STEP;
        }
        Self { spacing: best }
    }

    /// Returns the spacing in view pixels.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Generates the grid lines for `viewport`.
    #[must_use]
    pub fn lines(&self, viewport: Size) -> GridLines {
        generate(self.spacing, viewport)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spacing: Self::DEFAULT_SPACING,
        }
    }
}

/// Error returned when a grid spacing falls outside the slider range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingOutOfRange {
    /// The rejected spacing.
    pub spacing: f64,
}

impl fmt::Display for SpacingOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid spacing {} is outside {}..={}",
            self.spacing,
            GridSpec::MIN_SPACING,
            GridSpec::MAX_SPACING
        )
    }
}

impl core::error::Error for SpacingOutOfRange {}

#[cfg(test)]
mod tests {
    use super::GridSpec;

    #[test]
    fn bounds_are_accepted_exactly() {
        assert_eq!(GridSpec::new(20.0).map(|g| g.spacing()), Ok(20.0));
        assert_eq!(GridSpec::new(100.0).map(|g| g.spacing()), Ok(100.0));
    }

    #[test]
    fn out_of_range_is_rejected() {
        for bad in [19.999, 100.001, 0.0, -40.0, f64::NAN, f64::INFINITY] {
            assert!(GridSpec::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn snapped_clamps_and_rounds_to_step() {
        assert_eq!(GridSpec::snapped(3.0).spacing(), 20.0);
        assert_eq!(GridSpec::snapped(44.0).spacing(), 40.0);
        assert_eq!(GridSpec::snapped(46.0).spacing(), 50.0);
        assert_eq!(GridSpec::snapped(1_000.0).spacing(), 100.0);
        assert_eq!(GridSpec::snapped(f64::NAN), GridSpec::default());
    }

    #[test]
    fn error_message_names_range() {
        let err = GridSpec::new(5.0).unwrap_err();
        assert_eq!(
            alloc::format!("{err}"),
            "grid spacing 5 is outside 20..=100"
        );
    }
}
