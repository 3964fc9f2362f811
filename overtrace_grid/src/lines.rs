// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Line, Point, Size};

/// Upper bound on lines produced along a single axis.
///
/// Slider-range spacings stay far below this on any real display; the cap
/// only bounds allocation for pathological tiny spacings.
pub const MAX_LINES_PER_AXIS: usize = 4096;

/// Offsets of the alignment grid lines for one viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// X offsets of vertical lines, ascending.
    pub verticals: Vec<f64>,
    /// Y offsets of horizontal lines, ascending.
    pub horizontals: Vec<f64>,
}

impl GridLines {
    /// Returns `true` if there are no lines on either axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verticals.is_empty() && self.horizontals.is_empty()
    }

    /// Total number of lines across both axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verticals.len() + self.horizontals.len()
    }

    /// Line segments spanning `viewport`: verticals first, then horizontals.
    ///
    /// Vertical lines run the full height and horizontal lines the full width.
    pub fn segments(&self, viewport: Size) -> impl Iterator<Item = Line> + '_ {
        let verticals = self
            .verticals
            .iter()
            .map(move |&x| Line::new(Point::new(x, 0.0), Point::new(x, viewport.height)));
        let horizontals = self
            .horizontals
            .iter()
            .map(move |&y| Line::new(Point::new(0.0, y), Point::new(viewport.width, y)));
        verticals.chain(horizontals)
    }
}

/// Generates grid line offsets for `spacing` over `viewport`.
///
/// Each axis receives every positive multiple of `spacing` strictly below the
/// viewport extent on that axis, starting at `spacing` itself. A spacing that
/// is not strictly positive (including NaN) yields no lines, as does a
/// non-finite extent.
///
/// ```
/// use kurbo::Size;
/// use overtrace_grid::generate;
///
/// let lines = generate(40.0, Size::new(100.0, 50.0));
/// assert_eq!(lines.verticals, [40.0, 80.0]);
/// assert_eq!(lines.horizontals, [40.0]);
/// ```
#[must_use]
pub fn generate(spacing: f64, viewport: Size) -> GridLines {
    GridLines {
        verticals: axis(spacing, viewport.width),
        horizontals: axis(spacing, viewport.height),
    }
}

fn axis(spacing: f64, extent: f64) -> Vec<f64> {
    let mut out = Vec::new();
    if spacing.is_nan() || spacing <= 0.0 || !extent.is_finite() {
        return out;
    }
    // Multiply rather than accumulate so offsets stay exact multiples.
    let mut k: u32 = 1;
    loop {
        let offset = spacing * f64::from(k);
        if offset >= extent || out.len() == MAX_LINES_PER_AXIS {
            break;
        }
        out.push(offset);
        k += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{MAX_LINES_PER_AXIS, generate};

    #[test]
    fn reference_layout() {
        let lines = generate(40.0, Size::new(100.0, 50.0));
        assert_eq!(lines.verticals, [40.0, 80.0]);
        assert_eq!(lines.horizontals, [40.0]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn extent_multiple_is_excluded() {
        let lines = generate(20.0, Size::new(100.0, 40.0));
        assert_eq!(lines.verticals, [20.0, 40.0, 60.0, 80.0]);
        assert_eq!(lines.horizontals, [20.0]);
    }

    #[test]
    fn spacing_larger_than_viewport_is_empty() {
        let lines = generate(100.0, Size::new(100.0, 60.0));
        assert!(lines.is_empty());
    }

    #[test]
    fn degenerate_spacing_is_empty() {
        for spacing in [0.0, -0.0, -20.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(generate(spacing, Size::new(390.0, 844.0)).is_empty());
        }
    }

    #[test]
    fn non_finite_extent_is_empty() {
        let lines = generate(40.0, Size::new(f64::INFINITY, 80.0));
        assert!(lines.verticals.is_empty());
        assert_eq!(lines.horizontals, [40.0]);
    }

    #[test]
    fn tiny_spacing_is_capped() {
        let lines = generate(1e-9, Size::new(10.0, 10.0));
        assert_eq!(lines.verticals.len(), MAX_LINES_PER_AXIS);
        assert_eq!(lines.horizontals.len(), MAX_LINES_PER_AXIS);
    }

    #[test]
    fn segments_span_viewport() {
        let viewport = Size::new(100.0, 50.0);
        let lines = generate(40.0, viewport);
        let segs: alloc::vec::Vec<_> = lines.segments(viewport).collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].p0, Point::new(40.0, 0.0));
        assert_eq!(segs[0].p1, Point::new(40.0, 50.0));
        assert_eq!(segs[1].p0, Point::new(80.0, 0.0));
        assert_eq!(segs[2].p0, Point::new(0.0, 40.0));
        assert_eq!(segs[2].p1, Point::new(100.0, 40.0));
    }

    #[test]
    fn generation_is_idempotent() {
        let viewport = Size::new(393.0, 852.0);
        assert_eq!(generate(30.0, viewport), generate(30.0, viewport));
    }
}
