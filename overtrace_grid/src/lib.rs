// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overtrace_grid --heading-base-level=0

//! Overtrace Grid: alignment guide geometry.
//!
//! Given a spacing and a viewport size, [`generate`] produces the offsets of
//! the vertical and horizontal guide lines drawn over a camera preview. The
//! result is regenerated rather than mutated whenever the spacing or the
//! viewport changes; the function is pure and keeps no state between calls.
//!
//! [`GridSpec`] keeps a spacing inside the range exposed by the spacing
//! slider, and [`GridLines::segments`] turns offsets into
//! [`kurbo::Line`]s for a renderer.
//!
//! ```rust
//! use kurbo::Size;
//! use overtrace_grid::GridSpec;
//!
//! let viewport = Size::new(390.0, 844.0);
//! let grid = GridSpec::new(100.0).unwrap();
//! let lines = grid.lines(viewport);
//! assert_eq!(lines.verticals, [100.0, 200.0, 300.0]);
//! assert_eq!(lines.horizontals.len(), 8);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod lines;
mod spacing;

pub use lines::{GridLines, MAX_LINES_PER_AXIS, generate};
pub use spacing::{GridSpec, SpacingOutOfRange};
