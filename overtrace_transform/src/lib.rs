// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overtrace_transform --heading-base-level=0

//! Overtrace Transform: pinch/pan transform state for an overlay image.
//!
//! This crate models the affine transform applied to a reference image drawn
//! over a live camera preview. It focuses on:
//! - Scale driven by pinch gestures, with an optional **zoom lock** that
//!   discards a pinch when it ends.
//! - Translation driven by pan gestures, committed live and unclamped.
//! - Composing the result into a [`kurbo::Affine`] for rendering.
//!
//! It does **not** recognize gestures itself. Callers feed it the values a
//! platform recognizer reports: the cumulative pinch factor and the
//! cumulative translation since the gesture started. Each gesture begins by
//! taking a snapshot ([`PinchSession`] / [`PanSession`]) that is passed back
//! into every update for that gesture.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use overtrace_transform::TransformController;
//!
//! let mut overlay = TransformController::new();
//!
//! // Unlocked pinch: the new scale is committed on release.
//! let pinch = overlay.begin_pinch();
//! overlay.update_pinch(pinch, 1.5);
//! overlay.end_pinch(false);
//! assert_eq!(overlay.locked_scale(), 1.5);
//!
//! // Locked pinch: interactive while active, reverted on release.
//! let pinch = overlay.begin_pinch();
//! overlay.update_pinch(pinch, 3.0);
//! assert_eq!(overlay.scale(), 4.5);
//! overlay.end_pinch(true);
//! assert_eq!(overlay.scale(), 1.5);
//!
//! // Pans need no end step.
//! let pan = overlay.begin_pan();
//! overlay.update_pan(pan, Vec2::new(12.0, -8.0));
//! assert_eq!(overlay.translation(), Vec2::new(12.0, -8.0));
//! ```
//!
//! ## Design notes
//!
//! - The committed zoom baseline is an explicit field of the controller.
//! - Toggling zoom lock does not touch the scale; only ending a pinch does.
//! - Scale and translation are separate values ([`ScaleState`], [`PanState`])
//!   so overlapping pinch and pan streams never contend for the same field.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod session;
mod state;

pub use controller::{TransformController, TransformDebugInfo};
pub use session::{PanSession, PinchSession};
pub use state::{PanState, ScaleState, TransformState};
