// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overtrace_grid::SpacingOutOfRange;
use thiserror::Error;

use crate::config::Opacity;

/// Errors from slider, toggle and button input.
///
/// A rejected input never changes session state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    /// Opacity outside the slider range.
    #[error("opacity {value} is outside {min}..={max}", min = Opacity::MIN, max = Opacity::MAX)]
    OpacityOutOfRange {
        /// The rejected opacity.
        value: f64,
    },

    /// Grid spacing outside the slider range.
    #[error(transparent)]
    Spacing(#[from] SpacingOutOfRange),

    /// Input arrived before camera access was granted.
    #[error("camera access has not been granted")]
    CameraNotGranted,
}

/// Failure reported by a fire-and-forget platform service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{service} failed: {reason}")]
pub struct PlatformError {
    /// Service that failed, such as `"brightness"`.
    pub service: &'static str,
    /// Human-readable reason from the platform.
    pub reason: String,
}

impl PlatformError {
    /// Creates an error for `service`.
    pub fn new(service: &'static str, reason: impl Into<String>) -> Self {
        Self {
            service,
            reason: reason.into(),
        }
    }
}
