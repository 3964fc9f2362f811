// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform services the session calls into.
//!
//! Hosts implement these over their camera, photo library and display APIs.
//! The session only consumes completed results; any asynchronous platform
//! work happens before the host hands the value over.

use crate::error::PlatformError;

/// Answer from the platform's camera permission prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessStatus {
    /// The user allowed camera access.
    Granted,
    /// The user refused, or the platform refused on their behalf.
    Denied,
}

/// Camera capability provider.
pub trait CameraAccess {
    /// Asks the platform for camera access.
    fn request_access(&mut self) -> AccessStatus;
}

/// Image library provider.
pub trait ImageSource {
    /// Lets the user pick an image; `None` if they cancelled.
    fn pick_image(&mut self) -> Option<String>;
}

/// Display services configured once at startup.
///
/// Failures are reported but never block the session.
pub trait DisplayServices {
    /// Keeps the screen from sleeping.
    fn keep_awake(&mut self) -> Result<(), PlatformError>;

    /// Sets screen brightness, `0.0..=1.0`.
    fn set_brightness(&mut self, level: f64) -> Result<(), PlatformError>;

    /// Locks the screen in portrait orientation.
    fn lock_portrait(&mut self) -> Result<(), PlatformError>;
}

/// Picks nothing; every pick behaves like a cancelled dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn pick_image(&mut self) -> Option<String> {
        None
    }
}
