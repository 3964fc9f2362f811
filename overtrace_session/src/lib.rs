// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overtrace_session --heading-base-level=0

//! Overtrace Session: the headless model behind a camera-overlay tracing app.
//!
//! A host shows the live camera feed, lets the user pick a reference image
//! and draws that image over the preview so it can be traced onto paper.
//! This crate owns everything between the host's widgets and its renderer:
//!
//! - [`PermissionGate`]: nothing is accepted until camera access is granted.
//! - [`Controls`] and [`OverlayConfig`]: the flat record behind the opacity
//!   and grid sliders and the toggle buttons.
//! - [`GestureRouter`]: turns recognizer pinch/pan events into
//!   [`overtrace_transform::TransformController`] calls.
//! - [`Frame`]: the layers to draw, bottom to top.
//!
//! Platform work (permission prompts, the photo picker, brightness) happens
//! behind the traits in [`platform`]; the session only consumes results.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use overtrace_session::{
//!     AccessStatus, CameraAccess, GestureEvent, GesturePhase, ImageSource, Session,
//! };
//!
//! struct Camera;
//! impl CameraAccess for Camera {
//!     fn request_access(&mut self) -> AccessStatus {
//!         AccessStatus::Granted
//!     }
//! }
//!
//! struct Library;
//! impl ImageSource for Library {
//!     fn pick_image(&mut self) -> Option<String> {
//!         Some("file:///sketch.png".into())
//!     }
//! }
//!
//! let mut session = Session::with_defaults(Size::new(390.0, 844.0));
//! session.request_camera(&mut Camera);
//! session.pick_image(&mut Library).unwrap();
//!
//! session.toggle_zoom_lock().unwrap(); // release the default lock
//! session.handle_gesture(GestureEvent::pinch(GesturePhase::Start, 1.0));
//! session.handle_gesture(GestureEvent::pinch(GesturePhase::Active, 2.0));
//! session.handle_gesture(GestureEvent::pinch(GesturePhase::End, 2.0));
//! assert_eq!(session.transform().locked_scale(), 2.0);
//!
//! let frame = session.frame();
//! let scene = frame.scene().unwrap();
//! assert_eq!(scene.overlay().unwrap().opacity, 0.5);
//! ```
//!
//! ## Logging
//!
//! Permission changes, image selection and rejected input are reported
//! through `tracing`; install a subscriber in the host to see them.

mod config;
mod error;
mod frame;
mod gesture;
mod permission;
pub mod platform;
mod session;

pub use config::{Controls, Opacity, OverlayConfig, SessionConfig};
pub use error::{ControlError, PlatformError};
pub use frame::{Button, ControlAction, ControlsPanel, Frame, Layer, OverlayLayer, Scene};
pub use gesture::{GestureEvent, GesturePhase, GestureRouter};
pub use permission::{PermissionGate, PermissionState};
pub use platform::{AccessStatus, CameraAccess, DisplayServices, ImageSource, NoImages};
pub use session::Session;
