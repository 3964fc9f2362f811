// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Description of what the host should draw.
//!
//! The session never renders. [`Session::frame`](crate::Session::frame)
//! returns a [`Frame`] that lists the visible layers bottom to top with
//! everything the renderer needs, including button labels.

use kurbo::{Affine, Line, Size};

/// A button the host can show; pressing it maps to
/// [`Session::press`](crate::Session::press).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    /// Open the image picker.
    PickImage,
    /// Show or hide the grid.
    ToggleGrid,
    /// Engage or release zoom lock.
    ToggleZoomLock,
    /// Hide the control panel.
    HideControls,
    /// Bring the control panel back.
    ShowControls,
}

/// A labelled button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    /// What pressing the button does.
    pub action: ControlAction,
    /// Text on the button.
    pub label: &'static str,
}

/// The overlay image as it should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayer {
    /// Image source.
    pub image_uri: String,
    /// Transform from layout space (the full viewport) into view space.
    pub transform: Affine,
    /// Opacity to draw with.
    pub opacity: f64,
}

/// The control panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlsPanel {
    /// Opacity slider value.
    pub opacity: f64,
    /// Grid spacing slider value.
    pub grid_spacing: f64,
    /// Buttons, top to bottom.
    pub buttons: Vec<Button>,
}

/// One layer of a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Live camera feed; opaque to the session.
    Camera,
    /// The overlay image.
    Overlay(OverlayLayer),
    /// Alignment grid lines.
    Grid(Vec<Line>),
    /// The control panel.
    Controls(ControlsPanel),
    /// The lone button shown while the panel is hidden.
    ShowControls(Button),
}

impl Layer {
    /// Stacking order, higher is closer to the viewer.
    #[must_use]
    pub fn z_index(&self) -> u8 {
        match self {
            Self::Camera => 0,
            Self::Overlay(_) => 2,
            Self::Grid(_) => 3,
            Self::Controls(_) => 4,
            Self::ShowControls(_) => 5,
        }
    }
}

/// Layers of a live session, bottom to top.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Viewport the layers are laid out in.
    pub viewport: Size,
    /// Visible layers in ascending [`Layer::z_index`] order.
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Returns the overlay layer, if an image has been picked.
    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayLayer> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Overlay(overlay) => Some(overlay),
            _ => None,
        })
    }

    /// Returns the grid lines, if the grid is visible.
    #[must_use]
    pub fn grid(&self) -> Option<&[Line]> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Grid(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Returns the control panel, if it is visible.
    #[must_use]
    pub fn controls(&self) -> Option<&ControlsPanel> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Controls(panel) => Some(panel),
            _ => None,
        })
    }
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Camera access not yet granted or refused.
    ///
    /// The host may prompt right away with [`Session::request_camera`], and
    /// shows a request button until an answer arrives.
    ///
    /// [`Session::request_camera`]: crate::Session::request_camera
    RequestingPermission {
        /// Text on the request button.
        request_label: &'static str,
    },
    /// Camera access refused; the host shows a re-request affordance.
    PermissionDenied {
        /// Text on the re-request button.
        retry_label: &'static str,
    },
    /// Camera access granted; draw these layers.
    Scene(Scene),
}

impl Frame {
    /// Returns the scene, if the camera is live.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Self::Scene(scene) => Some(scene),
            _ => None,
        }
    }
}
