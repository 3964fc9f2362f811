// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use overtrace_grid::{GridLines, GridSpec};
use overtrace_transform::TransformController;
use tracing::{debug, info, warn};

use crate::config::{Controls, Opacity, OverlayConfig, SessionConfig};
use crate::error::{ControlError, PlatformError};
use crate::frame::{Button, ControlAction, ControlsPanel, Frame, Layer, OverlayLayer, Scene};
use crate::gesture::{GestureEvent, GestureRouter};
use crate::permission::{PermissionGate, PermissionState};
use crate::platform::{AccessStatus, CameraAccess, DisplayServices, ImageSource};

/// Brightness requested at startup so the overlay stays readable.
const FULL_BRIGHTNESS: f64 = 1.0;

/// Label on the camera request button while the gate is closed.
const GRANT_LABEL: &str = "Grant Permission";

/// One tracing session over a fixed viewport.
///
/// Every method is a synchronous reaction to a single host event. Overlay
/// and grid input is refused until the camera permission gate is open.
#[derive(Clone, Debug)]
pub struct Session {
    viewport: Size,
    gate: PermissionGate,
    controls: Controls,
    overlay: OverlayConfig,
    transform: TransformController,
    gestures: GestureRouter,
    grid: GridLines,
}

impl Session {
    /// Creates a session over `viewport` with validated initial values.
    pub fn new(viewport: Size, config: SessionConfig) -> Result<Self, ControlError> {
        let (opacity, controls) = config.validate()?;
        Ok(Self::from_parts(viewport, opacity, controls))
    }

    /// Creates a session with default values.
    #[must_use]
    pub fn with_defaults(viewport: Size) -> Self {
        Self::from_parts(viewport, Opacity::default(), Controls::default())
    }

    fn from_parts(viewport: Size, opacity: Opacity, controls: Controls) -> Self {
        Self {
            viewport,
            gate: PermissionGate::new(),
            controls,
            overlay: OverlayConfig {
                opacity,
                image_uri: None,
            },
            transform: TransformController::new(),
            gestures: GestureRouter::new(),
            grid: controls.grid.lines(viewport),
        }
    }

    /// Runs the one-off display setup: keep-awake, full brightness, portrait.
    ///
    /// Failures are logged and skipped. Returns how many calls failed.
    pub fn start(&mut self, display: &mut impl DisplayServices) -> usize {
        let results: [Result<(), PlatformError>; 3] = [
            display.keep_awake(),
            display.set_brightness(FULL_BRIGHTNESS),
            display.lock_portrait(),
        ];
        let mut failures = 0;
        for err in results.into_iter().filter_map(Result::err) {
            warn!(service = err.service, reason = %err.reason, "display setup failed");
            failures += 1;
        }
        info!(
            width = self.viewport.width,
            height = self.viewport.height,
            failures,
            "session started"
        );
        failures
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the permission state.
    #[must_use]
    pub fn permission(&self) -> PermissionState {
        self.gate.state()
    }

    /// Returns the toggles and grid spacing.
    #[must_use]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Returns the overlay image and opacity.
    #[must_use]
    pub fn overlay(&self) -> &OverlayConfig {
        &self.overlay
    }

    /// Returns the overlay transform controller.
    #[must_use]
    pub fn transform(&self) -> &TransformController {
        &self.transform
    }

    /// Returns the current grid lines, whether or not the grid is visible.
    #[must_use]
    pub fn grid_lines(&self) -> &GridLines {
        &self.grid
    }

    /// Prompts for camera access; see [`PermissionGate::request`].
    pub fn request_camera(&mut self, camera: &mut impl CameraAccess) -> PermissionState {
        self.gate.request(camera)
    }

    /// Records a permission status the host already knows.
    pub fn observe_camera(&mut self, status: AccessStatus) -> PermissionState {
        self.gate.observe(status)
    }

    /// Lets the user pick an overlay image.
    ///
    /// A cancelled pick changes nothing. Returns `true` if an image was set.
    pub fn pick_image(&mut self, images: &mut impl ImageSource) -> Result<bool, ControlError> {
        self.ensure_open()?;
        match images.pick_image() {
            Some(uri) => {
                info!(uri = %uri, "overlay image selected");
                self.overlay.image_uri = Some(uri);
                Ok(true)
            }
            None => {
                debug!("image pick cancelled");
                Ok(false)
            }
        }
    }

    /// Sets the overlay opacity from the slider.
    pub fn set_opacity(&mut self, value: f64) -> Result<(), ControlError> {
        self.ensure_open()?;
        let opacity = Opacity::new(value).inspect_err(|_| {
            warn!(value, "opacity rejected");
        })?;
        self.overlay.opacity = opacity;
        Ok(())
    }

    /// Sets the grid spacing from the slider and regenerates the grid.
    pub fn set_grid_spacing(&mut self, spacing: f64) -> Result<(), ControlError> {
        self.ensure_open()?;
        let grid = GridSpec::new(spacing).inspect_err(|_| {
            warn!(spacing, "grid spacing rejected");
        })?;
        if grid != self.controls.grid {
            self.controls.grid = grid;
            self.grid = grid.lines(self.viewport);
            debug!(spacing, lines = self.grid.len(), "grid regenerated");
        }
        Ok(())
    }

    /// Shows or hides the grid. Returns the new visibility.
    pub fn toggle_grid(&mut self) -> Result<bool, ControlError> {
        self.ensure_open()?;
        self.controls.grid_visible = !self.controls.grid_visible;
        Ok(self.controls.grid_visible)
    }

    /// Engages or releases zoom lock. Returns the new setting.
    ///
    /// The displayed scale is left alone; the lock only takes effect when
    /// the next pinch ends.
    pub fn toggle_zoom_lock(&mut self) -> Result<bool, ControlError> {
        self.ensure_open()?;
        self.controls.zoom_lock = !self.controls.zoom_lock;
        debug!(zoom_lock = self.controls.zoom_lock, "zoom lock toggled");
        Ok(self.controls.zoom_lock)
    }

    /// Shows or hides the control panel.
    pub fn set_controls_visible(&mut self, visible: bool) -> Result<(), ControlError> {
        self.ensure_open()?;
        self.controls.controls_visible = visible;
        Ok(())
    }

    /// Performs the action behind a button from [`Session::frame`].
    pub fn press(
        &mut self,
        action: ControlAction,
        images: &mut impl ImageSource,
    ) -> Result<(), ControlError> {
        match action {
            ControlAction::PickImage => self.pick_image(images).map(drop),
            ControlAction::ToggleGrid => self.toggle_grid().map(drop),
            ControlAction::ToggleZoomLock => self.toggle_zoom_lock().map(drop),
            ControlAction::HideControls => self.set_controls_visible(false),
            ControlAction::ShowControls => self.set_controls_visible(true),
        }
    }

    /// Feeds one recognizer event to the overlay transform.
    ///
    /// Ignored while the gate is closed or before an image has been picked,
    /// since there is nothing on screen to manipulate. Returns `true` if the
    /// transform may have changed.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        if !self.gate.is_open() || self.overlay.image_uri.is_none() {
            debug!(?event, "gesture ignored, no overlay");
            return false;
        }
        self.gestures
            .apply(event, &mut self.transform, self.controls.zoom_lock)
    }

    /// Describes what to draw right now.
    #[must_use]
    pub fn frame(&self) -> Frame {
        match self.gate.state() {
            PermissionState::Pending => Frame::RequestingPermission {
                request_label: GRANT_LABEL,
            },
            PermissionState::Denied => Frame::PermissionDenied {
                retry_label: GRANT_LABEL,
            },
            PermissionState::Granted => Frame::Scene(self.scene()),
        }
    }

    fn scene(&self) -> Scene {
        let mut layers = vec![Layer::Camera];

        if let Some(uri) = &self.overlay.image_uri {
            let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
            layers.push(Layer::Overlay(OverlayLayer {
                image_uri: uri.clone(),
                transform: self.transform.affine_about(center),
                opacity: self.overlay.opacity.get(),
            }));
        }

        if self.controls.grid_visible {
            layers.push(Layer::Grid(self.grid.segments(self.viewport).collect()));
        }

        if self.controls.controls_visible {
            layers.push(Layer::Controls(self.controls_panel()));
        } else {
            layers.push(Layer::ShowControls(Button {
                action: ControlAction::ShowControls,
                label: "Show UI",
            }));
        }

        Scene {
            viewport: self.viewport,
            layers,
        }
    }

    fn controls_panel(&self) -> ControlsPanel {
        let grid_label = if self.controls.grid_visible {
            "Hide Grid"
        } else {
            "Show Grid"
        };
        let lock_label = if self.controls.zoom_lock {
            "Unlock Zoom"
        } else {
            "Lock Zoom"
        };
        ControlsPanel {
            opacity: self.overlay.opacity.get(),
            grid_spacing: self.controls.grid.spacing(),
            buttons: vec![
                Button {
                    action: ControlAction::PickImage,
                    label: "Pick Image",
                },
                Button {
                    action: ControlAction::ToggleGrid,
                    label: grid_label,
                },
                Button {
                    action: ControlAction::ToggleZoomLock,
                    label: lock_label,
                },
                Button {
                    action: ControlAction::HideControls,
                    label: "Hide UI",
                },
            ],
        }
    }

    fn ensure_open(&self) -> Result<(), ControlError> {
        if self.gate.is_open() {
            Ok(())
        } else {
            Err(ControlError::CameraNotGranted)
        }
    }
}
