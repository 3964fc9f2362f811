// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overtrace_grid::GridSpec;

use crate::error::ControlError;

/// Overlay opacity within the slider range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Opacity(f64);

impl Opacity {
    /// Most transparent accepted value.
    pub const MIN: f64 = 0.1;
    /// Fully opaque.
    pub const MAX: f64 = 1.0;
    /// Opacity used when nothing else is configured.
    pub const DEFAULT: f64 = 0.5;

    /// Creates an opacity, rejecting values outside [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub fn new(value: f64) -> Result<Self, ControlError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ControlError::OpacityOutOfRange { value })
        }
    }

    /// Returns the opacity as a plain value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// The overlay image and how strongly it is drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayConfig {
    /// Opacity of the overlay image.
    pub opacity: Opacity,
    /// Source of the overlay image; `None` until the first successful pick.
    pub image_uri: Option<String>,
}

/// Flat record of the toggles and the grid slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    /// Grid spacing.
    pub grid: GridSpec,
    /// Whether the grid is drawn.
    pub grid_visible: bool,
    /// Whether pinches are reverted when they end.
    pub zoom_lock: bool,
    /// Whether the control panel is shown.
    pub controls_visible: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            grid_visible: true,
            zoom_lock: true,
            controls_visible: true,
        }
    }
}

/// Initial values for a session, as a host would supply them.
///
/// Every field falls back to its default when missing from a deserialized
/// preset. Values are validated by [`SessionConfig::validate`].
#[cfg_attr(
    feature = "serde",
    doc = r#"
With the `serde` feature a partial preset can be read from TOML:

```rust
use overtrace_session::SessionConfig;

let config: SessionConfig = toml::from_str("grid_spacing = 60.0").unwrap();
assert_eq!(config.grid_spacing, 60.0);
assert_eq!(config.opacity, 0.5);
assert!(config.zoom_lock);

let (opacity, controls) = config.validate().unwrap();
assert_eq!(opacity.get(), 0.5);
assert_eq!(controls.grid.spacing(), 60.0);
```
"#
)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Initial overlay opacity.
    pub opacity: f64,
    /// Initial grid spacing.
    pub grid_spacing: f64,
    /// Whether the grid starts visible.
    pub grid_visible: bool,
    /// Whether zoom lock starts engaged.
    pub zoom_lock: bool,
    /// Whether the control panel starts visible.
    pub controls_visible: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let controls = Controls::default();
        Self {
            opacity: Opacity::DEFAULT,
            grid_spacing: controls.grid.spacing(),
            grid_visible: controls.grid_visible,
            zoom_lock: controls.zoom_lock,
            controls_visible: controls.controls_visible,
        }
    }
}

impl SessionConfig {
    /// Checks the numeric ranges and splits the preset into its parts.
    pub fn validate(&self) -> Result<(Opacity, Controls), ControlError> {
        let opacity = Opacity::new(self.opacity)?;
        let grid = GridSpec::new(self.grid_spacing)?;
        Ok((
            opacity,
            Controls {
                grid,
                grid_visible: self.grid_visible,
                zoom_lock: self.zoom_lock,
                controls_visible: self.controls_visible,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlError, Opacity, SessionConfig};

    #[test]
    fn opacity_bounds_are_inclusive() {
        assert_eq!(Opacity::new(0.1).map(Opacity::get), Ok(0.1));
        assert_eq!(Opacity::new(1.0).map(Opacity::get), Ok(1.0));
        assert_eq!(
            Opacity::new(0.099),
            Err(ControlError::OpacityOutOfRange { value: 0.099 })
        );
        assert!(Opacity::new(1.01).is_err());
        assert!(Opacity::new(f64::NAN).is_err());
    }

    #[test]
    fn default_config_validates() {
        let (opacity, controls) = SessionConfig::default().validate().unwrap();
        assert_eq!(opacity.get(), 0.5);
        assert_eq!(controls.grid.spacing(), 40.0);
        assert!(controls.grid_visible);
        assert!(controls.zoom_lock);
        assert!(controls.controls_visible);
    }

    #[test]
    fn invalid_preset_is_rejected() {
        let config = SessionConfig {
            grid_spacing: 10.0,
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ControlError::Spacing(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_preset_fills_defaults() {
        let config: SessionConfig = toml::from_str("opacity = 0.8\nzoom_lock = false\n").unwrap();
        assert_eq!(config.opacity, 0.8);
        assert!(!config.zoom_lock);
        assert_eq!(config.grid_spacing, 40.0);
        assert!(config.grid_visible);
    }
}
