// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing recognizer events into the overlay transform.
//!
//! A platform gesture recognizer reports each pinch or pan as a run of
//! `Start`, `Active`* and `End` events carrying cumulative values.
//! [`GestureRouter`] turns those into [`TransformController`] calls,
//! holding the snapshot taken at `Start` until the matching `End`.

use kurbo::Vec2;
use overtrace_transform::{PanSession, PinchSession, TransformController};
use tracing::debug;

/// Phase of a recognized gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The recognizer began tracking the gesture.
    Start,
    /// The gesture moved.
    Active,
    /// The gesture finished.
    End,
}

/// One event from a gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Two-finger pinch.
    Pinch {
        /// Phase of the pinch.
        phase: GesturePhase,
        /// Cumulative scale factor since the pinch started.
        scale: f64,
    },
    /// Pan.
    Pan {
        /// Phase of the pan.
        phase: GesturePhase,
        /// Cumulative translation since the pan started.
        translation: Vec2,
    },
}

impl GestureEvent {
    /// Convenience constructor for a pinch event.
    #[must_use]
    pub fn pinch(phase: GesturePhase, scale: f64) -> Self {
        Self::Pinch { phase, scale }
    }

    /// Convenience constructor for a pan event.
    #[must_use]
    pub fn pan(phase: GesturePhase, translation: impl Into<Vec2>) -> Self {
        Self::Pan {
            phase,
            translation: translation.into(),
        }
    }
}

/// In-flight gesture sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureRouter {
    pinch: Option<PinchSession>,
    pan: Option<PanSession>,
}

impl GestureRouter {
    /// Creates a router with no gesture in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a pinch is between `Start` and `End`.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns `true` while a pan is between `Start` and `End`.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Drops any in-flight sessions without committing anything.
    ///
    /// The transform stays wherever the last update left it.
    pub fn abandon(&mut self) {
        self.pinch = None;
        self.pan = None;
    }

    /// Applies `event` to `transform`.
    ///
    /// `zoom_lock` is consulted when a pinch ends. `Active` or `End` events
    /// without a preceding `Start` are ignored, and a second `Start` replaces
    /// the session of a gesture whose `End` never arrived.
    ///
    /// Returns `true` if the transform may have changed.
    pub fn apply(
        &mut self,
        event: GestureEvent,
        transform: &mut TransformController,
        zoom_lock: bool,
    ) -> bool {
        match event {
            GestureEvent::Pinch { phase, scale } => match phase {
                GesturePhase::Start => {
                    let session = transform.begin_pinch();
                    debug!(start_scale = session.start_scale, "pinch started");
                    self.pinch = Some(session);
                    false
                }
                GesturePhase::Active => match self.pinch {
                    Some(session) => {
                        transform.update_pinch(session, scale);
                        true
                    }
                    None => {
                        debug!("pinch update without start ignored");
                        false
                    }
                },
                GesturePhase::End => {
                    if self.pinch.take().is_none() {
                        debug!("pinch end without start ignored");
                        return false;
                    }
                    transform.end_pinch(zoom_lock);
                    debug!(
                        zoom_lock,
                        scale = transform.scale(),
                        locked_scale = transform.locked_scale(),
                        "pinch ended"
                    );
                    true
                }
            },
            GestureEvent::Pan { phase, translation } => match phase {
                GesturePhase::Start => {
                    self.pan = Some(transform.begin_pan());
                    debug!("pan started");
                    false
                }
                GesturePhase::Active => match self.pan {
                    Some(session) => {
                        transform.update_pan(session, translation);
                        true
                    }
                    None => {
                        debug!("pan update without start ignored");
                        false
                    }
                },
                GesturePhase::End => {
                    // Pans commit live; ending only forgets the snapshot.
                    self.pan = None;
                    false
                }
            },
        }
    }
}
