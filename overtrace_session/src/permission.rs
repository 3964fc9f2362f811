// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::info;

use crate::platform::{AccessStatus, CameraAccess};

/// Where the camera permission stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionState {
    /// Not known yet; the platform has not answered.
    #[default]
    Pending,
    /// Refused. Only a manual re-request can change this.
    Denied,
    /// Allowed. Terminal for the session.
    Granted,
}

/// Gate in front of all overlay and grid input.
///
/// `Pending` and `Denied` move to `Granted` when the platform allows access.
/// There is no automatic retry; a denied gate stays denied until the user
/// asks again.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermissionGate {
    state: PermissionState,
}

impl PermissionGate {
    /// Creates a gate in [`PermissionState::Pending`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PermissionState {
        self.state
    }

    /// Returns `true` once access has been granted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PermissionState::Granted
    }

    /// Records a status the host learned without prompting, such as a
    /// permission already granted in a previous run.
    pub fn observe(&mut self, status: AccessStatus) -> PermissionState {
        if self.is_open() {
            return self.state;
        }
        let next = match status {
            AccessStatus::Granted => PermissionState::Granted,
            AccessStatus::Denied => PermissionState::Denied,
        };
        if next != self.state {
            info!(from = ?self.state, to = ?next, "camera permission changed");
            self.state = next;
        }
        self.state
    }

    /// Prompts for camera access unless it is already granted.
    pub fn request(&mut self, camera: &mut impl CameraAccess) -> PermissionState {
        if self.is_open() {
            return self.state;
        }
        let status = camera.request_access();
        self.observe(status)
    }
}

#[cfg(test)]
mod tests {
    use super::{PermissionGate, PermissionState};
    use crate::platform::{AccessStatus, CameraAccess};

    struct Scripted {
        answers: Vec<AccessStatus>,
        asked: usize,
    }

    impl CameraAccess for Scripted {
        fn request_access(&mut self) -> AccessStatus {
            let answer = self.answers[self.asked.min(self.answers.len() - 1)];
            self.asked += 1;
            answer
        }
    }

    #[test]
    fn starts_pending_and_closed() {
        let gate = PermissionGate::new();
        assert_eq!(gate.state(), PermissionState::Pending);
        assert!(!gate.is_open());
    }

    #[test]
    fn denial_sticks_until_manual_rerequest() {
        let mut camera = Scripted {
            answers: vec![AccessStatus::Denied, AccessStatus::Granted],
            asked: 0,
        };
        let mut gate = PermissionGate::new();
        assert_eq!(gate.request(&mut camera), PermissionState::Denied);
        assert_eq!(gate.state(), PermissionState::Denied);
        assert_eq!(camera.asked, 1);

        assert_eq!(gate.request(&mut camera), PermissionState::Granted);
        assert!(gate.is_open());
    }

    #[test]
    fn granted_is_terminal() {
        let mut camera = Scripted {
            answers: vec![AccessStatus::Granted, AccessStatus::Denied],
            asked: 0,
        };
        let mut gate = PermissionGate::new();
        gate.request(&mut camera);
        assert_eq!(gate.request(&mut camera), PermissionState::Granted);
        assert_eq!(gate.observe(AccessStatus::Denied), PermissionState::Granted);
        // Not prompted again once open.
        assert_eq!(camera.asked, 1);
    }
}
