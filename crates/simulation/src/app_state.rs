//! Top-level driving state machine.
//!
//! Defines [`DriveState`], a Bevy [`States`] enum with exactly two states and
//! one forward transition. The session opens on the job board and moves to
//! driving once a job is accepted. There is no way back: reaching the job's
//! target distance does not end the job and no reward is paid out.
//!
//! The kinematic update loop is *not* gated on this state. The truck can be
//! driven while the board is still open, which is why accepting a job resets
//! the odometer.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriveState {
    /// Job board visible, no active job.
    #[default]
    Browsing,
    /// Job board hidden, an active job is being driven.
    Driving,
}

impl DriveState {
    /// Whether the job board overlay should be shown.
    pub fn shows_job_board(self) -> bool {
        self == DriveState::Browsing
    }
}

pub struct DriveStatePlugin;

impl Plugin for DriveStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<DriveState>();
    }
}
