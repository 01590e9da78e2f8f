//! Input and state-setup helpers for `TestDrive`.

use bevy::prelude::*;

use crate::jobs::SelectJobEvent;
use crate::vehicle::VehicleState;

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Press and keep holding `key` until [`release`](Self::release).
    pub fn hold(&mut self, key: KeyCode) -> &mut Self {
        self.keys_mut().press(key);
        self
    }

    pub fn release(&mut self, key: KeyCode) -> &mut Self {
        self.keys_mut().release(key);
        self
    }

    pub fn release_all(&mut self) -> &mut Self {
        self.keys_mut().release_all();
        self
    }

    /// Press `key` for exactly one frame.
    pub fn tap(&mut self, key: KeyCode) -> &mut Self {
        self.hold(key);
        self.frames(1);
        self.release(key);
        self
    }

    fn keys_mut(&mut self) -> Mut<'_, ButtonInput<KeyCode>> {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
    }

    // -----------------------------------------------------------------------
    // Direct state setup
    // -----------------------------------------------------------------------

    /// Overwrite the truck's speed without driving up to it.
    pub fn with_speed(&mut self, speed: f32) -> &mut Self {
        self.app.world_mut().resource_mut::<VehicleState>().speed = speed;
        self
    }

    /// Send a job selection and run two frames: one to apply it and one for
    /// the state transition to land.
    pub fn select_job(&mut self, job_id: u32) -> &mut Self {
        self.app.world_mut().send_event(SelectJobEvent { job_id });
        self.frames(2);
        self
    }
}
