//! Frame-advance and query methods for `TestDrive`.

use bevy::prelude::*;

use crate::app_state::DriveState;
use crate::economy::Wallet;
use crate::jobs::{ActiveJob, JobBoard};
use crate::scenery::{RoadMarking, RoadsideTree};
use crate::snapshot::DriveSnapshot;
use crate::traffic::TrafficAgent;
use crate::vehicle::VehicleState;
use crate::world_scroll::WorldScroll;

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run `n` full frames. Held keys stay held; the just-pressed edges are
    /// cleared after every frame the way the input plugin would.
    pub fn frames(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
            self.app
                .world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .clear();
        }
        self
    }

    /// Run frames for `secs` seconds of simulated time.
    pub fn seconds(&mut self, secs: f64) -> &mut Self {
        let n = (secs / super::TEST_FRAME_SECS).round() as u32;
        self.frames(n)
    }

    // -----------------------------------------------------------------------
    // Queries (note: Bevy's World::query() requires &mut World)
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn vehicle(&self) -> &VehicleState {
        self.resource::<VehicleState>()
    }

    pub fn snapshot(&self) -> &DriveSnapshot {
        self.resource::<DriveSnapshot>()
    }

    pub fn scroll(&self) -> &WorldScroll {
        self.resource::<WorldScroll>()
    }

    pub fn state(&self) -> DriveState {
        *self.resource::<State<DriveState>>().get()
    }

    pub fn job_board(&self) -> &JobBoard {
        self.resource::<JobBoard>()
    }

    pub fn active_job(&self) -> &ActiveJob {
        self.resource::<ActiveJob>()
    }

    pub fn wallet(&self) -> &Wallet {
        self.resource::<Wallet>()
    }

    /// Count entities carrying component `C`.
    pub fn count<C: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<Entity, With<C>>().iter(world).count()
    }

    pub fn marking_zs(&mut self) -> Vec<f32> {
        let world = self.app.world_mut();
        world
            .query::<&RoadMarking>()
            .iter(world)
            .map(|m| m.z)
            .collect()
    }

    pub fn trees(&mut self) -> Vec<RoadsideTree> {
        let world = self.app.world_mut();
        world.query::<&RoadsideTree>().iter(world).copied().collect()
    }

    pub fn traffic(&mut self) -> Vec<TrafficAgent> {
        let world = self.app.world_mut();
        world.query::<&TrafficAgent>().iter(world).copied().collect()
    }
}
