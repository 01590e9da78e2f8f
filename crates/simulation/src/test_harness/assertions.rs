//! Assertion helpers for `TestDrive` integration tests.

use crate::app_state::DriveState;
use crate::config::{MARKING_WINDOW, TRAFFIC_RECYCLE_Z, TREE_RECYCLE_Z};

use super::TestDrive;

impl TestDrive {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_state(&self, expected: DriveState) {
        let state = self.state();
        assert_eq!(state, expected, "Expected {expected:?}, got {state:?}");
    }

    /// Speed, fuel and gear are inside their valid ranges.
    pub fn assert_vehicle_in_range(&self) {
        let vehicle = self.vehicle();
        let max_speed = self
            .resource::<crate::drive_params::DriveParams>()
            .max_speed;
        assert!(
            (0.0..=max_speed).contains(&vehicle.speed),
            "Speed {} outside [0, {max_speed}]",
            vehicle.speed
        );
        assert!(
            (0.0..=100.0).contains(&vehicle.fuel),
            "Fuel {} outside [0, 100]",
            vehicle.fuel
        );
        assert!(
            (1..=vehicle.gearbox.gear_count()).contains(&vehicle.gear()),
            "Gear {} outside 1..={}",
            vehicle.gear(),
            vehicle.gearbox.gear_count()
        );
    }

    /// Every pooled scenery and traffic entity is inside its window.
    pub fn assert_pools_in_window(&mut self) {
        let half = MARKING_WINDOW / 2.0;
        for z in self.marking_zs() {
            assert!((-half..half).contains(&z), "Marking z {z} outside window");
        }
        for tree in self.trees() {
            assert!(tree.z <= TREE_RECYCLE_Z, "Tree z {} past recycle point", tree.z);
        }
        for agent in self.traffic() {
            assert!(
                agent.z <= TRAFFIC_RECYCLE_Z,
                "Traffic z {} past recycle point",
                agent.z
            );
        }
    }
}
