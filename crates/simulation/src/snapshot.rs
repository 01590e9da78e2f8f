//! Rounded, read-only view of the vehicle for the HUD.
//!
//! The UI never reads [`VehicleState`] directly; it reads this copy, which is
//! refreshed once per frame after the world has been updated.

use bevy::prelude::*;

use crate::simulation_sets::DriveSet;
use crate::vehicle::VehicleState;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DriveSnapshot {
    /// Rounded to one decimal.
    pub speed: f32,
    /// Rounded to one decimal.
    pub fuel: f32,
    pub gear: u8,
    /// Whole kilometres.
    pub distance: u32,
    pub engine_rpm: u32,
    pub steering_input: f32,
}

impl Default for DriveSnapshot {
    fn default() -> Self {
        Self::from_vehicle(&VehicleState::default())
    }
}

impl DriveSnapshot {
    pub fn from_vehicle(vehicle: &VehicleState) -> Self {
        Self {
            speed: round_to_tenth(vehicle.speed),
            fuel: round_to_tenth(vehicle.fuel),
            gear: vehicle.gear(),
            distance: vehicle.distance.max(0.0).round() as u32,
            engine_rpm: vehicle.engine_rpm.max(0.0).round() as u32,
            steering_input: vehicle.steering_input,
        }
    }
}

pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

pub fn publish_snapshot(vehicle: Res<VehicleState>, mut snapshot: ResMut<DriveSnapshot>) {
    let next = DriveSnapshot::from_vehicle(&vehicle);
    if *snapshot != next {
        *snapshot = next;
    }
}

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DriveSnapshot>()
            .add_systems(Update, publish_snapshot.in_set(DriveSet::Publish));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        let vehicle = VehicleState {
            speed: 12.345,
            fuel: 99.96,
            distance: 41.5,
            engine_rpm: 1234.4,
            ..Default::default()
        };
        let snapshot = DriveSnapshot::from_vehicle(&vehicle);
        assert!((snapshot.speed - 12.3).abs() < 1e-5);
        assert!((snapshot.fuel - 100.0).abs() < 1e-5);
        assert_eq!(snapshot.distance, 42);
        assert_eq!(snapshot.engine_rpm, 1234);
        assert_eq!(snapshot.gear, 1);
    }

    #[test]
    fn test_default_snapshot_matches_parked_truck() {
        let snapshot = DriveSnapshot::default();
        assert_eq!(snapshot.speed, 0.0);
        assert_eq!(snapshot.fuel, 100.0);
        assert_eq!(snapshot.distance, 0);
        assert_eq!(snapshot.engine_rpm, 800);
    }
}
