//! Integration tests for the pooled scenery and traffic.

use bevy::prelude::*;

use crate::config::{MARKING_COUNT, TRAFFIC_POOL_SIZE, TRAFFIC_RESPAWN_Z};
use crate::scenery::{RoadMarking, RoadSurface, RoadsideTree};
use crate::test_harness::TestDrive;
use crate::traffic::TrafficAgent;

#[test]
fn test_pools_are_spawned_at_startup() {
    let mut drive = TestDrive::new();
    assert_eq!(drive.count::<RoadSurface>(), 1);
    assert_eq!(drive.count::<RoadMarking>(), MARKING_COUNT);
    assert_eq!(drive.count::<TrafficAgent>(), TRAFFIC_POOL_SIZE);
    let trees = drive.count::<RoadsideTree>();
    assert!(trees > 0 && trees % 2 == 0, "tree count {trees}");
}

#[test]
fn test_pool_sizes_never_change() {
    let mut drive = TestDrive::new();
    let trees = drive.count::<RoadsideTree>();

    drive.hold(KeyCode::KeyW).seconds(20.0);

    assert_eq!(drive.count::<RoadMarking>(), MARKING_COUNT);
    assert_eq!(drive.count::<TrafficAgent>(), TRAFFIC_POOL_SIZE);
    assert_eq!(drive.count::<RoadsideTree>(), trees);
}

#[test]
fn test_pools_stay_in_window_at_full_speed() {
    let mut drive = TestDrive::new();
    drive.hold(KeyCode::KeyW);
    for _ in 0..40 {
        drive.seconds(0.5);
        drive.assert_pools_in_window();
        drive.assert_vehicle_in_range();
    }
}

#[test]
fn test_traffic_recycles_while_parked() {
    let mut drive = TestDrive::new();
    let nearest = drive
        .traffic()
        .iter()
        .map(|agent| agent.z)
        .fold(f32::MIN, f32::max);
    assert_eq!(nearest, -100.0);

    // Even a parked truck sees traffic go by at 15..25 units/s, so the
    // nearest car passes the recycle point within 200 / 15 seconds.
    let mut previous = drive.traffic();
    let mut recycled = 0;
    for _ in 0..900 {
        drive.frames(1);
        let current = drive.traffic();
        assert_eq!(current.len(), TRAFFIC_POOL_SIZE);
        for (before, after) in previous.iter().zip(&current) {
            if after.z < before.z {
                recycled += 1;
                assert_eq!(after.z, TRAFFIC_RESPAWN_Z);
                assert_eq!(after.speed, before.speed);
                assert!(after.lane_x == 3.0 || after.lane_x == -3.0);
            }
        }
        previous = current;
    }
    assert!(recycled > 0, "no car was recycled");
}

#[test]
fn test_markings_keep_their_spacing() {
    let mut drive = TestDrive::new();
    drive.hold(KeyCode::KeyW).seconds(7.3);

    let mut zs = drive.marking_zs();
    zs.sort_by(f32::total_cmp);
    for pair in zs.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((gap - 20.0).abs() < 0.1, "gap {gap}");
    }
}

#[test]
fn test_trees_do_not_move_while_parked() {
    let mut drive = TestDrive::new();
    let before = drive.trees();
    drive.frames(60);
    assert_eq!(drive.trees(), before);
}
