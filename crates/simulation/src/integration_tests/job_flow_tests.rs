//! Integration tests for accepting a job and driving it.

use bevy::prelude::*;

use crate::app_state::DriveState;
use crate::drive_params::DriveParams;
use crate::jobs::{JobBoard, SelectJobEvent};
use crate::test_harness::TestDrive;

#[test]
fn test_board_offers_six_jobs() {
    let drive = TestDrive::new();
    assert_eq!(drive.job_board().jobs.len(), 6);
}

#[test]
fn test_selecting_job_resets_odometer_and_sets_target() {
    let mut drive = TestDrive::new();
    drive.hold(KeyCode::KeyW).seconds(2.0);
    assert!(drive.vehicle().distance > 0.0);

    drive.release_all().with_speed(0.0);
    let expected = drive.job_board().jobs[1].clone();
    drive.select_job(1);

    assert_eq!(drive.vehicle().distance, 0.0);
    assert_eq!(drive.active_job().0.as_ref(), Some(&expected));
    assert_eq!(
        drive.active_job().target_distance(),
        Some(expected.distance_km)
    );
    assert_eq!(drive.active_job().progress_percent(0.0), Some(0.0));
}

#[test]
fn test_progress_grows_with_travel() {
    let mut drive = TestDrive::new();
    drive.select_job(0);
    drive.hold(KeyCode::KeyW);

    let mut previous = 0.0;
    for _ in 0..10 {
        drive.seconds(0.5);
        let distance = drive.vehicle().distance;
        let progress = drive
            .active_job()
            .progress_percent(distance)
            .expect("job is active");
        assert!(progress > previous, "{progress} should exceed {previous}");
        previous = progress;
    }
}

#[test]
fn test_reaching_target_does_not_complete_job() {
    // Faster odometer so the target is reached in a few seconds.
    let mut drive = TestDrive::with_params(DriveParams {
        distance_scale: 5.0,
        ..Default::default()
    });
    {
        let mut board = drive.world_mut().resource_mut::<JobBoard>();
        board.jobs[0].distance_km = 250;
        board.jobs[0].reward = 2000;
    }
    drive.select_job(0);
    drive.hold(KeyCode::KeyW);

    let mut frames = 0;
    while drive.vehicle().distance < 250.0 {
        drive.frames(1);
        frames += 1;
        assert!(frames < 10_000, "never reached the target distance");
    }
    drive.seconds(2.0);

    drive.assert_state(DriveState::Driving);
    assert!(!drive.state().shows_job_board());
    assert_eq!(drive.wallet().money, 5000);
    assert_eq!(drive.active_job().target_distance(), Some(250));

    let progress = drive
        .active_job()
        .progress_percent(drive.vehicle().distance)
        .expect("job is still active");
    assert!(progress > 100.0, "progress {progress} should be unclamped");
}

#[test]
fn test_unknown_job_is_rejected() {
    let mut drive = TestDrive::new();
    drive.select_job(99);
    drive.assert_state(DriveState::Browsing);
    assert!(drive.active_job().0.is_none());
}

#[test]
fn test_second_selection_while_driving_is_rejected() {
    let mut drive = TestDrive::new();
    drive.select_job(3);
    drive.hold(KeyCode::KeyW).seconds(1.0);
    let distance = drive.vehicle().distance;

    drive.release_all().select_job(4);
    assert_eq!(drive.active_job().0.as_ref().map(|job| job.id), Some(3));
    assert!(drive.vehicle().distance >= distance);
}

#[test]
fn test_two_selections_in_one_frame_keep_the_first() {
    let mut drive = TestDrive::new();
    drive
        .world_mut()
        .send_event(SelectJobEvent { job_id: 5 });
    drive
        .world_mut()
        .send_event(SelectJobEvent { job_id: 2 });
    drive.frames(2);

    drive.assert_state(DriveState::Driving);
    assert_eq!(drive.active_job().0.as_ref().map(|job| job.id), Some(5));
}
