//! Input sampler: copies the held state of the driving keys into
//! [`DriveInput`] every frame and turns gear-key presses into [`GearShift`]
//! events.

use bevy::prelude::*;

use crate::drive_params::DriveParams;
use crate::keybindings::DriveKeyBindings;

/// Currently held driving keys. Refreshed every frame, never latched.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub throttle: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    /// Tracked for completeness; no driving behaviour reads it.
    pub shift: bool,
    pub handbrake: bool,
}

impl DriveInput {
    /// Per-frame steering input: positive steers left. When both steering
    /// keys are held, right wins.
    pub fn steering(&self, params: &DriveParams) -> f32 {
        if self.steer_right {
            -params.steering_rate
        } else if self.steer_left {
            params.steering_rate
        } else {
            0.0
        }
    }

    /// True when no pedal (throttle, brake or handbrake) is held.
    pub fn coasting(&self) -> bool {
        !(self.throttle || self.brake || self.handbrake)
    }
}

/// Discrete gear change request, emitted once per key press.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearShift {
    Up,
    Down,
}

pub fn sample_drive_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<DriveKeyBindings>,
    mut input: ResMut<DriveInput>,
    mut shifts: EventWriter<GearShift>,
) {
    let Some(keys) = keys else {
        return;
    };

    *input = DriveInput {
        throttle: bindings.throttle.pressed(&keys),
        brake: bindings.brake.pressed(&keys),
        steer_left: bindings.steer_left.pressed(&keys),
        steer_right: bindings.steer_right.pressed(&keys),
        shift: bindings.shift.pressed(&keys),
        handbrake: bindings.handbrake.pressed(&keys),
    };

    if bindings.gear_up.just_pressed(&keys) {
        shifts.send(GearShift::Up);
    }
    if bindings.gear_down.just_pressed(&keys) {
        shifts.send(GearShift::Down);
    }
}

pub struct DriveInputPlugin;

impl Plugin for DriveInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DriveInput>()
            .init_resource::<DriveKeyBindings>()
            .add_event::<GearShift>()
            .add_systems(
                Update,
                sample_drive_input.in_set(crate::simulation_sets::DriveSet::Input),
            );
    }
}
