use bevy::prelude::*;

pub mod app_state;
pub mod config;
pub mod drive_params;
pub mod economy;
pub mod gearbox;
pub mod input;
pub mod jobs;
pub mod keybindings;
pub mod params_error;
pub mod scenery;
pub mod sim_rng;
pub mod simulation_sets;
pub mod snapshot;
pub mod traffic;
pub mod vehicle;
pub mod world_scroll;

mod plugin_registration;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use drive_params::DriveParams;
use simulation_sets::DriveSet;

/// Headless driving simulation: state machine, vehicle, scenery and traffic
/// pools, job board and the HUD snapshot.
///
/// Insert `DriveParams` and `SessionSeed` before adding this plugin to
/// override the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DriveParams>();

        app.configure_sets(
            Update,
            (
                DriveSet::Input,
                DriveSet::Kinematics,
                DriveSet::World,
                DriveSet::Publish,
            )
                .chain(),
        );

        plugin_registration::register_feature_plugins(app);
    }
}
