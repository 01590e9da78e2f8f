use bevy::prelude::*;

use crate::*;

/// Register all simulation feature plugins.
///
/// Order matters for the plugins that read `DriveParams` or `SessionSeed`
/// while building: they must come after those resources exist.
pub(crate) fn register_feature_plugins(app: &mut App) {
    // Session setup
    app.add_plugins(sim_rng::SimRngPlugin);
    app.add_plugins(app_state::DriveStatePlugin);
    app.add_plugins(economy::EconomyPlugin);

    // Per-frame driving chain
    app.add_plugins(input::DriveInputPlugin);
    app.add_plugins(vehicle::VehiclePlugin);
    app.add_plugins(scenery::SceneryPlugin);
    app.add_plugins(traffic::TrafficPlugin);
    app.add_plugins(snapshot::SnapshotPlugin);

    // Jobs
    app.add_plugins(jobs::JobsPlugin);
}
