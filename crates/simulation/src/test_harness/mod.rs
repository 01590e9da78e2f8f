//! # TestDrive: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with `MinimalPlugins` so the
//! whole driving loop can run without a window, renderer or real keyboard.
//!
//! Frame time is fixed at 1/60 s through `TimeUpdateStrategy::ManualDuration`,
//! and keys are pressed by writing to `ButtonInput<KeyCode>` directly.

mod assertions;
mod queries;
mod setup;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::drive_params::DriveParams;
use crate::sim_rng::SessionSeed;
use crate::SimulationPlugin;

/// Frame time used by every `TestDrive`.
pub const TEST_FRAME_SECS: f64 = 1.0 / 60.0;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Hold keys, advance frames, then query or assert on the resulting ECS state.
pub struct TestDrive {
    app: App,
}

impl TestDrive {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default parameters and the default seed (42).
    pub fn new() -> Self {
        Self::build(SessionSeed::default().0, DriveParams::default())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(seed, DriveParams::default())
    }

    pub fn with_params(params: DriveParams) -> Self {
        Self::build(SessionSeed::default().0, params)
    }

    fn build(seed: u64, params: DriveParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(TEST_FRAME_SECS),
        ));

        // Both are read while SimulationPlugin builds.
        app.insert_resource(SessionSeed(seed));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Startup systems run here. The first frame has a zero time delta, so
        // nothing moves yet.
        app.update();

        Self { app }
    }
}

impl Default for TestDrive {
    fn default() -> Self {
        Self::new()
    }
}
