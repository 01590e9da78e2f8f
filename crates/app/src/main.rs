use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use simulation::sim_rng::SessionSeed;

mod launch;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Truck Drive".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings::game());

    // Logging is up once DefaultPlugins are added, so load config after that.
    let params = launch::load_params(std::env::var(launch::PARAMS_ENV).ok().as_deref());
    let seed = launch::resolve_seed(std::env::var(launch::SEED_ENV).ok().as_deref());
    info!("Session seed {seed}");

    // Both must be in the world before SimulationPlugin builds.
    app.insert_resource(params)
        .insert_resource(SessionSeed(seed))
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    app.run();
}
