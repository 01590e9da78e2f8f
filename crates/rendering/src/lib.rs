use bevy::prelude::*;

use simulation::simulation_sets::DriveSet;

pub mod cabin;
pub mod camera;
pub mod environment;
pub mod road_render;
pub mod traffic_render;
pub mod tree_props;

/// Everything visible in the 3D view: sky, lighting, ground, road, pooled
/// scenery, traffic and the cab interior.
///
/// Meshes are attached to the simulation's own entities, and all sync systems
/// run after `DriveSet::Publish` so they draw the state of the current frame.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                environment::setup_environment,
                camera::setup_camera,
                cabin::spawn_cabin,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (camera::apply_vehicle_yaw, camera::log_window_resize).after(DriveSet::Publish),
        )
        .add_systems(
            Update,
            cabin::turn_steering_wheel.after(DriveSet::Publish),
        );

        app.add_plugins((
            road_render::RoadRenderPlugin,
            tree_props::TreePropsPlugin,
            traffic_render::TrafficRenderPlugin,
        ));
    }
}
