//! The truck cab around the driver.
//!
//! Every piece is a child of the [`DriverCamera`], in camera-local space:
//! `-Z` is forward, `+Y` is up and the eye sits at the origin.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use bevy::prelude::*;

use simulation::drive_params::DriveParams;
use simulation::vehicle::VehicleState;

use crate::camera::DriverCamera;

const DASHBOARD_COLOR: Color = Color::srgb(0.102, 0.102, 0.102);
const WHEEL_COLOR: Color = Color::srgb(0.039, 0.039, 0.039);
const GAUGE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const GLASS_COLOR: Color = Color::srgba(0.533, 0.8, 1.0, 0.3);
const MIRROR_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
const ROOF_COLOR: Color = Color::srgb(0.165, 0.165, 0.165);
const WALL_COLOR: Color = Color::srgb(0.227, 0.227, 0.227);

/// The steering wheel rim. `rest` is its orientation with no input.
#[derive(Component, Debug, Clone, Copy)]
pub struct SteeringWheel {
    pub rest: Quat,
}

/// Rim orientation at rest: stood up to face the driver, then leaned back.
pub fn steering_wheel_rest() -> Quat {
    Quat::from_rotation_x(FRAC_PI_2 - FRAC_PI_6)
}

/// Spin the rim about its own axis by `ratio` radians per unit of input.
/// Steering left (positive input) turns it counter-clockwise as seen by the
/// driver.
pub fn steering_wheel_rotation(rest: Quat, steering_input: f32, ratio: f32) -> Quat {
    rest * Quat::from_rotation_y(steering_input * ratio)
}

fn double_sided(base_color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color,
        cull_mode: None,
        double_sided: true,
        ..default()
    }
}

pub fn spawn_cabin(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cameras: Query<Entity, With<DriverCamera>>,
) {
    let Ok(camera) = cameras.get_single() else {
        warn!("No driver camera, skipping cabin");
        return;
    };

    let dashboard_material = materials.add(StandardMaterial {
        base_color: DASHBOARD_COLOR,
        perceptual_roughness: 0.7,
        ..default()
    });
    let wheel_material = materials.add(StandardMaterial {
        base_color: WHEEL_COLOR,
        perceptual_roughness: 0.3,
        ..default()
    });
    let gauge_material = materials.add(StandardMaterial {
        base_color: GAUGE_COLOR,
        unlit: true,
        ..default()
    });
    let glass_material = materials.add(StandardMaterial {
        base_color: GLASS_COLOR,
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        cull_mode: None,
        double_sided: true,
        ..default()
    });
    let mirror_material = materials.add(StandardMaterial {
        base_color: MIRROR_COLOR,
        metallic: 0.9,
        perceptual_roughness: 0.1,
        ..default()
    });
    let roof_material = materials.add(double_sided(ROOF_COLOR));
    let wall_material = materials.add(double_sided(WALL_COLOR));

    let gauge_mesh = meshes.add(Circle::new(0.15));
    let side_window_mesh = meshes.add(Rectangle::new(1.0, 1.2));
    let mirror_mesh = meshes.add(Cuboid::new(0.3, 0.2, 0.05));
    let wall_mesh = meshes.add(Rectangle::new(2.0, 2.0));
    let rest = steering_wheel_rest();

    commands.entity(camera).with_children(|cab| {
        cab.spawn((
            Mesh3d(meshes.add(Cuboid::new(3.0, 0.5, 1.0))),
            MeshMaterial3d(dashboard_material),
            Transform::from_xyz(0.0, -1.0, -1.5),
        ));

        cab.spawn((
            SteeringWheel { rest },
            Mesh3d(meshes.add(Torus::new(0.35, 0.45))),
            MeshMaterial3d(wheel_material.clone()),
            Transform::from_xyz(0.0, -0.7, -1.2).with_rotation(rest),
        ))
        .with_children(|wheel| {
            // Hub shares the rim's axis, so it turns with it.
            wheel.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.15, 0.05))),
                MeshMaterial3d(wheel_material),
                Transform::IDENTITY,
            ));
        });

        // Speed and RPM dials on the dashboard face.
        for x in [-0.4, 0.4] {
            cab.spawn((
                Mesh3d(gauge_mesh.clone()),
                MeshMaterial3d(gauge_material.clone()),
                Transform::from_xyz(x, -0.8, -0.99),
            ));
        }

        cab.spawn((
            Mesh3d(meshes.add(Rectangle::new(2.5, 1.5))),
            MeshMaterial3d(glass_material.clone()),
            Transform::from_xyz(0.0, 0.0, -2.5),
        ));

        for (x, yaw) in [(-1.5, FRAC_PI_2), (1.5, -FRAC_PI_2)] {
            cab.spawn((
                Mesh3d(side_window_mesh.clone()),
                MeshMaterial3d(glass_material.clone()),
                Transform::from_xyz(x, -0.3, -1.0).with_rotation(Quat::from_rotation_y(yaw)),
            ));
        }

        for (x, yaw) in [(-1.8, FRAC_PI_6), (1.8, -FRAC_PI_6)] {
            cab.spawn((
                Mesh3d(mirror_mesh.clone()),
                MeshMaterial3d(mirror_material.clone()),
                Transform::from_xyz(x, 0.0, -1.8).with_rotation(Quat::from_rotation_y(yaw)),
            ));
        }

        // Faces down into the cab.
        cab.spawn((
            Mesh3d(meshes.add(Rectangle::new(2.5, 2.0))),
            MeshMaterial3d(roof_material),
            Transform::from_xyz(0.0, 0.7, -1.5).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ));

        for (x, yaw) in [(-1.5, FRAC_PI_2), (1.5, -FRAC_PI_2)] {
            cab.spawn((
                Mesh3d(wall_mesh.clone()),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_xyz(x, -0.3, -1.0).with_rotation(Quat::from_rotation_y(yaw)),
            ));
        }
    });
}

pub fn turn_steering_wheel(
    vehicle: Res<VehicleState>,
    params: Res<DriveParams>,
    mut wheels: Query<(&SteeringWheel, &mut Transform)>,
) {
    if !vehicle.is_changed() && !params.is_changed() {
        return;
    }
    for (wheel, mut transform) in &mut wheels {
        transform.rotation = steering_wheel_rotation(
            wheel.rest,
            vehicle.steering_input,
            params.steering_wheel_ratio,
        );
    }
}
