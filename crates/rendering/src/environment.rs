//! Sky, lighting and ground.

use bevy::prelude::*;

use simulation::config::GROUND_SIZE;

pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);
pub const GROUND_COLOR: Color = Color::srgb(0.176, 0.314, 0.086);

/// Sun position; it shines toward the origin.
pub const SUN_POSITION: Vec3 = Vec3::new(50.0, 100.0, 50.0);

pub fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(SKY_COLOR));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::IDENTITY,
    ));
}
