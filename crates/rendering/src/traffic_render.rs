//! Oncoming car meshes.
//!
//! Each traffic agent gets a body, cabin roof, windshield and four wheels.
//! Body paint is picked from a fixed palette by entity index, so a car keeps
//! its colour across recycles.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use simulation::simulation_sets::DriveSet;
use simulation::traffic::TrafficAgent;

pub const CAR_PALETTE: [Color; 8] = [
    Color::srgb(0.80, 0.12, 0.12),
    Color::srgb(0.12, 0.32, 0.78),
    Color::srgb(0.92, 0.92, 0.90),
    Color::srgb(0.10, 0.10, 0.12),
    Color::srgb(0.85, 0.70, 0.15),
    Color::srgb(0.20, 0.55, 0.30),
    Color::srgb(0.55, 0.55, 0.58),
    Color::srgb(0.90, 0.45, 0.10),
];

const WHEEL_POSITIONS: [Vec3; 4] = [
    Vec3::new(-0.8, 0.4, 1.3),
    Vec3::new(0.8, 0.4, 1.3),
    Vec3::new(-0.8, 0.4, -1.3),
    Vec3::new(0.8, 0.4, -1.3),
];

pub fn car_palette_index(entity_index: u32) -> usize {
    entity_index as usize % CAR_PALETTE.len()
}

pub fn car_color(entity_index: u32) -> Color {
    CAR_PALETTE[car_palette_index(entity_index)]
}

pub fn traffic_transform(agent: &TrafficAgent) -> Transform {
    Transform::from_xyz(agent.lane_x, 0.0, agent.z)
}

#[derive(Resource)]
pub struct TrafficMeshes {
    pub body: Handle<Mesh>,
    pub roof: Handle<Mesh>,
    pub windshield: Handle<Mesh>,
    pub wheel: Handle<Mesh>,
    /// One material per palette entry.
    pub paints: Vec<Handle<StandardMaterial>>,
    pub glass: Handle<StandardMaterial>,
    pub rubber: Handle<StandardMaterial>,
}

impl TrafficMeshes {
    pub fn paint(&self, entity_index: u32) -> Handle<StandardMaterial> {
        self.paints
            .get(car_palette_index(entity_index))
            .cloned()
            .unwrap_or_default()
    }
}

pub fn setup_traffic_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let paints = CAR_PALETTE
        .iter()
        .map(|&color| {
            materials.add(StandardMaterial {
                base_color: color,
                metallic: 0.6,
                perceptual_roughness: 0.4,
                ..default()
            })
        })
        .collect();

    commands.insert_resource(TrafficMeshes {
        body: meshes.add(Cuboid::new(2.0, 1.2, 4.0)),
        roof: meshes.add(Cuboid::new(1.8, 0.8, 2.0)),
        windshield: meshes.add(Cuboid::new(1.7, 0.7, 0.1)),
        wheel: meshes.add(Cylinder::new(0.4, 0.3)),
        paints,
        glass: materials.add(StandardMaterial {
            base_color: Color::srgba(0.2, 0.2, 0.2, 0.5),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        rubber: materials.add(StandardMaterial {
            base_color: Color::srgb(0.04, 0.04, 0.04),
            ..default()
        }),
    });
}

pub fn attach_traffic_meshes(
    mut commands: Commands,
    meshes: Res<TrafficMeshes>,
    query: Query<(Entity, &TrafficAgent), Without<Transform>>,
) {
    for (entity, agent) in &query {
        let paint = meshes.paint(entity.index());
        commands
            .entity(entity)
            .insert((traffic_transform(agent), Visibility::default()))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.body.clone()),
                    MeshMaterial3d(paint.clone()),
                    Transform::from_xyz(0.0, 1.0, 0.0),
                ));
                parent.spawn((
                    Mesh3d(meshes.roof.clone()),
                    MeshMaterial3d(paint),
                    Transform::from_xyz(0.0, 1.8, -0.3),
                ));
                parent.spawn((
                    Mesh3d(meshes.windshield.clone()),
                    MeshMaterial3d(meshes.glass.clone()),
                    Transform::from_xyz(0.0, 1.8, 1.0),
                ));
                for position in WHEEL_POSITIONS {
                    parent.spawn((
                        Mesh3d(meshes.wheel.clone()),
                        MeshMaterial3d(meshes.rubber.clone()),
                        Transform::from_translation(position)
                            .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                    ));
                }
            });
    }
}

pub fn sync_traffic_transforms(
    mut query: Query<(&TrafficAgent, &mut Transform), Changed<TrafficAgent>>,
) {
    for (agent, mut transform) in &mut query {
        transform.translation = traffic_transform(agent).translation;
    }
}

pub struct TrafficRenderPlugin;

impl Plugin for TrafficRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_traffic_meshes).add_systems(
            Update,
            (attach_traffic_meshes, sync_traffic_transforms).after(DriveSet::Publish),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_color_is_stable_per_entity() {
        assert_eq!(car_color(3), car_color(3));
        assert_eq!(car_color(3), car_color(3 + CAR_PALETTE.len() as u32));
    }

    #[test]
    fn test_neighbouring_entities_get_different_paint() {
        for i in 0..16 {
            assert_ne!(car_palette_index(i), car_palette_index(i + 1));
        }
    }

    #[test]
    fn test_wheels_touch_the_ground() {
        for position in WHEEL_POSITIONS {
            assert!((position.y - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_transform_follows_lane_and_z() {
        let agent = TrafficAgent {
            lane_x: -3.0,
            z: -160.0,
            speed: 20.0,
        };
        assert_eq!(
            traffic_transform(&agent).translation,
            Vec3::new(-3.0, 0.0, -160.0)
        );
    }
}
