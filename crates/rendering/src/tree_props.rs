//! Roadside tree meshes: a trunk and a round canopy per pooled tree.

use bevy::prelude::*;

use simulation::scenery::RoadsideTree;
use simulation::simulation_sets::DriveSet;

const TRUNK_RADIUS: f32 = 0.35;
const TRUNK_HEIGHT: f32 = 4.0;
const CANOPY_RADIUS: f32 = 2.0;
const CANOPY_Y: f32 = 5.0;

const TRUNK_COLOR: Color = Color::srgb(0.290, 0.145, 0.067);
const CANOPY_COLOR: Color = Color::srgb(0.051, 0.302, 0.051);

#[derive(Resource)]
pub struct TreeMeshes {
    pub trunk: Handle<Mesh>,
    pub trunk_material: Handle<StandardMaterial>,
    pub canopy: Handle<Mesh>,
    pub canopy_material: Handle<StandardMaterial>,
}

pub fn setup_tree_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(TreeMeshes {
        trunk: meshes.add(Cylinder::new(TRUNK_RADIUS, TRUNK_HEIGHT)),
        trunk_material: materials.add(StandardMaterial {
            base_color: TRUNK_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        }),
        canopy: meshes.add(Sphere::new(CANOPY_RADIUS).mesh().uv(8, 8)),
        canopy_material: materials.add(StandardMaterial {
            base_color: CANOPY_COLOR,
            perceptual_roughness: 0.8,
            ..default()
        }),
    });
}

/// World transform of a tree root. The trunk and canopy hang off it.
pub fn tree_transform(tree: &RoadsideTree) -> Transform {
    Transform::from_xyz(tree.x, 0.0, tree.z)
}

/// Trunk local offset: the cylinder is centred, so lift it by half its height.
pub fn trunk_offset() -> Vec3 {
    Vec3::new(0.0, TRUNK_HEIGHT / 2.0, 0.0)
}

pub fn canopy_offset() -> Vec3 {
    Vec3::new(0.0, CANOPY_Y, 0.0)
}

pub fn attach_tree_meshes(
    mut commands: Commands,
    meshes: Res<TreeMeshes>,
    query: Query<(Entity, &RoadsideTree), Without<Transform>>,
) {
    for (entity, tree) in &query {
        commands
            .entity(entity)
            .insert((tree_transform(tree), Visibility::default()))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.trunk.clone()),
                    MeshMaterial3d(meshes.trunk_material.clone()),
                    Transform::from_translation(trunk_offset()),
                ));
                parent.spawn((
                    Mesh3d(meshes.canopy.clone()),
                    MeshMaterial3d(meshes.canopy_material.clone()),
                    Transform::from_translation(canopy_offset()),
                ));
            });
    }
}

pub fn sync_tree_transforms(
    mut query: Query<(&RoadsideTree, &mut Transform), Changed<RoadsideTree>>,
) {
    for (tree, mut transform) in &mut query {
        transform.translation = tree_transform(tree).translation;
    }
}

pub struct TreePropsPlugin;

impl Plugin for TreePropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_tree_meshes).add_systems(
            Update,
            (attach_tree_meshes, sync_tree_transforms).after(DriveSet::Publish),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunk_stands_on_the_ground() {
        let bottom = trunk_offset().y - TRUNK_HEIGHT / 2.0;
        assert_eq!(bottom, 0.0);
    }

    #[test]
    fn test_canopy_overlaps_trunk_top() {
        let trunk_top = trunk_offset().y + TRUNK_HEIGHT / 2.0;
        let canopy_bottom = canopy_offset().y - CANOPY_RADIUS;
        assert!(canopy_bottom < trunk_top);
    }

    #[test]
    fn test_tree_transform_uses_pool_position() {
        let tree = RoadsideTree { x: -17.5, z: -220.0 };
        assert_eq!(
            tree_transform(&tree).translation,
            Vec3::new(-17.5, 0.0, -220.0)
        );
    }
}
