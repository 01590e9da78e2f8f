//! Road surface, edge lines and the pooled centre-line markings.

use bevy::prelude::*;

use simulation::config::{EDGE_LINE_X, ROAD_LENGTH, ROAD_WIDTH};
use simulation::scenery::{RoadMarking, RoadSurface};
use simulation::simulation_sets::DriveSet;
use simulation::world_scroll::WorldScroll;

const ROAD_Y: f32 = 0.01;
const LINE_Y: f32 = 0.02;
const MARKING_WIDTH: f32 = 0.3;
const MARKING_LENGTH: f32 = 8.0;
const EDGE_LINE_WIDTH: f32 = 0.2;

const ASPHALT_COLOR: Color = Color::srgb(0.165, 0.165, 0.165);

/// Shared handles for everything painted on the road.
#[derive(Resource)]
pub struct RoadAssets {
    pub surface_mesh: Handle<Mesh>,
    pub surface_material: Handle<StandardMaterial>,
    pub marking_mesh: Handle<Mesh>,
    pub paint_material: Handle<StandardMaterial>,
}

pub fn setup_road_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let paint_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    // Edge lines never move.
    let edge_mesh = meshes.add(Plane3d::default().mesh().size(EDGE_LINE_WIDTH, ROAD_LENGTH));
    for x in [-EDGE_LINE_X, EDGE_LINE_X] {
        commands.spawn((
            Mesh3d(edge_mesh.clone()),
            MeshMaterial3d(paint_material.clone()),
            Transform::from_xyz(x, LINE_Y, 0.0),
        ));
    }

    commands.insert_resource(RoadAssets {
        surface_mesh: meshes.add(Plane3d::default().mesh().size(ROAD_WIDTH, ROAD_LENGTH)),
        surface_material: materials.add(StandardMaterial {
            base_color: ASPHALT_COLOR,
            perceptual_roughness: 0.8,
            ..default()
        }),
        marking_mesh: meshes.add(Plane3d::default().mesh().size(MARKING_WIDTH, MARKING_LENGTH)),
        paint_material,
    });
}

pub fn road_surface_transform(z: f32) -> Transform {
    Transform::from_xyz(0.0, ROAD_Y, z)
}

pub fn marking_transform(z: f32) -> Transform {
    Transform::from_xyz(0.0, LINE_Y, z)
}

#[allow(clippy::type_complexity)]
pub fn attach_road_surface(
    mut commands: Commands,
    assets: Res<RoadAssets>,
    scroll: Res<WorldScroll>,
    query: Query<Entity, (With<RoadSurface>, Without<Mesh3d>)>,
) {
    for entity in &query {
        commands.entity(entity).insert((
            Mesh3d(assets.surface_mesh.clone()),
            MeshMaterial3d(assets.surface_material.clone()),
            road_surface_transform(scroll.road_surface_z()),
        ));
    }
}

pub fn attach_road_markings(
    mut commands: Commands,
    assets: Res<RoadAssets>,
    query: Query<(Entity, &RoadMarking), Without<Mesh3d>>,
) {
    for (entity, marking) in &query {
        commands.entity(entity).insert((
            Mesh3d(assets.marking_mesh.clone()),
            MeshMaterial3d(assets.paint_material.clone()),
            marking_transform(marking.z),
        ));
    }
}

pub fn sync_road_surface(
    scroll: Res<WorldScroll>,
    mut query: Query<&mut Transform, With<RoadSurface>>,
) {
    if !scroll.is_changed() {
        return;
    }
    let z = scroll.road_surface_z();
    for mut transform in &mut query {
        transform.translation.z = z;
    }
}

pub fn sync_road_markings(mut query: Query<(&RoadMarking, &mut Transform), Changed<RoadMarking>>) {
    for (marking, mut transform) in &mut query {
        transform.translation.z = marking.z;
    }
}

pub struct RoadRenderPlugin;

impl Plugin for RoadRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_road_assets).add_systems(
            Update,
            (
                attach_road_surface,
                attach_road_markings,
                sync_road_surface,
                sync_road_markings,
            )
                .after(DriveSet::Publish),
        );
    }
}
