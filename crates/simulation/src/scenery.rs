//! Road markings and roadside trees.
//!
//! Both are fixed pools spawned once at startup. Each pool has its own
//! component and its own recycling rule, so nothing has to inspect meshes or
//! materials to decide what an entity is. Only the `z` coordinate ever
//! changes; pool sizes are constant for the whole session.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    MARKING_COUNT, MARKING_SPACING, MARKING_WINDOW, TREE_FIRST_ROW_Z, TREE_MIN_OFFSET_X,
    TREE_OFFSET_SPREAD_X, TREE_RECYCLE_Z, TREE_ROW_CHANCE, TREE_ROW_COUNT, TREE_ROW_SPACING,
    TREE_WINDOW,
};
use crate::sim_rng::SimRng;
use crate::simulation_sets::DriveSet;
use crate::vehicle::FrameMotion;

// =============================================================================
// Components
// =============================================================================

/// The scrolling road surface. Its position comes from `WorldScroll`.
#[derive(Component, Debug, Default)]
pub struct RoadSurface;

/// A dashed centre-line segment.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RoadMarking {
    pub z: f32,
}

/// A tree beside the road. Negative `x` is the left verge.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RoadsideTree {
    pub x: f32,
    pub z: f32,
}

// =============================================================================
// Layout and recycling rules
// =============================================================================

const HALF_MARKING_WINDOW: f32 = MARKING_WINDOW / 2.0;

/// Initial position of marking `index`, evenly spaced from the far end of the
/// window.
pub fn marking_start_z(index: usize) -> f32 {
    -HALF_MARKING_WINDOW + index as f32 * MARKING_SPACING
}

/// Wrap a marking position into `[-MARKING_WINDOW / 2, MARKING_WINDOW / 2)`.
pub fn wrap_marking_z(z: f32) -> f32 {
    let mut wrapped = (z + HALF_MARKING_WINDOW).rem_euclid(MARKING_WINDOW);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= MARKING_WINDOW {
        wrapped = 0.0;
    }
    wrapped - HALF_MARKING_WINDOW
}

/// Move a tree that has passed behind the viewer back to the far end of the
/// tree window, keeping its offset within the window.
pub fn recycle_tree_z(z: f32) -> f32 {
    if z > TREE_RECYCLE_Z {
        TREE_RECYCLE_Z - TREE_WINDOW + (z - TREE_RECYCLE_Z).rem_euclid(TREE_WINDOW)
    } else {
        z
    }
}

/// Roll the roadside tree layout. Each row independently gets a left/right
/// pair with probability `TREE_ROW_CHANCE`.
pub fn generate_tree_rows(rng: &mut SimRng) -> Vec<RoadsideTree> {
    let mut trees = Vec::new();
    for row in 0..TREE_ROW_COUNT {
        if !rng.0.gen_bool(TREE_ROW_CHANCE) {
            continue;
        }
        let z = TREE_FIRST_ROW_Z + row as f32 * TREE_ROW_SPACING;
        let left = TREE_MIN_OFFSET_X + rng.0.gen::<f32>() * TREE_OFFSET_SPREAD_X;
        let right = TREE_MIN_OFFSET_X + rng.0.gen::<f32>() * TREE_OFFSET_SPREAD_X;
        trees.push(RoadsideTree { x: -left, z });
        trees.push(RoadsideTree { x: right, z });
    }
    trees
}

// =============================================================================
// Systems
// =============================================================================

pub fn spawn_scenery(mut commands: Commands, mut rng: ResMut<SimRng>) {
    commands.spawn(RoadSurface);

    for i in 0..MARKING_COUNT {
        commands.spawn(RoadMarking {
            z: marking_start_z(i),
        });
    }

    let trees = generate_tree_rows(&mut rng);
    debug!("Spawned {} road markings and {} roadside trees", MARKING_COUNT, trees.len());
    commands.spawn_batch(trees);
}

pub fn scroll_markings(motion: Res<FrameMotion>, mut markings: Query<&mut RoadMarking>) {
    if motion.scroll_delta == 0.0 {
        return;
    }
    for mut marking in &mut markings {
        marking.z = wrap_marking_z(marking.z + motion.scroll_delta);
    }
}

pub fn scroll_trees(motion: Res<FrameMotion>, mut trees: Query<&mut RoadsideTree>) {
    if motion.scroll_delta == 0.0 {
        return;
    }
    for mut tree in &mut trees {
        tree.z = recycle_tree_z(tree.z + motion.scroll_delta);
    }
}

pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        // RNG consumers at startup run in a fixed order so a seed always
        // yields the same session.
        app.add_systems(
            Startup,
            spawn_scenery.after(crate::jobs::generate_job_board),
        )
        .add_systems(
            Update,
            (scroll_markings, scroll_trees).in_set(DriveSet::World),
        );
    }
}
