//! Fixed scene geometry. Everything here is in world units along the
//! viewer-relative axes: X is lateral (positive right), Z is longitudinal
//! (negative ahead of the viewer, positive behind).

pub const ROAD_WIDTH: f32 = 12.0;
pub const ROAD_LENGTH: f32 = 2000.0;
/// Length of one road tile; the road mesh snaps back every tile.
pub const ROAD_TILE_LENGTH: f32 = 20.0;
pub const GROUND_SIZE: f32 = 2000.0;

/// Lateral centre of the two traffic lanes.
pub const LANE_OFFSET_X: f32 = 3.0;
/// Lateral position of the painted edge lines.
pub const EDGE_LINE_X: f32 = 6.0;

pub const MARKING_SPACING: f32 = 20.0;
pub const MARKING_COUNT: usize = 100;
/// Lane markings live in `[-MARKING_WINDOW / 2, MARKING_WINDOW / 2)`.
pub const MARKING_WINDOW: f32 = MARKING_SPACING * MARKING_COUNT as f32;

pub const TREE_ROW_SPACING: f32 = 20.0;
/// First (farthest ahead) tree row.
pub const TREE_FIRST_ROW_Z: f32 = -400.0;
/// Trees past this point (behind the viewer) wrap back ahead.
pub const TREE_RECYCLE_Z: f32 = 100.0;
pub const TREE_WINDOW: f32 = TREE_RECYCLE_Z - TREE_FIRST_ROW_Z;
pub const TREE_ROW_COUNT: usize = (TREE_WINDOW / TREE_ROW_SPACING) as usize;
/// Probability that a row gets a pair of trees.
pub const TREE_ROW_CHANCE: f64 = 0.7;
/// Nearest lateral distance of a tree from the road centre.
pub const TREE_MIN_OFFSET_X: f32 = 15.0;
/// Random extra lateral distance on top of `TREE_MIN_OFFSET_X`.
pub const TREE_OFFSET_SPREAD_X: f32 = 10.0;

pub const TRAFFIC_POOL_SIZE: usize = 8;
pub const TRAFFIC_FIRST_Z: f32 = -100.0;
pub const TRAFFIC_SPACING: f32 = 60.0;
/// A car that passes this point is recycled.
pub const TRAFFIC_RECYCLE_Z: f32 = 100.0;
/// Where a recycled car reappears.
pub const TRAFFIC_RESPAWN_Z: f32 = -200.0;
pub const TRAFFIC_MIN_SPEED: f32 = 15.0;
pub const TRAFFIC_SPEED_SPREAD: f32 = 10.0;

/// Number of jobs offered on the board at session start.
pub const JOB_BOARD_SIZE: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_window_covers_every_marking() {
        assert_eq!(MARKING_WINDOW, ROAD_LENGTH);
        assert_eq!(MARKING_WINDOW / MARKING_SPACING, MARKING_COUNT as f32);
    }

    #[test]
    fn test_tree_rows_fill_window() {
        assert_eq!(TREE_ROW_COUNT, 25);
        let last_row = TREE_FIRST_ROW_Z + (TREE_ROW_COUNT - 1) as f32 * TREE_ROW_SPACING;
        assert!(last_row < TREE_RECYCLE_Z);
    }

    #[test]
    fn test_traffic_respawn_is_ahead_of_recycle_point() {
        assert!(TRAFFIC_RESPAWN_Z < TRAFFIC_RECYCLE_Z);
        let farthest = TRAFFIC_FIRST_Z - TRAFFIC_SPACING * (TRAFFIC_POOL_SIZE - 1) as f32;
        assert!(farthest < TRAFFIC_RECYCLE_Z);
    }
}
