use bevy::prelude::*;

use crate::config::ROAD_TILE_LENGTH;

/// Accumulated forward travel of the world toward the viewer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldScroll {
    pub offset: f32,
}

impl WorldScroll {
    pub fn advance(&mut self, delta: f32) {
        self.offset += delta;
    }

    /// Longitudinal position of the road mesh. The road snaps back by one tile
    /// whenever it has slid a full tile, so a finite mesh reads as endless.
    pub fn road_surface_z(&self) -> f32 {
        self.offset.rem_euclid(ROAD_TILE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_surface_wraps_every_tile() {
        let mut scroll = WorldScroll::default();
        scroll.advance(15.0);
        assert_eq!(scroll.road_surface_z(), 15.0);
        scroll.advance(10.0);
        assert_eq!(scroll.offset, 25.0);
        assert!((scroll.road_surface_z() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_road_surface_stays_within_tile() {
        let mut scroll = WorldScroll::default();
        for _ in 0..10_000 {
            scroll.advance(1.37);
            let z = scroll.road_surface_z();
            assert!((0.0..ROAD_TILE_LENGTH).contains(&z), "z = {z}");
        }
    }
}
