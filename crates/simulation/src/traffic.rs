//! Oncoming traffic.
//!
//! A fixed pool of cars drives toward the viewer along one of two lanes. A
//! car that passes behind the viewer is teleported back ahead onto a freshly
//! rolled lane, so the pool never grows or shrinks.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    LANE_OFFSET_X, TRAFFIC_FIRST_Z, TRAFFIC_MIN_SPEED, TRAFFIC_POOL_SIZE, TRAFFIC_RECYCLE_Z,
    TRAFFIC_RESPAWN_Z, TRAFFIC_SPACING, TRAFFIC_SPEED_SPREAD,
};
use crate::sim_rng::SimRng;
use crate::simulation_sets::DriveSet;
use crate::vehicle::FrameMotion;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TrafficAgent {
    /// Lateral lane centre, `±LANE_OFFSET_X`.
    pub lane_x: f32,
    pub z: f32,
    /// Own speed toward the viewer. Fixed for the life of the agent.
    pub speed: f32,
}

impl TrafficAgent {
    /// Advance toward the viewer and recycle if the agent has passed the
    /// recycle point. Returns `true` if it was recycled.
    pub fn advance(&mut self, motion: &FrameMotion, rng: &mut SimRng) -> bool {
        self.z += motion.traffic_advance(self.speed);
        if self.z > TRAFFIC_RECYCLE_Z {
            self.z = TRAFFIC_RESPAWN_Z;
            self.lane_x = random_lane(rng);
            true
        } else {
            false
        }
    }
}

pub fn random_lane(rng: &mut SimRng) -> f32 {
    if rng.coin() {
        -LANE_OFFSET_X
    } else {
        LANE_OFFSET_X
    }
}

/// Build the initial traffic pool, staggered ahead of the viewer.
pub fn generate_traffic(rng: &mut SimRng) -> Vec<TrafficAgent> {
    (0..TRAFFIC_POOL_SIZE)
        .map(|i| {
            let lane_x = random_lane(rng);
            let speed = TRAFFIC_MIN_SPEED + rng.0.gen::<f32>() * TRAFFIC_SPEED_SPREAD;
            TrafficAgent {
                lane_x,
                z: TRAFFIC_FIRST_Z - i as f32 * TRAFFIC_SPACING,
                speed,
            }
        })
        .collect()
}

pub fn spawn_traffic(mut commands: Commands, mut rng: ResMut<SimRng>) {
    commands.spawn_batch(generate_traffic(&mut rng));
}

pub fn move_traffic(
    motion: Res<FrameMotion>,
    mut rng: ResMut<SimRng>,
    mut agents: Query<&mut TrafficAgent>,
) {
    for mut agent in &mut agents {
        agent.advance(&motion, &mut rng);
    }
}

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_traffic.after(crate::scenery::spawn_scenery))
            .add_systems(Update, move_traffic.in_set(DriveSet::World));
    }
}
