//! Deterministic session RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. The job
//! board, roadside tree layout, traffic lanes and traffic recycling all draw
//! from `ResMut<SimRng>` instead of `rand::thread_rng()`, so identical seeds
//! produce identical sessions.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Seed picked by the app binary; inserted before `SimulationPlugin` so the
/// startup systems see it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSeed(pub u64);

impl Default for SessionSeed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

/// Fresh seed from OS entropy. `SystemTime` is unavailable on wasm32, so this
/// goes through `getrandom` instead.
pub fn random_seed() -> u64 {
    rand::random()
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionSeed>();
        let seed = app.world().resource::<SessionSeed>().0;
        app.insert_resource(SimRng::from_seed_u64(seed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_is_deterministic() {
        let mut a = SimRng::default();
        let mut b = SimRng::default();
        let vals_a: Vec<f32> = (0..10).map(|_| a.0.gen::<f32>()).collect();
        let vals_b: Vec<f32> = (0..10).map(|_| b.0.gen::<f32>()).collect();
        assert_eq!(vals_a, vals_b);
    }

    #[test]
    fn test_from_seed_u64_deterministic() {
        let mut a = SimRng::from_seed_u64(12345);
        let mut b = SimRng::from_seed_u64(12345);
        let vals_a: Vec<u32> = (0..20).map(|_| a.0.gen_range(0..1000)).collect();
        let vals_b: Vec<u32> = (0..20).map(|_| b.0.gen_range(0..1000)).collect();
        assert_eq!(vals_a, vals_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = SimRng::from_seed_u64(1);
        let mut b = SimRng::from_seed_u64(2);
        let vals_a: Vec<f32> = (0..10).map(|_| a.0.gen::<f32>()).collect();
        let vals_b: Vec<f32> = (0..10).map(|_| b.0.gen::<f32>()).collect();
        assert_ne!(vals_a, vals_b);
    }

    #[test]
    fn test_plugin_uses_session_seed() {
        let mut app = App::new();
        app.insert_resource(SessionSeed(7));
        app.add_plugins(SimRngPlugin);
        let mut expected = SimRng::from_seed_u64(7);
        let mut rng = app.world_mut().resource_mut::<SimRng>();
        assert_eq!(rng.0.gen::<u64>(), expected.0.gen::<u64>());
    }
}
