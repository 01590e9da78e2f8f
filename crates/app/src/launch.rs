//! Launch configuration read from the environment.

use bevy::prelude::*;

use simulation::drive_params::DriveParams;
use simulation::sim_rng::random_seed;

pub const PARAMS_ENV: &str = "TRUCKDRIVE_PARAMS";
pub const SEED_ENV: &str = "TRUCKDRIVE_SEED";

/// Load drive parameters from `path`, falling back to defaults if it is unset
/// or the file cannot be used.
pub fn load_params(path: Option<&str>) -> DriveParams {
    let Some(path) = path else {
        return DriveParams::default();
    };
    match DriveParams::from_json_file(path) {
        Ok(params) => {
            info!("Loaded drive parameters from {path}");
            params
        }
        Err(err) => {
            warn!("Ignoring drive parameters from {path}: {err}");
            DriveParams::default()
        }
    }
}

pub fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// Seed from the environment value, or a fresh one if it is missing or bad.
pub fn resolve_seed(value: Option<&str>) -> u64 {
    match value {
        Some(raw) => parse_seed(raw).unwrap_or_else(|| {
            warn!("{SEED_ENV}={raw} is not a number, using a random seed");
            random_seed()
        }),
        None => random_seed(),
    }
}
