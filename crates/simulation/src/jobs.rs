//! Cargo jobs: the board generated at session start, the active job, and the
//! single Browsing → Driving transition triggered by accepting a job.
//!
//! Reaching a job's target distance has no effect. The job stays active, the
//! progress bar keeps growing past 100 % and no reward is paid.

use std::fmt;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::app_state::DriveState;
use crate::config::JOB_BOARD_SIZE;
use crate::sim_rng::{SessionSeed, SimRng};
use crate::simulation_sets::DriveSet;
use crate::vehicle::VehicleState;

pub const CITIES: &[&str] = &["Berlin", "Paris", "Amsterdam", "Prague", "Warsaw", "Vienna"];

pub const CARGO_TYPES: &[&str] = &[
    "Electronics",
    "Groceries",
    "Furniture",
    "Auto Parts",
    "Building Materials",
];

pub const MIN_JOB_DISTANCE_KM: u32 = 100;
pub const MAX_JOB_DISTANCE_KM: u32 = 499;
pub const MIN_JOB_REWARD: u32 = 1000;
pub const MAX_JOB_REWARD: u32 = 3999;
pub const MIN_CARGO_TONNES: u32 = 10;
pub const MAX_CARGO_TONNES: u32 = 24;

// =============================================================================
// Job
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub origin_city: &'static str,
    /// May be the same city as `origin_city`.
    pub destination_city: &'static str,
    pub cargo: &'static str,
    pub distance_km: u32,
    /// Reward in euros.
    pub reward: u32,
    pub weight_label: String,
}

impl Job {
    /// Roll a random job. The distance range never includes zero, so progress
    /// can always be computed.
    pub fn random(id: u32, rng: &mut SimRng) -> Self {
        let origin_city = CITIES.choose(&mut rng.0).copied().unwrap_or(CITIES[0]);
        let destination_city = CITIES.choose(&mut rng.0).copied().unwrap_or(CITIES[0]);
        let cargo = CARGO_TYPES
            .choose(&mut rng.0)
            .copied()
            .unwrap_or(CARGO_TYPES[0]);
        let distance_km = rng.0.gen_range(MIN_JOB_DISTANCE_KM..=MAX_JOB_DISTANCE_KM);
        let reward = rng.0.gen_range(MIN_JOB_REWARD..=MAX_JOB_REWARD);
        let tonnes = rng.0.gen_range(MIN_CARGO_TONNES..=MAX_CARGO_TONNES);

        Self {
            id,
            origin_city,
            destination_city,
            cargo,
            distance_km,
            reward,
            weight_label: format!("{tonnes} t"),
        }
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.origin_city, self.destination_city)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why a job selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// No job on the board has this id.
    UnknownJob(u32),
    /// A job is already being driven; there is no way back to the board.
    AlreadyDriving,
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::UnknownJob(id) => write!(f, "No job with id {id} on the board"),
            JobError::AlreadyDriving => write!(f, "A job is already active"),
        }
    }
}

impl std::error::Error for JobError {}

// =============================================================================
// Job board
// =============================================================================

/// The jobs offered this session. Generated once at startup and never
/// refreshed.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct JobBoard {
    pub jobs: Vec<Job>,
}

impl JobBoard {
    pub fn generate(count: usize, rng: &mut SimRng) -> Self {
        let jobs = (0..count as u32).map(|id| Job::random(id, rng)).collect();
        Self { jobs }
    }

    pub fn get(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Validate a selection made while in `state`.
    pub fn select(&self, id: u32, state: DriveState) -> Result<&Job, JobError> {
        if state != DriveState::Browsing {
            return Err(JobError::AlreadyDriving);
        }
        self.get(id).ok_or(JobError::UnknownJob(id))
    }
}

/// The job being driven, if any.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveJob(pub Option<Job>);

impl ActiveJob {
    pub fn target_distance(&self) -> Option<u32> {
        self.0.as_ref().map(|job| job.distance_km)
    }

    /// `distance / target * 100`, not clamped. `None` without an active job.
    pub fn progress_percent(&self, distance: f32) -> Option<f32> {
        self.target_distance()
            .map(|target| distance / target as f32 * 100.0)
    }
}

/// Request to accept the job with `job_id`, sent by the job board UI.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectJobEvent {
    pub job_id: u32,
}

// =============================================================================
// Systems
// =============================================================================

pub fn generate_job_board(
    mut board: ResMut<JobBoard>,
    mut rng: ResMut<SimRng>,
    seed: Res<SessionSeed>,
) {
    *board = JobBoard::generate(JOB_BOARD_SIZE, &mut rng);
    info!(
        "Generated job board with {} jobs (seed {})",
        board.jobs.len(),
        seed.0
    );
}

pub fn apply_job_selection(
    mut events: EventReader<SelectJobEvent>,
    board: Res<JobBoard>,
    state: Res<State<DriveState>>,
    mut next_state: ResMut<NextState<DriveState>>,
    mut active: ResMut<ActiveJob>,
    mut vehicle: ResMut<VehicleState>,
) {
    // The state change only lands next frame; track it locally so a second
    // selection in the same frame is rejected too.
    let mut current = *state.get();

    for event in events.read() {
        match board.select(event.job_id, current) {
            Ok(job) => {
                info!(
                    "Accepted job {}: {} ({}), {} km for {} €",
                    job.id,
                    job.route(),
                    job.cargo,
                    job.distance_km,
                    job.reward
                );
                active.0 = Some(job.clone());
                vehicle.distance = 0.0;
                next_state.set(DriveState::Driving);
                current = DriveState::Driving;
            }
            Err(err) => warn!("Rejected job selection {}: {err}", event.job_id),
        }
    }
}

pub struct JobsPlugin;

impl Plugin for JobsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<JobBoard>()
            .init_resource::<ActiveJob>()
            .add_event::<SelectJobEvent>()
            .add_systems(Startup, generate_job_board)
            .add_systems(Update, apply_job_selection.in_set(DriveSet::Input));
    }
}
