//! Data-driven driving parameters.
//!
//! Collects the arcade movement model's constants into a single
//! [`DriveParams`] resource. The defaults reproduce the stock truck; a JSON
//! file can override any subset of fields (missing fields keep their
//! defaults).
//!
//! Rates marked "per frame" are applied once per rendered frame regardless of
//! frame time. Rates marked "per reference frame" are scaled by
//! `dt * reference_fps`, so at the reference rate they apply once per frame.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::params_error::ParamsError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveParams {
    /// Top speed (km/h as displayed).
    pub max_speed: f32,
    /// Speed gained per reference frame while the throttle is held.
    pub acceleration: f32,
    /// Speed lost per reference frame while the brake is held.
    pub brake_deceleration: f32,
    /// Speed lost per reference frame while the handbrake is held.
    pub handbrake_deceleration: f32,
    /// Multiplicative speed factor per frame with no pedal input.
    pub drag_factor: f32,
    /// Frame rate the per-reference-frame rates are tuned for.
    pub reference_fps: f32,
    /// Fuel percent burned per second of throttle.
    pub fuel_burn_per_sec: f32,
    /// Heading change per frame at full speed (radians).
    pub steering_rate: f32,
    /// Visual steering-wheel roll per unit of steering input.
    pub steering_wheel_ratio: f32,
    pub idle_rpm: f32,
    /// RPM added on top of idle at full speed in first gear.
    pub rpm_span: f32,
    pub gear_count: u8,
    /// World units scrolled per unit of speed per second.
    pub scroll_scale: f32,
    /// Odometer kilometres per unit of speed per second.
    pub distance_scale: f32,
    pub starting_fuel: f32,
    pub starting_money: i64,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            max_speed: 30.0,
            acceleration: 0.3,
            brake_deceleration: 0.5,
            handbrake_deceleration: 0.8,
            drag_factor: 0.98,
            reference_fps: 60.0,
            fuel_burn_per_sec: 0.01,
            steering_rate: 0.02,
            steering_wheel_ratio: 5.0,
            idle_rpm: 800.0,
            rpm_span: 2000.0,
            gear_count: 6,
            scroll_scale: 3.0,
            distance_scale: 0.1,
            starting_fuel: 100.0,
            starting_money: 5000,
        }
    }
}

impl DriveParams {
    /// Parse (partial) overrides from a JSON string and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: DriveParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read and parse a JSON override file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values that would make the movement model meaningless.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.max_speed > 0.0 && self.max_speed.is_finite()) {
            return Err(ParamsError::Invalid(format!(
                "max_speed must be positive and finite, got {}",
                self.max_speed
            )));
        }
        if !(self.drag_factor > 0.0 && self.drag_factor <= 1.0) {
            return Err(ParamsError::Invalid(format!(
                "drag_factor must be in (0, 1], got {}",
                self.drag_factor
            )));
        }
        for (name, value) in [
            ("acceleration", self.acceleration),
            ("brake_deceleration", self.brake_deceleration),
            ("handbrake_deceleration", self.handbrake_deceleration),
            ("fuel_burn_per_sec", self.fuel_burn_per_sec),
            ("reference_fps", self.reference_fps),
            ("steering_rate", self.steering_rate),
            ("steering_wheel_ratio", self.steering_wheel_ratio),
            ("idle_rpm", self.idle_rpm),
            ("rpm_span", self.rpm_span),
            ("scroll_scale", self.scroll_scale),
            ("distance_scale", self.distance_scale),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ParamsError::Invalid(format!(
                    "{name} must be finite and not negative, got {value}"
                )));
            }
        }
        if self.gear_count == 0 {
            return Err(ParamsError::Invalid("gear_count must be at least 1".to_string()));
        }
        if !(0.0..=100.0).contains(&self.starting_fuel) {
            return Err(ParamsError::Invalid(format!(
                "starting_fuel must be within 0..=100, got {}",
                self.starting_fuel
            )));
        }
        Ok(())
    }

    /// Engine RPM for a speed and gear: idle plus a share of the span that
    /// grows with speed and shrinks with gear.
    pub fn rpm_for(&self, speed: f32, gear: u8) -> f32 {
        let gears = self.gear_count as f32;
        let gear_factor = (gears + 1.0 - gear as f32) / gears;
        self.idle_rpm + (speed / self.max_speed) * self.rpm_span * gear_factor
    }

    /// Scale factor turning a per-reference-frame rate into this frame's step.
    pub fn frame_scale(&self, dt: f32) -> f32 {
        dt * self.reference_fps
    }
}
