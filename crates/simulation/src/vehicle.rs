//! Kinematic update loop for the player's truck.
//!
//! The whole movement model is a handful of arcade rules applied once per
//! rendered frame:
//!
//! 1. Throttle, brake and handbrake are applied in that order, each checking
//!    its own speed condition against the speed left by the previous rule.
//! 2. With no pedal held, speed decays by a fixed factor per frame.
//! 3. Speed is clamped to `[0, max_speed]` and fuel to `[0, 100]`.
//! 4. Steering turns the heading by a per-frame amount scaled by
//!    `speed / max_speed`, so a stationary truck cannot turn.
//! 5. RPM is recomputed from speed and gear, and the odometer advances.
//!
//! Nothing here can fail. Running out of fuel has no effect on the truck.

use bevy::prelude::*;

use crate::drive_params::DriveParams;
use crate::gearbox::Gearbox;
use crate::input::{DriveInput, GearShift};
use crate::simulation_sets::DriveSet;
use crate::world_scroll::WorldScroll;

// =============================================================================
// Vehicle state
// =============================================================================

/// All mutable driving state. Written only by the systems in this module
/// (and by job selection, which resets `distance`).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub speed: f32,
    /// Fuel left in percent.
    pub fuel: f32,
    pub gearbox: Gearbox,
    pub engine_rpm: f32,
    /// Heading change applied this frame (radians).
    pub heading_delta: f32,
    /// Accumulated heading of the viewer (radians, positive turns left).
    pub yaw: f32,
    /// Raw steering input of this frame, before speed scaling.
    pub steering_input: f32,
    /// Odometer in kilometres.
    pub distance: f32,
}

impl VehicleState {
    pub fn new(params: &DriveParams) -> Self {
        let gearbox = Gearbox::new(params.gear_count);
        Self {
            speed: 0.0,
            fuel: params.starting_fuel.clamp(0.0, 100.0),
            gearbox,
            engine_rpm: params.rpm_for(0.0, gearbox.gear()),
            heading_delta: 0.0,
            yaw: 0.0,
            steering_input: 0.0,
            distance: 0.0,
        }
    }

    pub fn gear(&self) -> u8 {
        self.gearbox.gear()
    }

    /// Advance the vehicle by one frame of `dt` seconds.
    pub fn step(&mut self, input: &DriveInput, dt: f32, params: &DriveParams) -> FrameMotion {
        let frame_scale = params.frame_scale(dt);

        if input.throttle && self.speed < params.max_speed {
            self.speed += params.acceleration * frame_scale;
            self.fuel -= params.fuel_burn_per_sec * dt;
        }
        if input.brake && self.speed > 0.0 {
            self.speed -= params.brake_deceleration * frame_scale;
        }
        if input.handbrake && self.speed > 0.0 {
            self.speed -= params.handbrake_deceleration * frame_scale;
        }
        if input.coasting() {
            self.speed *= params.drag_factor;
        }

        self.speed = self.speed.clamp(0.0, params.max_speed);
        self.fuel = self.fuel.clamp(0.0, 100.0);

        self.steering_input = input.steering(params);
        self.heading_delta = self.steering_input * (self.speed / params.max_speed);
        self.yaw += self.heading_delta;

        self.engine_rpm = params.rpm_for(self.speed, self.gearbox.gear());
        self.distance += self.speed * dt * params.distance_scale;

        FrameMotion {
            dt,
            scroll_delta: self.speed * dt * params.scroll_scale,
            traffic_base_speed: self.speed,
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new(&DriveParams::default())
    }
}

// =============================================================================
// Frame motion
// =============================================================================

/// How far the world moved this frame. Produced by [`VehicleState::step`] and
/// consumed by the scenery and traffic recycling systems.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameMotion {
    pub dt: f32,
    /// Distance the road and roadside scenery slide toward the viewer.
    pub scroll_delta: f32,
    /// Vehicle speed; oncoming traffic closes at this plus its own speed.
    pub traffic_base_speed: f32,
}

impl FrameMotion {
    /// How far a car moving at `own_speed` toward the viewer advances this
    /// frame.
    pub fn traffic_advance(&self, own_speed: f32) -> f32 {
        (self.traffic_base_speed + own_speed) * self.dt
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn apply_gear_shifts(
    mut shifts: EventReader<GearShift>,
    mut vehicle: ResMut<VehicleState>,
) {
    for shift in shifts.read() {
        let changed = match shift {
            GearShift::Up => vehicle.gearbox.shift_up(),
            GearShift::Down => vehicle.gearbox.shift_down(),
        };
        if changed {
            debug!("Shifted {:?} to gear {}", shift, vehicle.gear());
        }
    }
}

pub fn integrate_vehicle(
    time: Res<Time>,
    input: Res<DriveInput>,
    params: Res<DriveParams>,
    mut vehicle: ResMut<VehicleState>,
    mut scroll: ResMut<WorldScroll>,
    mut motion: ResMut<FrameMotion>,
) {
    let frame = vehicle.step(&input, time.delta_secs(), &params);
    scroll.advance(frame.scroll_delta);
    *motion = frame;
}

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        let vehicle = app
            .world()
            .get_resource::<DriveParams>()
            .map(VehicleState::new)
            .unwrap_or_default();

        app.insert_resource(vehicle)
            .init_resource::<FrameMotion>()
            .init_resource::<WorldScroll>()
            .add_systems(
                Update,
                (apply_gear_shifts, integrate_vehicle)
                    .chain()
                    .in_set(DriveSet::Kinematics),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn throttle() -> DriveInput {
        DriveInput {
            throttle: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_vehicle_is_parked_and_full() {
        let vehicle = VehicleState::default();
        assert_eq!(vehicle.speed, 0.0);
        assert_eq!(vehicle.fuel, 100.0);
        assert_eq!(vehicle.gear(), 1);
        assert_eq!(vehicle.engine_rpm, 800.0);
        assert_eq!(vehicle.distance, 0.0);
    }

    #[test]
    fn test_throttle_matches_closed_form_and_clamps() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        let input = throttle();

        let mut previous = vehicle.speed;
        for frame in 1..=120 {
            vehicle.step(&input, DT, &params);
            let expected = (0.3 * frame as f32).min(30.0);
            assert!(
                (vehicle.speed - expected).abs() < 1e-3,
                "frame {frame}: expected {expected}, got {}",
                vehicle.speed
            );
            assert!(vehicle.speed >= previous);
            previous = vehicle.speed;
        }
        assert_eq!(vehicle.speed, 30.0);
    }

    #[test]
    fn test_throttle_burns_fuel_by_time() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        for _ in 0..60 {
            vehicle.step(&throttle(), DT, &params);
        }
        // 0.01 % per second for 1 second, still below top speed.
        assert!(vehicle.speed < params.max_speed);
        assert!((vehicle.fuel - 99.99).abs() < 1e-3, "fuel {}", vehicle.fuel);
    }

    #[test]
    fn test_fuel_never_negative_and_truck_still_drives() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.fuel = 0.001;
        for _ in 0..10 {
            vehicle.step(&throttle(), 1.0, &params);
        }
        assert_eq!(vehicle.fuel, 0.0);
        assert_eq!(vehicle.speed, 30.0);
    }

    #[test]
    fn test_drag_decays_by_factor_each_frame() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 20.0;
        let idle = DriveInput::default();
        for _ in 0..50 {
            let before = vehicle.speed;
            vehicle.step(&idle, DT, &params);
            assert!((vehicle.speed - before * 0.98).abs() < 1e-5);
            assert!(vehicle.speed > 0.0);
        }
    }

    #[test]
    fn test_drag_ignores_frame_time() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 10.0;
        vehicle.step(&DriveInput::default(), 0.5, &params);
        assert!((vehicle.speed - 9.8).abs() < 1e-5);
    }

    #[test]
    fn test_handbrake_stops_faster_than_brake() {
        let params = DriveParams::default();
        let mut braked = VehicleState::new(&params);
        let mut handbraked = VehicleState::new(&params);
        braked.speed = 20.0;
        handbraked.speed = 20.0;

        braked.step(
            &DriveInput {
                brake: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        handbraked.step(
            &DriveInput {
                handbrake: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        assert!((braked.speed - 19.5).abs() < 1e-4);
        assert!((handbraked.speed - 19.2).abs() < 1e-4);
    }

    #[test]
    fn test_brake_never_goes_negative() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 0.2;
        vehicle.step(
            &DriveInput {
                brake: true,
                handbrake: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        assert_eq!(vehicle.speed, 0.0);
    }

    #[test]
    fn test_throttle_and_brake_together_net_out() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 10.0;
        vehicle.step(
            &DriveInput {
                throttle: true,
                brake: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        // +0.3 then -0.5, no drag because pedals are held.
        assert!((vehicle.speed - 9.8).abs() < 1e-4);
    }

    #[test]
    fn test_speed_and_fuel_always_in_range() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        let mut bits: u32 = 0xDEAD_BEEF;
        for i in 0..2000 {
            let input = DriveInput {
                throttle: bits & 1 != 0,
                brake: bits & 2 != 0,
                steer_left: bits & 4 != 0,
                steer_right: bits & 8 != 0,
                shift: false,
                handbrake: bits & 16 != 0,
            };
            let dt = [0.0, DT, 0.1, 2.0][i % 4];
            vehicle.step(&input, dt, &params);
            assert!((0.0..=params.max_speed).contains(&vehicle.speed));
            assert!((0.0..=100.0).contains(&vehicle.fuel));
            bits = bits.rotate_left(5).wrapping_mul(0x0101_0101) ^ (i as u32);
        }
    }

    #[test]
    fn test_no_steering_authority_when_stopped() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.step(
            &DriveInput {
                steer_left: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        assert_eq!(vehicle.yaw, 0.0);
        assert_eq!(vehicle.heading_delta, 0.0);
        assert_eq!(vehicle.steering_input, 0.02);
    }

    #[test]
    fn test_full_speed_steering_turns_full_rate() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 30.0;
        vehicle.step(
            &DriveInput {
                throttle: true,
                steer_right: true,
                ..Default::default()
            },
            DT,
            &params,
        );
        assert!((vehicle.heading_delta + 0.02).abs() < 1e-6);
        assert!((vehicle.yaw + 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_rpm_drops_in_higher_gear() {
        let params = DriveParams::default();
        let mut low = VehicleState::new(&params);
        let mut high = VehicleState::new(&params);
        low.speed = 15.0;
        high.speed = 15.0;
        for _ in 0..3 {
            high.gearbox.shift_up();
        }
        let hold = DriveInput {
            throttle: true,
            brake: true,
            ..Default::default()
        };
        low.step(&hold, 0.0, &params);
        high.step(&hold, 0.0, &params);
        assert!(high.engine_rpm < low.engine_rpm);
    }

    #[test]
    fn test_motion_and_odometer_scale_with_speed() {
        let params = DriveParams::default();
        let mut vehicle = VehicleState::new(&params);
        vehicle.speed = 30.0;
        let motion = vehicle.step(&throttle(), 0.5, &params);
        assert!((motion.scroll_delta - 45.0).abs() < 1e-4);
        assert!((vehicle.distance - 1.5).abs() < 1e-4);
        assert!((motion.traffic_advance(20.0) - 25.0).abs() < 1e-4);
    }
}
