//! First-person camera at the driver's eye.
//!
//! The camera never moves; the world scrolls past it. Only its heading
//! changes, following `VehicleState::yaw`.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::WindowResized;

use simulation::vehicle::VehicleState;

use crate::environment::SKY_COLOR;

pub const EYE_HEIGHT: f32 = 2.5;
pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const FOG_START: f32 = 100.0;
pub const FOG_END: f32 = 500.0;

/// Marker for the driver's camera. The cabin interior is parented to it.
#[derive(Component, Debug, Default)]
pub struct DriverCamera;

pub fn driver_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    })
}

pub fn driver_fog() -> DistanceFog {
    DistanceFog {
        color: SKY_COLOR,
        falloff: FogFalloff::Linear {
            start: FOG_START,
            end: FOG_END,
        },
        ..default()
    }
}

pub fn camera_transform(yaw: f32) -> Transform {
    Transform::from_xyz(0.0, EYE_HEIGHT, 0.0).with_rotation(Quat::from_rotation_y(yaw))
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        DriverCamera,
        Camera3d::default(),
        driver_projection(),
        driver_fog(),
        camera_transform(0.0),
    ));
}

/// System: turn the camera to the accumulated vehicle heading.
pub fn apply_vehicle_yaw(
    vehicle: Res<VehicleState>,
    mut cameras: Query<&mut Transform, With<DriverCamera>>,
) {
    if !vehicle.is_changed() {
        return;
    }
    for mut transform in &mut cameras {
        transform.rotation = Quat::from_rotation_y(vehicle.yaw);
    }
}

/// Bevy keeps the projection's aspect ratio in sync with the window itself;
/// this only records the new size.
pub fn log_window_resize(mut events: EventReader<WindowResized>) {
    for event in events.read() {
        debug!("Window resized to {}x{}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_sits_at_eye_height() {
        let transform = camera_transform(0.0);
        assert_eq!(transform.translation, Vec3::new(0.0, EYE_HEIGHT, 0.0));
        // Looking down the road (-Z).
        let forward = transform.forward();
        assert!((forward.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        let transform = camera_transform(0.3);
        assert!(transform.forward().x < 0.0);
    }

    #[test]
    fn test_projection_matches_driver_view() {
        let Projection::Perspective(perspective) = driver_projection() else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(perspective.near, 0.1);
        assert_eq!(perspective.far, 1000.0);
    }

    #[test]
    fn test_fog_is_linear_between_100_and_500() {
        match driver_fog().falloff {
            FogFalloff::Linear { start, end } => {
                assert_eq!(start, 100.0);
                assert_eq!(end, 500.0);
            }
            other => panic!("unexpected falloff {other:?}"),
        }
    }
}
