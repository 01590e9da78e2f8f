//! Driving key bindings.
//!
//! The key set is fixed (no rebinding), but systems still read it from the
//! [`DriveKeyBindings`] resource instead of hardcoding `KeyCode` values so the
//! sampler and the on-screen controls legend agree.

use bevy::prelude::*;

// =============================================================================
// Actions
// =============================================================================

/// Every driving action that is bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveAction {
    Throttle,
    Brake,
    SteerLeft,
    SteerRight,
    Shift,
    Handbrake,
    GearUp,
    GearDown,
}

impl DriveAction {
    /// Human-readable label for the controls legend.
    pub fn label(self) -> &'static str {
        match self {
            Self::Throttle => "Throttle",
            Self::Brake => "Brake",
            Self::SteerLeft => "Steer left",
            Self::SteerRight => "Steer right",
            Self::Shift => "Shift",
            Self::Handbrake => "Handbrake",
            Self::GearUp => "Gear up",
            Self::GearDown => "Gear down",
        }
    }

    /// Discrete actions fire once per key press; the rest are held.
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::GearUp | Self::GearDown)
    }

    /// All actions in legend order.
    pub const ALL: &'static [DriveAction] = &[
        Self::Throttle,
        Self::Brake,
        Self::SteerLeft,
        Self::SteerRight,
        Self::GearUp,
        Self::GearDown,
        Self::Handbrake,
        Self::Shift,
    ];
}

// =============================================================================
// Key binding definition
// =============================================================================

/// A key plus an optional alternate (left/right variants of a modifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub alt: Option<KeyCode>,
}

impl KeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self { key, alt: None }
    }

    pub const fn with_alt(key: KeyCode, alt: KeyCode) -> Self {
        Self {
            key,
            alt: Some(alt),
        }
    }

    /// Key (or its alternate) is currently held.
    pub fn pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.pressed(self.key) || self.alt.is_some_and(|k| keys.pressed(k))
    }

    /// Key (or its alternate) went down this frame.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.just_pressed(self.key) || self.alt.is_some_and(|k| keys.just_pressed(k))
    }

    pub fn display_label(self) -> &'static str {
        keycode_label(self.key)
    }
}

// =============================================================================
// DriveKeyBindings resource
// =============================================================================

#[derive(Resource, Debug, Clone)]
pub struct DriveKeyBindings {
    pub throttle: KeyBinding,
    pub brake: KeyBinding,
    pub steer_left: KeyBinding,
    pub steer_right: KeyBinding,
    pub shift: KeyBinding,
    pub handbrake: KeyBinding,
    pub gear_up: KeyBinding,
    pub gear_down: KeyBinding,
}

impl Default for DriveKeyBindings {
    fn default() -> Self {
        Self {
            throttle: KeyBinding::simple(KeyCode::KeyW),
            brake: KeyBinding::simple(KeyCode::KeyS),
            steer_left: KeyBinding::simple(KeyCode::KeyA),
            steer_right: KeyBinding::simple(KeyCode::KeyD),
            shift: KeyBinding::with_alt(KeyCode::ShiftLeft, KeyCode::ShiftRight),
            handbrake: KeyBinding::simple(KeyCode::Space),
            gear_up: KeyBinding::simple(KeyCode::KeyE),
            gear_down: KeyBinding::simple(KeyCode::KeyQ),
        }
    }
}

impl DriveKeyBindings {
    pub fn get(&self, action: DriveAction) -> KeyBinding {
        match action {
            DriveAction::Throttle => self.throttle,
            DriveAction::Brake => self.brake,
            DriveAction::SteerLeft => self.steer_left,
            DriveAction::SteerRight => self.steer_right,
            DriveAction::Shift => self.shift,
            DriveAction::Handbrake => self.handbrake,
            DriveAction::GearUp => self.gear_up,
            DriveAction::GearDown => self.gear_down,
        }
    }

    /// First pair of actions sharing a primary key, if any.
    pub fn find_conflict(&self) -> Option<(DriveAction, DriveAction)> {
        for (i, &a) in DriveAction::ALL.iter().enumerate() {
            for &b in &DriveAction::ALL[i + 1..] {
                if self.get(a).key == self.get(b).key {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

// =============================================================================
// Helper: human-readable key labels
// =============================================================================

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyD => "D",
        KeyCode::KeyE => "E",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyS => "S",
        KeyCode::KeyW => "W",
        KeyCode::ShiftLeft | KeyCode::ShiftRight => "Shift",
        KeyCode::Space => "Space",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_conflicts() {
        assert_eq!(DriveKeyBindings::default().find_conflict(), None);
    }

    #[test]
    fn test_every_action_has_a_label() {
        let bindings = DriveKeyBindings::default();
        for &action in DriveAction::ALL {
            assert_ne!(bindings.get(action).display_label(), "???", "{action:?}");
            assert!(!action.label().is_empty());
        }
    }

    #[test]
    fn test_alt_key_counts_as_pressed() {
        let bindings = DriveKeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ShiftRight);
        assert!(bindings.shift.pressed(&keys));
        assert!(bindings.shift.just_pressed(&keys));
        assert!(!bindings.throttle.pressed(&keys));
    }

    #[test]
    fn test_only_gear_actions_are_discrete() {
        let discrete: Vec<_> = DriveAction::ALL
            .iter()
            .copied()
            .filter(|a| a.is_discrete())
            .collect();
        assert_eq!(discrete, vec![DriveAction::GearUp, DriveAction::GearDown]);
    }
}
