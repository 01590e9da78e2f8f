//! Manual gearbox. Gears only change on explicit shift requests; there is no
//! automatic shifting, torque curve or stall.

/// Current gear, always within `1..=gear_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gearbox {
    gear: u8,
    gear_count: u8,
}

impl Gearbox {
    /// A gearbox in first gear. `gear_count` is raised to at least 1.
    pub fn new(gear_count: u8) -> Self {
        Self {
            gear: 1,
            gear_count: gear_count.max(1),
        }
    }

    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub fn gear_count(&self) -> u8 {
        self.gear_count
    }

    /// Returns `true` if the gear actually changed.
    pub fn shift_up(&mut self) -> bool {
        if self.gear < self.gear_count {
            self.gear += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the gear actually changed.
    pub fn shift_down(&mut self) -> bool {
        if self.gear > 1 {
            self.gear -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Gearbox {
    fn default() -> Self {
        Self::new(6)
    }
}
