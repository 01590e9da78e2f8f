//! Per-frame ordering of the driving systems.
//!
//! ```text
//! Input  →  Kinematics  →  World  →  Publish
//! ```
//!
//! * **Input** – sample held keys into `DriveInput`, emit `GearShift` events,
//!   apply job selections.
//! * **Kinematics** – gear changes and the vehicle step (speed, fuel,
//!   steering, RPM, distance, scroll offset).
//! * **World** – recycle lane markings, roadside trees and traffic using the
//!   motion produced this frame.
//! * **Publish** – write the rounded `DriveSnapshot` read by the HUD.
//!
//! Rendering systems that copy simulation positions into transforms run
//! after `Publish`.

use bevy::prelude::*;

/// Ordered phases for systems in the `Update` schedule, configured as a chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DriveSet {
    Input,
    Kinematics,
    World,
    Publish,
}
