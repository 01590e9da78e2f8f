//! Bottom-left legend listing the driving controls.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::keybindings::{DriveAction, DriveKeyBindings};

use crate::theme::{self, BLUE, GREEN, MUTED, PURPLE, RED, YELLOW};

fn action_color(action: DriveAction) -> egui::Color32 {
    match action {
        DriveAction::Throttle => GREEN,
        DriveAction::Brake => RED,
        DriveAction::SteerLeft | DriveAction::SteerRight => BLUE,
        DriveAction::GearUp | DriveAction::GearDown => YELLOW,
        DriveAction::Handbrake => PURPLE,
        DriveAction::Shift => MUTED,
    }
}

/// Legend text for an action. Gear keys act once per press.
pub fn action_text(action: DriveAction) -> String {
    if action.is_discrete() {
        format!("- {} (tap)", action.label())
    } else {
        format!("- {}", action.label())
    }
}

/// Warning line shown when two actions share a key.
pub fn conflict_warning(bindings: &DriveKeyBindings) -> Option<String> {
    bindings.find_conflict().map(|(a, b)| {
        format!(
            "{} and {} share {}",
            a.label(),
            b.label(),
            bindings.get(a).display_label()
        )
    })
}

/// `(key, action)` rows in legend order.
pub fn legend_rows(bindings: &DriveKeyBindings) -> Vec<(&'static str, DriveAction)> {
    DriveAction::ALL
        .iter()
        .map(|&action| (bindings.get(action).display_label(), action))
        .collect()
}

pub fn controls_panel_ui(mut contexts: EguiContexts, bindings: Res<DriveKeyBindings>) {
    egui::Area::new(egui::Id::new("controls_legend"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
        .show(contexts.ctx_mut(), |ui| {
            theme::card(egui::Color32::TRANSPARENT).show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                if let Some(warning) = conflict_warning(&bindings) {
                    ui.label(egui::RichText::new(warning).small().color(YELLOW));
                }
                for (key, action) in legend_rows(&bindings) {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(key)
                                .monospace()
                                .small()
                                .color(action_color(action)),
                        );
                        ui.label(egui::RichText::new(action_text(action)).small());
                    });
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::keybindings::KeyBinding;

    #[test]
    fn test_legend_lists_every_action_once() {
        let rows = legend_rows(&DriveKeyBindings::default());
        assert_eq!(rows.len(), DriveAction::ALL.len());
        for (i, (_, action)) in rows.iter().enumerate() {
            assert_eq!(*action, DriveAction::ALL[i]);
        }
    }

    #[test]
    fn test_gear_keys_marked_as_taps() {
        assert!(action_text(DriveAction::GearUp).ends_with("(tap)"));
        assert!(!action_text(DriveAction::Throttle).contains("(tap)"));
    }

    #[test]
    fn test_conflict_warning() {
        assert_eq!(conflict_warning(&DriveKeyBindings::default()), None);

        let clashing = DriveKeyBindings {
            gear_up: KeyBinding::simple(KeyCode::KeyW),
            ..Default::default()
        };
        let warning = conflict_warning(&clashing).unwrap_or_default();
        assert!(warning.contains("share W"), "{warning}");
    }

    #[test]
    fn test_legend_shows_default_keys() {
        let rows = legend_rows(&DriveKeyBindings::default());
        assert_eq!(rows[0].0, "W");
        assert!(rows.iter().any(|(key, _)| *key == "Space"));
    }
}
