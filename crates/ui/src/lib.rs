use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod controls_panel;
pub mod hud;
pub mod job_board;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_cab_theme)
            .add_systems(
                Update,
                (
                    hud::hud_ui,
                    controls_panel::controls_panel_ui,
                    job_board::job_board_ui,
                )
                    .chain(),
            );
    }
}
