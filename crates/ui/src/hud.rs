//! Dashboard readouts: speed, gear, fuel and RPM on the left; money and the
//! active job on the right.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::economy::Wallet;
use simulation::jobs::ActiveJob;
use simulation::snapshot::DriveSnapshot;

use crate::theme::{self, BLUE, GREEN, MUTED, PURPLE, YELLOW};

pub const PROGRESS_BAR_WIDTH: f32 = 232.0;
const PROGRESS_BAR_HEIGHT: f32 = 8.0;
const HUD_MARGIN: f32 = 16.0;

/// Width of the progress bar fill. Not clamped: a job driven past its target
/// overflows the track.
pub fn progress_fill_width(progress_percent: f32, bar_width: f32) -> f32 {
    (progress_percent / 100.0 * bar_width).max(0.0)
}

pub fn distance_label(distance: u32, target: u32) -> String {
    format!("{distance}/{target} km")
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.horizontal(|ui| {
        ui.colored_label(MUTED, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn progress_bar(ui: &mut egui::Ui, percent: f32) {
    let (track, _) = ui.allocate_exact_size(
        egui::vec2(PROGRESS_BAR_WIDTH, PROGRESS_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let rounding = egui::CornerRadius::same(4);
    let painter = ui.painter();
    painter.rect_filled(track, rounding, egui::Color32::from_rgb(55, 65, 81));

    let fill = egui::Rect::from_min_size(
        track.min,
        egui::vec2(
            progress_fill_width(percent, PROGRESS_BAR_WIDTH),
            PROGRESS_BAR_HEIGHT,
        ),
    );
    painter.rect_filled(fill, rounding, GREEN);
}

pub fn hud_ui(
    mut contexts: EguiContexts,
    snapshot: Res<DriveSnapshot>,
    wallet: Res<Wallet>,
    active: Res<ActiveJob>,
) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("hud_gauges"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(HUD_MARGIN, HUD_MARGIN))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            theme::card(GREEN).show(ui, |ui| {
                ui.label(egui::RichText::new(format!("{:.1}", snapshot.speed)).size(28.0).strong());
                ui.colored_label(MUTED, "km/h");
            });

            theme::card(BLUE).show(ui, |ui| {
                ui.colored_label(MUTED, "Gear");
                ui.label(
                    egui::RichText::new(snapshot.gear.to_string())
                        .size(22.0)
                        .color(BLUE)
                        .strong(),
                );
            });

            theme::card(YELLOW).show(ui, |ui| {
                ui.label(egui::RichText::new(format!("{:.1}%", snapshot.fuel)).size(18.0).strong());
                ui.colored_label(MUTED, "Fuel");
            });

            theme::card(MUTED).show(ui, |ui| {
                ui.label(egui::RichText::new(snapshot.engine_rpm.to_string()).size(18.0).strong());
                ui.colored_label(MUTED, "RPM");
            });
        });

    egui::Area::new(egui::Id::new("hud_job"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-HUD_MARGIN, HUD_MARGIN))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            theme::card(GREEN).show(ui, |ui| {
                ui.label(egui::RichText::new(wallet.display()).size(18.0).strong());
            });

            let Some(job) = &active.0 else {
                return;
            };
            theme::card(PURPLE).show(ui, |ui| {
                ui.set_width(PROGRESS_BAR_WIDTH);
                ui.label(egui::RichText::new("Current job").strong().color(PURPLE));
                detail_row(ui, "Cargo:", job.cargo);
                detail_row(ui, "From:", job.origin_city);
                detail_row(ui, "To:", job.destination_city);
                detail_row(
                    ui,
                    "Driven:",
                    egui::RichText::new(distance_label(snapshot.distance, job.distance_km))
                        .color(GREEN),
                );
                ui.add_space(4.0);
                let percent = active
                    .progress_percent(snapshot.distance as f32)
                    .unwrap_or(0.0);
                progress_bar(ui, percent);
            });
        });
}
