//! Full-screen job board, shown until a job is accepted.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::app_state::DriveState;
use simulation::jobs::{Job, JobBoard, SelectJobEvent};

use crate::theme::{BLUE, BOARD_FILL, GREEN, JOB_CARD_FILL, MUTED, PURPLE};

const BOARD_WIDTH: f32 = 760.0;
const BOARD_COLUMNS: usize = 2;

pub fn reward_label(job: &Job) -> String {
    format!("{} €", job.reward)
}

pub fn distance_label(job: &Job) -> String {
    format!("Distance: {} km", job.distance_km)
}

pub fn weight_label(job: &Job) -> String {
    format!("Weight: {}", job.weight_label)
}

/// Draw one job card. Returns `true` if it was clicked.
fn job_card(ui: &mut egui::Ui, job: &Job) -> bool {
    let frame = egui::Frame::new()
        .fill(JOB_CARD_FILL)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(55, 65, 81)))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(14));

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(job.cargo).strong().color(PURPLE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(reward_label(job))
                            .size(18.0)
                            .strong()
                            .color(GREEN),
                    );
                });
            });
            ui.add_space(6.0);
            ui.colored_label(BLUE, job.route());
            ui.horizontal(|ui| {
                ui.colored_label(MUTED, distance_label(job));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(MUTED, weight_label(job));
                });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            egui::CornerRadius::same(8),
            egui::Stroke::new(2.0, GREEN),
            egui::StrokeKind::Inside,
        );
    }
    response.clicked()
}

pub fn job_board_ui(
    mut contexts: EguiContexts,
    state: Res<State<DriveState>>,
    board: Res<JobBoard>,
    mut selections: EventWriter<SelectJobEvent>,
) {
    if !state.get().shows_job_board() {
        return;
    }
    let ctx = contexts.ctx_mut();

    // Dim the road behind the board.
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("job_board_dim"),
    ))
    .rect_filled(
        ctx.screen_rect(),
        egui::CornerRadius::ZERO,
        egui::Color32::from_black_alpha(204),
    );

    let mut chosen = None;

    egui::Window::new("Job board")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .fixed_size(egui::vec2(BOARD_WIDTH, 0.0))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(
            egui::Frame::new()
                .fill(BOARD_FILL)
                .stroke(egui::Stroke::new(2.0, GREEN))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.heading(egui::RichText::new("Job board").size(28.0).strong());
            ui.add_space(12.0);

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                ui.columns(BOARD_COLUMNS, |columns| {
                    for (i, job) in board.jobs.iter().enumerate() {
                        let column = &mut columns[i % BOARD_COLUMNS];
                        if job_card(column, job) {
                            chosen = Some(job.id);
                        }
                        column.add_space(8.0);
                    }
                });
            });
        });

    if let Some(job_id) = chosen {
        selections.send(SelectJobEvent { job_id });
    }
}
