use bevy_egui::{egui, EguiContexts};

/// Translucent black behind every HUD card.
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 178);
pub const BOARD_FILL: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const JOB_CARD_FILL: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);

pub const GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const YELLOW: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(192, 132, 252);
pub const RED: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);

/// A rounded HUD card with a coloured border.
pub fn card(border: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(2.0, border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

pub fn apply_cab_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgb(45, 50, 60);
    let hover = egui::Color32::from_rgb(60, 75, 65);
    let active = GREEN;

    style.visuals.widgets.noninteractive.bg_fill = BOARD_FILL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, GREEN);

    style.visuals.window_fill = BOARD_FILL;
    style.visuals.panel_fill = BOARD_FILL;
    style.visuals.override_text_color = Some(egui::Color32::WHITE);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(12);
    let widget_rounding = egui::CornerRadius::same(8);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
