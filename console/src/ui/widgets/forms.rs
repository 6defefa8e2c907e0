//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;
use crate::ui::theme::{BadgeColors, Theme};

/// Labelled single-line input; the field error, if any, is shown below it
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
    theme: &Theme,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let response = ui.add_sized(
        [ui.available_width(), 28.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    );
    if let Some(error) = error {
        render_error(ui, error, theme);
    }
    response
}

/// Labelled multi-line input
pub fn render_text_area(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
    theme: &Theme,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let response = ui.add_sized(
        [ui.available_width(), 90.0],
        egui::TextEdit::multiline(value).hint_text(hint).desired_rows(4),
    );
    if let Some(error) = error {
        render_error(ui, error, theme);
    }
    response
}

/// Render a styled button, optionally filled and disabled
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    enabled: bool,
) -> egui::Response {
    let mut button = match fill_color {
        Some(color) => egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE))
            .fill(color),
        None => egui::Button::new(text),
    };
    button = button.min_size(egui::vec2(90.0, 30.0));

    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(24.0)
        .strong()
        .color(theme.normal);
    ui.label(heading);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(13.0).color(theme.error));
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).color(theme.dim));
}

/// `Label: value` on one line
pub fn render_field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong());
        ui.label(value);
    });
}

/// Rounded status pill
pub fn render_badge(ui: &mut egui::Ui, text: &str, colors: BadgeColors) -> egui::Response {
    egui::Frame::new()
        .fill(colors.fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(colors.text));
        })
        .response
}
