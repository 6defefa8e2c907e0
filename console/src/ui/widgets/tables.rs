//! # Table Components
//!
//! Label/value grids and empty states.

use egui;
use crate::ui::theme::Theme;

/// Configuration for grid styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 2,
            spacing: [24.0, 8.0],
            striped: false,
        }
    }
}

/// Render a grid of rows
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, config: TableConfig, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Grid::new(id)
        .num_columns(config.num_columns)
        .spacing(config.spacing)
        .striped(config.striped)
        .show(ui, render_rows);
}

/// One labelled cell: dim label above, value below
pub fn render_labelled_cell(ui: &mut egui::Ui, label: &str, theme: &Theme, value: impl FnOnce(&mut egui::Ui)) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).size(12.0).strong().color(theme.dim));
        value(ui);
    });
}

/// Render an empty state message with an optional call to action.
///
/// Returns `true` when the action button was clicked.
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    action: Option<&str>,
    theme: &Theme,
) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(action) = action {
            ui.add_space(12.0);
            clicked = ui
                .add(egui::Button::new(egui::RichText::new(action).color(egui::Color32::WHITE)).fill(theme.selected))
                .clicked();
        }
        ui.add_space(40.0);
    });
    clicked
}
