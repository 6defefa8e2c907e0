//! # Header and Footer
//!
//! Top branding bar and bottom status footer.

use egui;

use crate::app::AppState;
use crate::ui::theme::Theme;

/// Top bar with the product name
pub fn render_header(ctx: &egui::Context, theme: &Theme) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme.colors.surface)
                .inner_margin(egui::Margin::symmetric(20, 12))
                .stroke(egui::Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("SIGNA").size(22.0).strong().color(theme.selected));
                ui.add_space(12.0);
                ui.label(egui::RichText::new("Prueba Técnica").size(16.0).color(theme.dim));
            });
        });
}

/// Bottom bar: backend URL, activity and version
pub fn render_footer(ctx: &egui::Context, state: &AppState, api_base_url: &str, theme: &Theme) {
    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::new()
                .fill(theme.colors.footer)
                .inner_margin(egui::Margin::symmetric(20, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let light = egui::Color32::from_rgb(209, 213, 219);
                ui.label(egui::RichText::new(format!("API: {}", api_base_url)).size(12.0).color(light));

                ui.separator();
                let (status, color) = if state.loading {
                    ("Cargando...", theme.warning)
                } else if state.error.is_some() {
                    ("Sin conexión", theme.error)
                } else if !state.busy.is_empty() {
                    ("Procesando...", theme.warning)
                } else {
                    ("Listo", theme.success)
                };
                ui.label(egui::RichText::new(status).size(12.0).color(color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Gestión de Marcas v{}", env!("CARGO_PKG_VERSION")))
                            .size(12.0)
                            .color(light),
                    );
                });
            });
        });
}
