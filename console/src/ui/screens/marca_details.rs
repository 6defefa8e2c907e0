//! # Marca Details Window

use egui;
use shared::{format_long_date_es, Marca};

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// Render the read-only details window for `marca`
pub fn render(ctx: &egui::Context, marca: &Marca, app: &mut App) {
    let theme = Theme::default();
    let mut open = true;

    egui::Window::new("Detalles de la Marca")
        .id(egui::Id::new("marca_details"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(480.0);

            tables::render_table(ui, "marca_details_grid", tables::TableConfig::default(), |ui| {
                tables::render_labelled_cell(ui, "Nombre", &theme, |ui| {
                    ui.label(&marca.name);
                });
                tables::render_labelled_cell(ui, "N° Registro", &theme, |ui| {
                    ui.label(marca.registration_number.as_deref().unwrap_or("-"));
                });
                ui.end_row();

                tables::render_labelled_cell(ui, "Categoría", &theme, |ui| {
                    ui.label(marca.category.label());
                });
                tables::render_labelled_cell(ui, "Estado", &theme, |ui| {
                    forms::render_badge(ui, marca.status.label(), theme.status_badge(marca.status));
                });
                ui.end_row();

                tables::render_labelled_cell(ui, "Propietario", &theme, |ui| {
                    ui.label(&marca.owner);
                });
                tables::render_labelled_cell(ui, "Fecha de Registro", &theme, |ui| {
                    let date = marca
                        .registration_date
                        .map(format_long_date_es)
                        .unwrap_or_else(|| "-".to_string());
                    ui.label(date);
                });
                ui.end_row();
            });

            ui.add_space(8.0);
            tables::render_labelled_cell(ui, "Descripción", &theme, |ui| {
                ui.label(&marca.description);
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if forms::render_button(ui, "✏ Editar", Some(theme.selected), true).clicked() {
                    if let Err(e) = app.edit_from_details() {
                        tracing::warn!(error = %e, "Cannot open edit form");
                    }
                }
                if forms::render_button(ui, "Cerrar", None, true).clicked() {
                    app.close_modal();
                }
            });
        });

    if !open {
        app.close_modal();
    }
}
