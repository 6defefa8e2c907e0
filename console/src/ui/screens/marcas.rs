//! # Marcas Screen
//!
//! Header with record count, then one of: spinner, error with retry, empty
//! state, or a wrapping grid of record cards.

use egui;
use shared::{format_short_date, Marca};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

const CARD_WIDTH: f32 = 340.0;

/// Render the list screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    render_heading(ui, state, app, &theme);
    ui.add_space(16.0);

    if state.loading && state.marcas.is_empty() && state.error.is_none() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.add(egui::Spinner::new().size(32.0).color(theme.selected));
        });
        return;
    }

    if let Some(error) = &state.error {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.colored_label(theme.error, error);
            ui.add_space(12.0);
            if forms::render_button(ui, "Reintentar", Some(theme.selected), !state.loading).clicked() {
                app.refresh();
            }
        });
        return;
    }

    if state.marcas.is_empty() {
        let clicked = egui::Frame::group(ui.style())
            .fill(theme.colors.surface)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                tables::render_empty_state(
                    ui,
                    "No hay marcas registradas",
                    Some("Crear primera marca"),
                    &theme,
                )
            })
            .inner;
        if clicked {
            app.open_create_form();
        }
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
                for marca in &state.marcas {
                    let can_open = !state.submission_in_flight();
                    render_card(ui, marca, state.is_busy(marca.id), can_open, app, &theme);
                }
            });
        });
}

fn render_heading(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            forms::render_form_heading(ui, "Gestión de Marcas", theme);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.colored_label(theme.dim, "Administra y controla todos los");
                ui.label(egui::RichText::new("registros de marca").strong());
                ui.colored_label(theme.dim, "de manera eficiente");
                ui.label(egui::RichText::new(state.count_label()).strong().color(theme.selected));
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_open = !state.submission_in_flight();
            if forms::render_button(ui, "+ Nueva Marca", Some(theme.selected), can_open).clicked() {
                app.open_create_form();
            }
            let refresh = ui
                .add_enabled(!state.loading, egui::Button::new("⟳ Actualizar"))
                .on_hover_text("Recargar la lista");
            if refresh.clicked() {
                app.refresh();
            }
            if state.loading {
                ui.add(egui::Spinner::new().color(theme.selected));
            }
        });
    });
}

/// `can_open` is false while a form submission is pending, which keeps the
/// view and edit actions from replacing that form.
fn render_card(ui: &mut egui::Ui, marca: &Marca, busy: bool, can_open: bool, app: &mut App, theme: &Theme) {
    egui::Frame::group(ui.style())
        .fill(theme.colors.surface)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&marca.name).size(18.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        forms::render_badge(ui, marca.status.label(), theme.status_badge(marca.status));
                    });
                });
                ui.add_space(4.0);

                ui.add(egui::Label::new(egui::RichText::new(&marca.description).color(theme.dim)).truncate());
                forms::render_field_row(ui, "Categoría", marca.category.label());
                forms::render_field_row(ui, "Propietario", &marca.owner);
                let date = marca
                    .registration_date
                    .map(format_short_date)
                    .unwrap_or_else(|| "-".to_string());
                forms::render_field_row(ui, "Fecha", &date);
                if let Some(number) = &marca.registration_number {
                    forms::render_field_row(ui, "N° Registro", number);
                }

                ui.add_space(8.0);
                render_actions(ui, marca, busy, can_open, app, theme);
            });
        });
}

fn render_actions(ui: &mut egui::Ui, marca: &Marca, busy: bool, can_open: bool, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!busy && can_open, egui::Button::new("👁"))
            .on_hover_text("Ver detalles completos")
            .clicked()
        {
            app.open_details(marca.clone());
        }

        if ui
            .add_enabled(!busy && can_open, egui::Button::new("✏"))
            .on_hover_text("Editar información")
            .clicked()
        {
            if let Err(e) = app.open_edit_form(marca.clone()) {
                tracing::warn!(error = %e, "Cannot open edit form");
            }
        }

        if ui
            .add_enabled(!busy, egui::Button::new("⟳"))
            .on_hover_text("Cambiar estado")
            .clicked()
        {
            if let Err(e) = app.change_status(marca.clone()) {
                tracing::warn!(error = %e, "Cannot change status");
            }
        }

        let delete = egui::Button::new(egui::RichText::new("🗑").color(egui::Color32::WHITE)).fill(theme.error);
        if ui
            .add_enabled(!busy && marca.id.is_some(), delete)
            .on_hover_text("Eliminar marca")
            .clicked()
        {
            if let Some(id) = marca.id {
                app.delete_marca(id);
            }
        }

        if busy {
            ui.add(egui::Spinner::new().color(theme.selected));
        }
    });
}
