//! # Marca Form Window
//!
//! Stepper, the fields of the current step, and Back/Continue/Submit buttons.
//! Edits go to a copy of the draft which is written back through
//! [`App::update_draft`] when it changes.

use egui;
use shared::MarcaCategory;

use crate::app::form::{FormField, FormStep, MarcaDraft, MarcaForm};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the create/edit window for `form`
pub fn render(ctx: &egui::Context, form: &MarcaForm, app: &mut App) {
    let theme = Theme::default();
    let mut open = true;

    egui::Window::new(form.title())
        .id(egui::Id::new("marca_form"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(520.0)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_width(520.0);
            render_stepper(ui, form.step(), &theme);
            ui.add_space(16.0);

            let mut draft = form.draft().clone();
            ui.add_enabled_ui(!form.submitting, |ui| match form.step() {
                FormStep::BasicInfo => render_basic_info(ui, form, &mut draft, &theme),
                FormStep::Details => render_details(ui, form, &mut draft, &theme),
                FormStep::Confirmation => render_confirmation(ui, form, &theme),
            });
            if &draft != form.draft() {
                app.update_draft(draft);
            }

            ui.add_space(16.0);
            ui.separator();
            render_buttons(ui, form, app, &theme);
        });

    if !open {
        app.close_modal();
    }
}

fn render_stepper(ui: &mut egui::Ui, current: FormStep, theme: &Theme) {
    ui.horizontal(|ui| {
        for (index, step) in FormStep::all().iter().enumerate() {
            let reached = *step <= current;
            let color = if reached { theme.selected } else { theme.dim };
            let marker = if *step < current {
                "✔".to_string()
            } else {
                step.number().to_string()
            };

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(marker).size(18.0).strong().color(color));
                ui.label(egui::RichText::new(step.label()).size(12.0).color(color));
            });

            if index + 1 < FormStep::all().len() {
                let line = if *step < current { theme.selected } else { theme.border };
                ui.label(egui::RichText::new("────────").color(line));
            }
        }
    });
}

fn render_basic_info(ui: &mut egui::Ui, form: &MarcaForm, draft: &mut MarcaDraft, theme: &Theme) {
    forms::render_text_input(
        ui,
        "Nombre de la Marca *",
        &mut draft.name,
        "Ingrese el nombre de la marca",
        form.error(FormField::Name),
        theme,
    );
    ui.add_space(10.0);

    ui.label(egui::RichText::new("Categoría *").strong());
    let selected_text = draft
        .category
        .map(|c| c.label())
        .unwrap_or("Seleccione una categoría");
    egui::ComboBox::from_id_salt("marca_category")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for category in MarcaCategory::all() {
                ui.selectable_value(&mut draft.category, Some(*category), category.label());
            }
        });
    if let Some(error) = form.error(FormField::Category) {
        forms::render_error(ui, error, theme);
    }
}

fn render_details(ui: &mut egui::Ui, form: &MarcaForm, draft: &mut MarcaDraft, theme: &Theme) {
    forms::render_text_area(
        ui,
        "Descripción *",
        &mut draft.description,
        "Describa la marca y sus características",
        form.error(FormField::Description),
        theme,
    );
    ui.add_space(10.0);
    forms::render_text_input(
        ui,
        "Propietario *",
        &mut draft.owner,
        "Nombre del propietario de la marca",
        form.error(FormField::Owner),
        theme,
    );
}

fn render_confirmation(ui: &mut egui::Ui, form: &MarcaForm, theme: &Theme) {
    let draft = form.draft();

    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(239, 246, 255))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Resumen de la Marca").strong());
            ui.add_space(6.0);
            forms::render_field_row(ui, "Nombre", &draft.name);
            forms::render_field_row(ui, "Categoría", draft.category.map(|c| c.label()).unwrap_or("-"));
            forms::render_field_row(ui, "Propietario", &draft.owner);
            ui.label(egui::RichText::new("Descripción:").strong());
            ui.label(egui::RichText::new(&draft.description).size(12.0));
        });

    ui.add_space(10.0);
    let verb = if form.is_editing() { "actualizar" } else { "crear" };
    forms::render_hint(
        ui,
        &format!("¿Está seguro que desea {} esta marca con la información mostrada?", verb),
        theme,
    );
}

fn render_buttons(ui: &mut egui::Ui, form: &MarcaForm, app: &mut App, theme: &Theme) {
    let enabled = !form.submitting;

    ui.horizontal(|ui| {
        let back_label = if form.step() == FormStep::BasicInfo { "Cancelar" } else { "← Atrás" };
        if forms::render_button(ui, back_label, None, enabled).clicked() {
            app.form_back();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if form.step() == FormStep::Confirmation {
                let label = if form.is_editing() { "✔ Actualizar Marca" } else { "✔ Crear Marca" };
                if forms::render_button(ui, label, Some(theme.selected), enabled).clicked() {
                    if let Err(e) = app.submit_form() {
                        tracing::warn!(error = %e, "Submit rejected");
                    }
                }
                if form.submitting {
                    ui.add(egui::Spinner::new().color(theme.selected));
                }
            } else if forms::render_button(ui, "Continuar →", Some(theme.selected), enabled).clicked() {
                // Validation messages are rendered from the form's error map
                if let Err(e) = app.form_next() {
                    tracing::debug!(error = %e, "Step validation failed");
                }
            }
        });
    });
}
