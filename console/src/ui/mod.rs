//! # GUI Rendering
//!
//! [`MarcasConsole`] is the `eframe::App`: each frame it drains async events,
//! takes a state snapshot, and draws the shell, the list, the open modal and
//! finally any pending dialog on top.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::sync::Arc;
use std::time::Duration;

use crate::app::{App, Modal};
use crate::ui::theme::Theme;
use crate::ui::widgets::dialogs::DialogPrompter;

/// Idle repaint interval so async results are picked up without input
const IDLE_REPAINT: Duration = Duration::from_millis(250);

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, prompter: &DialogPrompter, api_base_url: &str) {
    // Snapshot; rendering happens without holding the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };
    let theme = Theme::default();

    widgets::header::render_header(ctx, &theme);
    widgets::header::render_footer(ctx, &state, api_base_url, &theme);

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme.background)
                .inner_margin(egui::Margin::symmetric(32, 24)),
        )
        .show(ctx, |ui| {
            screens::marcas::render(ui, &state, app);
        });

    match &state.modal {
        Modal::None => {}
        Modal::Form(form) => screens::marca_form::render(ctx, form, app),
        Modal::Details(marca) => screens::marca_details::render(ctx, marca, app),
    }

    // Dialogs block everything else, so Esc only closes modals when none is up
    if prompter.pending() == 0
        && state.modal.is_open()
        && ctx.input(|i| i.key_pressed(egui::Key::Escape))
    {
        app.close_modal();
    }

    prompter.render(ctx);
}

/// The native window application.
pub struct MarcasConsole {
    app: App,
    prompter: Arc<DialogPrompter>,
    api_base_url: String,
}

impl MarcasConsole {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        app: App,
        prompter: Arc<DialogPrompter>,
        api_base_url: String,
    ) -> Self {
        Theme::apply(&cc.egui_ctx);
        prompter.attach(&cc.egui_ctx);
        Self {
            app,
            prompter,
            api_base_url,
        }
    }
}

impl eframe::App for MarcasConsole {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let handled = self.app.on_tick();

        render(ctx, &mut self.app, &self.prompter, &self.api_base_url);

        let repaint_now = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.needs_immediate_repaint)
        };
        if handled > 0 || repaint_now {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
