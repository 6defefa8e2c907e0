//! # Dialogs
//!
//! egui implementation of [`Prompter`]. Spawned flows call `ask` and are
//! suspended on a oneshot receiver; the UI thread renders the oldest pending
//! request as a centered window every frame and resolves it when a button is
//! clicked.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::MarcaStatus;
use tokio::sync::oneshot;

use crate::core::prompt::{AckKind, DialogAnswer, DialogRequest, Prompter};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

struct PendingDialog {
    request: DialogRequest,
    responder: oneshot::Sender<DialogAnswer>,
    /// Current pick in the status chooser
    selected: Option<MarcaStatus>,
}

/// Queue of open questions, answered from the UI thread.
#[derive(Default)]
pub struct DialogPrompter {
    queue: Mutex<VecDeque<PendingDialog>>,
    ctx: Mutex<Option<egui::Context>>,
}

impl DialogPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repaint `ctx` whenever a new request arrives
    pub fn attach(&self, ctx: &egui::Context) {
        *self.ctx.lock() = Some(ctx.clone());
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Resolve the oldest request with `answer`
    pub fn answer(&self, answer: DialogAnswer) {
        let head = self.queue.lock().pop_front();
        if let Some(head) = head {
            tracing::debug!(title = head.request.title(), ?answer, "Dialog answered");
            // Receiver gone means the flow was dropped; nothing to resolve
            let _ = head.responder.send(answer);
        }
    }

    /// Drop every open request; waiting flows read this as "no"
    pub fn dismiss_all(&self) {
        self.queue.lock().clear();
    }

    /// Draw the oldest request, if any
    pub fn render(&self, ctx: &egui::Context) {
        let theme = Theme::default();
        let mut answer = None;

        {
            let mut queue = self.queue.lock();
            let Some(head) = queue.front_mut() else {
                return;
            };

            egui::Window::new(head.request.title().to_string())
                .id(egui::Id::new("marcas_dialog"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(320.0);
                    answer = render_body(ui, head, &theme);
                });
        }

        if let Some(answer) = answer {
            self.answer(answer);
        }
    }
}

fn render_body(ui: &mut egui::Ui, head: &mut PendingDialog, theme: &Theme) -> Option<DialogAnswer> {
    let mut answer = None;

    match &head.request {
        DialogRequest::Confirm {
            text,
            confirm_label,
            cancel_label,
            ..
        } => {
            ui.label(egui::RichText::new("⚠").size(28.0).color(theme.warning));
            ui.label(text);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if forms::render_button(ui, confirm_label, Some(theme.error), true).clicked() {
                    answer = Some(DialogAnswer::Confirmed(true));
                }
                if forms::render_button(ui, cancel_label, None, true).clicked() {
                    answer = Some(DialogAnswer::Confirmed(false));
                }
            });
        }
        DialogRequest::ChooseStatus { current, .. } => {
            let current = *current;
            let selected = head.selected.get_or_insert(current);

            ui.label(format!("Estado actual: {}", current));
            ui.add_space(6.0);
            egui::ComboBox::from_id_salt("status_choice")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for status in MarcaStatus::all() {
                        ui.selectable_value(selected, *status, status.label());
                    }
                });
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if forms::render_button(ui, "Actualizar", Some(theme.selected), true).clicked() {
                    answer = Some(DialogAnswer::Status(Some(*selected)));
                }
                if forms::render_button(ui, "Cancelar", None, true).clicked() {
                    answer = Some(DialogAnswer::Status(None));
                }
            });
        }
        DialogRequest::Acknowledge { text, kind, .. } => {
            let (icon, color) = match kind {
                AckKind::Success => ("✔", theme.success),
                AckKind::Error => ("✖", theme.error),
            };
            ui.label(egui::RichText::new(icon).size(28.0).color(color));
            ui.label(text);
            ui.add_space(12.0);
            let fill = match kind {
                AckKind::Success => theme.selected,
                AckKind::Error => theme.error,
            };
            if forms::render_button(ui, "OK", Some(fill), true).clicked() {
                answer = Some(DialogAnswer::Dismissed);
            }
        }
    }

    answer
}

#[async_trait]
impl Prompter for DialogPrompter {
    async fn ask(&self, request: DialogRequest) -> DialogAnswer {
        let (responder, receiver) = oneshot::channel();
        tracing::debug!(title = request.title(), "Dialog requested");

        self.queue.lock().push_back(PendingDialog {
            request,
            responder,
            selected: None,
        });
        if let Some(ctx) = self.ctx.lock().as_ref() {
            ctx.request_repaint();
        }

        receiver.await.unwrap_or(DialogAnswer::Dismissed)
    }
}
