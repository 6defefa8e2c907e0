//! # Event Handler
//!
//! Applies [`AppEvent`]s from spawned flows to the shared state.
//!
//! Each event takes the write lock once, for the duration of the update only.

use shared::Marca;

use crate::app::state::Modal;
use crate::app::{App, AppEvent};
use crate::core::error::AppError;

/// Message shown in place of the list when a fetch fails
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar las marcas";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(?event, "Handling event");

        match event {
            AppEvent::MarcasLoaded(result) => self.handle_marcas_loaded(result),
            AppEvent::FormSubmitted(result) => self.handle_form_submitted(result),
            AppEvent::MarcaDeleted { id, result } => self.handle_marca_deleted(id, result),
            AppEvent::StatusUpdated { id, result } => self.handle_status_updated(id, result),
            AppEvent::DeleteCancelled(id) | AppEvent::StatusUnchanged(id) => {
                self.state.write().busy.remove(&id);
            }
        }

        self.state.write().needs_immediate_repaint = true;
    }
}

impl App {
    fn handle_marcas_loaded(&mut self, result: Result<Vec<Marca>, AppError>) {
        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(marcas) => {
                state.marcas = marcas;
                state.error = None;
            }
            Err(_) => {
                state.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn handle_form_submitted(&mut self, result: Result<Marca, AppError>) {
        let succeeded = {
            let mut state = self.state.write();
            let succeeded = match state.modal.form_mut() {
                Some(form) => form.finish_submission(result).is_ok(),
                None => result.is_ok(),
            };
            if succeeded && state.modal.form().is_some() {
                state.modal = Modal::None;
            }
            succeeded
        };

        if succeeded {
            self.refresh();
        }
    }

    fn handle_marca_deleted(&mut self, id: i64, result: Result<(), AppError>) {
        let mut state = self.state.write();
        state.busy.remove(&id);
        if result.is_err() {
            return;
        }

        state.marcas.retain(|m| m.id != Some(id));
        if matches!(&state.modal, Modal::Details(m) if m.id == Some(id)) {
            state.modal = Modal::None;
        }
    }

    fn handle_status_updated(&mut self, id: i64, result: Result<Marca, AppError>) {
        self.state.write().busy.remove(&id);
        if result.is_ok() {
            self.refresh();
        }
    }
}
