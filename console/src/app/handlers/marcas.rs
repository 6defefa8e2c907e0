//! # Marca Handlers
//!
//! User actions on the list and its modals. Handlers check and update state
//! under a short lock, then hand any network work to [`crate::app::tasks`].

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::Marca;

use crate::app::events::AppEvent;
use crate::app::form::{BackOutcome, MarcaDraft, MarcaForm};
use crate::app::state::{AppState, Modal};
use crate::app::tasks;
use crate::core::error::{AppError, Result};
use crate::core::prompt::Prompter;
use crate::core::service::MarcaService;

/// Replace the open modal, unless a submission is in flight.
///
/// The pending submit result closes whatever form is open when it lands, so
/// the submitting form has to stay in place until then.
fn replace_modal(state: &mut AppState, modal: Modal) {
    if state.submission_in_flight() {
        tracing::debug!("Ignoring modal change while submission is in flight");
        return;
    }
    state.modal = modal;
}

/// Open an empty create form
pub(crate) fn handle_open_create(state: Arc<RwLock<AppState>>) {
    replace_modal(&mut state.write(), Modal::Form(MarcaForm::create()));
}

/// Open the form seeded from `marca`
pub(crate) fn handle_open_edit(state: Arc<RwLock<AppState>>, marca: Marca) -> Result<()> {
    let form = MarcaForm::edit(marca)?;
    replace_modal(&mut state.write(), Modal::Form(form));
    Ok(())
}

/// Open the read-only details modal
pub(crate) fn handle_open_details(state: Arc<RwLock<AppState>>, marca: Marca) {
    replace_modal(&mut state.write(), Modal::Details(marca));
}

/// Close whatever modal is open, unless a submission is in flight
pub(crate) fn handle_close_modal(state: Arc<RwLock<AppState>>) {
    replace_modal(&mut state.write(), Modal::None);
}

/// Replace the open form's draft with the edited copy
pub(crate) fn handle_draft_edit(state: Arc<RwLock<AppState>>, draft: MarcaDraft) {
    let mut state = state.write();
    if let Some(form) = state.modal.form_mut() {
        if !form.submitting {
            *form.draft_mut() = draft;
        }
    }
}

/// Advance the open form one step
pub(crate) fn handle_form_next(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    let form = state
        .modal
        .form_mut()
        .ok_or_else(|| AppError::InvalidState("No form is open".to_string()))?;
    form.next().map(|_| ())
}

/// Step the open form back; cancelling from the first step closes it
pub(crate) fn handle_form_back(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let outcome = match state.modal.form_mut() {
        Some(form) if !form.submitting => form.back(),
        _ => return,
    };
    if outcome == BackOutcome::Cancelled {
        state.modal = Modal::None;
    }
}

/// Submit the open form from its confirmation step
pub(crate) fn handle_form_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
) -> Result<()> {
    let submission = {
        let mut state = state.write();
        let form = state
            .modal
            .form_mut()
            .ok_or_else(|| AppError::InvalidState("No form is open".to_string()))?;
        if form.submitting {
            return Err(AppError::InvalidState(
                "A submission is already in flight".to_string(),
            ));
        }
        let submission = form.submission()?;
        form.submitting = true;
        submission
    };

    tasks::marcas::submit_form(event_tx, api, prompter, submission);
    Ok(())
}

/// Start the delete flow for `id`
pub(crate) fn handle_delete_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
    id: i64,
) {
    {
        let mut state = state.write();
        if !state.busy.insert(id) {
            return;
        }
    }
    tasks::marcas::delete_marca(event_tx, api, prompter, id);
}

/// Start the status change flow for `marca`
pub(crate) fn handle_status_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
    marca: Marca,
) -> Result<()> {
    let id = marca.id.ok_or_else(|| {
        AppError::InvalidState("Cannot change the status of a marca without an id".to_string())
    })?;
    {
        let mut state = state.write();
        if !state.busy.insert(id) {
            return Ok(());
        }
    }
    tasks::marcas::change_status(event_tx, api, prompter, marca, id);
    Ok(())
}
