//! # Marca Tasks
//!
//! Spawned flows for list fetches and mutations. Each flow talks to the
//! service and the prompter, then reports back through the event channel.
//! No state lock is held across an await.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::Marca;
use tokio::spawn;
use tracing::{debug, error, info};

use crate::app::events::AppEvent;
use crate::app::form::Submission;
use crate::app::state::AppState;
use crate::core::prompt::{DialogRequest, Prompter};
use crate::core::service::MarcaService;

/// Fetch the full list.
///
/// Overlapping fetches are not coalesced; whichever resolves last wins.
pub(crate) fn fetch_marcas(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
) {
    {
        let mut state = state.write();
        state.loading = true;
    }

    spawn(async move {
        let result = api.list().await;
        match &result {
            Ok(marcas) => debug!(count = marcas.len(), "List fetch finished"),
            Err(e) => error!(error = %e, "Failed to fetch marcas"),
        }
        let _ = event_tx.send(AppEvent::MarcasLoaded(result)).await;
    });
}

/// Send a form submission and report the outcome.
///
/// Acknowledgment comes before the event, so the form stays open until the
/// user dismisses the dialog.
pub(crate) fn submit_form(
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
    submission: Submission,
) {
    spawn(async move {
        let result = submission.send(api.as_ref()).await;

        match &result {
            Ok(marca) => {
                info!(id = ?marca.id, update = submission.is_update(), "Marca saved");
                let verb = if submission.is_update() { "actualizada" } else { "creada" };
                prompter
                    .acknowledge(DialogRequest::success(
                        "¡Éxito!",
                        format!("Marca {} correctamente", verb),
                    ))
                    .await;
            }
            Err(e) => {
                error!(error = %e, update = submission.is_update(), "Failed to save marca");
                prompter.acknowledge(DialogRequest::error(e.to_string())).await;
            }
        }

        let _ = event_tx.send(AppEvent::FormSubmitted(result)).await;
    });
}

/// Confirm, then delete `id`.
pub(crate) fn delete_marca(
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
    id: i64,
) {
    spawn(async move {
        if !prompter.confirm(DialogRequest::delete_confirmation()).await {
            debug!(id, "Delete declined");
            let _ = event_tx.send(AppEvent::DeleteCancelled(id)).await;
            return;
        }

        let result = api.delete(id).await;
        let ack = match &result {
            Ok(()) => {
                info!(id, "Marca deleted");
                DialogRequest::success("¡Eliminado!", "La marca ha sido eliminada correctamente")
            }
            Err(e) => {
                error!(id, error = %e, "Failed to delete marca");
                DialogRequest::error("No se pudo eliminar la marca")
            }
        };

        // Removal is applied before the acknowledgment is dismissed
        let _ = event_tx.send(AppEvent::MarcaDeleted { id, result }).await;
        prompter.acknowledge(ack).await;
    });
}

/// Ask for a new status and send a full update when it differs.
pub(crate) fn change_status(
    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
    marca: Marca,
    id: i64,
) {
    spawn(async move {
        let choice = prompter.choose_status(marca.status).await;
        let status = match choice {
            Some(status) if status != marca.status => status,
            _ => {
                debug!(id, ?choice, "Status unchanged");
                let _ = event_tx.send(AppEvent::StatusUnchanged(id)).await;
                return;
            }
        };

        let result = api.update(id, &marca.update_request(status)).await;
        match &result {
            Ok(_) => {
                info!(id, status = %status, "Status updated");
                prompter
                    .acknowledge(DialogRequest::success(
                        "¡Actualizado!",
                        format!("Estado cambiado a: {}", status),
                    ))
                    .await;
            }
            Err(e) => {
                error!(id, error = %e, "Failed to update status");
                prompter
                    .acknowledge(DialogRequest::error("No se pudo actualizar el estado"))
                    .await;
            }
        }

        let _ = event_tx.send(AppEvent::StatusUpdated { id, result }).await;
    });
}
