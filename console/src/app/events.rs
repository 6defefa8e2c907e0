//! # Application Events
//!
//! Results of spawned flows, sent back to the UI thread and applied in `on_tick()`.

use shared::Marca;

use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// List fetch finished
    MarcasLoaded(Result<Vec<Marca>, AppError>),
    /// Create or update from the form finished
    FormSubmitted(Result<Marca, AppError>),
    /// Confirmed delete finished
    MarcaDeleted { id: i64, result: Result<(), AppError> },
    /// Delete confirmation declined
    DeleteCancelled(i64),
    /// Status update request finished
    StatusUpdated { id: i64, result: Result<Marca, AppError> },
    /// Status chooser cancelled or same value picked
    StatusUnchanged(i64),
}
