//! # Prompt Abstraction
//!
//! Blocking questions shown to the user (confirmations, status choice,
//! acknowledgments) expressed as an awaitable call. The flow that asks is
//! suspended until the user answers; how the question is drawn is up to the
//! implementation.
//!
//! ```rust,ignore
//! if prompter.confirm(DialogRequest::delete_confirmation()).await {
//!     api.delete(id).await?;
//! }
//! ```
//!
//! The egui implementation lives in [`crate::ui::widgets::dialogs`].

use async_trait::async_trait;
use shared::MarcaStatus;

/// Visual tone of an acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Success,
    Error,
}

/// A question for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRequest {
    /// Yes/no question
    Confirm {
        title: String,
        text: String,
        confirm_label: String,
        cancel_label: String,
    },
    /// Pick one of the fixed statuses, preselecting `current`
    ChooseStatus { title: String, current: MarcaStatus },
    /// Message the user must dismiss
    Acknowledge {
        title: String,
        text: String,
        kind: AckKind,
    },
}

impl DialogRequest {
    /// Title line shown on every dialog
    pub fn title(&self) -> &str {
        match self {
            DialogRequest::Confirm { title, .. }
            | DialogRequest::ChooseStatus { title, .. }
            | DialogRequest::Acknowledge { title, .. } => title,
        }
    }

    pub fn delete_confirmation() -> Self {
        DialogRequest::Confirm {
            title: "¿Estás seguro?".to_string(),
            text: "Esta acción no se puede deshacer".to_string(),
            confirm_label: "Sí, eliminar".to_string(),
            cancel_label: "Cancelar".to_string(),
        }
    }

    pub fn status_choice(current: MarcaStatus) -> Self {
        DialogRequest::ChooseStatus {
            title: "Actualizar Estado".to_string(),
            current,
        }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        DialogRequest::Acknowledge {
            title: title.into(),
            text: text.into(),
            kind: AckKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        DialogRequest::Acknowledge {
            title: "Error".to_string(),
            text: text.into(),
            kind: AckKind::Error,
        }
    }
}

/// The user's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    /// Reply to [`DialogRequest::Confirm`]
    Confirmed(bool),
    /// Reply to [`DialogRequest::ChooseStatus`]; `None` when cancelled
    Status(Option<MarcaStatus>),
    /// Reply to [`DialogRequest::Acknowledge`], or a dialog closed without answer
    Dismissed,
}

/// Awaitable prompt.
///
/// Implementations must resolve every request eventually. A dialog that goes
/// away without an answer resolves to [`DialogAnswer::Dismissed`], which the
/// helpers read as "no".
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn ask(&self, request: DialogRequest) -> DialogAnswer;

    /// Ask a yes/no question
    async fn confirm(&self, request: DialogRequest) -> bool {
        matches!(self.ask(request).await, DialogAnswer::Confirmed(true))
    }

    /// Ask for a status; `None` when cancelled
    async fn choose_status(&self, current: MarcaStatus) -> Option<MarcaStatus> {
        match self.ask(DialogRequest::status_choice(current)).await {
            DialogAnswer::Status(choice) => choice,
            _ => None,
        }
    }

    /// Show a message and wait until it is dismissed
    async fn acknowledge(&self, request: DialogRequest) {
        let _ = self.ask(request).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedPrompter;

    #[tokio::test]
    async fn test_confirm_reads_only_explicit_yes() {
        let prompter = ScriptedPrompter::new(vec![
            DialogAnswer::Confirmed(true),
            DialogAnswer::Confirmed(false),
            DialogAnswer::Dismissed,
        ]);

        assert!(prompter.confirm(DialogRequest::delete_confirmation()).await);
        assert!(!prompter.confirm(DialogRequest::delete_confirmation()).await);
        assert!(!prompter.confirm(DialogRequest::delete_confirmation()).await);
    }

    #[tokio::test]
    async fn test_choose_status_passes_current_value() {
        let prompter = ScriptedPrompter::new(vec![DialogAnswer::Status(Some(MarcaStatus::Active))]);

        let choice = prompter.choose_status(MarcaStatus::Pending).await;

        assert_eq!(choice, Some(MarcaStatus::Active));
        assert_eq!(
            prompter.requests(),
            vec![DialogRequest::status_choice(MarcaStatus::Pending)]
        );
    }

    #[tokio::test]
    async fn test_choose_status_mismatched_answer_is_cancel() {
        let prompter = ScriptedPrompter::new(vec![DialogAnswer::Dismissed]);
        assert_eq!(prompter.choose_status(MarcaStatus::Active).await, None);
    }

    #[test]
    fn test_request_titles() {
        assert_eq!(DialogRequest::delete_confirmation().title(), "¿Estás seguro?");
        assert_eq!(DialogRequest::error("x").title(), "Error");
        assert_eq!(
            DialogRequest::status_choice(MarcaStatus::Inactive).title(),
            "Actualizar Estado"
        );
    }
}
