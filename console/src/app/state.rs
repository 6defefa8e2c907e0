//! # Application State Types
//!
//! Everything the list screen and its modals render from.

use std::collections::HashSet;

use shared::Marca;

use crate::app::form::MarcaForm;

/// The modal currently open over the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    /// Create/edit wizard
    Form(MarcaForm),
    /// Read-only details of one record
    Details(Marca),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }

    pub fn form(&self) -> Option<&MarcaForm> {
        match self {
            Modal::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut MarcaForm> {
        match self {
            Modal::Form(form) => Some(form),
            _ => None,
        }
    }
}

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Records in backend order
    pub marcas: Vec<Marca>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Last list load failure; distinct from an empty list
    pub error: Option<String>,
    pub modal: Modal,
    /// Ids with a delete or status change in flight
    pub busy: HashSet<i64>,
    /// Set by event handlers so the UI repaints without waiting for input
    pub needs_immediate_repaint: bool,
}

impl AppState {
    pub fn is_busy(&self, id: Option<i64>) -> bool {
        id.map(|id| self.busy.contains(&id)).unwrap_or(false)
    }

    /// True while the open form waits on its submit result
    pub fn submission_in_flight(&self) -> bool {
        self.modal.form().map(|f| f.submitting).unwrap_or(false)
    }

    pub fn find(&self, id: i64) -> Option<&Marca> {
        self.marcas.iter().find(|m| m.id == Some(id))
    }

    /// Record count shown in the header
    pub fn count_label(&self) -> String {
        format!("({} marcas registradas)", self.marcas.len())
    }
}
