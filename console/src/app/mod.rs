//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the list screen, its modals and the spawned
//! flows that talk to the backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()          drains AppEvents every frame          │
//! │  - open_*/form_*      modal and wizard actions              │
//! │  - delete/change_status  start spawned flows                │
//! │                                                             │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)         │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  tasks::marcas  fetch / submit / delete / change status     │
//! │  MarcaService   HTTP (or a test double)                     │
//! │  Prompter       confirmations and acknowledgments           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: orchestrator
//! - **[`AppState`]**: list, loading/error flags, open modal, busy ids
//! - **[`AppEvent`]**: results of spawned flows
//! - **[`form`]**: the create/edit wizard state machine
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut app = App::new(api, prompter);
//!
//! // every frame
//! app.on_tick();
//! let state = app.state.read();
//! render(&state);
//! drop(state);
//! ```

pub mod form;
mod state;
mod events;
mod handlers;
mod tasks;
mod event_handler;

pub use state::*;
pub use events::AppEvent;
pub use event_handler::LOAD_ERROR_MESSAGE;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::Marca;

use crate::core::error::Result;
use crate::core::prompt::Prompter;
use crate::core::service::MarcaService;

/// Main application orchestrator.
///
/// Service and prompter are injected, so the same orchestration runs against
/// the HTTP client and egui dialogs in production and against in-memory
/// doubles in tests.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; never across an await.
    pub state: Arc<RwLock<AppState>>,

    /// Receives results from spawned flows; polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    api: Arc<dyn MarcaService>,
    prompter: Arc<dyn Prompter>,
}

impl App {
    /// Create the app and start the initial list fetch.
    ///
    /// Must be called inside a Tokio runtime context.
    pub fn new(api: Arc<dyn MarcaService>, prompter: Arc<dyn Prompter>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            api,
            prompter,
        };

        app.refresh();
        tracing::info!("App state initialized - initial list fetch started");

        app
    }

    /// Process pending async results. Call once per frame.
    ///
    /// Returns the number of events applied.
    pub fn on_tick(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Apply one async result to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Re-run the list fetch ("Reintentar" / "Actualizar")
    pub fn refresh(&self) {
        tasks::marcas::fetch_marcas(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }

    pub fn open_create_form(&self) {
        handlers::marcas::handle_open_create(self.state.clone());
    }

    pub fn open_edit_form(&self, marca: Marca) -> Result<()> {
        handlers::marcas::handle_open_edit(self.state.clone(), marca)
    }

    pub fn open_details(&self, marca: Marca) {
        handlers::marcas::handle_open_details(self.state.clone(), marca);
    }

    /// Switch from the details modal to editing the same record
    pub fn edit_from_details(&self) -> Result<()> {
        let marca = match &self.state.read().modal {
            Modal::Details(marca) => marca.clone(),
            _ => return Ok(()),
        };
        self.open_edit_form(marca)
    }

    pub fn close_modal(&self) {
        handlers::marcas::handle_close_modal(self.state.clone());
    }

    /// Write back edits made to a copy of the open form's draft
    pub fn update_draft(&self, draft: form::MarcaDraft) {
        handlers::marcas::handle_draft_edit(self.state.clone(), draft);
    }

    /// "Continuar": validate the current step and advance
    pub fn form_next(&self) -> Result<()> {
        handlers::marcas::handle_form_next(self.state.clone())
    }

    /// "Atrás" / "Cancelar"
    pub fn form_back(&self) {
        handlers::marcas::handle_form_back(self.state.clone());
    }

    /// Submit the open form from its confirmation step
    pub fn submit_form(&self) -> Result<()> {
        handlers::marcas::handle_form_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.prompter.clone(),
        )
    }

    /// Ask for confirmation, then delete `id`
    pub fn delete_marca(&self, id: i64) {
        handlers::marcas::handle_delete_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.prompter.clone(),
            id,
        );
    }

    /// Ask for a new status for `marca`
    pub fn change_status(&self, marca: Marca) -> Result<()> {
        handlers::marcas::handle_status_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.prompter.clone(),
            marca,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::FormStep;
    use crate::core::error::AppError;
    use crate::core::prompt::{AckKind, DialogAnswer, DialogRequest};
    use crate::core::testing::{sample_marca, Call, MockMarcaService, Op, ScriptedPrompter};
    use shared::{MarcaCategory, MarcaStatus};
    use std::time::Duration;

    struct Harness {
        app: App,
        api: Arc<MockMarcaService>,
        prompter: Arc<ScriptedPrompter>,
    }

    impl Harness {
        async fn new(marcas: Vec<Marca>, answers: Vec<DialogAnswer>) -> Self {
            Self::with_api(MockMarcaService::with_marcas(marcas), answers).await
        }

        async fn with_api(api: MockMarcaService, answers: Vec<DialogAnswer>) -> Self {
            let api = Arc::new(api);
            let prompter = Arc::new(ScriptedPrompter::new(answers));
            let app = App::new(api.clone(), prompter.clone());
            let mut harness = Self { app, api, prompter };
            // initial fetch
            harness.step().await;
            harness
        }

        /// Wait for the next event and apply it
        async fn step(&mut self) -> AppEvent {
            let event = tokio::time::timeout(Duration::from_secs(2), self.app.event_rx.recv())
                .await
                .expect("Timed out waiting for an event")
                .expect("Event channel closed");
            self.app.handle_event(event.clone());
            event
        }

        fn names(&self) -> Vec<String> {
            self.app.state.read().marcas.iter().map(|m| m.name.clone()).collect()
        }
    }

    fn seven() -> Vec<Marca> {
        vec![
            sample_marca(3, "Acme", MarcaStatus::Active),
            sample_marca(7, "Globex", MarcaStatus::Pending),
        ]
    }

    #[tokio::test]
    async fn test_mount_fetches_list_in_backend_order() {
        let h = Harness::new(seven(), vec![]).await;

        let state = h.app.state.read();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(h.api.count(Op::List), 1);
        drop(state);
        assert_eq!(h.names(), vec!["Acme", "Globex"]);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_and_retry_clears_it() {
        let api = MockMarcaService::with_marcas(seven());
        api.fail(Op::List, AppError::Network("connection refused".to_string()));
        let mut h = Harness::with_api(api, vec![]).await;

        {
            let state = h.app.state.read();
            assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
            assert!(state.marcas.is_empty());
            assert!(!state.loading);
        }

        let api = MockMarcaService::with_marcas(seven());
        h.app.api = Arc::new(api);
        h.app.refresh();
        assert!(h.app.state.read().loading);
        h.step().await;

        assert!(h.app.state.read().error.is_none());
        assert_eq!(h.names().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_record_and_shows_error() {
        let api = MockMarcaService::with_marcas(seven());
        api.fail(Op::Delete, AppError::RequestFailed { status: 500 });
        let mut h = Harness::with_api(api, vec![DialogAnswer::Confirmed(true)]).await;

        h.app.delete_marca(7);
        assert!(h.app.state.read().is_busy(Some(7)));
        let event = h.step().await;

        assert!(matches!(event, AppEvent::MarcaDeleted { id: 7, result: Err(_) }));
        assert_eq!(h.names(), vec!["Acme", "Globex"]);
        assert!(!h.app.state.read().is_busy(Some(7)));
        tokio::task::yield_now().await;
        assert_eq!(
            h.prompter.requests(),
            vec![
                DialogRequest::delete_confirmation(),
                DialogRequest::error("No se pudo eliminar la marca"),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_locally_without_refetch() {
        let mut h = Harness::new(seven(), vec![DialogAnswer::Confirmed(true)]).await;
        h.app.open_details(sample_marca(7, "Globex", MarcaStatus::Pending));

        h.app.delete_marca(7);
        h.step().await;

        assert_eq!(h.names(), vec!["Acme"]);
        assert_eq!(h.api.count(Op::List), 1);
        assert_eq!(h.api.calls().last(), Some(&Call::Delete(7)));
        assert_eq!(h.app.state.read().modal, Modal::None);
        tokio::task::yield_now().await;
        match h.prompter.requests().last() {
            Some(DialogRequest::Acknowledge { title, kind, .. }) => {
                assert_eq!(title, "¡Eliminado!");
                assert_eq!(*kind, AckKind::Success);
            }
            other => panic!("Expected success acknowledgment, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let mut h = Harness::new(seven(), vec![DialogAnswer::Confirmed(false)]).await;

        h.app.delete_marca(7);
        let event = h.step().await;

        assert!(matches!(event, AppEvent::DeleteCancelled(7)));
        assert_eq!(h.api.count(Op::Delete), 0);
        assert!(!h.app.state.read().is_busy(Some(7)));
    }

    #[tokio::test]
    async fn test_status_same_value_sends_no_request() {
        let mut h = Harness::new(
            seven(),
            vec![
                DialogAnswer::Status(Some(MarcaStatus::Pending)),
                DialogAnswer::Status(None),
            ],
        )
        .await;
        let globex = h.app.state.read().find(7).cloned().unwrap();

        h.app.change_status(globex.clone()).unwrap();
        assert!(matches!(h.step().await, AppEvent::StatusUnchanged(7)));
        h.app.change_status(globex).unwrap();
        assert!(matches!(h.step().await, AppEvent::StatusUnchanged(7)));

        assert_eq!(h.api.count(Op::Update), 0);
        assert_eq!(
            h.prompter.requests()[0],
            DialogRequest::status_choice(MarcaStatus::Pending)
        );
    }

    #[tokio::test]
    async fn test_status_change_updates_and_refetches() {
        let mut h = Harness::new(
            seven(),
            vec![DialogAnswer::Status(Some(MarcaStatus::Active))],
        )
        .await;
        let globex = h.app.state.read().find(7).cloned().unwrap();

        h.app.change_status(globex.clone()).unwrap();
        assert!(matches!(h.step().await, AppEvent::StatusUpdated { id: 7, result: Ok(_) }));
        assert!(matches!(h.step().await, AppEvent::MarcasLoaded(Ok(_))));

        assert_eq!(
            h.api.calls()[1],
            Call::Update(7, globex.update_request(MarcaStatus::Active))
        );
        assert_eq!(h.api.count(Op::List), 2);
        assert_eq!(h.app.state.read().find(7).map(|m| m.status), Some(MarcaStatus::Active));
        assert_eq!(
            h.prompter.requests()[1],
            DialogRequest::success("¡Actualizado!", "Estado cambiado a: Activo")
        );
    }

    #[tokio::test]
    async fn test_status_failure_shows_error_and_keeps_list() {
        let api = MockMarcaService::with_marcas(seven());
        api.fail(Op::Update, AppError::RequestFailed { status: 400 });
        let mut h = Harness::with_api(api, vec![DialogAnswer::Status(Some(MarcaStatus::Inactive))]).await;
        let acme = h.app.state.read().find(3).cloned().unwrap();

        h.app.change_status(acme).unwrap();
        h.step().await;

        assert_eq!(h.api.count(Op::List), 1);
        assert_eq!(
            h.prompter.requests()[1],
            DialogRequest::error("No se pudo actualizar el estado")
        );
        assert!(!h.app.state.read().is_busy(Some(3)));
    }

    #[tokio::test]
    async fn test_create_flow_closes_form_and_refetches() {
        let mut h = Harness::new(vec![], vec![]).await;

        h.app.open_create_form();
        {
            let mut state = h.app.state.write();
            let draft = state.modal.form_mut().unwrap().draft_mut();
            draft.name = "Acme".to_string();
            draft.category = Some(MarcaCategory::Technology);
            draft.description = "desc".to_string();
            draft.owner = "Jane".to_string();
        }
        h.app.form_next().unwrap();
        h.app.form_next().unwrap();
        h.app.submit_form().unwrap();
        assert!(h.app.state.read().modal.form().unwrap().submitting);

        assert!(matches!(h.step().await, AppEvent::FormSubmitted(Ok(_))));
        assert_eq!(h.app.state.read().modal, Modal::None);
        h.step().await;

        assert_eq!(h.api.count(Op::Create), 1);
        assert_eq!(h.names(), vec!["Acme"]);
        assert_eq!(
            h.prompter.requests(),
            vec![DialogRequest::success("¡Éxito!", "Marca creada correctamente")]
        );
    }

    #[tokio::test]
    async fn test_new_form_waits_for_pending_submit() {
        let mut h = Harness::new(vec![], vec![]).await;
        h.app.open_create_form();
        h.app.update_draft(form::MarcaDraft {
            name: "Acme".to_string(),
            description: "desc".to_string(),
            category: Some(MarcaCategory::Technology),
            owner: "Jane".to_string(),
        });
        h.app.form_next().unwrap();
        h.app.form_next().unwrap();
        h.app.submit_form().unwrap();

        h.app.open_create_form();
        h.app.open_details(sample_marca(3, "Acme", MarcaStatus::Active));
        h.app.close_modal();
        {
            let state = h.app.state.read();
            let form = state.modal.form().expect("submitting form should stay open");
            assert!(form.submitting);
            assert_eq!(form.draft().name, "Acme");
        }

        assert!(matches!(h.step().await, AppEvent::FormSubmitted(Ok(_))));
        assert_eq!(h.app.state.read().modal, Modal::None);

        h.app.open_create_form();
        let mut draft = h.app.state.read().modal.form().unwrap().draft().clone();
        draft.name = "Second".to_string();
        h.app.update_draft(draft);
        assert!(matches!(h.step().await, AppEvent::MarcasLoaded(Ok(_))));

        let state = h.app.state.read();
        let form = state.modal.form().expect("second form should stay open");
        assert_eq!(form.draft().name, "Second");
        assert_eq!(form.step(), FormStep::BasicInfo);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_open() {
        let api = MockMarcaService::default();
        api.fail(Op::Update, AppError::RequestFailed { status: 500 });
        let mut h = Harness::with_api(api, vec![]).await;

        h.app
            .open_edit_form(sample_marca(4, "Initech", MarcaStatus::Active))
            .unwrap();
        h.app.form_next().unwrap();
        h.app.form_next().unwrap();
        h.app.submit_form().unwrap();
        h.step().await;

        let state = h.app.state.read();
        let form = state.modal.form().expect("form should stay open");
        assert_eq!(form.step(), FormStep::Confirmation);
        assert_eq!(form.draft().name, "Initech");
        assert!(!form.submitting);
        drop(state);
        assert_eq!(
            h.prompter.requests(),
            vec![DialogRequest::error("HTTP error! status: 500")]
        );
    }

    #[tokio::test]
    async fn test_submit_before_confirmation_is_rejected() {
        let h = Harness::new(vec![], vec![]).await;
        h.app.open_create_form();

        let err = h.app.submit_form().unwrap_err();

        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(h.api.calls().iter().all(|c| c.op() == Op::List));
    }

    #[tokio::test]
    async fn test_back_from_first_step_closes_form() {
        let h = Harness::new(vec![], vec![]).await;
        h.app.open_create_form();

        h.app.form_back();

        assert_eq!(h.app.state.read().modal, Modal::None);
    }

    #[tokio::test]
    async fn test_edit_from_details_seeds_form() {
        let h = Harness::new(seven(), vec![]).await;
        h.app.open_details(sample_marca(3, "Acme", MarcaStatus::Active));

        h.app.edit_from_details().unwrap();

        let state = h.app.state.read();
        let form = state.modal.form().unwrap();
        assert!(form.is_editing());
        assert_eq!(form.title(), "Editar Marca - Información Básica");
    }
}
