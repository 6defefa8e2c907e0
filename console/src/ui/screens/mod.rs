//! # Screen Modules
//!
//! - **[`marcas`]**: the record list (header, cards, empty/error states)
//! - **[`marca_form`]**: create/edit wizard window
//! - **[`marca_details`]**: read-only details window
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // read from the state snapshot, call app methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! rendering. Actions go through [`crate::app::App`] methods, which lock
//! internally.

pub mod marcas;
pub mod marca_form;
pub mod marca_details;
