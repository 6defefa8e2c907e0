//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The REST API seam (`MarcaService`)
//! - **[`prompt`]**: Awaitable user prompts (`Prompter`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use console::core::{MarcaService, Prompter};
//!
//! // In production: real HTTP client and egui dialogs
//! let api: Arc<dyn MarcaService> = Arc::new(ApiClient::new(&config)?);
//! let prompter: Arc<dyn Prompter> = Arc::new(DialogPrompter::new());
//!
//! // In tests: in-memory doubles
//! let api: Arc<dyn MarcaService> = Arc::new(MockMarcaService::default());
//! ```

pub mod error;
pub mod prompt;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{AppError, Result};
pub use prompt::{AckKind, DialogAnswer, DialogRequest, Prompter};
pub use service::MarcaService;
