//! # External Services
//!
//! - [`api`]: HTTP client for the Marcas backend
//!
//! The UI never talks to these types directly; it goes through
//! [`crate::core::service::MarcaService`] so tests can swap in a double.

pub mod api;
