//! # Event Handlers
//!
//! User action handlers.

pub mod marcas;
