//! # Async Tasks
//!
//! Spawned flows for list fetches and record mutations.

pub mod marcas;
