//! # Marcas Console - Library Root
//!
//! A **native desktop GUI** for managing trademark records ("marcas") stored
//! behind a REST backend. This library crate contains all modules used by the
//! binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **List view**: cards with status badges, refresh and retry
//! - **Three-step wizard**: create and edit with per-step validation
//! - **Status changes and deletes**: confirmed through blocking dialogs
//! - **Details view**: read-only record with a shortcut into edit mode
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              console (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────┐
//! │  Marcas API     │  GET/POST/PUT/DELETE /marcas
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, events, the form state machine
//! - **core**: error type, service and prompt traits
//! - **config**: base URL resolution
//! - **services**: `reqwest` implementation of [`core::MarcaService`]
//! - **ui**: egui rendering and the dialog [`core::Prompter`]
//! - **debug**: logging setup
//! - **utils**: validation rules, global runtime
//!
//! ```text
//! main.rs
//!   │
//!   ├── config (base URL)
//!   ├── app (state, events, form)
//!   │   ├── core::MarcaService ── services::api (HTTP)
//!   │   └── core::Prompter ────── ui::widgets::dialogs
//!   └── ui (rendering)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin marcas-console
//! MARCAS_API_URL=http://localhost:3001/api cargo run --bin marcas-console
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use config::ApiConfig;
pub use core::{AppError, Result};
