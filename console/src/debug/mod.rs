//! # Logging
//!
//! Structured logging via `tracing`, written to a daily rotated file.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // At startup, before anything else logs
//! let _log_guard = debug::init();
//!
//! tracing::info!(count = marcas.len(), "Fetched marcas");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `console=info,warn`)
//! - `MARCAS_LOG_DIR`: Log directory (default `logs`, file `console.log.YYYY-MM-DD`)
//! - `MARCAS_LOG_STDERR`: `1` to also log to stderr

pub mod config;
pub mod logger;

pub use config::LogConfig;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init() -> Option<WorkerGuard> {
    logger::init(&LogConfig::from_env())
}
