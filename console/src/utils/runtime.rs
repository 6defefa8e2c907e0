//! Global Tokio runtime for async HTTP operations
//!
//! eframe owns the main thread and does not provide an async executor, but
//! reqwest and the spawned flows need a Tokio context. `main` enters this
//! runtime before starting the event loop so `tokio::spawn` works from UI
//! callbacks:
//!
//! ```rust,ignore
//! use console::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! eframe::run_native(/* ... */)?;
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
