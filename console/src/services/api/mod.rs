//! # Backend API Client Module
//!
//! HTTP client for the Marcas REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, request/response plumbing, MarcaService impl
//! └── marcas.rs   - /marcas endpoints (list, get, create, update, delete)
//! ```

pub mod client;
pub mod marcas;

pub use client::ApiClient;
pub use marcas::*;
