//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Marcas console and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::marca`]**: Trademark records and their create/update payloads
//! - **[`utils`]**: Registration date parsing and display helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::marca::{CreateMarcaRequest, Marca, MarcaCategory};
//!
//! # async fn demo() -> Result<(), reqwest::Error> {
//! let request = CreateMarcaRequest {
//!     name: "Acme".to_string(),
//!     description: "Herramientas".to_string(),
//!     category: MarcaCategory::Technology,
//!     owner: "Jane".to_string(),
//! };
//!
//! let created: Marca = reqwest::Client::new()
//!     .post("http://localhost:3001/api/marcas")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// DTO crate: everything here is public API
pub use dto::*;
pub use utils::*;
