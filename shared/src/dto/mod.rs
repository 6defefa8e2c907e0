//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the Marcas REST API.
//!
//! ## Module Organization
//!
//! - [`marca`] - Trademark records, status and category enums, create/update payloads
//!
//! ## Serialization Format
//!
//! - **Field naming**: Rust fields are English; JSON keys follow the backend's
//!   Spanish camelCase (`nombre`, `fechaRegistro`, ...) via `#[serde(rename)]`
//! - **Enums**: Serialize to their Spanish labels (`"Activo"`, `"Tecnología"`)
//! - **Optional fields**: `id` and `numeroRegistro` are omitted when `None`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/marcas
//! Content-Type: application/json
//!
//! {
//!   "nombre": "Acme",
//!   "descripcion": "Herramientas industriales",
//!   "categoria": "Tecnología",
//!   "propietario": "Jane"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "id": 12,
//!   "nombre": "Acme",
//!   "descripcion": "Herramientas industriales",
//!   "categoria": "Tecnología",
//!   "fechaRegistro": "2024-03-15T10:30:00.000Z",
//!   "estado": "Pendiente",
//!   "propietario": "Jane",
//!   "numeroRegistro": "REG-0012"
//! }
//! ```

pub mod marca;

pub use marca::*;
