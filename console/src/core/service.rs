//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{CreateMarcaRequest, Marca, UpdateMarcaRequest};

use crate::core::error::Result;

/// Trait for the Marcas REST API.
///
/// One method per endpoint; each call issues exactly one HTTP request and
/// never retries. [`crate::services::api::ApiClient`] is the production
/// implementation; tests substitute an in-memory double.
#[async_trait]
pub trait MarcaService: Send + Sync {
    /// `GET /marcas` - full list, in backend order
    async fn list(&self) -> Result<Vec<Marca>>;

    /// `GET /marcas/{id}`
    async fn get(&self, id: i64) -> Result<Marca>;

    /// `POST /marcas`
    async fn create(&self, request: &CreateMarcaRequest) -> Result<Marca>;

    /// `PUT /marcas/{id}` - full replace of the editable fields plus status
    async fn update(&self, id: i64, request: &UpdateMarcaRequest) -> Result<Marca>;

    /// `DELETE /marcas/{id}`
    async fn delete(&self, id: i64) -> Result<()>;
}
