//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{CreateMarcaRequest, Marca, UpdateMarcaRequest};

use crate::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::MarcaService;

/// HTTP client for communicating with the Marcas backend.
///
/// Built once at startup from a resolved [`ApiConfig`] and shared behind an
/// `Arc<dyn MarcaService>`. The underlying `reqwest::Client` keeps a
/// connection pool; no timeout is configured beyond the transport default.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `config.base_url`.
    ///
    /// Every request carries `Content-Type: application/json`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and check its status.
    ///
    /// Transport failures become [`AppError::Network`], non-2xx statuses
    /// [`AppError::RequestFailed`]. Single attempt, no retry.
    pub(crate) async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let start = std::time::Instant::now();
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path, error = %e, "Network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(method = %method, path, status = status.as_u16(), duration_ms, "Request succeeded");
            Ok(response)
        } else {
            tracing::warn!(method = %method, path, status = status.as_u16(), duration_ms, "Request failed");
            Err(AppError::RequestFailed {
                status: status.as_u16(),
            })
        }
    }

    /// Decode a success body as JSON.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        let value = serde_json::from_slice(&bytes)
            .inspect_err(|e| tracing::error!(error = %e, "Response parse error"))?;
        Ok(value)
    }
}

#[async_trait::async_trait]
impl MarcaService for ApiClient {
    async fn list(&self) -> Result<Vec<Marca>> {
        crate::services::api::marcas::list_marcas(self).await
    }

    async fn get(&self, id: i64) -> Result<Marca> {
        crate::services::api::marcas::get_marca(self, id).await
    }

    async fn create(&self, request: &CreateMarcaRequest) -> Result<Marca> {
        crate::services::api::marcas::create_marca(self, request).await
    }

    async fn update(&self, id: i64, request: &UpdateMarcaRequest) -> Result<Marca> {
        crate::services::api::marcas::update_marca(self, id, request).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        crate::services::api::marcas::delete_marca(self, id).await
    }
}
