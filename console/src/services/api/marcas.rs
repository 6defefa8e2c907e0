//! # Marcas Endpoints
//!
//! CRUD over `/marcas`.

use reqwest::Method;
use shared::{CreateMarcaRequest, Marca, UpdateMarcaRequest};

use super::client::ApiClient;
use crate::core::error::Result;

const MARCAS_PATH: &str = "/marcas";

fn marca_path(id: i64) -> String {
    format!("{}/{}", MARCAS_PATH, id)
}

/// Fetch every record, in backend order.
#[tracing::instrument(skip(client))]
pub async fn list_marcas(client: &ApiClient) -> Result<Vec<Marca>> {
    let response = client.execute::<()>(Method::GET, MARCAS_PATH, None).await?;
    let marcas: Vec<Marca> = ApiClient::decode(response).await?;
    tracing::info!(count = marcas.len(), "Fetched marcas");
    Ok(marcas)
}

/// Fetch a single record.
#[tracing::instrument(skip(client))]
pub async fn get_marca(client: &ApiClient, id: i64) -> Result<Marca> {
    let response = client.execute::<()>(Method::GET, &marca_path(id), None).await?;
    ApiClient::decode(response).await
}

/// Create a record. The backend assigns id, date, status and registration number.
#[tracing::instrument(skip(client, request), fields(name = %request.name))]
pub async fn create_marca(client: &ApiClient, request: &CreateMarcaRequest) -> Result<Marca> {
    let response = client.execute(Method::POST, MARCAS_PATH, Some(request)).await?;
    let marca: Marca = ApiClient::decode(response).await?;
    tracing::info!(id = ?marca.id, "Marca created");
    Ok(marca)
}

/// Replace the editable fields and status of a record.
#[tracing::instrument(skip(client, request), fields(status = %request.status))]
pub async fn update_marca(client: &ApiClient, id: i64, request: &UpdateMarcaRequest) -> Result<Marca> {
    let response = client.execute(Method::PUT, &marca_path(id), Some(request)).await?;
    let marca: Marca = ApiClient::decode(response).await?;
    tracing::info!("Marca updated");
    Ok(marca)
}

/// Delete a record. The response body is ignored.
#[tracing::instrument(skip(client))]
pub async fn delete_marca(client: &ApiClient, id: i64) -> Result<()> {
    client.execute::<()>(Method::DELETE, &marca_path(id), None).await?;
    tracing::info!("Marca deleted");
    Ok(())
}
