//! `ApiClient` against a stub backend on an ephemeral port.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde_json::{json, Value};

use console::config::{ApiConfig, BaseUrlSource};
use console::core::{AppError, MarcaService};
use console::services::api::ApiClient;
use shared::{CreateMarcaRequest, MarcaCategory, MarcaStatus, UpdateMarcaRequest};

#[derive(Clone, Default)]
struct Stub {
    marcas: Arc<Mutex<Vec<Value>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    fn record_content_type(&self, headers: &HeaderMap) {
        let value = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.content_types.lock().push(value);
    }
}

async fn list(State(stub): State<Stub>, headers: HeaderMap) -> Json<Vec<Value>> {
    stub.record_content_type(&headers);
    Json(stub.marcas.lock().clone())
}

async fn get_one(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    stub.record_content_type(&headers);
    stub.marcas
        .lock()
        .iter()
        .find(|m| m["id"] == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.bodies.lock().push(body.clone());
    let mut created = body;
    created["id"] = json!(42);
    created["estado"] = json!("Pendiente");
    created["fechaRegistro"] = json!("2024-03-15T10:30:00.000Z");
    created["numeroRegistro"] = json!("REG-0042");
    stub.marcas.lock().push(created.clone());
    (StatusCode::CREATED, Json(created))
}

async fn update(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    stub.bodies.lock().push(body.clone());
    let mut marcas = stub.marcas.lock();
    let marca = marcas
        .iter_mut()
        .find(|m| m["id"] == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    for key in ["nombre", "descripcion", "categoria", "propietario", "estado"] {
        marca[key] = body[key].clone();
    }
    Ok(Json(marca.clone()))
}

async fn remove(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    stub.record_content_type(&headers);
    stub.marcas.lock().retain(|m| m["id"] != id);
    // Not JSON; the client must not try to decode it
    (StatusCode::OK, "deleted")
}

fn seeded() -> Stub {
    let stub = Stub::default();
    stub.marcas.lock().extend([
        json!({
            "id": 1,
            "nombre": "Acme",
            "descripcion": "Herramientas",
            "categoria": "Tecnología",
            "fechaRegistro": "2024-03-15T10:30:00.000Z",
            "estado": "Activo",
            "propietario": "Jane",
            "numeroRegistro": "REG-0001"
        }),
        json!({
            "id": 7,
            "nombre": "Globex",
            "descripcion": "Energía",
            "categoria": "Servicios",
            "fechaRegistro": "2023-11-02",
            "estado": "Pendiente",
            "propietario": "Hank"
        }),
    ]);
    stub
}

fn marcas_router(stub: Stub) -> Router {
    Router::new()
        .route("/api/marcas", get(list).post(create))
        .route("/api/marcas/{id}", get(get_one).put(update).delete(remove))
        .with_state(stub)
}

/// Serve `router` on 127.0.0.1 and return a client pointed at its `/api`
async fn spawn_stub(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{}/api", addr),
        source: BaseUrlSource::Override,
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_decodes_backend_records_in_order() {
    // Arrange
    let client = spawn_stub(marcas_router(seeded())).await;

    // Act
    let marcas = client.list().await.unwrap();

    // Assert
    assert_eq!(marcas.len(), 2);
    assert_eq!(marcas[0].name, "Acme");
    assert_eq!(marcas[0].status, MarcaStatus::Active);
    assert_eq!(marcas[0].category, MarcaCategory::Technology);
    assert_eq!(marcas[0].registration_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    assert_eq!(marcas[1].id, Some(7));
    assert_eq!(marcas[1].registration_date, NaiveDate::from_ymd_opt(2023, 11, 2));
    assert_eq!(marcas[1].registration_number, None);
}

#[tokio::test]
async fn test_get_single_and_missing() {
    let client = spawn_stub(marcas_router(seeded())).await;

    let globex = client.get(7).await.unwrap();
    let missing = client.get(99).await.unwrap_err();

    assert_eq!(globex.owner, "Hank");
    assert_eq!(missing, AppError::RequestFailed { status: 404 });
}

#[tokio::test]
async fn test_create_sends_spanish_keys() {
    // Arrange
    let stub = Stub::default();
    let client = spawn_stub(marcas_router(stub.clone())).await;
    let request = CreateMarcaRequest {
        name: "Acme".to_string(),
        description: "desc".to_string(),
        category: MarcaCategory::Technology,
        owner: "Jane".to_string(),
    };

    // Act
    let created = client.create(&request).await.unwrap();

    // Assert
    assert_eq!(
        stub.bodies.lock()[0],
        json!({
            "nombre": "Acme",
            "descripcion": "desc",
            "categoria": "Tecnología",
            "propietario": "Jane"
        })
    );
    assert_eq!(created.id, Some(42));
    assert_eq!(created.status, MarcaStatus::Pending);
    assert_eq!(created.registration_number.as_deref(), Some("REG-0042"));
}

#[tokio::test]
async fn test_update_replaces_fields_and_status() {
    let stub = seeded();
    let client = spawn_stub(marcas_router(stub.clone())).await;
    let request = UpdateMarcaRequest {
        name: "Globex".to_string(),
        description: "Energía".to_string(),
        category: MarcaCategory::Services,
        owner: "Hank".to_string(),
        status: MarcaStatus::Inactive,
    };

    let updated = client.update(7, &request).await.unwrap();

    assert_eq!(stub.bodies.lock()[0]["estado"], "Inactivo");
    assert_eq!(updated.status, MarcaStatus::Inactive);
    assert_eq!(updated.id, Some(7));
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let stub = seeded();
    let client = spawn_stub(marcas_router(stub.clone())).await;

    client.delete(7).await.unwrap();

    assert_eq!(stub.marcas.lock().len(), 1);
    assert_eq!(client.list().await.unwrap()[0].name, "Acme");
}

#[tokio::test]
async fn test_bodyless_requests_carry_json_content_type() {
    // Arrange
    let stub = seeded();
    let client = spawn_stub(marcas_router(stub.clone())).await;

    // Act
    client.list().await.unwrap();
    client.get(1).await.unwrap();
    client.delete(7).await.unwrap();

    // Assert
    assert_eq!(
        *stub.content_types.lock(),
        vec!["application/json"; 3]
    );
}

#[tokio::test]
async fn test_server_error_maps_to_request_failed() {
    let router = Router::new().route(
        "/api/marcas",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = spawn_stub(router).await;

    let err = client.list().await.unwrap_err();

    assert_eq!(err, AppError::RequestFailed { status: 500 });
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_malformed_json_maps_to_malformed_response() {
    let router = Router::new().route("/api/marcas", get(|| async { "not json" }));
    let client = spawn_stub(router).await;

    let err = client.list().await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unknown_status_is_malformed() {
    let router = Router::new().route(
        "/api/marcas",
        get(|| async {
            Json(json!([{
                "id": 1,
                "nombre": "Acme",
                "descripcion": "d",
                "categoria": "Tecnología",
                "estado": "Archivado",
                "propietario": "Jane"
            }]))
        }),
    );
    let client = spawn_stub(router).await;

    let err = client.list().await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse(_)));
}
