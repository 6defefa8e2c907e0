//! # Marca Data Transfer Objects
//!
//! Trademark records and the payloads used to create and update them.
//!
//! The backend speaks Spanish camelCase JSON (`nombre`, `fechaRegistro`, ...),
//! so every field carries an explicit `serde` rename.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a trademark record.
///
/// Any status may move to any other; the backend does not enforce transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarcaStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
    #[serde(rename = "Pendiente")]
    Pending,
}

impl MarcaStatus {
    /// Statuses in the order they are offered by the status chooser
    pub fn all() -> &'static [MarcaStatus] {
        &[MarcaStatus::Pending, MarcaStatus::Active, MarcaStatus::Inactive]
    }

    /// Wire / display label
    pub fn label(&self) -> &'static str {
        match self {
            MarcaStatus::Active => "Activo",
            MarcaStatus::Inactive => "Inactivo",
            MarcaStatus::Pending => "Pendiente",
        }
    }
}

impl fmt::Display for MarcaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Business category a trademark is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarcaCategory {
    #[serde(rename = "Tecnología")]
    Technology,
    #[serde(rename = "Alimentación")]
    Food,
    #[serde(rename = "Textil")]
    Textile,
    #[serde(rename = "Servicios")]
    Services,
    #[serde(rename = "Salud")]
    Health,
    #[serde(rename = "Educación")]
    Education,
    #[serde(rename = "Entretenimiento")]
    Entertainment,
    #[serde(rename = "Otros")]
    Other,
}

impl MarcaCategory {
    /// Categories in picker order
    pub fn all() -> &'static [MarcaCategory] {
        &[
            MarcaCategory::Technology,
            MarcaCategory::Food,
            MarcaCategory::Textile,
            MarcaCategory::Services,
            MarcaCategory::Health,
            MarcaCategory::Education,
            MarcaCategory::Entertainment,
            MarcaCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarcaCategory::Technology => "Tecnología",
            MarcaCategory::Food => "Alimentación",
            MarcaCategory::Textile => "Textil",
            MarcaCategory::Services => "Servicios",
            MarcaCategory::Health => "Salud",
            MarcaCategory::Education => "Educación",
            MarcaCategory::Entertainment => "Entretenimiento",
            MarcaCategory::Other => "Otros",
        }
    }
}

impl fmt::Display for MarcaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered trademark as returned by the backend.
///
/// `id`, `registration_date`, `status` and `registration_number` are assigned
/// server-side on creation. The identifier never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marca {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: MarcaCategory,
    #[serde(
        rename = "fechaRegistro",
        default,
        with = "crate::utils::registration_date"
    )]
    pub registration_date: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub status: MarcaStatus,
    #[serde(rename = "propietario")]
    pub owner: String,
    #[serde(
        rename = "numeroRegistro",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_number: Option<String>,
}

impl Marca {
    /// Full update payload for this record with `status` swapped in.
    ///
    /// Updates always resend the complete editable representation.
    pub fn update_request(&self, status: MarcaStatus) -> UpdateMarcaRequest {
        UpdateMarcaRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            owner: self.owner.clone(),
            status,
        }
    }
}

/// Payload for `POST /marcas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMarcaRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: MarcaCategory,
    #[serde(rename = "propietario")]
    pub owner: String,
}

/// Payload for `PUT /marcas/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMarcaRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: MarcaCategory,
    #[serde(rename = "propietario")]
    pub owner: String,
    #[serde(rename = "estado")]
    pub status: MarcaStatus,
}
