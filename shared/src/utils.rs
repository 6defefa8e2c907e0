//! # Shared Utility Functions
//!
//! Date handling shared by the DTOs and the console.
//!
//! ## Registration Dates
//!
//! Backends in the wild return `fechaRegistro` in several shapes. The
//! [`registration_date`] serde module accepts all of them and keeps only the
//! calendar date:
//!
//! - RFC 3339 timestamps (`2024-03-15T10:30:00.000Z`)
//! - naive timestamps (`2024-03-15T10:30:00`)
//! - plain dates (`2024-03-15`)
//!
//! ## Display
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shared::utils::{format_short_date, format_long_date_es};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! assert_eq!(format_short_date(date), "15/03/2024");
//! assert_eq!(format_long_date_es(date), "15 de marzo de 2024");
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse a registration date in any of the accepted wire shapes.
pub fn parse_registration_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy`, used on list cards
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Spanish long form, e.g. `15 de marzo de 2024`
pub fn format_long_date_es(date: NaiveDate) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Serde adapter for `Option<NaiveDate>` registration dates.
///
/// Serializes as `YYYY-MM-DD`; deserializes any shape accepted by
/// [`parse_registration_date`]. `null`, blank and unparseable strings all map
/// to `None`, so one odd date never rejects the record around it.
pub mod registration_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_registration_date))
    }
}
