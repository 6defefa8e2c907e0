//! Validation utilities for marca form input

use shared::MarcaCategory;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Non-blank after trimming
pub fn validate_required(value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(message);
    }
    ValidationResult::ok()
}

/// Validate marca name
pub fn validate_name(name: &str) -> ValidationResult {
    validate_required(name, "El nombre es requerido")
}

/// Validate category selection
pub fn validate_category(category: Option<MarcaCategory>) -> ValidationResult {
    match category {
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::err("La categoría es requerida"),
    }
}

/// Validate description
pub fn validate_description(description: &str) -> ValidationResult {
    validate_required(description, "La descripción es requerida")
}

/// Validate owner
pub fn validate_owner(owner: &str) -> ValidationResult {
    validate_required(owner, "El propietario es requerido")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Acme").is_valid);
        assert!(!validate_name("").is_valid);
        assert!(!validate_name("   ").is_valid);
        assert_eq!(
            validate_name("").error.as_deref(),
            Some("El nombre es requerido")
        );
    }

    #[test]
    fn test_category_validation() {
        assert!(validate_category(Some(MarcaCategory::Health)).is_valid);
        assert!(!validate_category(None).is_valid);
    }

    #[test]
    fn test_description_and_owner_validation() {
        assert!(validate_description("desc").is_valid);
        assert!(!validate_description("\n\t").is_valid);
        assert!(validate_owner("Jane").is_valid);
        assert_eq!(
            validate_owner("").error.as_deref(),
            Some("El propietario es requerido")
        );
    }
}
