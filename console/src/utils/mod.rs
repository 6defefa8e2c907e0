//! # Utility Functions
//!
//! Shared utility functions used across the console application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form field validation rules
//! - **[`runtime`]**: Global Tokio runtime
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Date parsing and formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
