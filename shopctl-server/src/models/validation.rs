//! Validation error types

use std::fmt;

/// Validation error for inbound requests
///
/// The display text is what clients see, so every missing product field
/// reads the same. The field name is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required product field is absent, null, or an empty string
    MissingField { field: &'static str },

    /// Delete was issued without a product id
    MissingId,
}

impl ValidationError {
    /// Name of the offending field, for diagnostics
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
            Self::MissingId => "id",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { .. } => f.write_str("All fields are required"),
            Self::MissingId => f.write_str("Product ID is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
