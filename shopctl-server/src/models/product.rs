//! Product entity and its create/delete inputs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Product row as stored in the `products` table
///
/// Field names match the snake_case columns; JSON uses camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating_rate: f64,
    pub rating_count: i64,
}

/// Create payload exactly as received; any field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating_rate: Option<f64>,
    pub rating_count: Option<i64>,
}

/// Validated create payload. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating_rate: f64,
    pub rating_count: i64,
}

impl ProductDraft {
    /// Check that all seven fields are present.
    ///
    /// Text fields must also be non-empty. Numbers are taken as given,
    /// zero included; there are no range checks.
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            title: required_text(self.title, "title")?,
            price: required(self.price, "price")?,
            description: required_text(self.description, "description")?,
            category: required_text(self.category, "category")?,
            image: required_text(self.image, "image")?,
            rating_rate: required(self.rating_rate, "ratingRate")?,
            rating_count: required(self.rating_count, "ratingCount")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Product id taken from a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId(String);

impl ProductId {
    /// Reject a missing or blank id.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric key, if the id can name a row at all.
    pub fn key(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
