//! API error types with IntoResponse
//!
//! Every failure becomes `{ "error": <message> }` with a matching status.
//! Database failures carry the driver's message through to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body could not be read as JSON (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged). `action` prefixes the driver message.
    Database {
        action: Option<&'static str>,
        source: DbError,
    },
}

impl ApiError {
    /// Database error reported as `"<action>: <driver message>"`.
    pub fn database(action: &'static str, source: DbError) -> Self {
        Self::Database {
            action: Some(action),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Database {
                action: Some(action),
                source,
            } => format!("{}: {}", action, source),
            Self::Database {
                action: None,
                source,
            } => source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self {
            Self::Validation(e) => {
                tracing::warn!(field = e.field(), "Validation failed: {}", message)
            }
            Self::BadRequest { .. } => tracing::warn!("Rejected request body: {}", message),
            Self::NotFound { resource, id } => {
                tracing::debug!(%id, "{} not found", resource)
            }
            Self::Database { .. } => tracing::error!("{}", message),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database {
            action: None,
            source: e,
        }
    }
}
