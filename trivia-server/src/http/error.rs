//! API error types with IntoResponse
//!
//! Every failure renders as
//! `{"success": false, "error": <status>, "message": <reason phrase>}`,
//! with an optional `detail` naming what was wrong.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::TriviaError;

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or query (400)
    BadRequest { detail: String },

    /// Resource not found, or a page past the end (404)
    NotFound { resource: &'static str, id: String },

    /// Body parsed but cannot be processed (422)
    Unprocessable { detail: String },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad Request",
            Self::NotFound { .. } => "Resource Not Found",
            Self::Unprocessable { .. } => "Unprocessable Entity",
            Self::Store(_) => "Internal Server Error",
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::BadRequest { detail } | Self::Unprocessable { detail } => Some(detail.clone()),
            Self::NotFound { resource, id } => Some(format!("{} '{}' not found", resource, id)),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                None
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });
        if let Some(detail) = self.detail() {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(e: TriviaError) -> Self {
        match e {
            TriviaError::InvalidInput { .. } => Self::Unprocessable {
                detail: e.to_string(),
            },
            TriviaError::NotFound { resource, id } => Self::NotFound { resource, id },
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownCategory(_) => Self::Unprocessable {
                detail: e.to_string(),
            },
            _ => Self::Store(e),
        }
    }
}
