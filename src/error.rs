//! Application error type rendered as HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Template for the standalone error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

/// Error value crossing component boundaries.
///
/// Every failure carries a user-facing message and a structured `details`
/// value for logging. Lookup failures on the redirect path map to
/// `NotFound` (404) and `Expired` (410); storage and serialization
/// failures map to `Internal` (500).
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Expired { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::NotFound { message, details } => (StatusCode::NOT_FOUND, message, details),
            AppError::Expired { message, details } => (StatusCode::GONE, message, details),
            AppError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%details, "{message}");
        } else {
            tracing::debug!(%details, "{message}");
        }

        (status, ErrorTemplate { message }).into_response()
    }
}
