//! HTTP error envelope
//!
//! Every failed request answers `{ "ok": false, "error": "..." }`. Only
//! validation messages reach the caller verbatim; everything else is logged
//! and replaced with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rhai_domain::RhaiError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

const GENERIC_FAILURE: &str = "Error interno del servidor";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Server-side failure. The message is what the caller sees.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log `err` and answer 500 with `public` as the message.
    pub fn internal(public: &str, err: &RhaiError) -> Self {
        error!(error = %err, error_type = err.label(), "{public}");
        Self::Internal(public.to_string())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RhaiError> for ApiError {
    fn from(err: RhaiError) -> Self {
        match err {
            RhaiError::InvalidInput(message) => Self::BadRequest(message),
            RhaiError::NotFound(message) => Self::NotFound(message),
            other => Self::internal(GENERIC_FAILURE, &other),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { ok: false, error: self.to_string() };
        (status, Json(body)).into_response()
    }
}
