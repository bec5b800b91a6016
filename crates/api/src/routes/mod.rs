//! HTTP routes
//!
//! All endpoints live under `/api` and answer JSON. Unsupported methods on
//! a known path get the error envelope with 405.

pub mod alerts;
pub mod appointments;
pub mod destinations;
pub mod payments;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;

use crate::context::AppContext;
use crate::errors::ApiError;

/// Shared state handed to every handler.
pub type AppState = Arc<AppContext>;

/// Build the API router.
pub fn router(ctx: AppState) -> Router {
    Router::new()
        .route("/api/appointments", post(appointments::create).fallback(method_not_allowed))
        .route("/api/owner-alert", post(alerts::owner_alert).fallback(method_not_allowed))
        .route("/api/notify-typing", post(alerts::notify_typing).fallback(method_not_allowed))
        .route("/api/payments", post(payments::confirm).fallback(method_not_allowed))
        .route("/api/destinations", get(destinations::search).fallback(method_not_allowed))
        .route("/api/destinations/{id}", get(destinations::show).fallback(method_not_allowed))
        .route(
            "/api/destinations/{id}/payment-options",
            get(destinations::payment_options).fallback(method_not_allowed),
        )
        .route(
            "/api/destinations/{id}/countries",
            get(destinations::countries).fallback(method_not_allowed),
        )
        .with_state(ctx)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Success envelope: `{ "ok": true }` plus optional `id` / `warn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true, ..Self::default() }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::ok() }
    }

    pub fn with_warning(warn: impl Into<String>) -> Self {
        Self { warn: Some(warn.into()), ..Self::ok() }
    }
}
