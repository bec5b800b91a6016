//! Lead capture endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rhai_domain::{LeadReceipt, LeadSubmission, RhaiError};

use super::{Ack, AppState};
use crate::errors::ApiError;
use crate::extract::LenientJson;

const STORE_FAILURE: &str = "No se pudo guardar el registro";

/// `POST /api/appointments`
///
/// Honeypot hits get the same 201 a stored lead gets, without an id.
pub async fn create(
    State(ctx): State<AppState>,
    LenientJson(submission): LenientJson<LeadSubmission>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    match ctx.leads.submit(&submission).await {
        Ok(LeadReceipt::Stored { id }) => Ok((StatusCode::CREATED, Json(Ack::with_id(id)))),
        Ok(LeadReceipt::Discarded) => Ok((StatusCode::CREATED, Json(Ack::ok()))),
        Err(err @ RhaiError::InvalidInput(_)) => Err(err.into()),
        Err(err) => Err(ApiError::internal(STORE_FAILURE, &err)),
    }
}
