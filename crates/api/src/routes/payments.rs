//! Payment confirmation endpoint

use axum::extract::State;
use axum::Json;
use rhai_domain::PaymentConfirmation;
use tracing::info;

use super::alerts::delivery_ack;
use super::{Ack, AppState};
use crate::errors::ApiError;
use crate::extract::LenientJson;

const NOTIFY_FAILURE: &str = "No se pudo notificar el pago";

/// `POST /api/payments`
pub async fn confirm(
    State(ctx): State<AppState>,
    LenientJson(confirmation): LenientJson<PaymentConfirmation>,
) -> Result<Json<Ack>, ApiError> {
    let payment = confirmation.validate()?;
    info!(
        destination = %payment.destination,
        option = payment.option.map(|option| option.id),
        amount = %payment.amount,
        "Payment confirmation received"
    );

    let delivery = ctx
        .owner_alerts
        .notify_payment(&payment)
        .await
        .map_err(|err| ApiError::internal(NOTIFY_FAILURE, &err))?;
    Ok(Json(delivery_ack(delivery)))
}
