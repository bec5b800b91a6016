//! Owner notification endpoints

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use rhai_domain::{Delivery, RhaiError, SearchAlert, TypingNotice};
use serde::Deserialize;

use super::{Ack, AppState};
use crate::errors::ApiError;
use crate::extract::LenientJson;

const NOTIFY_FAILURE: &str = "No se pudo notificar";
const FORWARDED_FOR: &str = "x-forwarded-for";

/// `POST /api/owner-alert`
pub async fn owner_alert(
    State(ctx): State<AppState>,
    LenientJson(alert): LenientJson<SearchAlert>,
) -> Result<Json<Ack>, ApiError> {
    let delivery = ctx
        .owner_alerts
        .notify_search(&alert)
        .await
        .map_err(|err| ApiError::internal(NOTIFY_FAILURE, &err))?;
    Ok(Json(delivery_ack(delivery)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TypingRequest {
    pub q: Option<String>,
}

/// `POST /api/notify-typing`
pub async fn notify_typing(
    State(ctx): State<AppState>,
    peer: Option<Extension<ConnectInfo<SocketAddr>>>,
    headers: HeaderMap,
    LenientJson(request): LenientJson<TypingRequest>,
) -> Result<Json<Ack>, ApiError> {
    let peer = peer.map(|Extension(ConnectInfo(addr))| addr);
    let notice = TypingNotice {
        query: request.q,
        ip: client_ip(&headers, peer),
        user_agent: header_str(&headers, USER_AGENT.as_str()).unwrap_or_default().to_string(),
    };

    match ctx.owner_alerts.notify_typing(&notice).await {
        Ok(()) => Ok(Json(Ack::ok())),
        Err(RhaiError::Config(message)) => Err(ApiError::Internal(message)),
        Err(err) => Err(ApiError::internal(NOTIFY_FAILURE, &err)),
    }
}

pub(crate) fn delivery_ack(delivery: Delivery) -> Ack {
    match delivery {
        Delivery::Sent => Ack::ok(),
        Delivery::Skipped { reason } => Ack::with_warning(reason),
    }
}

/// First `x-forwarded-for` hop, else the socket peer.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    header_str(headers, FORWARDED_FOR)
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_default()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
