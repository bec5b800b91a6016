//! Destination catalog endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use rhai_core::result_count_label;
use rhai_domain::{
    countries as countries_for, payment_options as options_for, Country, Destination, DestinationId,
    PaymentOption,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub q: String,
}

/// Catalog entry as rendered on a result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationView {
    pub id: DestinationId,
    pub label: &'static str,
    pub emoji: &'static str,
    pub blurb: &'static str,
    pub path: String,
}

impl From<&'static Destination> for DestinationView {
    fn from(destination: &'static Destination) -> Self {
        Self {
            id: destination.id,
            label: destination.label,
            emoji: destination.emoji,
            blurb: destination.blurb,
            path: destination.path(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub label: String,
    pub results: Vec<DestinationView>,
}

/// `GET /api/destinations?q=`
pub async fn search(
    State(ctx): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let results: Vec<DestinationView> =
        ctx.matcher.matches(&params.q).into_iter().map(DestinationView::from).collect();

    Json(SearchResponse {
        query: params.q,
        count: results.len(),
        label: result_count_label(results.len()),
        results,
    })
}

/// `GET /api/destinations/{id}`
pub async fn show(Path(id): Path<String>) -> Result<Json<DestinationView>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(DestinationView::from(id.destination())))
}

/// `GET /api/destinations/{id}/payment-options`
pub async fn payment_options(
    Path(id): Path<String>,
) -> Result<Json<&'static [PaymentOption]>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(options_for(id)))
}

/// `GET /api/destinations/{id}/countries`
///
/// Empty for destinations that are a single country or region.
pub async fn countries(Path(id): Path<String>) -> Result<Json<&'static [Country]>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(countries_for(id)))
}

fn parse_id(raw: &str) -> Result<DestinationId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound("Destino no encontrado".to_string()))
}
