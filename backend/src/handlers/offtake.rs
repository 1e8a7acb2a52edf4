//! HTTP handlers for milk offtake endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::{AppJson, AppResult};
use crate::services::offtake::{OfftakeService, RecordOfftakeInput};
use crate::AppState;
use shared::MilkOfftake;

/// Query parameters for listing offtakes
#[derive(Debug, Deserialize)]
pub struct ListOfftakesQuery {
    pub limit: Option<usize>,
}

/// List offtakes, newest first
pub async fn list_offtakes(
    State(state): State<AppState>,
    Query(query): Query<ListOfftakesQuery>,
) -> AppResult<Json<Vec<MilkOfftake>>> {
    let service = OfftakeService::new(state.stores);
    let offtakes = service.list(query.limit).await?;
    Ok(Json(offtakes))
}

/// Record a bulk sale to a buyer
pub async fn record_offtake(
    State(state): State<AppState>,
    AppJson(input): AppJson<RecordOfftakeInput>,
) -> AppResult<(StatusCode, Json<MilkOfftake>)> {
    let service = OfftakeService::new(state.stores);
    let offtake = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(offtake)))
}
