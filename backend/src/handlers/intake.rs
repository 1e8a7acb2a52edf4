//! HTTP handlers for milk intake endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppJson, AppResult};
use crate::services::intake::{DailyIntakeStats, IntakeService, RecordIntakeInput};
use crate::AppState;
use shared::MilkIntake;

/// Query parameters for listing intakes
#[derive(Debug, Deserialize)]
pub struct ListIntakesQuery {
    pub limit: Option<usize>,
    pub date: Option<NaiveDate>,
}

/// List milk intakes, newest first
pub async fn list_intakes(
    State(state): State<AppState>,
    Query(query): Query<ListIntakesQuery>,
) -> AppResult<Json<Vec<MilkIntake>>> {
    let service = IntakeService::new(state.stores);
    let intakes = service.list(query.limit, query.date).await?;
    Ok(Json(intakes))
}

/// Record intake response
#[derive(Debug, Serialize)]
pub struct RecordIntakeResponse {
    pub success: bool,
    pub intake: MilkIntake,
    pub message: String,
}

/// Record a milk delivery
pub async fn record_intake(
    State(state): State<AppState>,
    AppJson(input): AppJson<RecordIntakeInput>,
) -> AppResult<(StatusCode, Json<RecordIntakeResponse>)> {
    let service = IntakeService::new(state.stores);
    let (intake, message) = service.record(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordIntakeResponse {
            success: true,
            intake,
            message,
        }),
    ))
}

/// Today's intake aggregates
pub async fn intake_stats(State(state): State<AppState>) -> AppResult<Json<DailyIntakeStats>> {
    let service = IntakeService::new(state.stores);
    let stats = service.daily_stats().await?;
    Ok(Json(stats))
}
