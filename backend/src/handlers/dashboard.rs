//! HTTP handlers for dashboard statistics

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::stats::{DashboardStats, StatsService};
use crate::AppState;

/// Aggregate counters for the admin dashboard
pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let service = StatsService::new(state.stores);
    let stats = service.dashboard().await?;
    Ok(Json(stats))
}
