//! HTTP handlers for in-app notification endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppJson, AppResult};
use crate::services::notification::{PushToastInput, Toast};
use crate::AppState;

/// Current notification queue, newest first
pub async fn list_notifications(State(state): State<AppState>) -> AppResult<Json<Vec<Toast>>> {
    Ok(Json(state.notifications.list().await))
}

/// Push a notification; it auto-dismisses after the configured delay
pub async fn push_notification(
    State(state): State<AppState>,
    AppJson(input): AppJson<PushToastInput>,
) -> AppResult<(StatusCode, Json<Toast>)> {
    let toast = state.notifications.push(input).await?;
    Ok((StatusCode::CREATED, Json(toast)))
}

/// Dismiss response
#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub success: bool,
}

/// Dismiss a notification; dismissing an unknown id succeeds
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> AppResult<Json<DismissResponse>> {
    state.notifications.dismiss(notification_id).await;
    Ok(Json(DismissResponse { success: true }))
}
