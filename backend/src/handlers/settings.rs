//! HTTP handlers for cooperative settings endpoints

use axum::{extract::State, Json};

use crate::error::{AppJson, AppResult};
use crate::services::settings::{SettingsService, UpdateSettingsInput};
use crate::AppState;
use shared::Settings;

/// Get the cooperative settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.stores);
    let settings = service.get().await?;
    Ok(Json(settings))
}

/// Merge a partial update into the settings singleton
pub async fn update_settings(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateSettingsInput>,
) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.stores);
    let settings = service.update(input).await?;
    Ok(Json(settings))
}
