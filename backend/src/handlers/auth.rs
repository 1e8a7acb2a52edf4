//! HTTP handlers for authentication endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppJson, AppResult};
use crate::middleware::CurrentUser;
use crate::services::auth::{AuthService, LoginInput, LoginResponse};
use crate::AppState;
use shared::UserRole;

/// Sign in with email and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginInput>,
) -> AppResult<Json<LoginResponse>> {
    let service = AuthService::new(state.stores, &state.config);
    let response = service.login(input).await?;
    Ok(Json(response))
}

/// Current session response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Return the signed-in user derived from the session token
pub async fn me(current_user: CurrentUser) -> AppResult<Json<MeResponse>> {
    let user = current_user.0;
    Ok(Json(MeResponse {
        email: user.email,
        name: user.name,
        role: user.role,
    }))
}
