//! HTTP handlers for farmer management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppJson, AppResult};
use crate::services::farmer::{FarmerService, RegisterFarmerInput, UpdateFarmerInput};
use crate::AppState;
use shared::{Farmer, FarmerStatus};

/// Query parameters for listing farmers
#[derive(Debug, Deserialize)]
pub struct ListFarmersQuery {
    pub status: Option<FarmerStatus>,
    pub limit: Option<usize>,
}

/// List farmers, optionally filtered by status
pub async fn list_farmers(
    State(state): State<AppState>,
    Query(query): Query<ListFarmersQuery>,
) -> AppResult<Json<Vec<Farmer>>> {
    let service = FarmerService::new(state.stores);
    let farmers = service.list(query.status, query.limit).await?;
    Ok(Json(farmers))
}

/// Register a new farmer
pub async fn register_farmer(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterFarmerInput>,
) -> AppResult<(StatusCode, Json<Farmer>)> {
    let service = FarmerService::new(state.stores);
    let farmer = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(farmer)))
}

/// Get a farmer by id
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
) -> AppResult<Json<Farmer>> {
    let service = FarmerService::new(state.stores);
    let farmer = service.get(farmer_id).await?;
    Ok(Json(farmer))
}

/// Partially update a farmer
pub async fn update_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
    AppJson(input): AppJson<UpdateFarmerInput>,
) -> AppResult<Json<Farmer>> {
    let service = FarmerService::new(state.stores);
    let farmer = service.update(farmer_id, input).await?;
    Ok(Json(farmer))
}

/// Response for approval and rejection decisions
#[derive(Debug, Serialize)]
pub struct FarmerDecisionResponse {
    pub success: bool,
    pub farmer: Farmer,
    pub message: String,
}

/// Approve a pending farmer
pub async fn approve_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
) -> AppResult<Json<FarmerDecisionResponse>> {
    let service = FarmerService::new(state.stores);
    let (farmer, message) = service.approve(farmer_id).await?;
    Ok(Json(FarmerDecisionResponse {
        success: true,
        farmer,
        message,
    }))
}

/// Reject a pending farmer
pub async fn reject_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
) -> AppResult<Json<FarmerDecisionResponse>> {
    let service = FarmerService::new(state.stores);
    let (farmer, message) = service.reject(farmer_id).await?;
    Ok(Json(FarmerDecisionResponse {
        success: true,
        farmer,
        message,
    }))
}

/// Re-enable an inactive farmer
pub async fn activate_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
) -> AppResult<Json<Farmer>> {
    let service = FarmerService::new(state.stores);
    let farmer = service.set_active(farmer_id).await?;
    Ok(Json(farmer))
}

/// Suspend an active farmer
pub async fn deactivate_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<Uuid>,
) -> AppResult<Json<Farmer>> {
    let service = FarmerService::new(state.stores);
    let farmer = service.set_inactive(farmer_id).await?;
    Ok(Json(farmer))
}
