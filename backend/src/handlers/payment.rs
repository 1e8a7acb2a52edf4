//! HTTP handlers for farmer payment endpoints

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppJson, AppResult};
use crate::services::payment::{CreatePaymentInput, PaymentService};
use crate::AppState;
use shared::Payment;

/// Query parameters for listing payments
#[derive(Debug, Deserialize)]
pub struct ListPaymentsQuery {
    pub limit: Option<usize>,
}

fn payment_service(state: AppState) -> PaymentService {
    let delay = Duration::from_secs(state.config.data.settlement_delay_secs);
    PaymentService::new(state.stores, delay)
}

/// List payments, newest first
pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListPaymentsQuery>,
) -> AppResult<Json<Vec<Payment>>> {
    let service = payment_service(state);
    let payments = service.list(query.limit).await?;
    Ok(Json(payments))
}

/// Create a payment; it settles automatically after the configured delay
pub async fn create_payment(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePaymentInput>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let service = payment_service(state);
    let payment = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Cancel a processing payment before it settles
pub async fn cancel_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> AppResult<Json<Payment>> {
    let service = payment_service(state);
    let payment = service.cancel(payment_id).await?;
    Ok(Json(payment))
}
