//! Farmer payment service
//!
//! A new payment starts in `processing` and settles to `completed` after a
//! configurable delay. The settlement timer is an aborted-on-cancel tokio
//! task whose handle is tracked per payment id, so cancelling the payment
//! (or the payment disappearing) never leaves a timer flipping stale state.

use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Stores;
use shared::validation::validate_positive;
use shared::{Payment, PaymentMethod, PaymentStatus, PaymentType};

/// Payment service for farmer disbursements
#[derive(Clone)]
pub struct PaymentService {
    stores: Stores,
    settlement_delay: Duration,
}

/// Input for creating a payment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentInput {
    pub farmer_id: Uuid,
    pub amount: Decimal,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
    pub description: Option<String>,
}

impl PaymentService {
    pub fn new(stores: Stores, settlement_delay: Duration) -> Self {
        Self {
            stores,
            settlement_delay,
        }
    }

    /// List payments, newest first
    pub async fn list(&self, limit: Option<usize>) -> AppResult<Vec<Payment>> {
        Ok(self.stores.payments().filter(|_| true, limit).await)
    }

    /// Create a payment in `processing` state and schedule its settlement
    pub async fn create(&self, input: CreatePaymentInput) -> AppResult<Payment> {
        validate_positive(input.amount)
            .map_err(|_| AppError::validation("amount", "Amount must be positive"))?;

        let farmer = self
            .stores
            .farmers()
            .find(input.farmer_id)
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            farmer_id: farmer.id,
            farmer_name: farmer.full_name(),
            amount: input.amount,
            status: PaymentStatus::Processing,
            method: input.method,
            payment_type: input.payment_type,
            description: input.description,
            date: now.date_naive(),
            recorded_at: now,
        };

        self.stores.payments().insert_front(payment.clone()).await;
        self.schedule_settlement(payment.id);
        tracing::info!(payment_id = %payment.id, farmer_id = %farmer.id, "Created payment");

        Ok(payment)
    }

    /// Abort a pending settlement and mark the payment failed
    pub async fn cancel(&self, payment_id: Uuid) -> AppResult<Payment> {
        let payment = self
            .stores
            .payments()
            .find(payment_id)
            .await
            .ok_or_else(|| AppError::NotFound("Payment".to_string()))?;

        if payment.status != PaymentStatus::Processing {
            return Err(AppError::InvalidStateTransition(format!(
                "Only processing payments can be cancelled, payment is {:?}",
                payment.status
            )));
        }

        if let Some(handle) = self.stores.take_settlement(payment_id) {
            handle.abort();
        }

        self.stores
            .payments()
            .update(payment_id, |p| p.status = PaymentStatus::Failed)
            .await
            .ok_or_else(|| AppError::NotFound("Payment".to_string()))
    }

    /// Spawn the settlement timer: after the delay, a still-processing
    /// payment flips to completed. Settling a payment that disappeared is
    /// a no-op.
    fn schedule_settlement(&self, payment_id: Uuid) {
        let stores = self.stores.clone();
        let delay = self.settlement_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let updated = stores
                .payments()
                .update(payment_id, |p| {
                    if p.status == PaymentStatus::Processing {
                        p.status = PaymentStatus::Completed;
                    }
                })
                .await;
            if updated.is_none() {
                tracing::debug!(payment_id = %payment_id, "Settlement skipped: payment gone");
            }
            stores.take_settlement(payment_id);
        });

        self.stores.register_settlement(payment_id, task.abort_handle());
    }
}
