//! Milk offtake (bulk sale) recording service

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Stores;
use shared::pricing;
use shared::validation::{validate_positive, validate_required};
use shared::{MilkOfftake, OfftakeMethod, OfftakeStatus, OfftakeType};

/// Offtake service for recording sales to buyers
#[derive(Clone)]
pub struct OfftakeService {
    stores: Stores,
}

/// Input for recording an offtake
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOfftakeInput {
    pub buyer: String,
    pub volume: Decimal,
    pub price_per_liter: Decimal,
    #[serde(rename = "type", default)]
    pub offtake_type: OfftakeType,
    #[serde(default)]
    pub payment_method: OfftakeMethod,
}

impl OfftakeService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// List offtakes, newest first
    pub async fn list(&self, limit: Option<usize>) -> AppResult<Vec<MilkOfftake>> {
        Ok(self.stores.offtakes().filter(|_| true, limit).await)
    }

    /// Record a sale. The commission split uses the cooperative's current
    /// configured rate.
    pub async fn record(&self, input: RecordOfftakeInput) -> AppResult<MilkOfftake> {
        validate_required(&input.buyer).map_err(|e| AppError::validation("buyer", e))?;
        validate_positive(input.volume)
            .map_err(|_| AppError::validation("volume", "Volume must be a positive number of liters"))?;
        validate_positive(input.price_per_liter)
            .map_err(|_| AppError::validation("pricePerLiter", "Price per liter must be positive"))?;

        let rate = self.stores.settings().await.commission_rate;
        let total_amount = input.volume * input.price_per_liter;

        let offtake = MilkOfftake {
            id: Uuid::new_v4(),
            buyer: input.buyer,
            volume: input.volume,
            price_per_liter: input.price_per_liter,
            total_amount,
            commission: pricing::commission(total_amount, rate),
            net_amount: pricing::net_revenue(total_amount, rate),
            status: OfftakeStatus::Completed,
            offtake_type: input.offtake_type,
            payment_method: input.payment_method,
            recorded_at: Utc::now(),
        };

        self.stores.offtakes().insert_front(offtake.clone()).await;
        tracing::info!(offtake_id = %offtake.id, buyer = %offtake.buyer, "Recorded offtake");

        Ok(offtake)
    }
}
