//! Milk intake recording service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::FarmerService;
use crate::store::Stores;
use shared::pricing;
use shared::validation::validate_positive;
use shared::{Grade, MilkIntake};

/// Intake service for recording farmer deliveries
#[derive(Clone)]
pub struct IntakeService {
    stores: Stores,
}

/// Input for recording a milk intake
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordIntakeInput {
    pub farmer_id: Uuid,
    pub quantity: Decimal,
    pub quality: Grade,
}

/// Aggregates over today's deliveries
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIntakeStats {
    pub total_quantity: Decimal,
    pub average_quality: f64,
    pub unique_farmers: usize,
}

impl IntakeService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// List intakes, newest first, optionally filtered to one date and
    /// truncated to `limit`
    pub async fn list(
        &self,
        limit: Option<usize>,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<MilkIntake>> {
        Ok(self
            .stores
            .intakes()
            .filter(|i| date.map_or(true, |d| i.date == d), limit)
            .await)
    }

    /// Record a delivery: snapshots the farmer's name, derives the price
    /// from the grade table, prepends the record, and bumps the farmer's
    /// delivery counter.
    pub async fn record(&self, input: RecordIntakeInput) -> AppResult<(MilkIntake, String)> {
        validate_positive(input.quantity)
            .map_err(|_| AppError::validation("quantity", "Quantity must be a positive number of liters"))?;

        let farmer = self
            .stores
            .farmers()
            .find(input.farmer_id)
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        let now = Utc::now();
        let price_per_liter = pricing::price_for_grade(input.quality);
        let intake = MilkIntake {
            id: Uuid::new_v4(),
            farmer_id: farmer.id,
            farmer_name: farmer.full_name(),
            quantity: input.quantity,
            quality: input.quality,
            price_per_liter,
            total_price: pricing::total_price(input.quantity, input.quality),
            date: now.date_naive(),
            time: now.time(),
            recorded_at: now,
        };

        self.stores.intakes().insert_front(intake.clone()).await;

        FarmerService::new(self.stores.clone())
            .record_delivery(farmer.id, intake.date)
            .await?;

        let message = format!(
            "Successfully recorded {}L of Grade {} milk",
            intake.quantity, intake.quality
        );
        tracing::info!(farmer_id = %farmer.id, intake_id = %intake.id, "{}", message);

        Ok((intake, message))
    }

    /// Today's delivery aggregates
    pub async fn daily_stats(&self) -> AppResult<DailyIntakeStats> {
        let today = Utc::now().date_naive();
        let todays = self
            .stores
            .intakes()
            .filter(|i| i.date == today, None)
            .await;

        let total_quantity = todays.iter().map(|i| i.quantity).sum();
        let grades: Vec<Grade> = todays.iter().map(|i| i.quality).collect();
        let unique_farmers = {
            let mut ids: Vec<Uuid> = todays.iter().map(|i| i.farmer_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids.len()
        };

        Ok(DailyIntakeStats {
            total_quantity,
            average_quality: pricing::average_quality(&grades),
            unique_farmers,
        })
    }
}
