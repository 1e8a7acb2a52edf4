//! Milk offtake (bulk sale to buyer) models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded sale of milk from the cooperative to a buyer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkOfftake {
    pub id: Uuid,
    pub buyer: String,
    /// Liters sold
    pub volume: Decimal,
    pub price_per_liter: Decimal,
    pub total_amount: Decimal,
    /// The cooperative's cut of the gross amount
    pub commission: Decimal,
    pub net_amount: Decimal,
    pub status: OfftakeStatus,
    #[serde(rename = "type")]
    pub offtake_type: OfftakeType,
    pub payment_method: OfftakeMethod,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfftakeStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfftakeType {
    #[default]
    Manual,
    Automatic,
}

/// Settlement channel offered to buyers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfftakeMethod {
    Mpesa,
    #[default]
    Bank,
}
