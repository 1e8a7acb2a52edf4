//! Milk intake (farmer delivery) models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Milk quality grade determining the per-liter price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    /// Quality score used for averaging (A=3, B=2, C=1)
    pub fn score(self) -> u8 {
        match self {
            Grade::A => 3,
            Grade::B => 2,
            Grade::C => 1,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
        }
    }
}

/// A recorded delivery of milk from a farmer to the cooperative.
/// Immutable once created; there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkIntake {
    pub id: Uuid,
    pub farmer_id: Uuid,
    /// Farmer name snapshotted at write time
    pub farmer_name: String,
    /// Liters delivered
    pub quantity: Decimal,
    pub quality: Grade,
    pub price_per_liter: Decimal,
    pub total_price: Decimal,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub recorded_at: DateTime<Utc>,
}
