//! Farmer registration and lifecycle models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered (or registering) dairy farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// National ID number
    pub id_number: String,
    pub farm_name: String,
    pub location: String,
    pub county: String,
    /// Farm size in acres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<rust_decimal::Decimal>,
    pub cattle_count: u32,
    /// Estimated daily production in liters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_milk_production: Option<rust_decimal::Decimal>,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub status: FarmerStatus,
    pub registration_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<NaiveDate>,
    /// Monotonic counter, bumped only by intake recording
    pub total_deliveries: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_delivery: Option<NaiveDate>,
}

impl Farmer {
    /// Display name as snapshotted onto intake and payment records
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Farmer lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FarmerStatus {
    Pending,
    Active,
    Rejected,
    Inactive,
}

impl FarmerStatus {
    /// Whether a transition from `self` to `to` is allowed.
    ///
    /// Allowed edges: pending -> active (approve), pending -> rejected
    /// (reject), active <-> inactive (toggle). Re-entering the current
    /// state is treated as allowed so repeated approvals stay idempotent.
    pub fn can_transition_to(self, to: FarmerStatus) -> bool {
        use FarmerStatus::*;
        match (self, to) {
            (a, b) if a == b => true,
            (Pending, Active) | (Pending, Rejected) => true,
            (Active, Inactive) | (Inactive, Active) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for FarmerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FarmerStatus::Pending => "pending",
            FarmerStatus::Active => "active",
            FarmerStatus::Rejected => "rejected",
            FarmerStatus::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_approved_or_rejected() {
        assert!(FarmerStatus::Pending.can_transition_to(FarmerStatus::Active));
        assert!(FarmerStatus::Pending.can_transition_to(FarmerStatus::Rejected));
        assert!(!FarmerStatus::Pending.can_transition_to(FarmerStatus::Inactive));
    }

    #[test]
    fn active_and_inactive_toggle() {
        assert!(FarmerStatus::Active.can_transition_to(FarmerStatus::Inactive));
        assert!(FarmerStatus::Inactive.can_transition_to(FarmerStatus::Active));
        assert!(!FarmerStatus::Active.can_transition_to(FarmerStatus::Rejected));
        assert!(!FarmerStatus::Active.can_transition_to(FarmerStatus::Pending));
    }

    #[test]
    fn rejected_is_terminal() {
        assert!(!FarmerStatus::Rejected.can_transition_to(FarmerStatus::Active));
        assert!(!FarmerStatus::Rejected.can_transition_to(FarmerStatus::Pending));
        assert!(FarmerStatus::Rejected.can_transition_to(FarmerStatus::Rejected));
    }

    #[test]
    fn same_state_is_idempotent() {
        assert!(FarmerStatus::Active.can_transition_to(FarmerStatus::Active));
    }
}
