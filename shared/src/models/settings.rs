//! Cooperative settings, held as a singleton read-modify-write record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::DEFAULT_COMMISSION_RATE;

/// System-wide cooperative configuration.
///
/// Held as a single record with merge-on-update semantics and no
/// versioning; see `UpdateSettingsInput` in the backend for the merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub cooperative_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Platform cut of gross sale revenue, in percent
    pub commission_rate: Decimal,
    /// Approve new farmer registrations without manual review
    pub auto_approval: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub payment_methods: PaymentMethodToggles,
    pub quality_thresholds: QualityThresholds,
    pub pricing: GradePricing,
    pub operational_hours: OperationalHours,
    /// Liters accepted per day across all collection points
    pub max_daily_intake: Decimal,
    pub currency: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodToggles {
    pub mpesa: bool,
    pub bank_transfer: bool,
    pub cash: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityThresholds {
    pub premium: Decimal,
    pub standard: Decimal,
    pub minimum: Decimal,
}

/// Advertised per-grade rates. Display configuration only: intake pricing
/// always goes through `pricing::price_for_grade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradePricing {
    pub premium_rate: Decimal,
    pub standard_rate: Decimal,
    pub basic_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalHours {
    pub start: String,
    pub end: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cooperative_name: "Kiambu Dairy Cooperative".to_string(),
            email: "admin@kiambudairy.co.ke".to_string(),
            phone: "+254700123456".to_string(),
            address: "P.O. Box 123, Kiambu, Kenya".to_string(),
            commission_rate: DEFAULT_COMMISSION_RATE,
            auto_approval: false,
            email_notifications: true,
            sms_notifications: true,
            payment_methods: PaymentMethodToggles {
                mpesa: true,
                bank_transfer: true,
                cash: false,
            },
            quality_thresholds: QualityThresholds {
                premium: Decimal::new(45, 1),
                standard: Decimal::new(35, 1),
                minimum: Decimal::new(25, 1),
            },
            pricing: GradePricing {
                premium_rate: Decimal::from(60),
                standard_rate: Decimal::from(50),
                basic_rate: Decimal::from(40),
            },
            operational_hours: OperationalHours {
                start: "06:00".to_string(),
                end: "18:00".to_string(),
            },
            max_daily_intake: Decimal::from(10_000),
            currency: "KSh".to_string(),
            timezone: "Africa/Nairobi".to_string(),
        }
    }
}
