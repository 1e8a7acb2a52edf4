//! Cooperative settings service: read-modify-write on the singleton

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::store::Stores;
use shared::{GradePricing, OperationalHours, PaymentMethodToggles, QualityThresholds, Settings};

/// Settings service
#[derive(Clone)]
pub struct SettingsService {
    stores: Stores,
}

/// Partial update for the settings record. Only supplied fields are
/// merged; nested groups are replaced wholesale when present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsInput {
    pub cooperative_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub commission_rate: Option<Decimal>,
    pub auto_approval: Option<bool>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub payment_methods: Option<PaymentMethodToggles>,
    pub quality_thresholds: Option<QualityThresholds>,
    pub pricing: Option<GradePricing>,
    pub operational_hours: Option<OperationalHours>,
    pub max_daily_intake: Option<Decimal>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
}

impl SettingsService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn get(&self) -> AppResult<Settings> {
        Ok(self.stores.settings().await)
    }

    pub async fn update(&self, input: UpdateSettingsInput) -> AppResult<Settings> {
        let settings = self
            .stores
            .update_settings(|s| {
                if let Some(name) = input.cooperative_name {
                    s.cooperative_name = name;
                }
                if let Some(email) = input.email {
                    s.email = email;
                }
                if let Some(phone) = input.phone {
                    s.phone = phone;
                }
                if let Some(address) = input.address {
                    s.address = address;
                }
                if let Some(rate) = input.commission_rate {
                    s.commission_rate = rate;
                }
                if let Some(auto) = input.auto_approval {
                    s.auto_approval = auto;
                }
                if let Some(email_n) = input.email_notifications {
                    s.email_notifications = email_n;
                }
                if let Some(sms) = input.sms_notifications {
                    s.sms_notifications = sms;
                }
                if let Some(methods) = input.payment_methods {
                    s.payment_methods = methods;
                }
                if let Some(thresholds) = input.quality_thresholds {
                    s.quality_thresholds = thresholds;
                }
                if let Some(pricing) = input.pricing {
                    s.pricing = pricing;
                }
                if let Some(hours) = input.operational_hours {
                    s.operational_hours = hours;
                }
                if let Some(max) = input.max_daily_intake {
                    s.max_daily_intake = max;
                }
                if let Some(currency) = input.currency {
                    s.currency = currency;
                }
                if let Some(tz) = input.timezone {
                    s.timezone = tz;
                }
            })
            .await;

        Ok(settings)
    }
}
