//! Dashboard statistics service
//!
//! Every counter is computed from the live stores; nothing is hardcoded.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::AppResult;
use crate::store::Stores;
use shared::pricing;
use shared::{FarmerStatus, PaymentStatus};

/// Dashboard statistics service
#[derive(Clone)]
pub struct StatsService {
    stores: Stores,
}

/// Aggregate counters for the dashboards
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_farmers: usize,
    pub pending_farmers: usize,
    pub active_farmers: usize,
    pub total_employees: usize,
    pub today_intake: Decimal,
    pub today_transactions: usize,
    pub monthly_revenue: Decimal,
    pub total_revenue: Decimal,
    pub commission: Decimal,
    pub current_stock: Decimal,
    pub total_payments: usize,
    pub pending_payments: usize,
    pub completed_payments: usize,
}

impl StatsService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let today = Utc::now().date_naive();
        let rate = self.stores.settings().await.commission_rate;

        let farmers = self.stores.farmers().list().await;
        let total_farmers = farmers.len();
        let pending_farmers = farmers
            .iter()
            .filter(|f| f.status == FarmerStatus::Pending)
            .count();
        let active_farmers = farmers
            .iter()
            .filter(|f| f.status == FarmerStatus::Active)
            .count();

        let intakes = self.stores.intakes().list().await;
        let todays: Vec<_> = intakes.iter().filter(|i| i.date == today).collect();
        let today_intake = todays.iter().map(|i| i.quantity).sum();
        let today_transactions = todays.len();

        let monthly_revenue: Decimal = intakes
            .iter()
            .filter(|i| i.date.year() == today.year() && i.date.month() == today.month())
            .map(|i| i.total_price)
            .sum();
        let total_revenue: Decimal = intakes.iter().map(|i| i.total_price).sum();

        let intake_volume: Decimal = intakes.iter().map(|i| i.quantity).sum();
        let offtake_volume: Decimal = self
            .stores
            .offtakes()
            .list()
            .await
            .iter()
            .map(|o| o.volume)
            .sum();

        let payments = self.stores.payments().list().await;
        let pending_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Processing)
            .count();
        let completed_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
            .count();

        Ok(DashboardStats {
            total_farmers,
            pending_farmers,
            active_farmers,
            total_employees: self.stores.employees().len().await,
            today_intake,
            today_transactions,
            monthly_revenue,
            total_revenue,
            commission: pricing::commission(monthly_revenue, rate),
            current_stock: intake_volume - offtake_volume,
            total_payments: payments.len(),
            pending_payments,
            completed_payments,
        })
    }
}
