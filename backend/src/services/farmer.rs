//! Farmer registration, approval, and lifecycle service
//!
//! All status changes flow through [`FarmerService::transition`], the single
//! transition authority for the farmer state machine.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Stores;
use shared::validation::{
    validate_county, validate_email, validate_kenyan_national_id, validate_kenyan_phone,
    validate_required,
};
use shared::{Farmer, FarmerStatus};

/// Farmer management service
#[derive(Clone)]
pub struct FarmerService {
    stores: Stores,
}

/// Input for registering a new farmer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFarmerInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub id_number: String,
    pub farm_name: String,
    pub location: String,
    pub county: String,
    pub farm_size: Option<Decimal>,
    pub cattle_count: u32,
    pub daily_milk_production: Option<Decimal>,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

/// Input for partially updating a farmer (PATCH merge)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFarmerInput {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub farm_name: Option<String>,
    pub location: Option<String>,
    pub county: Option<String>,
    pub farm_size: Option<Decimal>,
    pub cattle_count: Option<u32>,
    pub daily_milk_production: Option<Decimal>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
}

impl FarmerService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// List farmers, optionally filtered by status, preserving
    /// registration order
    pub async fn list(
        &self,
        status: Option<FarmerStatus>,
        limit: Option<usize>,
    ) -> AppResult<Vec<Farmer>> {
        Ok(self
            .stores
            .farmers()
            .filter(|f| status.map_or(true, |s| f.status == s), limit)
            .await)
    }

    /// Get a farmer by id
    pub async fn get(&self, farmer_id: Uuid) -> AppResult<Farmer> {
        self.stores
            .farmers()
            .find(farmer_id)
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))
    }

    /// Register a new farmer. Status starts pending unless the cooperative
    /// has auto-approval enabled.
    pub async fn register(&self, input: RegisterFarmerInput) -> AppResult<Farmer> {
        self.validate_registration(&input)?;

        let auto_approval = self.stores.settings().await.auto_approval;
        let today = Utc::now().date_naive();
        let (status, approval_date) = if auto_approval {
            (FarmerStatus::Active, Some(today))
        } else {
            (FarmerStatus::Pending, None)
        };

        let farmer = Farmer {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            email: input.email,
            id_number: input.id_number,
            farm_name: input.farm_name,
            location: input.location,
            county: input.county,
            farm_size: input.farm_size,
            cattle_count: input.cattle_count,
            daily_milk_production: input.daily_milk_production,
            bank_name: input.bank_name,
            account_number: input.account_number,
            account_name: input.account_name,
            status,
            registration_date: today,
            approval_date,
            total_deliveries: 0,
            last_delivery: None,
        };

        self.stores.farmers().insert_back(farmer.clone()).await;
        tracing::info!(farmer_id = %farmer.id, "Registered farmer {}", farmer.full_name());

        Ok(farmer)
    }

    /// Approve a pending farmer. Approving an already-active farmer
    /// succeeds without changing anything.
    pub async fn approve(&self, farmer_id: Uuid) -> AppResult<(Farmer, String)> {
        let farmer = self.transition(farmer_id, FarmerStatus::Active).await?;
        let message = format!("Farmer {} approved successfully", farmer.full_name());
        Ok((farmer, message))
    }

    /// Reject a pending farmer
    pub async fn reject(&self, farmer_id: Uuid) -> AppResult<(Farmer, String)> {
        let farmer = self.transition(farmer_id, FarmerStatus::Rejected).await?;
        let message = format!("Farmer {} rejected successfully", farmer.full_name());
        Ok((farmer, message))
    }

    /// Re-enable an inactive farmer
    pub async fn set_active(&self, farmer_id: Uuid) -> AppResult<Farmer> {
        self.transition(farmer_id, FarmerStatus::Active).await
    }

    /// Suspend an active farmer
    pub async fn set_inactive(&self, farmer_id: Uuid) -> AppResult<Farmer> {
        self.transition(farmer_id, FarmerStatus::Inactive).await
    }

    /// Merge supplied fields into an existing farmer
    pub async fn update(&self, farmer_id: Uuid, input: UpdateFarmerInput) -> AppResult<Farmer> {
        if let Some(phone) = &input.phone {
            validate_kenyan_phone(phone)
                .map_err(|e| AppError::validation("phone", e))?;
        }
        if let Some(email) = &input.email {
            validate_email(email).map_err(|e| AppError::validation("email", e))?;
        }
        if let Some(county) = &input.county {
            validate_county(county).map_err(|e| AppError::validation("county", e))?;
        }

        self.stores
            .farmers()
            .update(farmer_id, |f| {
                if let Some(phone) = input.phone {
                    f.phone = phone;
                }
                if let Some(email) = input.email {
                    f.email = Some(email);
                }
                if let Some(farm_name) = input.farm_name {
                    f.farm_name = farm_name;
                }
                if let Some(location) = input.location {
                    f.location = location;
                }
                if let Some(county) = input.county {
                    f.county = county;
                }
                if let Some(farm_size) = input.farm_size {
                    f.farm_size = Some(farm_size);
                }
                if let Some(cattle_count) = input.cattle_count {
                    f.cattle_count = cattle_count;
                }
                if let Some(production) = input.daily_milk_production {
                    f.daily_milk_production = Some(production);
                }
                if let Some(bank_name) = input.bank_name {
                    f.bank_name = bank_name;
                }
                if let Some(account_number) = input.account_number {
                    f.account_number = account_number;
                }
                if let Some(account_name) = input.account_name {
                    f.account_name = account_name;
                }
            })
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))
    }

    /// Bump the delivery counter after an intake is recorded.
    /// total_deliveries only ever grows, and only through this path.
    pub(crate) async fn record_delivery(
        &self,
        farmer_id: Uuid,
        date: chrono::NaiveDate,
    ) -> AppResult<()> {
        self.stores
            .farmers()
            .update(farmer_id, |f| {
                f.total_deliveries += 1;
                f.last_delivery = Some(date);
            })
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;
        Ok(())
    }

    /// Apply a status transition, enforcing the state machine
    async fn transition(&self, farmer_id: Uuid, to: FarmerStatus) -> AppResult<Farmer> {
        let mut rejected_from = None;
        let updated = self
            .stores
            .farmers()
            .update(farmer_id, |f| {
                if f.status.can_transition_to(to) {
                    if f.status == FarmerStatus::Pending && to == FarmerStatus::Active {
                        f.approval_date = Some(Utc::now().date_naive());
                    }
                    f.status = to;
                } else {
                    rejected_from = Some(f.status);
                }
            })
            .await
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        if let Some(from) = rejected_from {
            return Err(AppError::InvalidStateTransition(format!(
                "Farmer cannot move from {} to {}",
                from, to
            )));
        }

        Ok(updated)
    }

    fn validate_registration(&self, input: &RegisterFarmerInput) -> AppResult<()> {
        for (field, value) in [
            ("firstName", &input.first_name),
            ("lastName", &input.last_name),
            ("idNumber", &input.id_number),
            ("farmName", &input.farm_name),
            ("location", &input.location),
            ("county", &input.county),
            ("bankName", &input.bank_name),
            ("accountNumber", &input.account_number),
            ("accountName", &input.account_name),
        ] {
            validate_required(value).map_err(|e| AppError::validation(field, e))?;
        }

        validate_kenyan_phone(&input.phone).map_err(|e| AppError::validation("phone", e))?;
        validate_kenyan_national_id(&input.id_number)
            .map_err(|e| AppError::validation("idNumber", e))?;
        validate_county(&input.county).map_err(|e| AppError::validation("county", e))?;
        if let Some(email) = &input.email {
            validate_email(email).map_err(|e| AppError::validation("email", e))?;
        }

        Ok(())
    }
}
