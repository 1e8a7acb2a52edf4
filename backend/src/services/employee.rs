//! Cooperative employee management service

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Stores;
use shared::validation::{validate_email, validate_kenyan_phone, validate_required};
use shared::{Employee, EmployeeRole, EmployeeStatus};

/// Employee management service
#[derive(Clone)]
pub struct EmployeeService {
    stores: Stores,
}

/// Input for creating an employee
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: EmployeeRole,
    pub permissions: Option<Vec<String>>,
}

impl EmployeeService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.stores.employees().list().await)
    }

    /// Create an employee, active by default, joined today
    pub async fn create(&self, input: CreateEmployeeInput) -> AppResult<Employee> {
        validate_required(&input.name).map_err(|e| AppError::validation("name", e))?;
        validate_email(&input.email).map_err(|e| AppError::validation("email", e))?;
        validate_kenyan_phone(&input.phone).map_err(|e| AppError::validation("phone", e))?;

        let employee = Employee {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            role: input.role,
            status: EmployeeStatus::Active,
            permissions: input.permissions.unwrap_or_default(),
            join_date: Utc::now().date_naive(),
            last_login: None,
        };

        self.stores.employees().insert_front(employee.clone()).await;
        tracing::info!(employee_id = %employee.id, "Created employee {}", employee.name);

        Ok(employee)
    }

    pub async fn set_status(&self, employee_id: Uuid, status: EmployeeStatus) -> AppResult<Employee> {
        self.stores
            .employees()
            .update(employee_id, |e| e.status = status)
            .await
            .ok_or_else(|| AppError::NotFound("Employee".to_string()))
    }
}
