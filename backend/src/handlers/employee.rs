//! HTTP handlers for employee management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppJson, AppResult};
use crate::services::employee::{CreateEmployeeInput, EmployeeService};
use crate::AppState;
use shared::{Employee, EmployeeStatus};

/// List employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let service = EmployeeService::new(state.stores);
    let employees = service.list().await?;
    Ok(Json(employees))
}

/// Create an employee
pub async fn create_employee(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEmployeeInput>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let service = EmployeeService::new(state.stores);
    let employee = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Body for changing an employee's status
#[derive(Debug, Deserialize)]
pub struct SetEmployeeStatusInput {
    pub status: EmployeeStatus,
}

/// Activate or deactivate an employee
pub async fn set_employee_status(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    AppJson(input): AppJson<SetEmployeeStatusInput>,
) -> AppResult<Json<Employee>> {
    let service = EmployeeService::new(state.stores);
    let employee = service.set_status(employee_id, input.status).await?;
    Ok(Json(employee))
}
