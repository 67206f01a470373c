//! Employee API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::{Payload, RowId};
use crate::common::{AppError, AppResult, error::message};
use crate::core::AppState;

/// GET /Update/{employee_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RowId(employee_id): RowId,
) -> AppResult<Json<Employee>> {
    let not_found = || AppError::not_found("Employee not found");
    let employee_id = employee_id.ok_or_else(not_found)?;
    let employee = state
        .store
        .find_employee(employee_id)
        .await
        .map_err(AppError::database("Error fetching employee"))?
        .ok_or_else(not_found)?;
    Ok(Json(employee))
}

/// PUT /Update/{employee_id}
///
/// Overwrites the whole row. Updating a missing id still succeeds.
pub async fn update(
    State(state): State<AppState>,
    RowId(employee_id): RowId,
    Payload(payload): Payload<EmployeeUpdate>,
) -> AppResult<Json<Value>> {
    let Some(employee_id) = employee_id else {
        return Ok(message("Employee updated successfully"));
    };
    state
        .store
        .update_employee(employee_id, &payload)
        .await
        .map_err(AppError::database("Error updating employee"))?;

    tracing::info!(employee_id, "Employee updated");
    Ok(message("Employee updated successfully"))
}

/// POST /AddEmployee
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<EmployeeCreate>,
) -> AppResult<Json<Value>> {
    let employee = payload.validate().map_err(|missing| {
        tracing::debug!(%missing, "Employee payload incomplete");
        AppError::validation("All fields are required")
    })?;

    state
        .store
        .create_employee(&employee)
        .await
        .map_err(AppError::database("Error adding employee"))?;

    tracing::info!(username = %employee.employee_username, "Employee added");
    Ok(message("Employee added successfully"))
}

/// GET /Employee, /ListEmp, /List
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .store
        .list_employees()
        .await
        .map_err(AppError::database("Error fetching employees"))?;
    Ok(Json(employees))
}

/// DELETE /List/{id}
pub async fn delete(State(state): State<AppState>, RowId(id): RowId) -> AppResult<StatusCode> {
    let Some(id) = id else {
        return Ok(StatusCode::NO_CONTENT);
    };
    state
        .store
        .delete_employee(id)
        .await
        .map_err(AppError::database("Error deleting employee"))?;

    tracing::info!(employee_id = id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
