//! Salary API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ConfirmedSalary, SalaryDetail, SalaryUpdate};

use crate::api::Payload;
use crate::common::{AppError, AppResult};
use crate::core::AppState;

/// POST /Salary/{employee_username} - insert or overwrite, plain text response
pub async fn upsert(
    State(state): State<AppState>,
    Path(employee_username): Path<String>,
    Payload(payload): Payload<SalaryUpdate>,
) -> AppResult<&'static str> {
    state
        .store
        .upsert_salary(&employee_username, &payload)
        .await
        .map_err(AppError::database("Error saving salary data"))?;

    tracing::info!(username = %employee_username, "Salary data saved");
    Ok("Salary data saved successfully")
}

/// GET /Page/{employee_username}
pub async fn details(
    State(state): State<AppState>,
    Path(employee_username): Path<String>,
) -> AppResult<Json<Vec<SalaryDetail>>> {
    let rows = state
        .store
        .salary_details(&employee_username)
        .await
        .map_err(AppError::database("Error fetching salary details"))?;

    if rows.is_empty() {
        return Err(AppError::not_found("Salary details not found"));
    }
    Ok(Json(rows))
}

/// GET /ConfirmedEmployee/{employee_username}
pub async fn confirmed(
    State(state): State<AppState>,
    Path(employee_username): Path<String>,
) -> AppResult<Json<Vec<ConfirmedSalary>>> {
    let rows = state
        .store
        .confirmed_salary(&employee_username)
        .await
        .map_err(AppError::database("Error fetching confirmed salary details"))?;

    if rows.is_empty() {
        return Err(AppError::not_found("No confirmed salary details found"));
    }
    Ok(Json(rows))
}
