//! Holiday API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use shared::models::{Holiday, HolidayCreate};

use crate::api::Payload;
use crate::common::{AppError, AppResult, error::message};
use crate::core::AppState;

/// POST /AddHolidayScreen
///
/// No presence check; a NULL the table refuses comes back as a 500.
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<HolidayCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    state
        .store
        .create_holiday(&payload)
        .await
        .map_err(AppError::database("Error adding holiday"))?;

    tracing::info!(name = ?payload.holiday_name, date = ?payload.holiday_date, "Holiday added");
    Ok((StatusCode::CREATED, message("Holiday added successfully")))
}

/// GET /HolidayList
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Holiday>>> {
    let holidays = state
        .store
        .list_holidays()
        .await
        .map_err(AppError::database("Error fetching holidays"))?;
    Ok(Json(holidays))
}
