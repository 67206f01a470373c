//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::Employee;
use shared::models::serde_helpers::lenient_text;

use crate::api::Payload;
use crate::common::{AppError, AppResult};
use crate::core::AppState;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub employee: Employee,
    pub token: String,
}

/// POST /Login
///
/// Email and password are compared as stored. The token is handed out and
/// never required by any other route.
pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let employee = state
        .store
        .find_by_credentials(req.email.as_deref(), req.password.as_deref())
        .await
        .map_err(AppError::database("Error during login"))?
        .ok_or(AppError::InvalidCredentials)?;

    let token = state
        .tokens
        .issue(
            employee.employee_id,
            employee.email_address.as_deref().unwrap_or_default(),
        )
        .map_err(|e| AppError::TokenSigning(e.to_string()))?;

    tracing::info!(
        target: "security",
        employee_id = employee.employee_id,
        "Login succeeded"
    );

    Ok(Json(LoginResponse {
        success: true,
        employee,
        token,
    }))
}
