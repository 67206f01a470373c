//! Attendance and Leave API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{AttendanceQuery, AttendanceRecords, AttendanceStatus, LeaveApplication};

use crate::common::{AppError, AppResult};
use crate::core::AppState;

/// GET /ViewAtt/{employee_username}?status=&month=&year=
///
/// `On Leave` reads leave applications, `Present` reads attendance marks.
/// Any other status, or none, is rejected before the store is touched.
pub async fn view(
    State(state): State<AppState>,
    Path(employee_username): Path<String>,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<AttendanceRecords>> {
    let status: AttendanceStatus = query
        .status
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::validation("Invalid status"))?;

    let records = match status {
        AttendanceStatus::OnLeave => AttendanceRecords::Leave(
            state
                .store
                .leave_in_month(&employee_username, query.month, query.year)
                .await
                .map_err(AppError::database("Error fetching leave records"))?,
        ),
        AttendanceStatus::Present => AttendanceRecords::Present(
            state
                .store
                .attendance_in_month(&employee_username, query.month, query.year)
                .await
                .map_err(AppError::database("Error fetching attendance records"))?,
        ),
    };

    tracing::debug!(
        username = %employee_username,
        %status,
        rows = records.len(),
        "Attendance view"
    );
    Ok(Json(records))
}

/// GET /Leave
pub async fn list_leave(State(state): State<AppState>) -> AppResult<Json<Vec<LeaveApplication>>> {
    let rows = state
        .store
        .list_leave_applications()
        .await
        .map_err(AppError::database("Error fetching leave applications"))?;
    Ok(Json(rows))
}
