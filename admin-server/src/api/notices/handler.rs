//! Notice API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{Notice, NoticeConfirmation, NoticeCreate};

use crate::api::{Payload, RowId};
use crate::common::{AppError, AppResult, error::message};
use crate::core::AppState;

/// POST /AddNoticeScreen
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<NoticeCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    state
        .store
        .create_notice(&payload)
        .await
        .map_err(AppError::database("Error adding notice"))?;

    tracing::info!("Notice added");
    Ok((StatusCode::CREATED, message("Notice added successfully")))
}

/// GET /Notice - newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Notice>>> {
    let notices = state
        .store
        .list_notices()
        .await
        .map_err(AppError::database("Error fetching notices"))?;
    Ok(Json(notices))
}

/// DELETE /Notice/{id}
pub async fn delete(State(state): State<AppState>, RowId(id): RowId) -> AppResult<StatusCode> {
    let Some(id) = id else {
        return Ok(StatusCode::NO_CONTENT);
    };
    state
        .store
        .delete_notice(id)
        .await
        .map_err(AppError::database("Error deleting notice"))?;

    tracing::info!(notice_id = id, "Notice deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /NoticeDetailsScreen/{notice_id} - who confirmed the notice, and when
pub async fn confirmations(
    State(state): State<AppState>,
    RowId(notice_id): RowId,
) -> AppResult<Json<Vec<NoticeConfirmation>>> {
    let Some(notice_id) = notice_id else {
        return Ok(Json(Vec::new()));
    };
    let rows = state
        .store
        .list_confirmations(notice_id)
        .await
        .map_err(AppError::database("Error fetching notice details"))?;
    Ok(Json(rows))
}
