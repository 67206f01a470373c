//! Site API Handlers

use axum::{Json, extract::State};
use serde_json::Value;
use shared::models::{Site, SiteCreate};

use crate::api::{Payload, RowId};
use crate::common::{AppError, AppResult, error::message};
use crate::core::AppState;

/// POST /addsite
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<SiteCreate>,
) -> AppResult<Json<Value>> {
    let site = payload
        .validate()
        .map_err(|_| AppError::validation("Name is required"))?;

    state
        .store
        .create_site(&site)
        .await
        .map_err(AppError::database("Error adding site"))?;

    tracing::info!(name = %site.name, "Site added");
    Ok(message("Site added successfully"))
}

/// GET /site
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Site>>> {
    let sites = state
        .store
        .list_sites()
        .await
        .map_err(AppError::database("Error fetching sites"))?;
    Ok(Json(sites))
}

/// DELETE /site/{id} - plain text response
pub async fn delete(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> AppResult<&'static str> {
    const DELETED: &str = "Site deleted successfully";
    let Some(id) = id else {
        return Ok(DELETED);
    };
    state
        .store
        .delete_site(id)
        .await
        .map_err(AppError::database("Error deleting site"))?;

    tracing::info!(site_id = id, "Site deleted");
    Ok(DELETED)
}
