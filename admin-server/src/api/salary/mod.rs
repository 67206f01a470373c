//! Salary API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Salary/{employee_username}", post(handler::upsert))
        .route("/Page/{employee_username}", get(handler::details))
        .route("/ConfirmedEmployee/{employee_username}", get(handler::confirmed))
}
