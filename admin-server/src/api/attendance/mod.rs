//! Attendance and Leave API

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ViewAtt/{employee_username}", get(handler::view))
        .route("/Leave", get(handler::list_leave))
}
