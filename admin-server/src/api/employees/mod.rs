//! Employee API

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/AddEmployee", post(handler::create))
        .route("/Update/{employee_id}", get(handler::get_by_id).put(handler::update))
        // Same listing under the three paths the admin screens use
        .route("/Employee", get(handler::list))
        .route("/ListEmp", get(handler::list))
        .route("/List", get(handler::list))
        .route("/List/{id}", delete(handler::delete))
}
