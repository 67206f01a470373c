//! Site API

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addsite", post(handler::create))
        .route("/site", get(handler::list))
        .route("/site/{id}", delete(handler::delete))
}
