//! Auth API

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/Login", post(handler::login))
}
