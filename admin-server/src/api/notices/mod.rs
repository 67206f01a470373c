//! Notice API

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/AddNoticeScreen", post(handler::create))
        .route("/Notice", get(handler::list))
        .route("/Notice/{id}", delete(handler::delete))
        .route("/NoticeDetailsScreen/{notice_id}", get(handler::confirmations))
}
