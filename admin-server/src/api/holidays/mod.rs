//! Holiday API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/AddHolidayScreen", post(handler::create))
        .route("/HolidayList", get(handler::list))
}
