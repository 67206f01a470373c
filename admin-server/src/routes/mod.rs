//! Router assembly

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::AppState;

pub mod logging;

pub use logging::logging_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Every route plus the `/uploads` static tree (no middleware, no state)
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(api::auth::router())
        .merge(api::employees::router())
        .merge(api::sites::router())
        .merge(api::holidays::router())
        .merge(api::notices::router())
        .merge(api::attendance::router())
        .merge(api::salary::router())
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
}

/// Fully configured application with middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router(&state)
        // CORS - any origin
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Echo the request id back on the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Outermost: assign an id before anything logs
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
