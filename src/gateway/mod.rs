//! HTTP gateway (Axum) exposing profile scoring.
//!
//! This module is primarily used by the `sentinel` server binary. It is a thin
//! shell: request parsing, status headers and error mapping. All decisions are
//! made by [`crate::scoring::ProfileScorer`].

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::check_profile_handler;
pub use payload::{HealthResponse, ProfileData, ProfileRequest};
pub use state::HandlerState;

use crate::constants::{SENTINEL_STATUS_HEADER, SENTINEL_STATUS_HEALTHY};
use crate::scoring::ModelInfo;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/check-profile", post(check_profile_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SENTINEL_STATUS_HEADER,
        HeaderValue::from_static(SENTINEL_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn version_handler(State(state): State<HandlerState>) -> Json<ModelInfo> {
    Json(state.scorer.context().model_info().clone())
}
