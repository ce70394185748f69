//! HTTP gateway (Axum) in front of the relevance scorer.
//!
//! Routes:
//! - `GET /` liveness greeting.
//! - `GET /healthz` status plus classifier mode (used by `--health-check`).
//! - `POST /review` scores a review. `?detail=true` adds the rule breakdown.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::review_handler;
pub use state::HandlerState;

use payload::{HealthResponse, HelloResponse};

/// Response header carrying a short machine-readable outcome on errors.
pub const KEYSCORE_STATUS_HEADER: &str = "x-keyscore-status";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/review", post(review_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument]
pub async fn root_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello World",
    })
}

#[tracing::instrument(skip(state))]
pub async fn health_handler(State(state): State<HandlerState>) -> Json<HealthResponse> {
    let classifier = if state.scorer.is_stub() {
        "stub"
    } else {
        "model"
    };

    Json(HealthResponse {
        status: "ok",
        classifier,
    })
}
