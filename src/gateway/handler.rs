use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::{debug, instrument};

use super::error::GatewayError;
use super::payload::{ReviewQuery, ReviewRequest, ReviewResponse};
use super::state::HandlerState;

/// `POST /review`: scores `{"review": "..."}`.
///
/// Body problems are rejected here so the scorer only ever sees a string.
#[instrument(skip_all, fields(review_len = tracing::field::Empty))]
pub async fn review_handler(
    State(state): State<HandlerState>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ReviewResponse>, GatewayError> {
    let Query(query) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let Json(body) = body.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let request = parse_review_request(body)?;

    tracing::Span::current().record("review_len", request.review.len());

    let scorer = state.scorer.clone();
    let review = request.review;
    let breakdown = tokio::task::spawn_blocking(move || scorer.score_detailed(&review))
        .await
        .map_err(|e| GatewayError::InternalError(format!("Scoring task failed: {}", e)))??;

    debug!(
        relevance_score = breakdown.final_score,
        rules = breakdown.adjustments.len(),
        "Review scored"
    );

    Ok(Json(ReviewResponse {
        relevance_score: breakdown.final_score,
        breakdown: query.detail.then_some(breakdown),
    }))
}

pub(crate) fn parse_review_request(body: serde_json::Value) -> Result<ReviewRequest, GatewayError> {
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}
