use serde::{Deserialize, Serialize};

use crate::scoring::ScoreBreakdown;

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub review: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewQuery {
    /// Include the scoring breakdown in the response.
    #[serde(default)]
    pub detail: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub relevance_score: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `"model"` or `"stub"`.
    pub classifier: &'static str,
}
