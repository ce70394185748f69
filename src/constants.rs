//! Cross-cutting, shared constants.
//!
//! The score bounds are shared by the heuristic, the gateway payloads, and the tests.
//! Derive secondary values from these instead of repeating literals.

/// Lowest score the service will ever return.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score the service will ever return.
pub const MAX_SCORE: f64 = 10.0;

/// Multiplier applied to `sigmoid(logit)` to obtain the base score.
pub const BASE_SCORE_SCALE: f64 = MAX_SCORE;

/// Token budget for a single classifier call (prompt is truncated beyond this).
pub const MAX_SEQ_LEN: usize = 512;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Logistic sigmoid.
pub fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Maps a raw classifier logit onto the `[MIN_SCORE, MAX_SCORE]` range.
pub fn logit_to_base_score(logit: f32) -> f64 {
    sigmoid(f64::from(logit)) * BASE_SCORE_SCALE
}

/// Clamps to the score range and rounds to one decimal place.
///
/// Rounding is done on the exact decimal expansion, ties to even: `4.25` becomes `4.2`,
/// while `4.35` (stored as `4.3499...`) becomes `4.3`. NaN collapses to [`MIN_SCORE`].
pub fn normalize_score(score: f64) -> f64 {
    if score.is_nan() {
        return MIN_SCORE;
    }
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    format!("{clamped:.1}").parse().unwrap_or(clamped)
}
