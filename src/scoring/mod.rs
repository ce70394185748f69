//! Review relevance scoring.
//!
//! [`RelevanceScorer`] wraps the review in the classifier prompt, turns the returned logit
//! into a base score (`sigmoid(logit) * 10`), then hands it to [`heuristic::adjust`].
//!
//! # Rule Order
//!
//! 1. No switch-related terms: `x0.4`.
//! 2. No characteristics and no sentiment: `x0.5`.
//! 3. More than 20 words: `x1.1`, capped at 10.
//! 4. Characteristics and switch terms: floor at `4 + min(characteristics, 3)`.
//! 5. Add `min(sentiment, 2)`.
//! 6. Fewer than 10 words with any match: floor at 4.
//! 7. Clamp to `0.0..=10.0`, round to one decimal.
//!
//! The classifier is the only fallible step. Swapping it never changes the rules above.

pub mod error;
pub mod heuristic;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::RelevanceScorer;
pub use types::{Adjustment, ScoreBreakdown};
