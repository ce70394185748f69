//! Keyscore library crate (used by the server binary and integration tests).
//!
//! Scores free-text mechanical keyboard switch reviews on a `0.0..=10.0` relevance scale.
//! A sequence classifier supplies the base score; a fixed keyword heuristic adjusts it.
//!
//! ## Modules
//! - [`lexicon`] - keyword lists and substring counting
//! - [`prompt`] - classifier prompt template
//! - [`classifier`] - [`Classifier`] trait, candle-backed model, stub
//! - [`scoring`] - [`RelevanceScorer`] and the adjustment rules
//! - [`config`] - `KEYSCORE_*` environment configuration
//! - [`gateway`] - Axum router
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use keyscore::{RelevanceScorer, StubClassifier};
//!
//! let scorer = RelevanceScorer::new(Arc::new(StubClassifier::new(0.0)));
//! let score = scorer.score("The weather is nice today.").unwrap();
//! assert_eq!(score, 1.0);
//! ```

pub mod classifier;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod lexicon;
pub mod prompt;
pub mod scoring;

pub use classifier::{
    Classifier, ClassifierConfig, ClassifierError, SequenceClassifier, StubClassifier,
};
pub use config::{Config, ConfigError};
pub use constants::{MAX_SCORE, MAX_SEQ_LEN, MIN_SCORE};
pub use gateway::{HandlerState, create_router_with_state};
pub use lexicon::{Lexicon, LexiconCounts, LexiconKind};
pub use prompt::PromptBuilder;
pub use scoring::{Adjustment, RelevanceScorer, ScoreBreakdown, ScoringError};
