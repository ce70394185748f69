use thiserror::Error;

use crate::classifier::ClassifierError;

/// Scoring only fails when the classifier does; the heuristic itself is total.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}
