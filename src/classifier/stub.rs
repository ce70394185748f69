use std::sync::atomic::{AtomicUsize, Ordering};

use super::Classifier;
use super::error::ClassifierError;
use crate::constants::BASE_SCORE_SCALE;

/// Classifier that ignores its input and returns a fixed logit.
///
/// Backs the heuristic tests and model-less serving (`KEYSCORE_STUB_CLASSIFIER`).
#[derive(Debug, Default)]
pub struct StubClassifier {
    logit: f32,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(logit: f32) -> Self {
        Self {
            logit,
            calls: AtomicUsize::new(0),
        }
    }

    /// Stub whose logit maps back onto `base_score` (clamped to `0.0..=10.0`).
    pub fn with_base_score(base_score: f64) -> Self {
        let p = (base_score / BASE_SCORE_SCALE).clamp(0.0, 1.0);
        let logit = (p / (1.0 - p)).ln();
        Self::new(logit as f32)
    }

    pub fn logit(&self) -> f32 {
        self.logit
    }

    /// Number of `classify` calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Classifier for StubClassifier {
    fn classify(&self, _prompt: &str) -> Result<f32, ClassifierError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.logit)
    }

    fn is_stub(&self) -> bool {
        true
    }
}
