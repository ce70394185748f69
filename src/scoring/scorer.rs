use std::sync::Arc;
use tracing::debug;

use crate::classifier::Classifier;
use crate::constants::logit_to_base_score;
use crate::lexicon::Lexicon;
use crate::prompt::PromptBuilder;

use super::error::ScoringError;
use super::heuristic;
use super::types::ScoreBreakdown;

/// Classifier call plus heuristic adjustment.
///
/// Holds only shared, read-only state; one instance serves every request.
pub struct RelevanceScorer {
    classifier: Arc<dyn Classifier>,
    lexicon: Arc<Lexicon>,
    prompt: PromptBuilder,
}

impl std::fmt::Debug for RelevanceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceScorer")
            .field("classifier_stub", &self.classifier.is_stub())
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl RelevanceScorer {
    /// Scorer using the built-in lexicon and the full prompt.
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            lexicon: Arc::new(Lexicon::builtin()),
            prompt: PromptBuilder::new(),
        }
    }

    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_prompt_builder(mut self, prompt: PromptBuilder) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn is_stub(&self) -> bool {
        self.classifier.is_stub()
    }

    /// Final score in `0.0..=10.0`, rounded to one decimal.
    pub fn score(&self, review: &str) -> Result<f64, ScoringError> {
        Ok(self.score_detailed(review)?.final_score)
    }

    /// Scores `review` and returns every intermediate value.
    pub fn score_detailed(&self, review: &str) -> Result<ScoreBreakdown, ScoringError> {
        let base_score = self.base_score(review)?;
        let breakdown = self.adjust(base_score, review);

        debug!(
            review_len = review.len(),
            base_score = breakdown.base_score,
            characteristics = breakdown.counts.characteristics,
            sentiment = breakdown.counts.sentiment,
            switch_related = breakdown.counts.switch_related,
            word_count = breakdown.word_count,
            final_score = breakdown.final_score,
            "Scored review"
        );

        Ok(breakdown)
    }

    /// Classifier-derived score in `0.0..=10.0`, before any adjustment.
    pub fn base_score(&self, review: &str) -> Result<f64, ScoringError> {
        let prompt = self.prompt.build(&self.lexicon, review);
        let logit = self.classifier.classify(&prompt)?;
        Ok(logit_to_base_score(logit))
    }

    /// Runs only the heuristic on an externally supplied base score.
    pub fn adjust(&self, base_score: f64, review: &str) -> ScoreBreakdown {
        heuristic::adjust(base_score, review, &self.lexicon)
    }
}
