use serde::Serialize;

use crate::lexicon::LexiconCounts;

/// One heuristic rule that fired while scoring a review, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Adjustment {
    /// No switch-related vocabulary: score multiplied by `factor`.
    OffTopicPenalty { factor: f64 },
    /// Neither characteristics nor sentiment: score multiplied by `factor`.
    NoDescriptorPenalty { factor: f64 },
    /// Long review: score multiplied by `factor`, capped at the maximum.
    LengthBonus { factor: f64 },
    /// Characteristics and switch terms together: score raised to at least `floor`.
    DescriptorFloor { floor: f64 },
    /// Sentiment words present: `bonus` added.
    SentimentBonus { bonus: f64 },
    /// Short but on-topic review: score raised to at least `floor`.
    ShortReviewFloor { floor: f64 },
}

impl Adjustment {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            Adjustment::OffTopicPenalty { .. } => "OFF_TOPIC_PENALTY",
            Adjustment::NoDescriptorPenalty { .. } => "NO_DESCRIPTOR_PENALTY",
            Adjustment::LengthBonus { .. } => "LENGTH_BONUS",
            Adjustment::DescriptorFloor { .. } => "DESCRIPTOR_FLOOR",
            Adjustment::SentimentBonus { .. } => "SENTIMENT_BONUS",
            Adjustment::ShortReviewFloor { .. } => "SHORT_REVIEW_FLOOR",
        }
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Adjustment::OffTopicPenalty { factor }
            | Adjustment::NoDescriptorPenalty { factor }
            | Adjustment::LengthBonus { factor } => {
                write!(f, "{} (x{})", self.debug_status(), factor)
            }
            Adjustment::DescriptorFloor { floor } | Adjustment::ShortReviewFloor { floor } => {
                write!(f, "{} (>= {})", self.debug_status(), floor)
            }
            Adjustment::SentimentBonus { bonus } => {
                write!(f, "{} (+{})", self.debug_status(), bonus)
            }
        }
    }
}

/// Everything computed while scoring one review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Classifier-derived score before adjustment, in `0.0..=10.0`.
    pub base_score: f64,
    pub counts: LexiconCounts,
    pub word_count: usize,
    pub adjustments: Vec<Adjustment>,
    /// Clamped, one-decimal result.
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Returns `true` if a rule of the same kind as `adjustment` fired.
    pub fn applied(&self, adjustment: &Adjustment) -> bool {
        self.adjustments
            .iter()
            .any(|a| std::mem::discriminant(a) == std::mem::discriminant(adjustment))
    }
}
