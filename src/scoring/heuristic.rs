//! Rule-based adjustment of the classifier's base score.
//!
//! Rules run in a fixed order. Penalties act on the raw base score before any bonus or
//! floor, and the clamp to `0.0..=10.0` with one-decimal rounding happens last.

use tracing::trace;

use crate::constants::{MAX_SCORE, MIN_SCORE, normalize_score};
use crate::lexicon::{Lexicon, word_count};

use super::types::{Adjustment, ScoreBreakdown};

pub const OFF_TOPIC_FACTOR: f64 = 0.4;
pub const NO_DESCRIPTOR_FACTOR: f64 = 0.5;
pub const LENGTH_BONUS_FACTOR: f64 = 1.1;
/// Reviews with strictly more words than this get the length bonus.
pub const LONG_REVIEW_WORDS: usize = 20;
/// Reviews with strictly fewer words than this may get the short-review floor.
pub const SHORT_REVIEW_WORDS: usize = 10;
pub const DESCRIPTOR_FLOOR_BASE: f64 = 4.0;
pub const MAX_DESCRIPTOR_CREDIT: usize = 3;
pub const MAX_SENTIMENT_BONUS: usize = 2;
pub const SHORT_REVIEW_FLOOR: f64 = 4.0;

/// Applies every rule to `base_score` for `review`.
///
/// Total over all inputs: empty or non-ASCII text simply yields zero counts, and a
/// non-finite base score is treated as [`MIN_SCORE`].
pub fn adjust(base_score: f64, review: &str, lexicon: &Lexicon) -> ScoreBreakdown {
    let base_score = if base_score.is_finite() {
        base_score
    } else {
        MIN_SCORE
    };

    let counts = lexicon.count_all(review);
    let words = word_count(review);
    let mut adjustments = Vec::new();
    let mut score = base_score;

    if counts.switch_related == 0 {
        score *= OFF_TOPIC_FACTOR;
        adjustments.push(Adjustment::OffTopicPenalty {
            factor: OFF_TOPIC_FACTOR,
        });
    }

    if counts.characteristics == 0 && counts.sentiment == 0 {
        score *= NO_DESCRIPTOR_FACTOR;
        adjustments.push(Adjustment::NoDescriptorPenalty {
            factor: NO_DESCRIPTOR_FACTOR,
        });
    }

    if words > LONG_REVIEW_WORDS {
        score = (score * LENGTH_BONUS_FACTOR).min(MAX_SCORE);
        adjustments.push(Adjustment::LengthBonus {
            factor: LENGTH_BONUS_FACTOR,
        });
    }

    if counts.characteristics > 0 && counts.switch_related > 0 {
        let floor =
            DESCRIPTOR_FLOOR_BASE + counts.characteristics.min(MAX_DESCRIPTOR_CREDIT) as f64;
        score = score.max(floor);
        adjustments.push(Adjustment::DescriptorFloor { floor });
    }

    if counts.sentiment > 0 {
        let bonus = counts.sentiment.min(MAX_SENTIMENT_BONUS) as f64;
        score += bonus;
        adjustments.push(Adjustment::SentimentBonus { bonus });
    }

    if words < SHORT_REVIEW_WORDS && counts.any() {
        score = score.max(SHORT_REVIEW_FLOOR);
        adjustments.push(Adjustment::ShortReviewFloor {
            floor: SHORT_REVIEW_FLOOR,
        });
    }

    let final_score = normalize_score(score);

    trace!(
        base_score,
        raw_score = score,
        final_score,
        rules = adjustments.len(),
        "Heuristic adjustment complete"
    );

    ScoreBreakdown {
        base_score,
        counts,
        word_count: words,
        adjustments,
        final_score,
    }
}
