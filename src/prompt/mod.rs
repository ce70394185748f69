//! Classifier prompt construction.
//!
//! The prompt is only ever fed to the classifier; nothing parses it back.


use crate::lexicon::{Lexicon, LexiconKind};

/// Leading whitespace on every non-blank prompt line.
const INDENT: &str = "        ";

/// Builds the instructional prompt that wraps a review.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    term_limit: Option<usize>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists at most `limit` entries per lexicon in the prompt.
    ///
    /// The full lists already use most of the classifier's token budget, which can push
    /// the review past the truncation point.
    pub fn with_term_limit(mut self, limit: usize) -> Self {
        self.term_limit = Some(limit);
        self
    }

    pub fn term_limit(&self) -> Option<usize> {
        self.term_limit
    }

    pub fn build(&self, lexicon: &Lexicon, review: &str) -> String {
        let characteristics = self.join_terms(lexicon, LexiconKind::Characteristics);
        let sentiment = self.join_terms(lexicon, LexiconKind::SentimentWords);
        let switch_related = self.join_terms(lexicon, LexiconKind::SwitchRelated);

        format!(
            "
{INDENT}Evaluate the following review for a mechanical keyboard switch. A good review should:
{INDENT}1. Discuss specific characteristics (e.g., {characteristics}, etc.)
{INDENT}2. Provide personal opinions using words like {sentiment}, etc.
{INDENT}3. Include switch-related terms such as {switch_related}, etc.
{INDENT}4. Include an overall assessment
{INDENT}5. In general, a longer review would score higher
{INDENT}6. The review must be related to mechanical keyboard switches

{INDENT}Rate the review from 0.0 to 10.0, where:
{INDENT}10.0 = Excellent, detailed review covering multiple aspects
{INDENT}7.0-9.9 = Good review with some detailed information
{INDENT}4.0-6.9 = Average review with basic information
{INDENT}1.0-3.9 = Poor review with minimal relevant information
{INDENT}0.0-0.9 = Not a relevant review

{INDENT}Review to evaluate: {review}

{INDENT}Rating:
{INDENT}"
        )
    }

    fn join_terms(&self, lexicon: &Lexicon, kind: LexiconKind) -> String {
        let entries = lexicon.entries(kind);
        let take = self.term_limit.unwrap_or(entries.len()).min(entries.len());
        entries[..take].join(", ")
    }
}
