//! Domain keyword lists and substring counting.
//!
//! A [`Lexicon`] holds three fixed lists: switch characteristics, sentiment words, and
//! switch-related vocabulary. Build it once at startup and share it by reference or `Arc`.
//!
//! # Matching Semantics
//!
//! Counting is literal substring counting on the lowercased review, not word matching.
//! Short entries therefore compound with longer ones: `"keyboard"` also counts `"key"`,
//! and `"not bad"` also counts `"bad"`. Each entry contributes its own non-overlapping
//! occurrence count, and duplicate entries contribute once per copy.

mod terms;


pub use terms::{CHARACTERISTICS, SENTIMENT_WORDS, SWITCH_RELATED};

use std::fmt;

/// Which of the three lists to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconKind {
    Characteristics,
    SentimentWords,
    SwitchRelated,
}

impl LexiconKind {
    pub const ALL: [LexiconKind; 3] = [
        LexiconKind::Characteristics,
        LexiconKind::SentimentWords,
        LexiconKind::SwitchRelated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LexiconKind::Characteristics => "characteristics",
            LexiconKind::SentimentWords => "sentiment_words",
            LexiconKind::SwitchRelated => "switch_related",
        }
    }
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-list occurrence counts for one review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LexiconCounts {
    pub characteristics: usize,
    pub sentiment: usize,
    pub switch_related: usize,
}

impl LexiconCounts {
    /// Returns `true` if any list matched at least once.
    pub fn any(&self) -> bool {
        self.characteristics > 0 || self.sentiment > 0 || self.switch_related > 0
    }
}

/// One keyword list: terms as written, plus their lowercase matching form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TermList {
    terms: Vec<String>,
    needles: Vec<String>,
}

impl TermList {
    fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = entries
            .into_iter()
            .map(|e| e.as_ref().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let needles = terms.iter().map(|t| t.to_lowercase()).collect();

        Self { terms, needles }
    }
}

/// Immutable keyword lists.
///
/// Terms keep their original case for display (the classifier prompt lists them verbatim).
/// Matching always uses the lowercased form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    characteristics: TermList,
    sentiment_words: TermList,
    switch_related: TermList,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Builds a lexicon from arbitrary lists.
    ///
    /// Empty entries are dropped, since an empty needle would match between every character.
    pub fn new<I1, I2, I3, S1, S2, S3>(
        characteristics: I1,
        sentiment_words: I2,
        switch_related: I3,
    ) -> Self
    where
        I1: IntoIterator<Item = S1>,
        I2: IntoIterator<Item = S2>,
        I3: IntoIterator<Item = S3>,
        S1: AsRef<str>,
        S2: AsRef<str>,
        S3: AsRef<str>,
    {
        Self {
            characteristics: TermList::new(characteristics),
            sentiment_words: TermList::new(sentiment_words),
            switch_related: TermList::new(switch_related),
        }
    }

    /// The built-in mechanical switch vocabulary.
    pub fn builtin() -> Self {
        Self::new(CHARACTERISTICS, SENTIMENT_WORDS, SWITCH_RELATED)
    }

    fn list(&self, kind: LexiconKind) -> &TermList {
        match kind {
            LexiconKind::Characteristics => &self.characteristics,
            LexiconKind::SentimentWords => &self.sentiment_words,
            LexiconKind::SwitchRelated => &self.switch_related,
        }
    }

    /// Terms as written, in list order.
    pub fn entries(&self, kind: LexiconKind) -> &[String] {
        &self.list(kind).terms
    }

    /// Lowercased terms used for matching, parallel to [`entries`](Self::entries).
    pub fn needles(&self, kind: LexiconKind) -> &[String] {
        &self.list(kind).needles
    }

    pub fn characteristics(&self) -> &[String] {
        self.entries(LexiconKind::Characteristics)
    }

    pub fn sentiment_words(&self) -> &[String] {
        self.entries(LexiconKind::SentimentWords)
    }

    pub fn switch_related(&self) -> &[String] {
        self.entries(LexiconKind::SwitchRelated)
    }

    /// Counts occurrences of one list's entries in `review`.
    ///
    /// `review` is lowercased here; callers counting several lists should lowercase once
    /// and use [`count_lowercased`](Self::count_lowercased).
    pub fn count(&self, kind: LexiconKind, review: &str) -> usize {
        self.count_lowercased(kind, &review.to_lowercase())
    }

    /// Like [`count`](Self::count) but assumes `review_lower` is already lowercase.
    pub fn count_lowercased(&self, kind: LexiconKind, review_lower: &str) -> usize {
        count_occurrences(review_lower, self.needles(kind))
    }

    /// Counts all three lists in one pass over the lowercased review.
    pub fn count_all(&self, review: &str) -> LexiconCounts {
        let lower = review.to_lowercase();
        LexiconCounts {
            characteristics: self.count_lowercased(LexiconKind::Characteristics, &lower),
            sentiment: self.count_lowercased(LexiconKind::SentimentWords, &lower),
            switch_related: self.count_lowercased(LexiconKind::SwitchRelated, &lower),
        }
    }
}

/// Sum over `entries` of the non-overlapping occurrences of each entry in `haystack`.
pub fn count_occurrences<S: AsRef<str>>(haystack: &str, entries: &[S]) -> usize {
    entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|needle| !needle.is_empty())
        .map(|needle| haystack.matches(needle).count())
        .sum()
}

/// Number of whitespace-delimited tokens.
///
/// The ASCII information separators (U+001C to U+001F) also delimit words.
pub fn word_count(review: &str) -> usize {
    review
        .split(is_word_separator)
        .filter(|token| !token.is_empty())
        .count()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
