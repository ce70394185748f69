//! Text classifier producing the base relevance signal.
//!
//! - [`Classifier`] is the seam the scorer depends on: prompt in, raw logit out.
//! - [`SequenceClassifier`] runs a BERT/RoBERTa sequence-classification checkpoint on candle.
//! - [`StubClassifier`] returns a fixed logit for tests and model-less serving.

pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Encoder + classification head.
pub mod model;
mod sequence;
mod stub;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use sequence::SequenceClassifier;
pub use stub::StubClassifier;

/// Scores a fully built prompt with a single raw logit.
///
/// Implementations must be callable from several threads; serialize internally if the
/// underlying runtime is not reentrant.
pub trait Classifier: Send + Sync {
    fn classify(&self, prompt: &str) -> Result<f32, ClassifierError>;

    /// `true` for placeholder implementations that never look at the prompt.
    fn is_stub(&self) -> bool {
        false
    }
}
