use std::sync::Arc;

use crate::scoring::RelevanceScorer;

#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<RelevanceScorer>,
}

impl HandlerState {
    pub fn new(scorer: Arc<RelevanceScorer>) -> Self {
        Self { scorer }
    }
}
