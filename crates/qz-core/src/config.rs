//! Configuration for a quiz session.

use crate::matching::AnswerMatch;

/// Configuration for a quiz session.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// How submitted answers are compared when scoring.
    pub matching: AnswerMatch,
}

impl QuizConfig {
    /// Set the answer matching policy.
    pub fn with_matching(mut self, matching: AnswerMatch) -> Self {
        self.matching = matching;
        self
    }
}
