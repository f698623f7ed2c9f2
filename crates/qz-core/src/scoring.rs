//! Scoring strategies for a completed quiz.
//!
//! A strategy turns the submitted answers and the answer key into a score.
//! The session only knows the [`ScoringStrategy`] trait, so policies can be
//! swapped without touching the quiz flow.

use crate::matching::AnswerMatch;

/// Converts submitted answers into a score.
pub trait ScoringStrategy: std::fmt::Debug {
    /// Human-readable name for this policy.
    fn name(&self) -> &str;

    /// Score `user_answers` against `correct_answers`, paired by position.
    fn calculate_score(&self, user_answers: &[String], correct_answers: &[String]) -> u32;
}

/// Percentage of positions where the submitted answer matches the key.
///
/// Answers are paired by index up to the shorter of the two lists; extra
/// entries on either side are never counted as correct. The result is
/// `matches * 100 / correct_answers.len()`, rounded down. An empty answer key
/// scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageScoring {
    matching: AnswerMatch,
}

impl PercentageScoring {
    /// Exact-match percentage scoring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different answer matching policy.
    pub fn with_matching(mut self, matching: AnswerMatch) -> Self {
        self.matching = matching;
        self
    }

    /// The matching policy in use.
    pub fn matching(&self) -> AnswerMatch {
        self.matching
    }

    /// Number of positions where the answers match.
    pub fn count_correct(&self, user_answers: &[String], correct_answers: &[String]) -> usize {
        user_answers
            .iter()
            .zip(correct_answers)
            .filter(|(user, correct)| self.matching.matches(user, correct))
            .count()
    }
}

impl ScoringStrategy for PercentageScoring {
    fn name(&self) -> &str {
        "percentage"
    }

    fn calculate_score(&self, user_answers: &[String], correct_answers: &[String]) -> u32 {
        if correct_answers.is_empty() {
            return 0;
        }
        let correct = self.count_correct(user_answers, correct_answers);
        // correct <= correct_answers.len(), so this is at most 100
        (correct * 100 / correct_answers.len()) as u32
    }
}
