//! Error types for the quiz engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while building or taking a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The factory was given a question kind it does not know.
    #[error("invalid question kind: {0}")]
    InvalidQuestionKind(String),

    /// A quiz was taken before any question was added.
    #[error("no quiz available, create a quiz first")]
    NoQuizAvailable,

    /// The answer source failed to produce an answer.
    #[error("failed to read answer: {0}")]
    Input(#[from] std::io::Error),
}
