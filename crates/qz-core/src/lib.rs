//! Quiz engine core for Quizbox.
//!
//! Provides the question model (multiple-choice and true/false), a factory
//! that builds questions from a kind tag, pluggable scoring strategies,
//! result observers, and the [`QuizSession`] that drives creating and taking
//! a quiz.

pub mod answer;
pub mod config;
pub mod error;
pub mod factory;
pub mod matching;
pub mod observer;
pub mod question;
pub mod scoring;
pub mod session;

pub use answer::{AnswerSource, QuestionPresenter, ScriptedAnswers, SilentPresenter};
pub use config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use factory::{QuestionArgs, QuestionFactory};
pub use matching::AnswerMatch;
pub use observer::{ResultObserver, ScoreLog};
pub use question::{MultipleChoiceQuestion, Question, QuestionKind, TrueFalseQuestion};
pub use scoring::{PercentageScoring, ScoringStrategy};
pub use session::{Attempt, QuizSession, SessionState};
