//! Collaborators that show questions and supply answers.
//!
//! The session asks a [`QuestionPresenter`] to show each question, then makes
//! one blocking call to an [`AnswerSource`] for its answer. Neither validates
//! anything; they only move text in and out.

use std::collections::VecDeque;

use crate::error::QuizResult;
use crate::question::Question;

/// Supplies one answer per call.
pub trait AnswerSource {
    /// Read the next answer.
    ///
    /// Returns `Ok(None)` once the source has no more answers to give.
    fn read_answer(&mut self) -> QuizResult<Option<String>>;
}

/// Shows a question before its answer is requested.
pub trait QuestionPresenter {
    /// Show `question`, which is number `position` (1-based) of `total`.
    fn present(&mut self, position: usize, total: usize, question: &Question);
}

/// Answers supplied up front, handed out in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    /// Create a source that yields `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_answer(&mut self) -> QuizResult<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

/// A presenter that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPresenter;

impl QuestionPresenter for SilentPresenter {
    fn present(&mut self, _position: usize, _total: usize, _question: &Question) {}
}
