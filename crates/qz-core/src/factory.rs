//! Building questions from a kind and raw parameters.
//!
//! This is the one place that knows which question kinds exist. Adding a
//! kind means adding a [`QuestionKind`] variant and a match arm here.

use tracing::{debug, warn};

use crate::error::QuizResult;
use crate::question::{MultipleChoiceQuestion, Question, QuestionKind, TrueFalseQuestion};

/// Raw parameters for a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionArgs {
    /// Choices in display order. Only used by multiple-choice questions.
    pub choices: Vec<String>,
    /// The correct answer.
    pub correct_answer: String,
}

impl QuestionArgs {
    /// Arguments with only a correct answer.
    pub fn new(correct_answer: impl Into<String>) -> Self {
        Self {
            choices: Vec::new(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Set the choices.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

/// Constructs [`Question`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionFactory;

impl QuestionFactory {
    /// Build a question of the given kind.
    ///
    /// Multiple-choice questions are built even when `choices` is empty or
    /// does not contain the correct answer; both cases are logged.
    pub fn create_question(kind: QuestionKind, text: &str, args: QuestionArgs) -> Question {
        debug!(%kind, text, "creating question");
        match kind {
            QuestionKind::MultipleChoice => {
                Self::multiple_choice(text, args.choices, &args.correct_answer)
            }
            QuestionKind::TrueFalse => Self::true_false(text, &args.correct_answer),
        }
    }

    /// Build a question from a kind tag such as `"MultipleChoice"` or `"TrueFalse"`.
    pub fn create_question_from_tag(
        tag: &str,
        text: &str,
        args: QuestionArgs,
    ) -> QuizResult<Question> {
        let kind = tag.parse::<QuestionKind>()?;
        Ok(Self::create_question(kind, text, args))
    }

    /// Build a multiple-choice question.
    pub fn multiple_choice(text: &str, choices: Vec<String>, correct_answer: &str) -> Question {
        let question = MultipleChoiceQuestion::new(text, choices, correct_answer);
        if question.choices().is_empty() {
            warn!(text, "multiple-choice question has no choices");
        } else if !question.answer_is_listed() {
            warn!(
                text,
                answer = correct_answer,
                "correct answer is not one of the choices"
            );
        }
        question.into()
    }

    /// Build a true/false question.
    pub fn true_false(text: &str, correct_answer: &str) -> Question {
        TrueFalseQuestion::new(text, correct_answer).into()
    }
}
