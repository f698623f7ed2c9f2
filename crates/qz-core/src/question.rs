//! The question model.
//!
//! A [`Question`] is one of a closed set of variants:
//! - **Multiple choice**: a prompt, an ordered list of choices, and the correct answer
//! - **True/false**: a prompt and the correct answer as raw text
//!
//! Every variant checks answers by exact string comparison unless a caller
//! opts into another [`AnswerMatch`] policy.

use std::str::FromStr;

use serde::Serialize;

use crate::error::QuizError;
use crate::matching::AnswerMatch;

/// The kinds of question the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestionKind {
    /// A prompt with a list of choices.
    MultipleChoice,
    /// A prompt answered with true or false.
    TrueFalse,
}

impl QuestionKind {
    /// All kinds, in menu order.
    pub const ALL: [QuestionKind; 2] = [QuestionKind::MultipleChoice, QuestionKind::TrueFalse];

    /// Canonical tag accepted by [`QuestionKind::from_str`].
    pub fn tag(self) -> &'static str {
        match self {
            Self::MultipleChoice => "MultipleChoice",
            Self::TrueFalse => "TrueFalse",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleChoice => write!(f, "Multiple Choice"),
            Self::TrueFalse => write!(f, "True/False"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multiplechoice" | "multiple-choice" | "mc" => Ok(Self::MultipleChoice),
            "truefalse" | "true-false" | "tf" => Ok(Self::TrueFalse),
            _ => Err(QuizError::InvalidQuestionKind(s.to_string())),
        }
    }
}

/// A question with a prompt, choices, and one correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceQuestion {
    text: String,
    choices: Vec<String>,
    correct_answer: String,
}

impl MultipleChoiceQuestion {
    /// Create a multiple-choice question.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            choices,
            correct_answer: correct_answer.into(),
        }
    }

    /// The prompt shown to the player.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in display order. May be empty.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The correct answer. Expected to be one of the choices.
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Whether the correct answer appears among the choices.
    pub fn answer_is_listed(&self) -> bool {
        self.choices.iter().any(|c| *c == self.correct_answer)
    }
}

/// A question whose answer is stored and compared as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrueFalseQuestion {
    text: String,
    correct_answer: String,
}

impl TrueFalseQuestion {
    /// Create a true/false question.
    pub fn new(text: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
        }
    }

    /// The prompt shown to the player.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The correct answer, exactly as it was entered.
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Question {
    /// A multiple-choice question.
    MultipleChoice(MultipleChoiceQuestion),
    /// A true/false question.
    TrueFalse(TrueFalseQuestion),
}

impl Question {
    /// The prompt text.
    pub fn text(&self) -> &str {
        match self {
            Self::MultipleChoice(q) => &q.text,
            Self::TrueFalse(q) => &q.text,
        }
    }

    /// The canonical correct answer.
    pub fn answer(&self) -> &str {
        match self {
            Self::MultipleChoice(q) => &q.correct_answer,
            Self::TrueFalse(q) => &q.correct_answer,
        }
    }

    /// Which kind of question this is.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Self::TrueFalse(_) => QuestionKind::TrueFalse,
        }
    }

    /// Choices to display, if this question has any.
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice(q) if !q.choices.is_empty() => Some(q.choices.as_slice()),
            Self::MultipleChoice(_) | Self::TrueFalse(_) => None,
        }
    }

    /// Whether `candidate` is exactly the correct answer.
    ///
    /// Comparison is case- and whitespace-sensitive. A multiple-choice
    /// candidate does not have to be one of the listed choices.
    pub fn check_answer(&self, candidate: &str) -> bool {
        self.check_answer_with(candidate, AnswerMatch::Exact)
    }

    /// Check `candidate` using the given matching policy.
    pub fn check_answer_with(&self, candidate: &str, matching: AnswerMatch) -> bool {
        matching.matches(candidate, self.answer())
    }
}

impl From<MultipleChoiceQuestion> for Question {
    fn from(q: MultipleChoiceQuestion) -> Self {
        Self::MultipleChoice(q)
    }
}

impl From<TrueFalseQuestion> for Question {
    fn from(q: TrueFalseQuestion) -> Self {
        Self::TrueFalse(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arithmetic() -> Question {
        MultipleChoiceQuestion::new(
            "2+2?",
            vec!["3".to_string(), "4".to_string(), "5".to_string()],
            "4",
        )
        .into()
    }

    fn sky() -> Question {
        TrueFalseQuestion::new("Sky is blue", "True").into()
    }

    #[test]
    fn accessors() {
        let q = arithmetic();
        assert_eq!(q.text(), "2+2?");
        assert_eq!(q.answer(), "4");
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert_eq!(q.choices().map(|c| c.len()), Some(3));

        let q = sky();
        assert_eq!(q.text(), "Sky is blue");
        assert_eq!(q.answer(), "True");
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert!(q.choices().is_none());
    }

    #[test]
    fn multiple_choice_accepts_unlisted_correct_answer() {
        let q: Question = MultipleChoiceQuestion::new("Capital?", vec!["Rome".into()], "Paris").into();
        assert!(q.check_answer("Paris"));
        assert!(!q.check_answer("Rome"));
    }

    #[test]
    fn multiple_choice_without_choices_has_nothing_to_show() {
        let q: Question = MultipleChoiceQuestion::new("Anything?", Vec::new(), "x").into();
        assert!(q.choices().is_none());
        assert!(q.check_answer("x"));
    }

    #[test]
    fn true_false_is_raw_text() {
        let q = sky();
        assert!(q.check_answer("True"));
        assert!(!q.check_answer("true"));
        assert!(!q.check_answer("T"));

        let q: Question = TrueFalseQuestion::new("Odd?", "yes").into();
        assert!(q.check_answer("yes"));
    }

    #[test]
    fn opt_in_normalization() {
        let q = sky();
        assert!(!q.check_answer(" true "));
        assert!(q.check_answer_with(" true ", AnswerMatch::Normalized));
    }

    #[test]
    fn variant_accessors() {
        let mc = MultipleChoiceQuestion::new("2+2?", vec!["3".into(), "4".into()], "4");
        assert_eq!(mc.text(), "2+2?");
        assert_eq!(mc.choices(), &["3".to_string(), "4".to_string()]);
        assert_eq!(mc.correct_answer(), "4");

        let tf = TrueFalseQuestion::new("Sky is blue", "True");
        assert_eq!(tf.text(), "Sky is blue");
        assert_eq!(tf.correct_answer(), "True");
    }

    #[test]
    fn answer_is_listed() {
        let q = MultipleChoiceQuestion::new("2+2?", vec!["3".into(), "4".into()], "4");
        assert!(q.answer_is_listed());
        let q = MultipleChoiceQuestion::new("2+2?", vec!["3".into(), " 4".into()], "4");
        assert!(!q.answer_is_listed());
    }

    #[test]
    fn kind_parse() {
        assert_eq!("MultipleChoice".parse::<QuestionKind>().unwrap(), QuestionKind::MultipleChoice);
        assert_eq!("TrueFalse".parse::<QuestionKind>().unwrap(), QuestionKind::TrueFalse);
        assert_eq!("mc".parse::<QuestionKind>().unwrap(), QuestionKind::MultipleChoice);
        assert_eq!("True-False".parse::<QuestionKind>().unwrap(), QuestionKind::TrueFalse);
        assert!(matches!(
            "Essay".parse::<QuestionKind>(),
            Err(QuizError::InvalidQuestionKind(tag)) if tag == "Essay"
        ));
    }

    #[test]
    fn kind_tag_parses_back() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.tag().parse::<QuestionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(QuestionKind::MultipleChoice.to_string(), "Multiple Choice");
        assert_eq!(QuestionKind::TrueFalse.to_string(), "True/False");
    }

    #[test]
    fn question_serializes_with_variant_tag() {
        let json = serde_json::to_string(&sky()).unwrap();
        assert!(json.contains("TrueFalse"));
        assert!(json.contains("Sky is blue"));
    }

    proptest! {
        #[test]
        fn exact_match_law(text in ".*", answer in ".*", other in ".*") {
            let questions: [Question; 2] = [
                MultipleChoiceQuestion::new(text.clone(), vec![answer.clone()], answer.clone()).into(),
                TrueFalseQuestion::new(text, answer.clone()).into(),
            ];
            for q in &questions {
                prop_assert!(q.check_answer(&answer));
                prop_assert_eq!(q.check_answer(&other), other == answer);
            }
        }
    }
}
