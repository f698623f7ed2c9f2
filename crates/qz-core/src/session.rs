//! Quiz session management.
//!
//! `QuizSession` owns the ordered question list for one quiz. It accepts new
//! questions while the quiz is being built, then runs answering passes that
//! collect one answer per question, score them with the configured
//! [`ScoringStrategy`], and notify every [`ResultObserver`].

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::answer::{AnswerSource, QuestionPresenter};
use crate::config::QuizConfig;
use crate::error::{QuizError, QuizResult};
use crate::observer::ResultObserver;
use crate::question::Question;
use crate::scoring::{PercentageScoring, ScoringStrategy};

/// Where a session is in its create/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No questions yet.
    Empty,
    /// Questions are being added.
    Building,
    /// Creation was finished; the quiz can be taken.
    Ready,
    /// At least one answering pass has completed since the last edit.
    Taken,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Building => write!(f, "building"),
            Self::Ready => write!(f, "ready"),
            Self::Taken => write!(f, "taken"),
        }
    }
}

/// The outcome of one answering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Answers in question order, exactly as supplied.
    pub answers: Vec<String>,
    /// Number of questions in the quiz.
    pub questions: usize,
    /// Final score, 0-100.
    pub score: u32,
}

impl Attempt {
    /// Whether every question received an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions
    }
}

/// An in-memory quiz: its questions, scoring policy, and observers.
pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
    scoring: Box<dyn ScoringStrategy>,
    observers: Vec<Box<dyn ResultObserver>>,
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.questions.len())
            .field("state", &self.state)
            .field("scoring", &self.scoring.name())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuizSession {
    /// Create an empty session with percentage scoring.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            questions: Vec::new(),
            state: SessionState::Empty,
            scoring: Box::new(PercentageScoring::new().with_matching(config.matching)),
            observers: Vec::new(),
        }
    }

    /// Replace the scoring strategy.
    pub fn with_strategy<S: ScoringStrategy + 'static>(mut self, strategy: S) -> Self {
        self.scoring = Box::new(strategy);
        self
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer<O: ResultObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Get the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the name of the scoring strategy.
    pub fn scoring_name(&self) -> &str {
        self.scoring.name()
    }

    /// Correct answers in question order.
    pub fn answer_key(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.answer().to_string()).collect()
    }

    /// Append a question. Reopens a ready or taken quiz for editing.
    pub fn add_question(&mut self, question: Question) {
        debug!(
            kind = %question.kind(),
            text = question.text(),
            position = self.questions.len() + 1,
            "question added"
        );
        self.questions.push(question);
        self.state = SessionState::Building;
    }

    /// Mark creation as finished. Does nothing while the quiz is empty.
    pub fn finish_creation(&mut self) {
        if self.state == SessionState::Building {
            self.state = SessionState::Ready;
            debug!(questions = self.questions.len(), "quiz ready");
        }
    }

    /// Run one answering pass.
    ///
    /// Each question is shown through `presenter` and answered with one call
    /// to `source`, in order. If the source runs dry early, the answers
    /// collected so far are scored; unanswered questions count as wrong.
    pub fn take_quiz(
        &mut self,
        source: &mut dyn AnswerSource,
        presenter: &mut dyn QuestionPresenter,
    ) -> QuizResult<Attempt> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuizAvailable);
        }

        let total = self.questions.len();
        let mut answers = Vec::with_capacity(total);
        for (i, question) in self.questions.iter().enumerate() {
            presenter.present(i + 1, total, question);
            match source.read_answer()? {
                Some(answer) => {
                    debug!(position = i + 1, answer = answer.as_str(), "answer received");
                    answers.push(answer);
                }
                None => {
                    warn!(
                        answered = answers.len(),
                        questions = total,
                        "answer source exhausted, scoring partial attempt"
                    );
                    break;
                }
            }
        }

        let score = self
            .scoring
            .calculate_score(&answers, &self.answer_key());
        info!(score, strategy = self.scoring.name(), "quiz scored");

        for observer in &mut self.observers {
            observer.update(score);
        }
        self.state = SessionState::Taken;

        Ok(Attempt {
            answers,
            questions: total,
            score,
        })
    }
}
