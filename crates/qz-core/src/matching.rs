//! Answer comparison policies.

/// How a submitted answer is compared against the correct one.
///
/// The default is [`AnswerMatch::Exact`]: case- and whitespace-sensitive
/// string equality. [`AnswerMatch::Normalized`] is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Ignore surrounding whitespace and letter case.
    Normalized,
}

impl AnswerMatch {
    /// Whether `candidate` counts as `expected` under this policy.
    pub fn matches(self, candidate: &str, expected: &str) -> bool {
        match self {
            Self::Exact => candidate == expected,
            Self::Normalized => candidate.trim().to_lowercase() == expected.trim().to_lowercase(),
        }
    }
}

impl std::fmt::Display for AnswerMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Normalized => write!(f, "normalized"),
        }
    }
}
