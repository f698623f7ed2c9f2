//! Result observers.
//!
//! Observers are notified with the final score once a quiz has been taken.
//! They only report; they never change the session.

use tracing::debug;

/// Receives the score of every completed quiz.
pub trait ResultObserver {
    /// Called once per completed attempt with the final score.
    fn update(&mut self, score: u32);
}

impl<F> ResultObserver for F
where
    F: FnMut(u32),
{
    fn update(&mut self, score: u32) {
        self(score)
    }
}

/// Records every score it receives and logs it.
#[derive(Debug, Clone, Default)]
pub struct ScoreLog {
    scores: Vec<u32>,
}

impl ScoreLog {
    /// Create an empty score log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All scores received, oldest first.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// The most recent score.
    pub fn last(&self) -> Option<u32> {
        self.scores.last().copied()
    }

    /// Highest score so far.
    pub fn best(&self) -> Option<u32> {
        self.scores.iter().copied().max()
    }

    /// Record a score.
    pub fn record(&mut self, score: u32) {
        self.scores.push(score);
        debug!(score, attempt = self.scores.len(), "score recorded");
    }
}

impl ResultObserver for ScoreLog {
    fn update(&mut self, score: u32) {
        self.record(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_log_records_in_order() {
        let mut log = ScoreLog::new();
        assert!(log.last().is_none());
        log.update(50);
        log.update(100);
        log.update(0);
        assert_eq!(log.scores(), &[50, 100, 0]);
        assert_eq!(log.last(), Some(0));
        assert_eq!(log.best(), Some(100));
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |score: u32| seen.push(score);
            observer.update(75);
        }
        assert_eq!(seen, vec![75]);
    }

    #[test]
    fn fan_out_through_trait_objects() {
        let mut first = ScoreLog::new();
        let mut second = ScoreLog::new();
        {
            let mut observers: Vec<&mut dyn ResultObserver> = vec![&mut first, &mut second];
            for o in observers.iter_mut() {
                o.update(42);
            }
        }
        assert_eq!(first.last(), Some(42));
        assert_eq!(second.last(), Some(42));
    }
}
