//! Streak accounting for one prediction-mode run.

use serde::{Deserialize, Serialize};

/// How the most recent resolved round went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No round has been resolved yet.
    #[default]
    Unknown,
    /// The last guess was correct.
    Correct,
    /// The last guess was incorrect.
    Incorrect,
}

/// Streak state for one prediction-mode run.
///
/// `best` never falls below `current` and never decreases within a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakState {
    current: u32,
    best: u32,
    last_round: RoundOutcome,
}

impl StreakState {
    /// Start a fresh run carrying a previously persisted best streak.
    pub fn new(prior_best: u32) -> Self {
        Self {
            current: 0,
            best: prior_best,
            last_round: RoundOutcome::Unknown,
        }
    }

    /// Consecutive correct guesses so far in this run.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// The best streak seen, including persisted history.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// The most recent round's outcome.
    pub fn last_round(&self) -> RoundOutcome {
        self.last_round
    }

    /// Record a resolved guess and return the verdict for display.
    pub fn record(&mut self, correct: bool) -> Verdict {
        if correct {
            self.current += 1;
            self.best = self.best.max(self.current);
            self.last_round = RoundOutcome::Correct;
            Verdict::Correct
        } else {
            let previous = self.current;
            self.current = 0;
            self.last_round = RoundOutcome::Incorrect;
            if previous > 0 {
                Verdict::StreakBroken { previous }
            } else {
                Verdict::Incorrect
            }
        }
    }
}

/// The display verdict for one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The guess matched the outcome.
    Correct,
    /// The guess missed and ended a running streak.
    StreakBroken {
        /// The streak length at the moment of the miss.
        previous: u32,
    },
    /// The guess missed with no streak running.
    Incorrect,
}
