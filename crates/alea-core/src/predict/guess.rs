//! Committed, not-yet-resolved predictions.

use serde::{Deserialize, Serialize};

use crate::outcome::{Outcome, OutcomeKind};

/// A prediction the player commits to before the next random action.
///
/// Consumed exactly once, by the next resolved action; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// A die-face guess.
    Die(u32),
    /// A coin-face guess; `true` is the heads face.
    Coin(bool),
}

impl Guess {
    /// The generator kind this guess applies to.
    pub fn kind(self) -> OutcomeKind {
        match self {
            Self::Die(_) => OutcomeKind::Die,
            Self::Coin(_) => OutcomeKind::Coin,
        }
    }

    /// Whether this guess exactly matches the given outcome.
    ///
    /// Outcomes of a different kind never match.
    pub fn matches(self, outcome: &Outcome) -> bool {
        match (self, outcome) {
            (Self::Die(guess), Outcome::DieRoll(value)) => guess == *value,
            (Self::Coin(guess), Outcome::CoinFlip(heads)) => guess == *heads,
            _ => false,
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Die(value) => write!(f, "{value}"),
            Self::Coin(true) => write!(f, "heads"),
            Self::Coin(false) => write!(f, "tails"),
        }
    }
}
