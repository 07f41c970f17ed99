//! Random outcome types.

use serde::{Deserialize, Serialize};

/// A single result produced by one of the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A die roll, from 1 to the face count used for the roll.
    DieRoll(u32),
    /// A coin flip; `true` is the heads face.
    CoinFlip(bool),
    /// A card draw, as a display label like `A♠`.
    CardDraw(String),
}

impl Outcome {
    /// The kind of generator that produced this outcome.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::DieRoll(_) => OutcomeKind::Die,
            Self::CoinFlip(_) => OutcomeKind::Coin,
            Self::CardDraw(_) => OutcomeKind::Card,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DieRoll(value) => write!(f, "{value}"),
            Self::CoinFlip(true) => write!(f, "heads"),
            Self::CoinFlip(false) => write!(f, "tails"),
            Self::CardDraw(card) => write!(f, "{card}"),
        }
    }
}

/// The three generator kinds, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// Die rolls.
    Die,
    /// Coin flips.
    Coin,
    /// Card draws.
    Card,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Die => write!(f, "die"),
            Self::Coin => write!(f, "coin"),
            Self::Card => write!(f, "card"),
        }
    }
}
