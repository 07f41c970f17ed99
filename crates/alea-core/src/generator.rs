//! Uniform value generators.
//!
//! Each call produces one independent, uniformly distributed value from a
//! small finite domain. Card draws are with replacement; there is no deck
//! state anywhere.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AleaError, AleaResult};
use crate::outcome::Outcome;

/// The four suit symbols of a standard deck.
const SUITS: [&str; 4] = ["♠", "♥", "♦", "♣"];

/// The thirteen rank symbols of a standard deck.
const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A source of uniformly distributed random outcomes.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed for reproducible outcomes.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll a die with the given number of faces.
    ///
    /// A face count of zero is treated as one; there is no error path.
    pub fn roll_die(&mut self, sides: u32) -> Outcome {
        let sides = sides.max(1);
        Outcome::DieRoll(self.rng.random_range(1..=sides))
    }

    /// Flip a fair coin.
    pub fn flip_coin(&mut self) -> Outcome {
        Outcome::CoinFlip(self.rng.random())
    }

    /// Draw one card from a standard 52-card deck, with replacement.
    pub fn draw_card(&mut self) -> Outcome {
        let rank = RANKS[self.rng.random_range(0..RANKS.len())];
        let suit = SUITS[self.rng.random_range(0..SUITS.len())];
        Outcome::CardDraw(format!("{rank}{suit}"))
    }

    /// Draw one label from a custom card set, with replacement.
    pub fn draw_custom(&mut self, cards: &BTreeSet<String>) -> AleaResult<Outcome> {
        if cards.is_empty() {
            return Err(AleaError::NoCustomCards);
        }
        let index = self.rng.random_range(0..cards.len());
        let label = cards
            .iter()
            .nth(index)
            .cloned()
            .ok_or(AleaError::NoCustomCards)?;
        Ok(Outcome::CardDraw(label))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
