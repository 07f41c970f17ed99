//! User-editable generation parameters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{AleaError, AleaResult};

/// The two face labels of the coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinLabels {
    /// Label shown for the heads face.
    pub heads: String,
    /// Label shown for the tails face.
    pub tails: String,
}

impl CoinLabels {
    /// Create a pair of labels, rejecting blank ones.
    pub fn new(heads: &str, tails: &str) -> AleaResult<Self> {
        let heads = heads.trim();
        let tails = tails.trim();
        if heads.is_empty() || tails.is_empty() {
            return Err(AleaError::EmptyLabel);
        }
        Ok(Self {
            heads: heads.to_string(),
            tails: tails.to_string(),
        })
    }

    /// The label for one flip result.
    pub fn label(&self, heads: bool) -> &str {
        if heads { &self.heads } else { &self.tails }
    }
}

impl Default for CoinLabels {
    fn default() -> Self {
        Self {
            heads: "heads".to_string(),
            tails: "tails".to_string(),
        }
    }
}

/// User-editable generation parameters.
///
/// Owned by the preference store between runs; the prediction game only
/// reads the face count to bound die guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of faces on the die (never below 1).
    pub die_sides: u32,
    /// Coin face labels.
    pub coin: CoinLabels,
    /// Custom card labels, unique and unordered.
    pub custom_cards: BTreeSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            die_sides: 6,
            coin: CoinLabels::default(),
            custom_cards: BTreeSet::new(),
        }
    }
}

impl GeneratorConfig {
    /// Set the die face count (clamped to a minimum of 1).
    pub fn set_die_sides(&mut self, sides: u32) {
        self.die_sides = sides.max(1);
    }

    /// Set the die face count on a fresh config (clamped to a minimum of 1).
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.set_die_sides(sides);
        self
    }

    /// Add a custom card label. Returns `false` if it was already present.
    ///
    /// Blank labels are rejected.
    pub fn add_card(&mut self, label: &str) -> AleaResult<bool> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AleaError::EmptyLabel);
        }
        Ok(self.custom_cards.insert(label.to_string()))
    }

    /// Remove a custom card label. Returns whether it was present.
    pub fn remove_card(&mut self, label: &str) -> bool {
        self.custom_cards.remove(label.trim())
    }
}
