//! The preference record and the store seam.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use alea_core::{CoinLabels, GeneratorConfig};

use crate::error::StoreResult;

fn default_die_sides() -> u32 {
    6
}

fn default_heads() -> String {
    "heads".to_string()
}

fn default_tails() -> String {
    "tails".to_string()
}

/// The persisted preference record.
///
/// Field names double as the storage key space; every field falls back to
/// its default when absent, so a partial or missing record reads cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Number of faces on the die.
    #[serde(default = "default_die_sides")]
    pub die_sides: u32,
    /// Label for the heads face of the coin.
    #[serde(default = "default_heads")]
    pub coin_heads: String,
    /// Label for the tails face of the coin.
    #[serde(default = "default_tails")]
    pub coin_tails: String,
    /// Custom card labels.
    #[serde(default)]
    pub custom_cards: BTreeSet<String>,
    /// Best guess streak across all runs.
    #[serde(default)]
    pub best_streak: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            die_sides: default_die_sides(),
            coin_heads: default_heads(),
            coin_tails: default_tails(),
            custom_cards: BTreeSet::new(),
            best_streak: 0,
        }
    }
}

impl Preferences {
    /// View the generation-parameter fields as a [`GeneratorConfig`].
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            die_sides: self.die_sides,
            coin: CoinLabels {
                heads: self.coin_heads.clone(),
                tails: self.coin_tails.clone(),
            },
            custom_cards: self.custom_cards.clone(),
        }
    }

    /// Fold a [`GeneratorConfig`] back into the record.
    pub fn apply_generator_config(&mut self, config: &GeneratorConfig) {
        self.die_sides = config.die_sides;
        self.coin_heads = config.coin.heads.clone();
        self.coin_tails = config.coin.tails.clone();
        self.custom_cards = config.custom_cards.clone();
    }
}

/// Durable storage for [`Preferences`].
///
/// Reads always succeed logically: a missing backing record yields
/// defaults. Writes are whole-record; the per-field helpers read, modify,
/// and write, giving last-write-wins semantics per field. Callers may treat
/// writes as fire-and-forget: a failed write leaves the previous record in
/// place and is safe to retry on the next update.
pub trait PrefStore {
    /// Current preferences, defaulted where nothing is stored yet.
    fn read(&self) -> StoreResult<Preferences>;

    /// Persist the whole record.
    fn write(&mut self, prefs: &Preferences) -> StoreResult<()>;

    /// Update the die face count (clamped to a minimum of 1).
    fn set_die_sides(&mut self, sides: u32) -> StoreResult<()> {
        let mut prefs = self.read()?;
        prefs.die_sides = sides.max(1);
        self.write(&prefs)
    }

    /// Update both coin labels.
    fn set_coin_labels(&mut self, heads: &str, tails: &str) -> StoreResult<()> {
        let mut prefs = self.read()?;
        prefs.coin_heads = heads.to_string();
        prefs.coin_tails = tails.to_string();
        self.write(&prefs)
    }

    /// Replace the custom card set.
    fn set_custom_cards(&mut self, cards: BTreeSet<String>) -> StoreResult<()> {
        let mut prefs = self.read()?;
        prefs.custom_cards = cards;
        self.write(&prefs)
    }

    /// Record a best streak.
    fn set_best_streak(&mut self, streak: u32) -> StoreResult<()> {
        let mut prefs = self.read()?;
        prefs.best_streak = streak;
        self.write(&prefs)
    }
}
