//! In-memory preference storage.
//!
//! The test and ephemeral-run stand-in for [`JsonStore`]; contents are lost
//! on drop.

use crate::error::StoreResult;
use crate::prefs::{PrefStore, Preferences};

/// Preferences held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    prefs: Preferences,
}

impl MemoryStore {
    /// Create a store with all defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn read(&self) -> StoreResult<Preferences> {
        Ok(self.prefs.clone())
    }

    fn write(&mut self, prefs: &Preferences) -> StoreResult<()> {
        self.prefs = prefs.clone();
        Ok(())
    }
}
