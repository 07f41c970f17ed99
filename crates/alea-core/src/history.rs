//! Chronological log of resolved actions.

use chrono::{DateTime, Utc};

use crate::outcome::Outcome;
use crate::predict::Verdict;

/// Maximum entries retained; the oldest are dropped first.
const CAP: usize = 100;

/// One resolved action.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// The generated outcome.
    pub outcome: Outcome,
    /// The verdict, when a guess rode on the action.
    pub verdict: Option<Verdict>,
    /// When the action resolved.
    pub timestamp: DateTime<Utc>,
}

/// A capped chronological log of resolved actions.
///
/// Lives only for the session; never persisted.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest past the cap.
    pub fn push(&mut self, outcome: Outcome, verdict: Option<Verdict>) {
        self.entries.push(HistoryEntry {
            outcome,
            verdict,
            timestamp: Utc::now(),
        });
        if self.entries.len() > CAP {
            let excess = self.entries.len() - CAP;
            self.entries.drain(..excess);
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
