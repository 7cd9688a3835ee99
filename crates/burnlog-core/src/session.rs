//! Session-scoped activity log

use crate::types::ActivityEntry;
use serde::{Deserialize, Serialize};

/// Append-only log of activities for one dashboard session.
///
/// Created when a session starts and dropped when it ends; nothing is
/// persisted. Entries keep insertion order and are immutable once appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    entries: Vec<ActivityEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. No dedup, no capacity limit.
    pub fn append(&mut self, entry: ActivityEntry) {
        self.entries.push(entry);
        tracing::debug!(len = self.entries.len(), "activity logged");
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
