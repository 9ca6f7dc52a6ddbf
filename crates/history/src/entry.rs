//! Committed history entries and their identifiers.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier assigned to a state when it is committed.
///
/// Structurally identical snapshots committed twice get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(Uuid);

impl StateId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One committed state in the history.
#[derive(Debug, Clone)]
pub struct HistoryEntry<S> {
    /// Identifier assigned at commit time.
    pub id: StateId,

    /// When the state was committed.
    pub committed_at: DateTime<Utc>,

    /// The committed state.
    pub state: S,
}

impl<S> HistoryEntry<S> {
    /// Wraps a state with a fresh identifier and the current time.
    pub fn new(state: S) -> Self {
        Self {
            id: StateId::generate(),
            committed_at: Utc::now(),
            state,
        }
    }

    /// Returns a reference to the state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes the entry, returning the state.
    pub fn into_state(self) -> S {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_assigns_distinct_ids() {
        let a = HistoryEntry::new(1);
        let b = HistoryEntry::new(1);
        assert_ne!(a.id, b.id);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_state_id_displays_without_hyphens() {
        let id = HistoryEntry::new(()).id;
        let shown = id.to_string();
        assert_eq!(shown.len(), 32);
        assert_eq!(shown, id.as_uuid().simple().to_string());
    }

    #[test]
    fn test_entry_into_state() {
        let entry = HistoryEntry::new("seed".to_string());
        assert!(entry.committed_at <= Utc::now());
        assert_eq!(entry.into_state(), "seed");
    }
}
