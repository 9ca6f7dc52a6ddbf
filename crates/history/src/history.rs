//! Pointer-based navigation over committed states.

use crate::{HistoryEntry, HistoryError, Result, StateId};

/// Linear, branch-free history of committed states with a current pointer.
///
/// ```text
///  entries:  [S0] [S1] [S2] [S3]
///                       ^
///                    pointer
/// ```
///
/// `undo`/`redo` move the pointer; `commit` drops everything after the
/// pointer before appending, so a new commit after an undo discards the
/// undone states for good. The history is never empty and
/// `pointer < len` always holds.
#[derive(Debug, Clone)]
pub struct VersionedHistory<S> {
    entries: Vec<HistoryEntry<S>>,
    pointer: usize,
}

impl<S> VersionedHistory<S> {
    /// Creates a history holding only `seed`.
    pub fn new(seed: S) -> Self {
        Self {
            entries: vec![HistoryEntry::new(seed)],
            pointer: 0,
        }
    }

    /// Returns the state at the pointer.
    pub fn current(&self) -> &S {
        &self.entries[self.pointer].state
    }

    /// Returns the entry at the pointer.
    pub fn current_entry(&self) -> &HistoryEntry<S> {
        &self.entries[self.pointer]
    }

    /// Returns the pointer position.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Returns the number of recorded states, including undone ones.
    pub fn state_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over all recorded entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry<S>> {
        self.entries.iter()
    }

    /// Returns true if there is an older state to return to.
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Returns true if there is an undone state to return to.
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Records `state` as the newest state and moves the pointer to it.
    ///
    /// Any states after the pointer are discarded first.
    pub fn commit(&mut self, state: S) -> StateId {
        let discarded = self.entries.len() - self.pointer - 1;
        self.entries.truncate(self.pointer + 1);
        let entry = HistoryEntry::new(state);
        let id = entry.id;
        self.entries.push(entry);
        self.pointer = self.entries.len() - 1;

        metrics::counter!("history_commits_total").increment(1);
        tracing::info!(
            state_id = %id,
            pointer = self.pointer,
            discarded,
            "state committed"
        );
        id
    }

    /// Moves the pointer one state back and returns that state.
    pub fn undo(&mut self) -> Result<&S> {
        if !self.can_undo() {
            return Err(HistoryError::NoUndoableState {
                len: self.entries.len(),
            });
        }
        self.pointer -= 1;

        metrics::counter!("history_undo_total").increment(1);
        tracing::info!(pointer = self.pointer, "state undone");
        Ok(self.current())
    }

    /// Moves the pointer one state forward and returns that state.
    pub fn redo(&mut self) -> Result<&S> {
        if !self.can_redo() {
            return Err(HistoryError::NoRedoableState {
                pointer: self.pointer,
                len: self.entries.len(),
            });
        }
        self.pointer += 1;

        metrics::counter!("history_redo_total").increment(1);
        tracing::info!(pointer = self.pointer, "state redone");
        Ok(self.current())
    }

    /// Replaces the whole history with a single seed state.
    pub fn reset(&mut self, seed: S) {
        self.entries = vec![HistoryEntry::new(seed)];
        self.pointer = 0;
        tracing::info!("history reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(states: &[&'static str]) -> VersionedHistory<&'static str> {
        let mut history = VersionedHistory::new(states[0]);
        for state in &states[1..] {
            history.commit(*state);
        }
        history
    }

    #[test]
    fn test_fresh_history_cannot_navigate() {
        let mut history = VersionedHistory::new("S0");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(matches!(
            history.undo(),
            Err(HistoryError::NoUndoableState { len: 1 })
        ));
        assert!(matches!(
            history.redo(),
            Err(HistoryError::NoRedoableState { pointer: 0, len: 1 })
        ));
        assert_eq!(*history.current(), "S0");
    }

    #[test]
    fn test_commit_advances_pointer() {
        let history = history_of(&["S0", "S1", "S2"]);
        assert_eq!(history.pointer(), 2);
        assert_eq!(history.state_count(), 3);
        assert_eq!(*history.current(), "S2");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = history_of(&["S0", "S1"]);
        assert_eq!(*history.undo().unwrap(), "S0");
        assert!(history.can_redo());
        assert_eq!(*history.redo().unwrap(), "S1");
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut history = history_of(&["S0", "S1", "S2"]);
        history.undo().unwrap();
        history.commit("S3");

        let states: Vec<_> = history.entries().map(|e| *e.state()).collect();
        assert_eq!(states, vec!["S0", "S1", "S3"]);
        assert!(history.redo().is_err());
    }

    #[test]
    fn test_failed_undo_leaves_history_unchanged() {
        let mut history = history_of(&["S0", "S1"]);
        history.undo().unwrap();
        let id_before = history.current_entry().id;
        for _ in 0..3 {
            assert!(history.undo().is_err());
        }
        assert_eq!(history.pointer(), 0);
        assert_eq!(history.current_entry().id, id_before);
        assert_eq!(history.state_count(), 2);
    }

    #[test]
    fn test_commit_returns_entry_id() {
        let mut history = VersionedHistory::new(0);
        let id = history.commit(1);
        assert_eq!(history.current_entry().id, id);
    }

    #[test]
    fn test_reset() {
        let mut history = history_of(&["S0", "S1", "S2"]);
        history.reset("fresh");
        assert_eq!(history.state_count(), 1);
        assert_eq!(history.pointer(), 0);
        assert_eq!(*history.current(), "fresh");
    }
}
