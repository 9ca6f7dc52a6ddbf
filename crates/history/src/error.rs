//! Navigation errors.

use thiserror::Error;

/// Errors raised when navigating past either end of the history.
///
/// Both are boundary conditions: the history is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo was requested at the oldest state.
    #[error("No undoable state: already at the oldest of {len} states")]
    NoUndoableState { len: usize },

    /// Redo was requested at the newest state.
    #[error("No redoable state: already at state {pointer} of {len}")]
    NoRedoableState { pointer: usize, len: usize },
}

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
