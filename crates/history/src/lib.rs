//! Undo/redo history of committed states.
//!
//! States are appended by `commit` and navigated with `undo`/`redo`; a commit
//! after an undo drops the undone states.

pub mod entry;
pub mod error;
pub mod history;

pub use entry::{HistoryEntry, StateId};
pub use error::{HistoryError, Result};
pub use history::VersionedHistory;
