//! Ledger transaction state machine.

/// The state of a ledger transaction.
///
/// State transitions:
/// ```text
/// Open ──┬──► Committed
///        └──► RolledBack
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionState {
    /// Deltas may still be applied.
    #[default]
    Open,

    /// All deltas applied and kept (terminal state).
    Committed,

    /// Applied deltas were reversed (terminal state).
    RolledBack,
}

impl TransactionState {
    /// Returns true if deltas can be applied in this state.
    pub fn is_open(&self) -> bool {
        matches!(self, TransactionState::Open)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionState::Open => "Open",
            TransactionState::Committed => "Committed",
            TransactionState::RolledBack => "RolledBack",
        }
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
