//! Model error types.

use domain::{EntityError, Username};
use history::HistoryError;
use ledger::LedgerError;
use thiserror::Error;

/// Errors surfaced by the model façade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A uniqueness or lookup rule of an entity collection was violated.
    #[error("{0}")]
    Entity(#[from] EntityError),

    /// A ledger transaction failed and was rolled back.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Undo or redo was requested at a history boundary.
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Username and password do not match a stored account.
    #[error("Invalid credentials for {username}")]
    InvalidCredentials { username: Username },
}

/// Convenience type alias for model results.
pub type Result<T> = std::result::Result<T, ModelError>;
