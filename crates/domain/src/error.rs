//! Domain error types.

use thiserror::Error;

use crate::entity::EntityKind;

/// Errors raised by uniqueness-enforcing collections.
///
/// Every variant carries the entity kind and the offending natural key or
/// index, so callers can build a precise message without re-querying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// An equivalent element already exists.
    #[error("Duplicate {kind}: {key}")]
    Duplicate { kind: EntityKind, key: String },

    /// The target element is absent.
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    /// An index-based lookup fell outside the collection.
    #[error("Invalid {kind} index {index} (collection holds {len})")]
    IndexOutOfBounds {
        kind: EntityKind,
        index: usize,
        len: usize,
    },
}

impl EntityError {
    /// Returns the entity kind the error refers to.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityError::Duplicate { kind, .. }
            | EntityError::NotFound { kind, .. }
            | EntityError::IndexOutOfBounds { kind, .. } => *kind,
        }
    }
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, EntityError>;
