//! Command lifecycle.

use history::StateId;

use crate::error::Result;
use crate::model::Model;

/// The stage a command execution has reached.
///
/// State transitions:
/// ```text
/// Validating ──► Mutating ──┬──► Committed
///      │                    └──► RolledBack
///      └──────────────────────────► RolledBack
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandState {
    /// Checks run against the read-only model.
    #[default]
    Validating,

    /// The working snapshot is being changed.
    Mutating,

    /// The working snapshot was recorded in history (terminal state).
    Committed,

    /// The working snapshot was discarded (terminal state).
    RolledBack,
}

impl CommandState {
    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandState::Validating => "Validating",
            CommandState::Mutating => "Mutating",
            CommandState::Committed => "Committed",
            CommandState::RolledBack => "RolledBack",
        }
    }
}

impl std::fmt::Display for CommandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of user intent run against the model.
///
/// `validate` sees the model read-only, so every index, existence, and
/// uniqueness check finishes before `apply` may change anything.
pub trait Command {
    /// Value handed back to the caller on success.
    type Output;

    /// Returns the command name used in logs.
    fn name(&self) -> &'static str;

    /// Checks that the command can run against the current model.
    fn validate(&self, model: &Model) -> Result<()>;

    /// Mutates the working snapshot.
    fn apply(self, model: &mut Model) -> Result<Self::Output>;
}

/// Result of a successful command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult<T> {
    /// Value returned by the command.
    pub output: T,

    /// Identifier of the recorded state, or `None` if nothing changed.
    pub state_id: Option<StateId>,
}

impl<T> CommandResult<T> {
    /// Returns true if the command produced a new history state.
    pub fn is_recorded(&self) -> bool {
        self.state_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_validating() {
        assert_eq!(CommandState::default(), CommandState::Validating);
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandState::Validating.to_string(), "Validating");
        assert_eq!(CommandState::Mutating.to_string(), "Mutating");
        assert_eq!(CommandState::RolledBack.to_string(), "RolledBack");
    }
}
