//! Staff login accounts.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::value_objects::Username;

/// A staff account, identified by username.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: Username,
    password: String,
}

impl Account {
    /// Creates an account.
    pub fn new(username: impl Into<Username>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if `password` matches the stored password.
    pub fn verify(&self, password: &str) -> bool {
        self.password == password
    }

    /// Returns a copy of the account with a new password.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            username: self.username.clone(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Entity for Account {
    type Key = Username;
    const KIND: EntityKind = EntityKind::Account;

    fn key(&self) -> Username {
        self.username.clone()
    }
}
