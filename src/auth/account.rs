//! Operator accounts
//!
//! Defines the roster entry checked by the credential verifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operator role. Roles the core does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Owner,
    Cashier,
    Other(String),
}

/// One entry of the operator roster.
///
/// The password is an opaque string compared by exact match. Plaintext
/// storage is only acceptable for the demo roster; production rosters need
/// hashed credentials, which would change the matching contract.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Owner => "owner",
            Role::Cashier => "cashier",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "owner" => Role::Owner,
            "cashier" => Role::Cashier,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            full_name: full_name.into(),
            role,
            is_active: true,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish()
    }
}
