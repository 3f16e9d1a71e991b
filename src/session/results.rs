//! Session result types
//!
//! Defines result structures returned by session operations.

use crate::auth::Account;
use crate::error::handlers::user_message;
use crate::error::AuthError;

/// Result of a login submission
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(Account),
    /// Missing, malformed or non-matching credentials.
    Rejected(AuthError),
    /// The roster could not be fetched or trusted.
    Unavailable(AuthError),
    /// Another submission for this session was still in flight.
    Ignored,
}

/// Result of a logout operation
#[derive(Debug, Clone, PartialEq)]
pub struct LogoutResult {
    pub previous_user: Option<Account>,
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }

    /// Text to show the operator, or `None` when nothing should be shown.
    pub fn message(&self) -> Option<String> {
        match self {
            LoginOutcome::Authenticated(account) => Some(format!("Welcome {}", account.full_name)),
            LoginOutcome::Rejected(AuthError::MissingCredentials) => {
                Some("Please enter a username and password".to_string())
            }
            LoginOutcome::Rejected(e) | LoginOutcome::Unavailable(e) => {
                Some(user_message(e.kind()).to_string())
            }
            LoginOutcome::Ignored => None,
        }
    }
}

impl LogoutResult {
    pub fn was_logged_in(&self) -> bool {
        self.previous_user.is_some()
    }
}
