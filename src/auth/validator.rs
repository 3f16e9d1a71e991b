//! Credential verifier
//!
//! Matches a submitted username/password against a roster by exact,
//! case-sensitive comparison and accepts active accounts only. There is no
//! hashing, salting or lockout: this is the demo contract, not a scheme to
//! ship with real operator credentials.

use std::collections::HashSet;

use crate::auth::account::Account;
use crate::error::AuthError;
use crate::utils::validation::is_valid_input;

/// Rejects empty or malformed submissions before any roster is fetched.
pub fn validate_submission(
    username: &str,
    password: &str,
    max_length: usize,
) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if !is_valid_input(username, max_length) {
        return Err(AuthError::MalformedInput("Invalid username format".into()));
    }
    if !is_valid_input(password, max_length) {
        return Err(AuthError::MalformedInput("Invalid password format".into()));
    }
    Ok(())
}

/// Checks that no username appears twice in the roster.
pub fn validate_roster(roster: &[Account]) -> Result<(), AuthError> {
    let mut seen = HashSet::new();
    for account in roster {
        if !seen.insert(account.username.as_str()) {
            return Err(AuthError::DuplicateUsername(account.username.clone()));
        }
    }
    Ok(())
}

/// Returns the active account whose username and password match exactly.
///
/// `NotFound` covers a wrong password, an unknown user and an inactive
/// account alike.
pub fn authenticate(username: &str, password: &str, roster: &[Account]) -> Result<Account, AuthError> {
    roster
        .iter()
        .find(|account| {
            account.username == username && account.password == password && account.is_active
        })
        .cloned()
        .ok_or(AuthError::NotFound)
}
