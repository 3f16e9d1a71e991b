//! Module `session::state`
//!
//! Defines the per-terminal login state: the phase of the current login
//! attempt and the operator signed in, if any.

use crate::auth::Account;

/// Phase of the login state machine.
///
/// `Idle -> Submitting -> {Authenticated, Rejected, Unavailable}`
///
/// An operator is signed in exactly when the phase is `Authenticated`. A new
/// attempt signs out whoever was signed in before it, so a failed re-login
/// leaves nobody signed in rather than the previous operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Rejected,
    Unavailable,
}

/// Represents the login state owned by one terminal session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current_user: Option<Account>,
    phase: LoginPhase,
}

impl SessionState {
    /// Clears the signed-in operator and returns to `Idle`.
    pub fn logout(&mut self) -> Option<Account> {
        self.phase = LoginPhase::Idle;
        self.current_user.take()
    }

    /// Starts a login attempt, signing out the previous operator.
    pub fn begin_attempt(&mut self) -> Option<Account> {
        self.phase = LoginPhase::Submitting;
        self.current_user.take()
    }

    /// Ends an attempt without a signed-in operator.
    pub fn fail(&mut self, phase: LoginPhase) -> Option<Account> {
        self.phase = phase;
        self.current_user.take()
    }

    /// Records a successful login.
    pub fn sign_in(&mut self, account: Account) {
        self.current_user = Some(account);
        self.phase = LoginPhase::Authenticated;
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the signed-in operator, if any.
    pub fn current_user(&self) -> Option<&Account> {
        self.current_user.as_ref()
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

}
