//! Login flow
//!
//! Drives one terminal's login state machine. Attempts are serialized per
//! session: a submit that arrives while another is fetching the roster is
//! dropped, so the success path can only fire once per attempt.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::{Mutex, RwLock};

use crate::auth::{Account, QuickLogin, authenticate, validate_roster, validate_submission};
use crate::datasource::DataSource;
use crate::error::AuthError;
use crate::session::results::{LoginOutcome, LogoutResult};
use crate::session::state::{LoginPhase, SessionState};

/// Login state and collaborators for one terminal.
pub struct Session {
    source: Arc<dyn DataSource>,
    state: RwLock<SessionState>,
    in_flight: Mutex<()>,
    max_input_length: usize,
}

impl Session {
    pub fn new(source: Arc<dyn DataSource>, max_input_length: usize) -> Self {
        Self {
            source,
            state: RwLock::new(SessionState::default()),
            in_flight: Mutex::new(()),
            max_input_length,
        }
    }

    /// Submits credentials typed by the operator.
    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Login already in progress, ignoring submit");
            return LoginOutcome::Ignored;
        };

        if let Err(e) = validate_submission(username, password, self.max_input_length) {
            let previous = self.state.write().await.fail(LoginPhase::Rejected);
            log_replaced(previous);
            return LoginOutcome::Rejected(e);
        }

        let previous = self.state.write().await.begin_attempt();
        log_replaced(previous);
        let outcome = self.verify(username, password).await;

        let mut state = self.state.write().await;
        match &outcome {
            LoginOutcome::Authenticated(account) => {
                info!("Operator {} signed in as {}", account.username, account.role);
                state.sign_in(account.clone());
            }
            LoginOutcome::Rejected(_) => {
                state.fail(LoginPhase::Rejected);
            }
            LoginOutcome::Unavailable(_) => {
                state.fail(LoginPhase::Unavailable);
            }
            LoginOutcome::Ignored => {}
        }
        outcome
    }

    /// Signs in with a quick-login preset through the regular check.
    pub async fn quick_login(&self, preset: &QuickLogin) -> LoginOutcome {
        debug!("Quick login as {}", preset.label);
        self.submit(&preset.username, &preset.password).await
    }

    pub async fn logout(&self) -> LogoutResult {
        let previous_user = self.state.write().await.logout();
        if let Some(account) = &previous_user {
            info!("Operator {} signed out", account.username);
        }
        LogoutResult { previous_user }
    }

    pub async fn current_user(&self) -> Option<Account> {
        self.state.read().await.current_user().cloned()
    }

    pub async fn phase(&self) -> LoginPhase {
        self.state.read().await.phase()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.is_logged_in()
    }

    async fn verify(&self, username: &str, password: &str) -> LoginOutcome {
        let roster = match self.source.fetch_users().await {
            Ok(roster) => roster,
            Err(e) => {
                warn!("login attempt did not succeed");
                return LoginOutcome::Unavailable(AuthError::RosterUnavailable(e.to_string()));
            }
        };

        if let Err(e) = validate_roster(&roster) {
            error!("Refusing to authenticate against roster: {}", e);
            return LoginOutcome::Unavailable(AuthError::RosterUnavailable(e.to_string()));
        }

        match authenticate(username, password, &roster) {
            Ok(account) => LoginOutcome::Authenticated(account),
            Err(e) => {
                warn!("login attempt did not succeed");
                LoginOutcome::Rejected(e)
            }
        }
    }
}

fn log_replaced(previous: Option<Account>) {
    if let Some(account) = previous {
        info!("Operator {} signed out by a new login attempt", account.username);
    }
}
