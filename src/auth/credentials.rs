//! Demo credentials
//!
//! The demo roster and the quick-login presets offered on the login screen.
//! Both use plaintext passwords and exist for trying the terminal out only.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::auth::account::{Account, Role};

/// Password shared by the demo accounts.
pub const DEMO_PASSWORD: &str = "123456";

/// Static demo roster - in production this would come from a user directory
pub(crate) static DEMO_ROSTER: LazyLock<Vec<Account>> = LazyLock::new(|| {
    vec![
        Account::new("owner", DEMO_PASSWORD, "Store Owner", Role::Owner),
        Account::new("cashier", DEMO_PASSWORD, "Front Cashier", Role::Cashier),
    ]
});

/// A one-click login shortcut. It goes through the regular credential check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickLogin {
    pub label: String,
    pub username: String,
    pub password: String,
}

/// Returns a copy of the demo roster.
pub fn demo_roster() -> Vec<Account> {
    DEMO_ROSTER.clone()
}

/// Quick-login presets matching the demo roster.
pub fn default_quick_logins() -> Vec<QuickLogin> {
    DEMO_ROSTER
        .iter()
        .map(|account| QuickLogin {
            label: account.role.to_string(),
            username: account.username.clone(),
            password: account.password.clone(),
        })
        .collect()
}
