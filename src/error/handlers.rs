//! Error handlers
//!
//! Maps errors to log records and to the text shown to the operator.

use log::{error, warn};

use crate::error::types::{ErrorKind, PosError};

/// Log a POS error at a level matching its kind.
pub fn handle_error(err: &PosError) {
    match err.kind() {
        ErrorKind::InvalidInput | ErrorKind::Configuration => error!("POS error: {}", err),
        // Bad credentials and a missing roster share one log line.
        ErrorKind::NotFound | ErrorKind::RosterUnavailable => {
            warn!("login attempt did not succeed")
        }
        ErrorKind::CatalogUnavailable => warn!("POS error: {}", err),
    }
}

/// Convert an error kind to the message shown to the end user.
///
/// The `NotFound` text never says which of username or password was wrong.
pub fn user_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidInput => "Some of the entered or stored values are invalid",
        ErrorKind::NotFound => "Invalid username or password",
        ErrorKind::RosterUnavailable => {
            "Unable to reach the user directory, please try again"
        }
        ErrorKind::CatalogUnavailable => "Unable to load products, please try again",
        ErrorKind::Configuration => "The terminal is misconfigured",
    }
}

/// Whether the caller may retry the failed operation unchanged.
pub fn is_retryable(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::RosterUnavailable | ErrorKind::CatalogUnavailable
    )
}
