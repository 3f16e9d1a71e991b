//! Authentication system
//!
//! Handles operator accounts, credential validation and the demo roster.

pub mod account;
pub mod credentials;
pub mod validator;

pub use account::{Account, Role};
pub use credentials::{QuickLogin, default_quick_logins, demo_roster};
pub use validator::{authenticate, validate_roster, validate_submission};
