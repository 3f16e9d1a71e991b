//! Terminal session
//!
//! Owns the login state machine and the signed-in operator for one
//! terminal. The core components stay stateless; this is the state holder
//! that calls them.

pub mod login;
pub mod results;
pub mod state;

pub use login::Session;
pub use results::{LoginOutcome, LogoutResult};
pub use state::{LoginPhase, SessionState};
