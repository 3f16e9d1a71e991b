//! Error handling
//!
//! Defines error types and handling for the POS core.

pub mod handlers;
pub mod types;

pub use types::*;
