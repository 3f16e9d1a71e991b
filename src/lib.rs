pub mod auth;
pub mod catalog;
pub mod config;
pub mod costing;
pub mod datasource;
pub mod error;
pub mod session;
pub mod utils;

pub use error::PosError;
pub use session::Session;
