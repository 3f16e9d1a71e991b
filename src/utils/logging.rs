//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the terminal. `RUST_LOG` overrides `default_level`.
pub fn setup_logging(default_level: &str) {
    if let Err(e) = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .try_init()
    {
        log::warn!("Logger already initialised: {}", e);
    }
}
