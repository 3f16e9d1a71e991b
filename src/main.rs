//! POS Terminal - Entry Point
//!
//! Signs an operator in, loads the product catalog and logs the cost
//! breakdown of every product.
//!
//! Usage: `pos-core [username password]`. Without arguments the first
//! configured quick-login preset is used.

use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info, warn};

use pos_core::catalog::fetch_catalog;
use pos_core::config::PosConfig;
use pos_core::datasource::{DataSource, JsonFileDataSource, MemoryDataSource};
use pos_core::error::handlers::{handle_error, user_message};
use pos_core::session::Session;
use pos_core::utils::logging::setup_logging;
use pos_core::PosError;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match PosConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            handle_error(&PosError::from(e));
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&config.log_level);

    info!("Launching POS terminal...");

    match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            handle_error(&e);
            error!("{}", user_message(e.kind()));
            ExitCode::FAILURE
        }
    }
}

/// Runs one terminal session. A login that does not succeed has already
/// been reported by the session, so it only turns into a failing exit code.
async fn run(config: &PosConfig) -> Result<ExitCode, PosError> {
    let source: Arc<dyn DataSource> = match &config.data_dir {
        Some(dir) => {
            let files = JsonFileDataSource::new(dir);
            info!("Using data directory {}", files.dir().display());
            Arc::new(files)
        }
        None => {
            info!("Using built-in demo data");
            Arc::new(MemoryDataSource::demo()?)
        }
    };
    let session = Session::new(Arc::clone(&source), config.max_username_length);

    let mut args = std::env::args().skip(1);
    let outcome = match (args.next(), args.next()) {
        (Some(username), Some(password)) => session.submit(&username, &password).await,
        _ => match config.quick_logins.first() {
            Some(preset) => session.quick_login(preset).await,
            None => {
                warn!("No credentials given and no quick-login preset configured");
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let signed_in = outcome.is_authenticated();
    match outcome.message() {
        Some(message) if signed_in => info!("{}", message),
        Some(message) => warn!("{}", message),
        None => {}
    }
    if !signed_in {
        return Ok(ExitCode::FAILURE);
    }

    let catalog = fetch_catalog(source.as_ref()).await?;
    info!("Loaded {} products", catalog.len());

    for row in catalog.rows(&config.currency)? {
        info!(
            "{} [{}] barcode {} | cost {} | price {} | profit {} | margin {}",
            row.name, row.sku, row.barcode, row.cost, row.price, row.profit, row.margin
        );
        if row.is_loss {
            warn!("{} sells below cost", row.name);
        }
    }

    for product in catalog.products().iter().filter(|p| p.is_manufactured()) {
        let view = catalog.recipe_view(&product.id, &config.currency)?;
        info!("Recipe for {}:", view.product_name);
        for line in &view.lines {
            info!(
                "  {} {} {} @ {} = {}",
                line.material_name, line.quantity, line.unit, line.unit_cost, line.total_cost
            );
        }
    }

    session.logout().await;
    Ok(ExitCode::SUCCESS)
}
