//! Data-access port
//!
//! The roster and the product catalog live outside the core. Callers map a
//! failed `fetch_users` to `RosterUnavailable` and a failed `fetch_products`
//! to `CatalogUnavailable`; adapters never retry on their own.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::auth::Account;
use crate::catalog::Product;
use crate::error::DataSourceError;

pub use file::JsonFileDataSource;
pub use memory::MemoryDataSource;

/// Port for reading operator accounts and products.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the full operator roster.
    async fn fetch_users(&self) -> Result<Vec<Account>, DataSourceError>;

    /// Returns every product. Derived figures may be stale; the catalog
    /// recomputes them on load.
    async fn fetch_products(&self) -> Result<Vec<Product>, DataSourceError>;
}
