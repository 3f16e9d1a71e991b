//! In-memory data source
//!
//! Serves a fixed roster and product list. Used for the demo terminal and in
//! tests, where it can be switched offline to exercise the unavailable paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::auth::{Account, demo_roster};
use crate::catalog::{Product, ProductDraft, RecipeItem, build_product};
use crate::costing::{Money, Quantity, UnitCost};
use crate::datasource::DataSource;
use crate::error::{CatalogError, DataSourceError};

#[derive(Debug)]
pub struct MemoryDataSource {
    users: Vec<Account>,
    products: Vec<Product>,
    online: AtomicBool,
}

impl MemoryDataSource {
    pub fn new(users: Vec<Account>, products: Vec<Product>) -> Self {
        Self {
            users,
            products,
            online: AtomicBool::new(true),
        }
    }

    /// Demo roster plus a small drinks menu.
    pub fn demo() -> Result<Self, CatalogError> {
        Ok(Self::new(demo_roster(), demo_products()?))
    }

    /// Makes every subsequent fetch fail (or succeed again).
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), DataSourceError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DataSourceError::Unavailable("memory data source is offline".into()))
        }
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    async fn fetch_users(&self) -> Result<Vec<Account>, DataSourceError> {
        self.ensure_online()?;
        Ok(self.users.clone())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, DataSourceError> {
        self.ensure_online()?;
        Ok(self.products.clone())
    }
}

fn demo_products() -> Result<Vec<Product>, CatalogError> {
    let lemonade = ProductDraft {
        name: "Fresh Lemonade".into(),
        sku: "DRK-LEM-01".into(),
        barcode: Some("6221031000014".into()),
        price: Money::from_cents(2500),
        recipe: vec![
            RecipeItem::new("lemon", Quantity::from_units(2)?, "pcs", UnitCost::from_cents(125)?),
            RecipeItem::new("sugar", Quantity::from_micros(30_000), "kg", UnitCost::from_cents(3000)?),
            RecipeItem::new("mint", Quantity::from_micros(5_000), "kg", UnitCost::from_cents(20000)?),
            RecipeItem::new("cup 12oz", Quantity::from_units(1)?, "pcs", UnitCost::from_cents(150)?),
        ],
    };
    let iced_coffee = ProductDraft {
        name: "Iced Coffee".into(),
        sku: "DRK-COF-02".into(),
        barcode: None,
        price: Money::from_cents(3500),
        recipe: vec![
            RecipeItem::new("coffee beans", Quantity::from_micros(18_000), "kg", UnitCost::from_cents(60000)?),
            RecipeItem::new("milk", Quantity::from_micros(200_000), "l", UnitCost::from_cents(3200)?),
            RecipeItem::new("cup 16oz", Quantity::from_units(1)?, "pcs", UnitCost::from_cents(175)?),
        ],
    };
    let water = ProductDraft {
        name: "Mineral Water 600ml".into(),
        sku: "DRK-WTR-03".into(),
        barcode: Some("6221031000038".into()),
        price: Money::from_cents(800),
        recipe: vec![],
    };

    [("demo-lemonade", lemonade), ("demo-iced-coffee", iced_coffee), ("demo-water", water)]
        .into_iter()
        .map(|(id, draft)| build_product(id.to_string(), draft))
        .collect()
}
