use std::fs;
use std::sync::Arc;

use pos_core::auth::{Account, Role, demo_roster};
use pos_core::catalog::{Catalog, ProductDraft, RecipeItem, fetch_catalog, recompute_product};
use pos_core::costing::{Money, Quantity, UnitCost, compute_line_cost, compute_product_cost};
use pos_core::datasource::{DataSource, JsonFileDataSource, MemoryDataSource};
use pos_core::error::handlers::{is_retryable, user_message};
use pos_core::error::{AuthError, ErrorKind};
use pos_core::session::{LoginOutcome, LoginPhase, Session};

// Helper to write a data directory for the JSON adapter
fn write_data_dir(users: &str, products: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("users.json"), users).unwrap();
    fs::write(dir.path().join("products.json"), products).unwrap();
    dir
}

const USERS: &str = r#"[
  {"username":"owner","password":"123456","fullName":"Store Owner","role":"owner","isActive":true},
  {"username":"cashier","password":"123456","fullName":"Front Cashier","role":"cashier","isActive":false}
]"#;

// Stored cost/profit are stale: the real cost is 3 * 1.50 + 0.75 = 5.25.
const PRODUCTS: &str = r#"[
  {"id":"p-1","name":"Orange Juice","sku":"OJ-1","barcode":"6221000000017","price":20,
   "recipe":[
     {"materialName":"orange","quantity":3,"unit":"pcs","unitCost":1.5,"totalCost":4.5},
     {"materialName":"cup","quantity":1,"unit":"pcs","unitCost":0.75,"totalCost":0.5}
   ],
   "cost":5.0,"profit":15.0},
  {"id":"p-2","name":"Water","sku":"W-1","price":8,"recipe":[],"cost":0,"profit":8}
]"#;

#[tokio::test]
async fn test_demo_terminal_flow() {
    let source = Arc::new(MemoryDataSource::demo().unwrap());
    let session = Session::new(source.clone(), 64);

    let outcome = session.submit("owner", "123456").await;
    assert!(outcome.is_authenticated());

    let catalog = fetch_catalog(source.as_ref()).await.unwrap();
    assert_eq!(catalog.len(), 3);

    let rows = catalog.rows("EGP").unwrap();
    let lemonade = &rows[0];
    assert_eq!(lemonade.cost, "5.90 EGP");
    assert_eq!(lemonade.profit, "19.10 EGP");
    assert_eq!(lemonade.margin, "76.4%");

    assert!(session.logout().await.was_logged_in());
    assert_eq!(session.phase().await, LoginPhase::Idle);
}

#[tokio::test]
async fn test_json_source_login_and_recompute() {
    let dir = write_data_dir(USERS, PRODUCTS);
    let source = Arc::new(JsonFileDataSource::new(dir.path()));
    let session = Session::new(source.clone(), 64);

    assert!(session.submit("owner", "123456").await.is_authenticated());
    assert_eq!(
        session.submit("cashier", "123456").await,
        LoginOutcome::Rejected(AuthError::NotFound)
    );

    let catalog = fetch_catalog(source.as_ref()).await.unwrap();
    let juice = catalog.get("p-1").unwrap();
    assert_eq!(juice.cost, Money::from_cents(525));
    assert_eq!(juice.profit, Money::from_cents(1475));
    assert_eq!(juice.recipe[1].total_cost, Money::from_cents(75));
    assert_eq!(catalog.find_by_barcode("6221000000017").unwrap().id, "p-1");
}

// Stored totals are already correct; the unit costs are finer than a cent.
const FINE_PRODUCTS: &str = r#"[
  {"id":"s","name":"Saffron Tea","sku":"ST-1","price":20,
   "recipe":[
     {"materialName":"sugar","quantity":100,"unit":"g","unitCost":0.125,"totalCost":12.5},
     {"materialName":"saffron","quantity":0.0004,"unit":"g","unitCost":1000,"totalCost":0.4}
   ],
   "cost":12.9,"profit":7.1}
]"#;

#[tokio::test]
async fn test_fine_quantities_and_unit_costs_round_once() {
    let dir = write_data_dir(USERS, FINE_PRODUCTS);
    let source = JsonFileDataSource::new(dir.path());

    let catalog = fetch_catalog(&source).await.unwrap();
    let tea = catalog.get("s").unwrap();
    assert_eq!(tea.recipe[0].unit_cost, "0.125".parse::<UnitCost>().unwrap());
    assert_eq!(tea.recipe[0].total_cost, Money::from_cents(1250));
    assert_eq!(tea.recipe[1].quantity, Quantity::from_micros(400));
    assert_eq!(tea.recipe[1].total_cost, Money::from_cents(40));
    assert_eq!(tea.cost, Money::from_cents(1290));
    assert_eq!(tea.profit, Money::from_cents(710));

    // Nothing was stale, so the loaded product equals what was stored.
    let stored: Vec<pos_core::catalog::Product> = serde_json::from_str(FINE_PRODUCTS).unwrap();
    assert_eq!(tea, &stored[0]);
}

#[tokio::test]
async fn test_invalid_stored_product_is_surfaced() {
    let products = r#"[{"id":"bad","name":"Broken","sku":"B","price":5,
        "recipe":[{"materialName":"x","quantity":-1,"unit":"kg","unitCost":2,"totalCost":-2}]}]"#;
    let dir = write_data_dir(USERS, products);
    let source = JsonFileDataSource::new(dir.path());

    let err = fetch_catalog(&source).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(!is_retryable(err.kind()));
}

#[tokio::test]
async fn test_catalog_unavailable() {
    let source = MemoryDataSource::new(demo_roster(), vec![]);
    source.set_online(false);

    let err = fetch_catalog(&source).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogUnavailable);
    assert!(is_retryable(err.kind()));
    assert_ne!(user_message(err.kind()), user_message(ErrorKind::InvalidInput));
}

#[tokio::test]
async fn test_roster_unavailable_differs_from_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(Arc::new(JsonFileDataSource::new(dir.path())), 64);

    let outcome = session.submit("owner", "123456").await;
    assert!(matches!(outcome, LoginOutcome::Unavailable(_)));
    assert_eq!(
        outcome.message().unwrap(),
        user_message(ErrorKind::RosterUnavailable)
    );
}

#[tokio::test]
async fn test_inactive_account_never_authenticates() {
    let roster = vec![Account::new("owner", "123456", "Store Owner", Role::Owner).deactivated()];
    let source: Arc<dyn DataSource> = Arc::new(MemoryDataSource::new(roster, vec![]));
    let session = Session::new(source, 64);

    assert_eq!(
        session.submit("owner", "123456").await,
        LoginOutcome::Rejected(AuthError::NotFound)
    );
}

#[test]
fn test_created_product_round_trips_through_recompute() {
    let mut catalog = Catalog::new();
    let product = catalog
        .create(ProductDraft {
            name: "Latte".into(),
            sku: "LAT-1".into(),
            barcode: None,
            price: Money::from_cents(4500),
            recipe: vec![
                RecipeItem::new("espresso", Quantity::from_micros(18_000), "kg", UnitCost::from_cents(65000).unwrap()),
                RecipeItem::new("milk", Quantity::from_micros(250_000), "l", UnitCost::from_cents(3150).unwrap()),
                RecipeItem::new("cup", Quantity::from_units(1).unwrap(), "pcs", UnitCost::from_cents(175).unwrap()),
            ],
        })
        .unwrap()
        .clone();

    let expected: i64 = product
        .recipe
        .iter()
        .map(|l| compute_line_cost(l.quantity, l.unit_cost).unwrap().cents())
        .sum();
    assert_eq!(compute_product_cost(&product.recipe).unwrap().cents(), expected);
    assert_eq!(recompute_product(&product).unwrap(), product);
}
