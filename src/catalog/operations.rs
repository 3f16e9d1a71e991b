//! Catalog operations
//!
//! Every product that enters the catalog, whether created by an operator or
//! returned by the data source, passes through `build_product` so its
//! derived figures always come from its recipe.

use log::{debug, warn};

use crate::catalog::product::{MaterialLine, Product, ProductDraft, RecipeItem};
use crate::catalog::store::Catalog;
use crate::catalog::validation::{normalize_barcode, validate_draft, validate_recipe_item};
use crate::costing::{compute_line_cost, compute_product_cost, compute_profit};
use crate::datasource::DataSource;
use crate::error::{CatalogError, PosError};

/// Turns a recipe entry into a material line with its derived cost.
pub fn derive_line(index: usize, item: RecipeItem) -> Result<MaterialLine, CatalogError> {
    validate_recipe_item(&item)?;
    let total_cost = compute_line_cost(item.quantity, item.unit_cost)
        .map_err(|source| CatalogError::InvalidLine { index, source })?;

    Ok(MaterialLine {
        material_name: item.material_name,
        quantity: item.quantity,
        unit: item.unit,
        unit_cost: item.unit_cost,
        total_cost,
    })
}

/// Builds a product from a draft, deriving line costs, cost and profit.
pub fn build_product(id: String, draft: ProductDraft) -> Result<Product, CatalogError> {
    validate_draft(&draft)?;

    let recipe = draft
        .recipe
        .into_iter()
        .enumerate()
        .map(|(index, item)| derive_line(index, item))
        .collect::<Result<Vec<_>, _>>()?;
    let cost = compute_product_cost(&recipe)?;
    let profit = compute_profit(draft.price, cost)?;

    Ok(Product {
        id,
        name: draft.name,
        sku: draft.sku,
        barcode: normalize_barcode(draft.barcode),
        recipe,
        cost,
        price: draft.price,
        profit,
    })
}

/// Re-derives a product received from outside the catalog.
///
/// Stale derived values are replaced, not trusted. Invalid recipe data is an
/// error naming the product.
pub fn recompute_product(product: &Product) -> Result<Product, CatalogError> {
    let derived = build_product(product.id.clone(), ProductDraft::from(product)).map_err(
        |source| CatalogError::InvalidProduct {
            id: product.id.clone(),
            source: Box::new(source),
        },
    )?;

    let lines_differ = derived
        .recipe
        .iter()
        .zip(&product.recipe)
        .any(|(fresh, stale)| fresh.total_cost != stale.total_cost);
    if derived.cost != product.cost || derived.profit != product.profit || lines_differ {
        warn!(
            "Corrected derived figures for product {}: cost {} -> {}, profit {} -> {}",
            product.id, product.cost, derived.cost, product.profit, derived.profit
        );
    }

    Ok(derived)
}

/// Fetches the product list from the data source and loads it into a catalog.
pub async fn fetch_catalog(source: &dyn DataSource) -> Result<Catalog, PosError> {
    let products = source
        .fetch_products()
        .await
        .map_err(PosError::CatalogUnavailable)?;
    debug!("Fetched {} products", products.len());

    Ok(Catalog::load(&products)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::{Money, Quantity, UnitCost};
    use crate::error::CostingError;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Iced Tea".into(),
            sku: "TEA-01".into(),
            barcode: Some(String::new()),
            price: Money::from_cents(2000),
            recipe: vec![
                RecipeItem::new("tea leaves", Quantity::from_micros(15_000), "kg", UnitCost::from_cents(30000).unwrap()),
                RecipeItem::new("sugar", Quantity::from_micros(20_000), "kg", UnitCost::from_cents(2500).unwrap()),
                RecipeItem::new("cup", Quantity::from_units(1).unwrap(), "pcs", UnitCost::from_cents(75).unwrap()),
            ],
        }
    }

    #[test]
    fn test_build_product_derives_figures() {
        let product = build_product("p1".into(), draft()).unwrap();
        let totals: Vec<i64> = product.recipe.iter().map(|l| l.total_cost.cents()).collect();
        assert_eq!(totals, vec![450, 50, 75]);
        assert_eq!(product.cost, Money::from_cents(575));
        assert_eq!(product.profit, Money::from_cents(1425));
        assert_eq!(product.barcode, None);
    }

    #[test]
    fn test_build_product_without_recipe() {
        let mut d = draft();
        d.recipe.clear();
        let product = build_product("p2".into(), d).unwrap();
        assert_eq!(product.cost, Money::ZERO);
        assert_eq!(product.profit, Money::from_cents(2000));
        assert!(!product.is_manufactured());
    }

    #[test]
    fn test_build_product_reports_bad_line_index() {
        let mut d = draft();
        d.recipe[1].unit_cost = UnitCost::from_micros(-1);
        let err = build_product("p3".into(), d).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidLine {
                index: 1,
                source: CostingError::NegativeUnitCost(UnitCost::from_micros(-1)),
            }
        );
    }

    #[test]
    fn test_recompute_round_trip() {
        let product = build_product("p4".into(), draft()).unwrap();
        assert_eq!(recompute_product(&product).unwrap(), product);
    }

    #[test]
    fn test_recompute_replaces_stale_values() {
        let fresh = build_product("p5".into(), draft()).unwrap();
        let mut stale = fresh.clone();
        stale.cost = Money::from_cents(1);
        stale.profit = Money::from_cents(1);
        stale.recipe[0].total_cost = Money::from_cents(9999);

        assert_eq!(recompute_product(&stale).unwrap(), fresh);
    }

    #[test]
    fn test_recompute_surfaces_invalid_data() {
        let mut product = build_product("p6".into(), draft()).unwrap();
        product.recipe[0].quantity = Quantity::from_micros(-5_000);

        let err = recompute_product(&product).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct { ref id, .. } if id == "p6"));
    }
}
