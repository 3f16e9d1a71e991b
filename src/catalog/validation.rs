//! Product draft validation
//!
//! Checks the operator-entered fields of a product before any cost is
//! derived. Numeric recipe checks live in the costing engine.

use crate::catalog::product::{ProductDraft, RecipeItem};
use crate::error::{CatalogError, CostingError};
use crate::utils::validation::is_blank;

/// Validates the textual fields of one recipe entry.
pub fn validate_recipe_item(item: &RecipeItem) -> Result<(), CatalogError> {
    if is_blank(&item.material_name) {
        return Err(CatalogError::EmptyField("material name"));
    }
    if is_blank(&item.unit) {
        return Err(CatalogError::EmptyField("unit"));
    }
    Ok(())
}

/// Validates the product-level fields of a draft.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), CatalogError> {
    if is_blank(&draft.name) {
        return Err(CatalogError::EmptyField("name"));
    }
    if is_blank(&draft.sku) {
        return Err(CatalogError::EmptyField("sku"));
    }
    if !draft.price.is_positive() {
        return Err(CostingError::NonPositivePrice(draft.price).into());
    }
    Ok(())
}

/// Treats a blank barcode the same as a missing one.
pub fn normalize_barcode(barcode: Option<String>) -> Option<String> {
    barcode
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::{Money, Quantity, UnitCost};

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Lemonade".into(),
            sku: "LEM-01".into(),
            barcode: None,
            price: Money::from_cents(1500),
            recipe: vec![],
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(validate_draft(&d), Err(CatalogError::EmptyField("name")));
    }

    #[test]
    fn test_blank_sku_rejected() {
        let mut d = draft();
        d.sku = String::new();
        assert_eq!(validate_draft(&d), Err(CatalogError::EmptyField("sku")));
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut d = draft();
        d.price = Money::ZERO;
        assert_eq!(
            validate_draft(&d),
            Err(CatalogError::Costing(CostingError::NonPositivePrice(Money::ZERO)))
        );
    }

    #[test]
    fn test_recipe_item_needs_unit() {
        let item = RecipeItem::new("lemon", Quantity::from_units(1).unwrap(), "", UnitCost::from_cents(50).unwrap());
        assert_eq!(validate_recipe_item(&item), Err(CatalogError::EmptyField("unit")));
    }

    #[test]
    fn test_normalize_barcode() {
        assert_eq!(normalize_barcode(Some("  ".into())), None);
        assert_eq!(
            normalize_barcode(Some(" 6221234 ".into())),
            Some("6221234".to_string())
        );
        assert_eq!(normalize_barcode(None), None);
    }
}
