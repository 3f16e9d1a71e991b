//! Product and recipe model
//!
//! `cost`, `profit` and every line's `total_cost` are derived values. They
//! are serialized so the data-access layer can hand them over, but the
//! catalog always re-derives them before use.

use serde::{Deserialize, Serialize};

use crate::costing::{Money, Quantity, UnitCost};

/// One raw-material entry of a product's recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub material_name: String,
    pub quantity: Quantity,
    pub unit: String,
    pub unit_cost: UnitCost,
    #[serde(default)]
    pub total_cost: Money,
}

/// A sellable product priced from its recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default)]
    pub recipe: Vec<MaterialLine>,
    #[serde(default)]
    pub cost: Money,
    pub price: Money,
    #[serde(default)]
    pub profit: Money,
}

/// A recipe entry as entered by an operator, before its cost is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub material_name: String,
    pub quantity: Quantity,
    pub unit: String,
    pub unit_cost: UnitCost,
}

/// Operator-supplied product fields used to create or edit a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub recipe: Vec<RecipeItem>,
}

impl RecipeItem {
    pub fn new(
        material_name: impl Into<String>,
        quantity: Quantity,
        unit: impl Into<String>,
        unit_cost: UnitCost,
    ) -> Self {
        Self {
            material_name: material_name.into(),
            quantity,
            unit: unit.into(),
            unit_cost,
        }
    }
}

impl From<&MaterialLine> for RecipeItem {
    fn from(line: &MaterialLine) -> Self {
        Self {
            material_name: line.material_name.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            unit_cost: line.unit_cost,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            barcode: product.barcode.clone(),
            price: product.price,
            recipe: product.recipe.iter().map(RecipeItem::from).collect(),
        }
    }
}

impl Product {
    /// Whether the product is made from recipe materials rather than resold as-is.
    pub fn is_manufactured(&self) -> bool {
        !self.recipe.is_empty()
    }
}
