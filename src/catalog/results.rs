//! Catalog result types
//!
//! Display-ready rows for the product list and the recipe breakdown.

use std::fmt;

/// One line of the product list
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub barcode: String,
    pub cost: String,
    pub price: String,
    pub profit: String,
    pub margin: String,
    pub is_loss: bool,
}

/// One material of a recipe breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRow {
    pub material_name: String,
    pub quantity: String,
    pub unit: String,
    pub unit_cost: String,
    pub total_cost: String,
}

/// Recipe breakdown of a single product
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView {
    pub product_name: String,
    pub cost: String,
    pub price: String,
    pub profit: String,
    pub lines: Vec<RecipeRow>,
}

/// Formats an amount (money or unit cost) followed by the configured currency label.
pub fn money_label(amount: impl fmt::Display, currency: &str) -> String {
    format!("{amount} {currency}")
}
