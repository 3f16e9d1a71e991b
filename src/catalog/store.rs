//! In-memory product catalog
//!
//! Holds products in insertion order. The catalog only ever stores products
//! produced by the recompute path, so its derived figures are consistent.

use std::collections::HashSet;

use log::info;
use uuid::Uuid;

use crate::catalog::operations::{build_product, recompute_product};
use crate::catalog::product::{Product, ProductDraft};
use crate::catalog::results::{money_label, ProductRow, RecipeRow, RecipeView};
use crate::costing::breakdown;
use crate::error::CatalogError;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from externally supplied products, re-deriving each.
    pub fn load(products: &[Product]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut loaded = Vec::with_capacity(products.len());

        for product in products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            loaded.push(recompute_product(product)?);
        }

        Ok(Self { products: loaded })
    }

    /// Adds a new product under a freshly generated id.
    pub fn create(&mut self, draft: ProductDraft) -> Result<&Product, CatalogError> {
        let product = build_product(Uuid::new_v4().to_string(), draft)?;
        info!("Created product {} ({})", product.name, product.id);

        let index = self.products.len();
        self.products.push(product);
        Ok(&self.products[index])
    }

    /// Replaces the editable fields of a product and re-derives its figures.
    pub fn update(&mut self, id: &str, draft: ProductDraft) -> Result<&Product, CatalogError> {
        let index = self.position(id)?;
        let product = build_product(id.to_string(), draft)?;
        info!("Updated product {} ({})", product.name, product.id);

        self.products[index] = product;
        Ok(&self.products[index])
    }

    pub fn remove(&mut self, id: &str) -> Result<Product, CatalogError> {
        let index = self.position(id)?;
        let product = self.products.remove(index);
        info!("Removed product {} ({})", product.name, product.id);
        Ok(product)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(barcode))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product list rows, with figures recomputed from each recipe.
    pub fn rows(&self, currency: &str) -> Result<Vec<ProductRow>, CatalogError> {
        self.products
            .iter()
            .map(|product| -> Result<ProductRow, CatalogError> {
                let figures = breakdown(&product.recipe, product.price)?;
                Ok(ProductRow {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    sku: product.sku.clone(),
                    barcode: product.barcode.clone().unwrap_or_else(|| "-".to_string()),
                    cost: money_label(figures.cost, currency),
                    price: money_label(figures.price, currency),
                    profit: money_label(figures.profit, currency),
                    margin: figures.margin_label().to_string(),
                    is_loss: figures.is_loss(),
                })
            })
            .collect()
    }

    /// Recipe breakdown of one product.
    pub fn recipe_view(&self, id: &str, currency: &str) -> Result<RecipeView, CatalogError> {
        let product = self
            .get(id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))?;
        let figures = breakdown(&product.recipe, product.price)?;

        let lines = product
            .recipe
            .iter()
            .map(|line| RecipeRow {
                material_name: line.material_name.clone(),
                quantity: line.quantity.to_string(),
                unit: line.unit.clone(),
                unit_cost: money_label(line.unit_cost, currency),
                total_cost: money_label(line.total_cost, currency),
            })
            .collect();

        Ok(RecipeView {
            product_name: product.name.clone(),
            cost: money_label(figures.cost, currency),
            price: money_label(figures.price, currency),
            profit: money_label(figures.profit, currency),
            lines,
        })
    }

    fn position(&self, id: &str) -> Result<usize, CatalogError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
    }
}
