//! Product catalog
//!
//! Product and recipe model, the recompute path that keeps derived figures
//! honest, and an in-memory catalog with display rows.

pub mod operations;
pub mod product;
pub mod results;
pub mod store;
pub mod validation;

pub use operations::{build_product, derive_line, fetch_catalog, recompute_product};
pub use product::{MaterialLine, Product, ProductDraft, RecipeItem};
pub use results::{ProductRow, RecipeRow, RecipeView};
pub use store::Catalog;
