//! Costing engine
//!
//! Derives line costs, product cost, profit and margin from a recipe.
//! Every function here is pure; nothing is cached between calls.

pub mod money;
pub mod operations;
pub mod results;

pub use money::{Money, Quantity, UnitCost};
pub use operations::{
    breakdown, compute_line_cost, compute_margin_percent, compute_product_cost, compute_profit,
};
pub use results::{CostBreakdown, MarginLabel};
