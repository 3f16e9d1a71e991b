//! Costing result types
//!
//! Defines result structures returned by costing operations.

use std::fmt;

use crate::costing::money::Money;

/// Derived figures for one product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub cost: Money,
    pub price: Money,
    pub profit: Money,
    pub margin_percent: f64,
}

impl CostBreakdown {
    /// Whether the product sells below its cost.
    pub fn is_loss(&self) -> bool {
        self.profit.is_negative()
    }

    /// Margin with one decimal place, e.g. `25.0%`.
    pub fn margin_label(&self) -> MarginLabel {
        MarginLabel(self.margin_percent)
    }
}

/// Display wrapper rendering a margin percentage with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginLabel(pub f64);

impl fmt::Display for MarginLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
