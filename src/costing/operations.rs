//! Costing engine operations
//!
//! Pure functions deriving line cost, product cost, profit and margin.
//! Rounding happens once per recipe line; aggregates are exact sums.

use crate::catalog::MaterialLine;
use crate::costing::money::{MONEY_SCALE, Money, QUANTITY_SCALE, Quantity, UNIT_COST_SCALE, UnitCost};
use crate::costing::results::CostBreakdown;
use crate::error::CostingError;

/// Divides a quantity-times-unit-cost product down to cents.
const LINE_TO_CENTS: i128 = 10_i128.pow(QUANTITY_SCALE + UNIT_COST_SCALE - MONEY_SCALE);

/// Cost of one recipe line: `quantity * unit_cost`, rounded half up to cents.
///
/// The product is exact; this is the only rounding step a line goes through.
pub fn compute_line_cost(quantity: Quantity, unit_cost: UnitCost) -> Result<Money, CostingError> {
    if !quantity.is_positive() {
        return Err(CostingError::NonPositiveQuantity(quantity));
    }
    if unit_cost.is_negative() {
        return Err(CostingError::NegativeUnitCost(unit_cost));
    }

    // Both factors are non-negative here, so adding half a cent rounds half up.
    let scaled = i128::from(quantity.micros()) * i128::from(unit_cost.micros());
    let cents = (scaled + LINE_TO_CENTS / 2) / LINE_TO_CENTS;

    i64::try_from(cents)
        .map(Money::from_cents)
        .map_err(|_| CostingError::Overflow)
}

/// Aggregate cost of a recipe. Each line is re-derived from its quantity and
/// unit cost; the stored `total_cost` is not consulted.
pub fn compute_product_cost(recipe: &[MaterialLine]) -> Result<Money, CostingError> {
    recipe.iter().try_fold(Money::ZERO, |total, line| {
        let line_cost = compute_line_cost(line.quantity, line.unit_cost)?;
        total.checked_add(line_cost).ok_or(CostingError::Overflow)
    })
}

/// `price - cost`. A negative result is a loss, not an error.
pub fn compute_profit(price: Money, cost: Money) -> Result<Money, CostingError> {
    if !price.is_positive() {
        return Err(CostingError::NonPositivePrice(price));
    }
    price.checked_sub(cost).ok_or(CostingError::Overflow)
}

/// Profit as a percentage of price.
pub fn compute_margin_percent(profit: Money, price: Money) -> Result<f64, CostingError> {
    if !price.is_positive() {
        return Err(CostingError::NonPositivePrice(price));
    }
    Ok(profit.cents() as f64 / price.cents() as f64 * 100.0)
}

/// Full cost/profit/margin figures for a recipe sold at `price`.
pub fn breakdown(recipe: &[MaterialLine], price: Money) -> Result<CostBreakdown, CostingError> {
    let cost = compute_product_cost(recipe)?;
    let profit = compute_profit(price, cost)?;
    let margin_percent = compute_margin_percent(profit, price)?;

    Ok(CostBreakdown {
        cost,
        price,
        profit,
        margin_percent,
    })
}
