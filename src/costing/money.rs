//! Fixed-point amounts
//!
//! Money is held in integer cents. Recipe quantities and unit costs are held
//! in millionths so that a line cost is one exact product, rounded once to
//! cents. Values that cross the data-access boundary as JSON numbers are
//! read from their shortest decimal text:
//!
//! - money rounds half up at cents, halves of negative values away from zero;
//! - quantities and unit costs must fit in six decimal places, and a value
//!   with non-zero digits beyond that is rejected rather than rounded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CostingError;

/// Decimal places carried by [`Money`].
pub const MONEY_SCALE: u32 = 2;

/// Decimal places carried by [`Quantity`].
pub const QUANTITY_SCALE: u32 = 6;

/// Decimal places carried by [`UnitCost`].
pub const UNIT_COST_SCALE: u32 = 6;

/// A monetary amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(i64);

/// A recipe quantity in millionths of its unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(i64);

/// Price of one unit of a material, in millionths of the currency.
///
/// Finer than [`Money`] because materials bought by the gram or millilitre
/// routinely cost a fraction of a cent per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitCost(i64);

/// How digits beyond the target scale are treated.
#[derive(Clone, Copy)]
enum Excess {
    RoundHalfUp,
    Reject,
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl Quantity {
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// A whole number of units, e.g. two pieces.
    pub fn from_units(units: i64) -> Result<Self, CostingError> {
        rescale(units, QUANTITY_SCALE).map(Self)
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl UnitCost {
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    pub fn from_cents(cents: i64) -> Result<Self, CostingError> {
        rescale(cents, UNIT_COST_SCALE - MONEY_SCALE).map(Self)
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

fn rescale(value: i64, places: u32) -> Result<i64, CostingError> {
    value
        .checked_mul(10_i64.pow(places))
        .ok_or(CostingError::Overflow)
}

/// Parses a plain decimal string into an integer at `scale` decimal places.
fn parse_scaled(text: &str, scale: u32, excess: Excess) -> Result<i64, CostingError> {
    let malformed = || CostingError::MalformedAmount(text.to_string());

    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(malformed());
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let factor = 10_i64.checked_pow(scale).ok_or(CostingError::Overflow)?;
    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().map_err(|_| CostingError::Overflow)?
    };

    let split = frac.len().min(scale as usize);
    let (kept, dropped) = frac.split_at(split);

    let mut frac_value = 0_i64;
    for b in kept.bytes() {
        frac_value = frac_value * 10 + i64::from(b - b'0');
    }
    frac_value *= 10_i64.pow(scale - split as u32);

    let round_up = match excess {
        Excess::RoundHalfUp => dropped.bytes().next().is_some_and(|b| b >= b'5'),
        Excess::Reject if dropped.bytes().any(|b| b != b'0') => {
            return Err(CostingError::ExcessPrecision(text.to_string()));
        }
        Excess::Reject => false,
    };

    let magnitude = whole_value
        .checked_mul(factor)
        .and_then(|v| v.checked_add(frac_value))
        .and_then(|v| v.checked_add(i64::from(round_up)))
        .ok_or(CostingError::Overflow)?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn scaled_from_f64(value: f64, scale: u32, excess: Excess) -> Result<i64, CostingError> {
    if !value.is_finite() {
        return Err(CostingError::MalformedAmount(value.to_string()));
    }
    // Rust renders floats without an exponent, as the shortest round-trip text.
    parse_scaled(&value.to_string(), scale, excess)
}

fn scaled_to_f64(value: i64, scale: u32) -> f64 {
    value as f64 / 10_f64.powi(scale as i32)
}

/// Writes `value` with trailing fractional zeros trimmed down to `min_places`.
fn write_scaled(f: &mut fmt::Formatter<'_>, value: i64, scale: u32, min_places: usize) -> fmt::Result {
    let factor = 10_u64.pow(scale);
    let magnitude = value.unsigned_abs();
    let sign = if value < 0 { "-" } else { "" };
    let whole = magnitude / factor;
    let frac = format!("{:0width$}", magnitude % factor, width = scale as usize);
    let significant = frac.trim_end_matches('0').len().max(min_places);
    let frac = &frac[..significant];

    if frac.is_empty() {
        write!(f, "{sign}{whole}")
    } else {
        write!(f, "{sign}{whole}.{frac}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.0, MONEY_SCALE, MONEY_SCALE as usize)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.0, QUANTITY_SCALE, 0)
    }
}

impl fmt::Display for UnitCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.0, UNIT_COST_SCALE, MONEY_SCALE as usize)
    }
}

impl FromStr for Money {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, MONEY_SCALE, Excess::RoundHalfUp).map(Money)
    }
}

impl FromStr for Quantity {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, QUANTITY_SCALE, Excess::Reject).map(Quantity)
    }
}

impl FromStr for UnitCost {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, UNIT_COST_SCALE, Excess::Reject).map(UnitCost)
    }
}

impl TryFrom<f64> for Money {
    type Error = CostingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        scaled_from_f64(value, MONEY_SCALE, Excess::RoundHalfUp).map(Money)
    }
}

impl TryFrom<f64> for Quantity {
    type Error = CostingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        scaled_from_f64(value, QUANTITY_SCALE, Excess::Reject).map(Quantity)
    }
}

impl TryFrom<f64> for UnitCost {
    type Error = CostingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        scaled_from_f64(value, UNIT_COST_SCALE, Excess::Reject).map(UnitCost)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        scaled_to_f64(value.0, MONEY_SCALE)
    }
}

impl From<Quantity> for f64 {
    fn from(value: Quantity) -> Self {
        scaled_to_f64(value.0, QUANTITY_SCALE)
    }
}

impl From<UnitCost> for f64 {
    fn from(value: UnitCost) -> Self {
        scaled_to_f64(value.0, UNIT_COST_SCALE)
    }
}
