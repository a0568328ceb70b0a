//! Monetary amounts.
//!
//! All amounts are whole units of a single currency. There is no currency
//! conversion; inputs are assumed to share one unit.

/// A non-negative, whole-unit monetary amount.
pub type Cost = u64;

/// Rounds a computed amount to the nearest whole unit, ties going up.
///
/// Amounts in this domain are never negative. Negative, NaN and infinite
/// inputs collapse to zero rather than wrapping.
pub fn round_half_up(value: f64) -> Cost {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // f64::round breaks ties away from zero, which is upward for positives.
    value.round() as Cost
}

/// Adds amounts, capping at `Cost::MAX` instead of overflowing.
pub fn sum_costs<I>(costs: I) -> Cost
where
    I: IntoIterator<Item = Cost>,
{
    costs.into_iter().fold(0, Cost::saturating_add)
}
