//! Money Formatting
//!
//! Fixed-point, two-decimal display with a currency symbol prefix.

use rust_decimal::{Decimal, RoundingStrategy};

/// Display helper for cart amounts
pub struct Money;

impl Money {
    /// Round half away from zero to cents and render as `{symbol}{amount}`,
    /// e.g. `$199.99`, `$25.00`.
    pub fn format(amount: Decimal, symbol: &str) -> String {
        let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        format!("{symbol}{cents}")
    }
}
