//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for contract money:
//! - Always round to 2 decimal places
//! - Use round-half-away-from-zero, never banker's rounding
//! - Every amount entering the engine is in base currency, every amount
//!   leaving it is in display currency

use rentboard_shared::types::MONEY_SCALE;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tracing::warn;

/// Rounds a money amount to 2 decimal places, half away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the rate actually applied: non-positive rates fall back to 1.
#[must_use]
pub fn effective_rate(rate: Decimal) -> Decimal {
    if rate <= Decimal::ZERO {
        warn!(%rate, "Non-positive exchange rate, falling back to base currency");
        Decimal::ONE
    } else {
        rate
    }
}

/// Converts a base-currency amount to display currency.
///
/// Output is `round(amount * rate, 2)`. A rate of zero or below is treated as 1.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    round_money(amount * effective_rate(rate))
}

/// Converter bound to a single exchange rate.
///
/// Every pipeline stage that introduces a base-currency amount goes through
/// the same converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConverter {
    rate: Decimal,
}

impl CurrencyConverter {
    /// Creates a converter; a non-positive rate is replaced by 1.
    #[must_use]
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate: effective_rate(rate),
        }
    }

    /// Converter for contracts priced in the base currency.
    #[must_use]
    pub const fn identity() -> Self {
        Self { rate: Decimal::ONE }
    }

    /// Returns the applied rate.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Converts a base-currency amount, rounded to 2 decimal places.
    #[must_use]
    pub fn convert(&self, amount: Decimal) -> Decimal {
        round_money(amount * self.rate)
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::identity()
    }
}
