//! Display currency and exchange rate types.

use rentboard_shared::types::CurrencyInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::{CurrencyConverter, effective_rate};

/// Currency a contract is shown in, with its rate against the base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCurrency {
    /// Catalog entry of the display currency.
    pub currency: CurrencyInfo,
    /// Exchange rate (1 base unit = rate display units).
    pub rate: Decimal,
}

impl DisplayCurrency {
    /// Creates a new display currency.
    #[must_use]
    pub const fn new(currency: CurrencyInfo, rate: Decimal) -> Self {
        Self { currency, rate }
    }

    /// Display currency that is the base currency itself.
    #[must_use]
    pub const fn base(currency: CurrencyInfo) -> Self {
        Self {
            currency,
            rate: Decimal::ONE,
        }
    }

    /// Returns a converter applying this currency's rate.
    #[must_use]
    pub fn converter(&self) -> CurrencyConverter {
        CurrencyConverter::new(self.rate)
    }

    /// Returns the rate for reading display amounts back into base currency.
    #[must_use]
    pub fn inverse_rate(&self) -> Decimal {
        Decimal::ONE / effective_rate(self.rate)
    }
}
