//! Currency catalog entries.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` throughout; this module only describes
//! how a currency is displayed.

use serde::{Deserialize, Serialize};

/// Number of decimal places every money amount is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// A currency as listed in the currency catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// ISO 4217 currency code (e.g., "LYD", "USD").
    pub code: String,
    /// Display symbol (e.g., "د.ل", "$").
    pub symbol: String,
    /// Written name used in contract text (e.g., "Libyan Dinar").
    pub written_name: String,
}

impl CurrencyInfo {
    /// Creates a new catalog entry; the code is normalized to uppercase.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        written_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            symbol: symbol.into(),
            written_name: written_name.into(),
        }
    }
}

impl std::fmt::Display for CurrencyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
