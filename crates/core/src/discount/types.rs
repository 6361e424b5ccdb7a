//! Discount configuration and result types.

use std::collections::BTreeMap;

use rentboard_shared::types::BillboardId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The single global discount applied after level discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AdditionalDiscount {
    /// Fixed base-currency amount, independent of totals.
    Fixed(Decimal),
    /// Percentage (0-100) of the subtotal remaining after level discounts.
    Percentage(Decimal),
}

impl Default for AdditionalDiscount {
    fn default() -> Self {
        Self::Fixed(Decimal::ZERO)
    }
}

/// Discount configuration of a contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    /// Discount percent per billboard level; absent levels get 0%.
    pub level_discounts: BTreeMap<String, Decimal>,
    /// Global discount applied after level discounts.
    pub additional_discount: AdditionalDiscount,
}

impl DiscountConfig {
    /// Returns the discount percent for a level, clamped to 0-100.
    ///
    /// Levels match case-insensitively.
    #[must_use]
    pub fn level_percent(&self, level: &str) -> Decimal {
        let level = level.trim();
        self.level_discounts
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(level))
            .map_or(Decimal::ZERO, |(_, percent)| clamp_percent(*percent))
    }
}

/// Clamps a percentage to the 0-100 range.
#[must_use]
pub fn clamp_percent(percent: Decimal) -> Decimal {
    percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Aggregate discount of a contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    /// Sum of per-level discounts.
    pub level_discount_amount: Decimal,
    /// The additional discount.
    pub additional_discount_amount: Decimal,
}

impl DiscountBreakdown {
    /// Returns `level_discount_amount + additional_discount_amount`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.level_discount_amount + self.additional_discount_amount
    }
}

/// Historical before/after price record for one billboard.
///
/// Used only for audit records; never fed back into contract totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillboardDiscountShare {
    /// Billboard id.
    pub billboard_id: BillboardId,
    /// Unit price before any discount.
    pub price_before_discount: Decimal,
    /// This billboard's level discount.
    pub level_discount: Decimal,
    /// This billboard's share of the additional discount.
    pub additional_discount: Decimal,
    /// Price after both discounts, never below zero.
    pub price_after_discount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_level_percent_lookup() {
        let config = DiscountConfig {
            level_discounts: BTreeMap::from([("A".to_string(), dec!(10)), ("B".to_string(), dec!(150))]),
            ..DiscountConfig::default()
        };

        assert_eq!(config.level_percent("A"), dec!(10));
        assert_eq!(config.level_percent("a"), dec!(10));
        assert_eq!(config.level_percent("B"), dec!(100));
        assert_eq!(config.level_percent("C"), Decimal::ZERO);
    }

    #[test]
    fn test_additional_discount_serde_shape() {
        let discount: AdditionalDiscount =
            serde_json::from_str(r#"{"type":"percentage","value":"10"}"#).unwrap();
        assert_eq!(discount, AdditionalDiscount::Percentage(dec!(10)));

        let discount: AdditionalDiscount =
            serde_json::from_str(r#"{"type":"fixed","value":250}"#).unwrap();
        assert_eq!(discount, AdditionalDiscount::Fixed(dec!(250)));
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = DiscountBreakdown {
            level_discount_amount: dec!(100),
            additional_discount_amount: dec!(90),
        };
        assert_eq!(breakdown.total(), dec!(190));
    }
}
