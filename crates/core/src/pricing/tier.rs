//! Pricing-tier lookups.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{BillboardLineItem, PricingMode};

/// Source of undiscounted base-currency rental prices.
///
/// Owned by the external catalog; `None` means no tier exists for the
/// combination.
pub trait PricingTierLookup {
    /// Returns the base price for renting `billboard` for `mode`.
    fn base_price(
        &self,
        billboard: &BillboardLineItem,
        mode: PricingMode,
        customer_category: &str,
    ) -> Option<Decimal>;
}

impl<F> PricingTierLookup for F
where
    F: Fn(&BillboardLineItem, PricingMode, &str) -> Option<Decimal>,
{
    fn base_price(
        &self,
        billboard: &BillboardLineItem,
        mode: PricingMode,
        customer_category: &str,
    ) -> Option<Decimal> {
        self(billboard, mode, customer_category)
    }
}

/// One row of a pricing-tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Price key the row applies to (usually the size label).
    pub price_key: String,
    /// Billboard level.
    pub level: String,
    /// Customer pricing category (e.g., "normal", "marketer").
    pub customer_category: String,
    /// Duration the price covers.
    pub mode: PricingMode,
    /// Base-currency price.
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TierKey {
    price_key: String,
    level: String,
    customer_category: String,
    mode: PricingMode,
}

impl TierKey {
    fn new(price_key: &str, level: &str, customer_category: &str, mode: PricingMode) -> Self {
        Self {
            price_key: price_key.trim().to_lowercase(),
            level: level.trim().to_lowercase(),
            customer_category: customer_category.trim().to_lowercase(),
            mode,
        }
    }
}

/// In-memory pricing-tier table.
///
/// Keys match case-insensitively. Later rows replace earlier rows with the
/// same key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<PriceTier>")]
pub struct PriceTable {
    tiers: HashMap<TierKey, Decimal>,
}

impl PriceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tier.
    pub fn insert(&mut self, tier: PriceTier) {
        let key = TierKey::new(
            &tier.price_key,
            &tier.level,
            &tier.customer_category,
            tier.mode,
        );
        self.tiers.insert(key, tier.price);
    }

    /// Returns the number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Returns true if the table has no tiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl From<Vec<PriceTier>> for PriceTable {
    fn from(rows: Vec<PriceTier>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }
}

impl PricingTierLookup for PriceTable {
    fn base_price(
        &self,
        billboard: &BillboardLineItem,
        mode: PricingMode,
        customer_category: &str,
    ) -> Option<Decimal> {
        let key = TierKey::new(&billboard.price_key, &billboard.level, customer_category, mode);
        self.tiers.get(&key).copied()
    }
}
