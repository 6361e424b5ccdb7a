//! Installation cost from a per-size price table.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{InstallationCost, SizeInstallation};
use crate::currency::CurrencyConverter;
use crate::pricing::BillboardLineItem;

/// Source of base-currency installation prices per billboard size.
pub trait InstallationPriceLookup {
    /// Returns the price of installing one billboard of `size_label`.
    fn installation_price(&self, size_label: &str) -> Option<Decimal>;
}

impl<F> InstallationPriceLookup for F
where
    F: Fn(&str) -> Option<Decimal>,
{
    fn installation_price(&self, size_label: &str) -> Option<Decimal> {
        self(size_label)
    }
}

/// One row of an installation price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationPrice {
    /// Billboard size label.
    pub size_label: String,
    /// Base-currency installation price per billboard.
    pub price: Decimal,
}

/// In-memory installation price table keyed by size label.
///
/// `"12X4"`, `"12×4"` and `" 12x4 "` all address the same row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<InstallationPrice>")]
pub struct InstallationPriceTable {
    prices: HashMap<String, Decimal>,
}

impl InstallationPriceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the price for a size.
    pub fn insert(&mut self, size_label: &str, price: Decimal) {
        self.prices.insert(size_key(size_label), price);
    }
}

impl From<Vec<InstallationPrice>> for InstallationPriceTable {
    fn from(rows: Vec<InstallationPrice>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(&row.size_label, row.price);
        }
        table
    }
}

impl InstallationPriceLookup for InstallationPriceTable {
    fn installation_price(&self, size_label: &str) -> Option<Decimal> {
        self.prices.get(&size_key(size_label)).copied()
    }
}

fn size_key(size_label: &str) -> String {
    size_label.trim().to_lowercase().replace('×', "x")
}

/// Installation cost of the selected billboards in display currency.
///
/// Priced once per billboard and grouped by size for reporting; the total is
/// the flat sum. Sizes missing from the table cost `0`. Empty when
/// installation is disabled.
#[must_use]
pub fn installation_cost<L>(
    billboards: &[BillboardLineItem],
    enabled: bool,
    lookup: &L,
    converter: &CurrencyConverter,
) -> InstallationCost
where
    L: InstallationPriceLookup + ?Sized,
{
    if !enabled {
        return InstallationCost::default();
    }

    // Keyed like the price table; the first label seen is the one reported.
    let mut counts: BTreeMap<String, (&str, u32)> = BTreeMap::new();
    for billboard in billboards {
        counts
            .entry(size_key(&billboard.size_label))
            .or_insert((billboard.size_label.as_str(), 0))
            .1 += 1;
    }

    let per_size: Vec<SizeInstallation> = counts
        .into_values()
        .map(|(size_label, billboard_count)| {
            let base = lookup.installation_price(size_label).unwrap_or_else(|| {
                warn!(size_label, "No installation price for size, installing at zero");
                Decimal::ZERO
            });
            let unit_price = converter.convert(base.max(Decimal::ZERO));
            SizeInstallation {
                size_label: size_label.to_string(),
                billboard_count,
                unit_price,
                subtotal: unit_price * Decimal::from(billboard_count),
            }
        })
        .collect();

    let total = per_size.iter().map(|line| line.subtotal).sum();

    InstallationCost { per_size, total }
}
