//! Unit price resolution.

use rust_decimal::Decimal;
use tracing::warn;

use super::tier::PricingTierLookup;
use super::types::{BillboardLineItem, PricedLineItem, PricingMode};
use crate::currency::CurrencyConverter;

/// Resolves a billboard's rental price in display currency.
///
/// A missing tier yields `0` so the draft can still be built and the gap shows
/// up as an obviously wrong total. Negative tier prices are treated as `0`.
#[must_use]
pub fn resolve_unit_price<T>(
    billboard: &BillboardLineItem,
    mode: PricingMode,
    customer_category: &str,
    tiers: &T,
    converter: &CurrencyConverter,
) -> Decimal
where
    T: PricingTierLookup + ?Sized,
{
    price_line_item(billboard, mode, customer_category, tiers, converter).unit_price
}

/// Resolves a billboard's price, keeping whether the tier was missing.
#[must_use]
pub fn price_line_item<T>(
    billboard: &BillboardLineItem,
    mode: PricingMode,
    customer_category: &str,
    tiers: &T,
    converter: &CurrencyConverter,
) -> PricedLineItem
where
    T: PricingTierLookup + ?Sized,
{
    match tiers.base_price(billboard, mode, customer_category) {
        Some(base) => PricedLineItem {
            billboard: billboard.clone(),
            unit_price: converter.convert(base.max(Decimal::ZERO)),
            missing_tier: false,
        },
        None => {
            warn!(
                billboard_id = %billboard.id,
                price_key = %billboard.price_key,
                level = %billboard.level,
                customer_category,
                %mode,
                "No pricing tier found, pricing billboard at zero"
            );
            PricedLineItem {
                billboard: billboard.clone(),
                unit_price: Decimal::ZERO,
                missing_tier: true,
            }
        }
    }
}

/// Prices every selected billboard, in selection order.
#[must_use]
pub fn price_line_items<T>(
    billboards: &[BillboardLineItem],
    mode: PricingMode,
    customer_category: &str,
    tiers: &T,
    converter: &CurrencyConverter,
) -> Vec<PricedLineItem>
where
    T: PricingTierLookup + ?Sized,
{
    billboards
        .iter()
        .map(|billboard| price_line_item(billboard, mode, customer_category, tiers, converter))
        .collect()
}
