//! Level and additional discount computation.
//!
//! CRITICAL: ordering is a business rule. Level discounts apply first; a
//! percentage additional discount applies to what remains after them.
//! Reordering changes invoice totals.

use rust_decimal::Decimal;

use super::types::{
    AdditionalDiscount, BillboardDiscountShare, DiscountBreakdown, DiscountConfig, clamp_percent,
};
use crate::currency::{AllocationUtil, CurrencyConverter, round_money};
use crate::pricing::{BillboardLineItem, PricedLineItem};

/// Discount engine.
pub struct DiscountEngine;

impl DiscountEngine {
    /// Computes the level and additional discount amounts.
    ///
    /// `unit_prices[i]` is the display-currency price of `billboards[i]`.
    /// A fixed additional discount is a base-currency amount and is converted;
    /// it may exceed the remaining balance (totals clamp at zero).
    #[must_use]
    pub fn compute_discount<F>(
        billboards: &[BillboardLineItem],
        unit_prices: &[Decimal],
        level_of: F,
        config: &DiscountConfig,
        converter: &CurrencyConverter,
    ) -> DiscountBreakdown
    where
        F: Fn(&BillboardLineItem) -> &str,
    {
        let base_total: Decimal = unit_prices.iter().copied().sum();

        let level_discount_amount = round_money(
            billboards
                .iter()
                .zip(unit_prices)
                .map(|(billboard, price)| {
                    *price * config.level_percent(level_of(billboard)) / Decimal::ONE_HUNDRED
                })
                .sum(),
        );

        let additional_discount_amount = match config.additional_discount {
            AdditionalDiscount::Fixed(amount) => converter.convert(amount.max(Decimal::ZERO)),
            AdditionalDiscount::Percentage(percent) => {
                let remaining = (base_total - level_discount_amount).max(Decimal::ZERO);
                round_money(remaining * clamp_percent(percent) / Decimal::ONE_HUNDRED)
            }
        };

        DiscountBreakdown {
            level_discount_amount,
            additional_discount_amount,
        }
    }

    /// Computes the discount for priced line items using each billboard's level.
    #[must_use]
    pub fn compute_for_line_items(
        line_items: &[PricedLineItem],
        config: &DiscountConfig,
        converter: &CurrencyConverter,
    ) -> DiscountBreakdown {
        let (billboards, unit_prices) = split_line_items(line_items);
        Self::compute_discount(
            &billboards,
            &unit_prices,
            |billboard| billboard.level.as_str(),
            config,
            converter,
        )
    }

    /// Apportions a computed discount back across billboards.
    ///
    /// Each billboard's share of the additional discount is proportional to its
    /// post-level-discount price. Shares add up exactly to
    /// `breakdown.additional_discount_amount`.
    #[must_use]
    pub fn apportion<F>(
        billboards: &[BillboardLineItem],
        unit_prices: &[Decimal],
        level_of: F,
        config: &DiscountConfig,
        breakdown: &DiscountBreakdown,
    ) -> Vec<BillboardDiscountShare>
    where
        F: Fn(&BillboardLineItem) -> &str,
    {
        let level_discounts: Vec<Decimal> = billboards
            .iter()
            .zip(unit_prices)
            .map(|(billboard, price)| {
                round_money(*price * config.level_percent(level_of(billboard)) / Decimal::ONE_HUNDRED)
            })
            .collect();

        let after_level: Vec<Decimal> = unit_prices
            .iter()
            .zip(&level_discounts)
            .map(|(price, level)| (*price - *level).max(Decimal::ZERO))
            .collect();

        let shares =
            AllocationUtil::allocate_proportional(breakdown.additional_discount_amount, &after_level);

        billboards
            .iter()
            .zip(unit_prices)
            .zip(level_discounts)
            .zip(after_level)
            .zip(shares)
            .map(|((((billboard, price), level), remaining), share)| BillboardDiscountShare {
                billboard_id: billboard.id.clone(),
                price_before_discount: *price,
                level_discount: level,
                additional_discount: share,
                price_after_discount: (remaining - share).max(Decimal::ZERO),
            })
            .collect()
    }

    /// Apportions a discount across priced line items using each billboard's level.
    #[must_use]
    pub fn apportion_line_items(
        line_items: &[PricedLineItem],
        config: &DiscountConfig,
        breakdown: &DiscountBreakdown,
    ) -> Vec<BillboardDiscountShare> {
        let (billboards, unit_prices) = split_line_items(line_items);
        Self::apportion(
            &billboards,
            &unit_prices,
            |billboard| billboard.level.as_str(),
            config,
            breakdown,
        )
    }
}

fn split_line_items(line_items: &[PricedLineItem]) -> (Vec<BillboardLineItem>, Vec<Decimal>) {
    line_items
        .iter()
        .map(|item| (item.billboard.clone(), item.unit_price))
        .unzip()
}
