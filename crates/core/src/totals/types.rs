//! Contract totals types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::addons::AddOnConfig;
use crate::discount::DiscountBreakdown;

/// Everything the aggregator needs, already in display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsInput {
    /// Sum of unit prices.
    pub base_total: Decimal,
    /// Level and additional discounts.
    pub discount: DiscountBreakdown,
    /// Installation cost (zero when disabled).
    pub installation_cost: Decimal,
    /// Print cost (zero when disabled).
    pub print_cost: Decimal,
    /// Add-on toggles.
    pub add_ons: AddOnConfig,
    /// Operating fee rate in percent.
    pub operating_fee_rate: Decimal,
}

/// Headline figures of a contract.
///
/// Derived on every recomputation; never persisted mid-computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTotals {
    /// Sum of unit prices before discounts.
    pub base_total: Decimal,
    /// Sum of per-level discounts.
    pub level_discount_amount: Decimal,
    /// Additional (fixed or percentage) discount.
    pub additional_discount_amount: Decimal,
    /// `level_discount_amount + additional_discount_amount`.
    pub total_discount: Decimal,
    /// `max(0, base_total - total_discount)`.
    pub total_after_discount: Decimal,
    /// Installation cost, whether billed or included.
    pub installation_cost: Decimal,
    /// Print cost, whether billed or included.
    pub print_cost: Decimal,
    /// Rental-only amount after removing included add-ons.
    pub net_rental_basis: Decimal,
    /// `round(net_rental_basis * rate / 100, 2)`.
    pub operating_fee: Decimal,
    /// Customer-facing amount due, including billed add-ons.
    pub grand_total: Decimal,
}
