//! Totals aggregation.
//!
//! Invariants after every aggregation:
//! - `total_after_discount = max(0, base_total - total_discount)`
//! - `total_discount = level_discount_amount + additional_discount_amount`
//! - `grand_total = total_after_discount + billed add-ons`
//! - `net_rental_basis = total_after_discount - included add-ons`
//! - `operating_fee = round(net_rental_basis * rate / 100, 2)`

use rust_decimal::Decimal;
use tracing::warn;

use super::types::{ContractTotals, TotalsInput};
use crate::currency::round_money;
use crate::discount::clamp_percent;

/// Totals aggregator.
pub struct TotalsAggregator;

impl TotalsAggregator {
    /// Combines prices, discounts and add-on costs into contract totals.
    ///
    /// Never fails. Negative inputs are read as zero; a discount larger than
    /// the base total clamps `total_after_discount` to zero. Included add-ons
    /// larger than the discounted total leave a zero net rental basis.
    #[must_use]
    pub fn aggregate(input: &TotalsInput) -> ContractTotals {
        let base_total = money(input.base_total);
        let level_discount_amount = money(input.discount.level_discount_amount);
        let additional_discount_amount = money(input.discount.additional_discount_amount);
        let installation_cost = money(input.installation_cost);
        let print_cost = money(input.print_cost);

        let total_discount = level_discount_amount + additional_discount_amount;

        let mut total_after_discount = base_total - total_discount;
        if total_after_discount < Decimal::ZERO {
            warn!(
                %base_total,
                %total_discount,
                "Discount exceeds base total, clamping to zero"
            );
            total_after_discount = Decimal::ZERO;
        }

        let add_ons = &input.add_ons;
        let grand_total = total_after_discount
            + add_ons.billed_installation(installation_cost)
            + add_ons.billed_print(print_cost);

        let mut net_rental_basis = total_after_discount
            - add_ons.included_installation(installation_cost)
            - add_ons.included_print(print_cost);
        if net_rental_basis < Decimal::ZERO {
            warn!(
                %total_after_discount,
                %net_rental_basis,
                "Included add-ons exceed discounted total, net rental basis is zero"
            );
            net_rental_basis = Decimal::ZERO;
        }

        let operating_fee = Self::operating_fee(net_rental_basis, input.operating_fee_rate);

        ContractTotals {
            base_total,
            level_discount_amount,
            additional_discount_amount,
            total_discount,
            total_after_discount,
            installation_cost,
            print_cost,
            net_rental_basis,
            operating_fee,
            grand_total,
        }
    }

    /// Operating fee on the net rental basis; the rate is clamped to 0-100.
    #[must_use]
    pub fn operating_fee(net_rental_basis: Decimal, rate: Decimal) -> Decimal {
        round_money(net_rental_basis * clamp_percent(rate) / Decimal::ONE_HUNDRED)
    }
}

fn money(value: Decimal) -> Decimal {
    round_money(value).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addons::AddOnConfig;
    use crate::discount::DiscountBreakdown;
    use rust_decimal_macros::dec;

    fn input(base_total: Decimal, discount: Decimal) -> TotalsInput {
        TotalsInput {
            base_total,
            discount: DiscountBreakdown {
                level_discount_amount: discount,
                additional_discount_amount: Decimal::ZERO,
            },
            installation_cost: Decimal::ZERO,
            print_cost: Decimal::ZERO,
            add_ons: AddOnConfig::default(),
            operating_fee_rate: dec!(3),
        }
    }

    #[test]
    fn test_discount_ordering_example() {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            discount: DiscountBreakdown {
                level_discount_amount: dec!(100),
                additional_discount_amount: dec!(90),
            },
            ..input(dec!(1000), Decimal::ZERO)
        });

        assert_eq!(totals.total_discount, dec!(190));
        assert_eq!(totals.total_after_discount, dec!(810));
        assert_eq!(totals.grand_total, dec!(810));
    }

    #[test]
    fn test_clamps_to_zero() {
        let totals = TotalsAggregator::aggregate(&input(dec!(500), dec!(700)));
        assert_eq!(totals.total_discount, dec!(700));
        assert_eq!(totals.total_after_discount, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
        assert_eq!(totals.operating_fee, Decimal::ZERO);
    }

    #[test]
    fn test_operating_fee() {
        assert_eq!(TotalsAggregator::operating_fee(dec!(10000), dec!(3)), dec!(300.00));
        assert_eq!(TotalsAggregator::operating_fee(dec!(333.33), dec!(3)), dec!(10.00));
        assert_eq!(TotalsAggregator::operating_fee(dec!(1000), dec!(-5)), Decimal::ZERO);
    }

    #[test]
    fn test_installation_included_reduces_net_only() {
        let baseline = TotalsAggregator::aggregate(&input(dec!(5000), Decimal::ZERO));

        let included = TotalsAggregator::aggregate(&TotalsInput {
            installation_cost: dec!(200),
            add_ons: AddOnConfig {
                installation_enabled: true,
                installation_included_in_price: true,
                ..AddOnConfig::default()
            },
            ..input(dec!(5000), Decimal::ZERO)
        });

        assert_eq!(included.net_rental_basis, baseline.net_rental_basis - dec!(200));
        assert_eq!(included.grand_total, baseline.grand_total);
        assert_eq!(included.installation_cost, dec!(200));
    }

    #[test]
    fn test_installation_billed_increases_grand_only() {
        let baseline = TotalsAggregator::aggregate(&input(dec!(5000), Decimal::ZERO));

        let billed = TotalsAggregator::aggregate(&TotalsInput {
            installation_cost: dec!(200),
            add_ons: AddOnConfig {
                installation_enabled: true,
                installation_included_in_price: false,
                ..AddOnConfig::default()
            },
            ..input(dec!(5000), Decimal::ZERO)
        });

        assert_eq!(billed.grand_total, baseline.grand_total + dec!(200));
        assert_eq!(billed.net_rental_basis, baseline.net_rental_basis);
    }

    #[test]
    fn test_print_and_installation_toggle_independently() {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            installation_cost: dec!(200),
            print_cost: dec!(960),
            add_ons: AddOnConfig {
                installation_enabled: true,
                installation_included_in_price: true,
                print_enabled: true,
                print_included_in_price: false,
                print_price_per_area_unit: dec!(10),
            },
            ..input(dec!(5000), Decimal::ZERO)
        });

        assert_eq!(totals.grand_total, dec!(5960));
        assert_eq!(totals.net_rental_basis, dec!(4800));
        assert_eq!(totals.operating_fee, dec!(144.00));
    }

    #[test]
    fn test_net_rental_basis_never_negative() {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            print_cost: dec!(960),
            add_ons: AddOnConfig {
                print_enabled: true,
                print_included_in_price: true,
                ..AddOnConfig::default()
            },
            ..input(dec!(500), Decimal::ZERO)
        });
        assert_eq!(totals.net_rental_basis, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec!(500));
    }

    #[test]
    fn test_disabled_add_on_cost_is_ignored() {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            installation_cost: dec!(200),
            ..input(dec!(1000), Decimal::ZERO)
        });
        assert_eq!(totals.grand_total, dec!(1000));
        assert_eq!(totals.net_rental_basis, dec!(1000));
    }
}
