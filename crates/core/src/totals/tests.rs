//! Property-based tests for totals aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregator::TotalsAggregator;
use super::types::TotalsInput;
use crate::addons::AddOnConfig;
use crate::currency::round_money;
use crate::discount::DiscountBreakdown;

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn add_ons() -> impl Strategy<Value = AddOnConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(installation_enabled, installation_included_in_price, print_enabled, print_included_in_price)| {
            AddOnConfig {
                installation_enabled,
                installation_included_in_price,
                print_enabled,
                print_included_in_price,
                print_price_per_area_unit: dec!(10),
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Discount and grand-total invariants hold for every toggle combination.
    #[test]
    fn prop_totals_invariants(
        base_total in money(),
        level in money(),
        additional in money(),
        installation_cost in money(),
        print_cost in money(),
        add_ons in add_ons(),
    ) {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            base_total,
            discount: DiscountBreakdown {
                level_discount_amount: level,
                additional_discount_amount: additional,
            },
            installation_cost,
            print_cost,
            add_ons,
            operating_fee_rate: dec!(3),
        });

        prop_assert_eq!(totals.total_discount, level + additional);
        prop_assert_eq!(
            totals.total_after_discount,
            (base_total - totals.total_discount).max(Decimal::ZERO)
        );
        prop_assert_eq!(
            totals.grand_total,
            totals.total_after_discount
                + add_ons.billed_installation(installation_cost)
                + add_ons.billed_print(print_cost)
        );

        let expected_net = totals.total_after_discount
            - add_ons.included_installation(installation_cost)
            - add_ons.included_print(print_cost);
        prop_assert_eq!(totals.net_rental_basis, expected_net.max(Decimal::ZERO));
        prop_assert_eq!(
            totals.operating_fee,
            round_money(totals.net_rental_basis * dec!(3) / dec!(100))
        );
    }

    /// No derived figure is ever negative.
    #[test]
    fn prop_totals_never_negative(
        base_total in money(),
        level in money(),
        additional in money(),
        installation_cost in money(),
        print_cost in money(),
        add_ons in add_ons(),
    ) {
        let totals = TotalsAggregator::aggregate(&TotalsInput {
            base_total,
            discount: DiscountBreakdown {
                level_discount_amount: level,
                additional_discount_amount: additional,
            },
            installation_cost,
            print_cost,
            add_ons,
            operating_fee_rate: dec!(3),
        });

        prop_assert!(totals.total_after_discount >= Decimal::ZERO);
        prop_assert!(totals.net_rental_basis >= Decimal::ZERO);
        prop_assert!(totals.grand_total >= Decimal::ZERO);
        prop_assert!(totals.operating_fee >= Decimal::ZERO);
    }
}
