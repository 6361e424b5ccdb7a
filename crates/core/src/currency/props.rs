//! Property-based tests for currency operations.
//!
//! - Conversion rounding and fallback rate
//! - Allocation sum invariant

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::AllocationUtil;
use super::conversion::{convert_amount, round_money};

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate non-positive exchange rates.
fn non_positive_rate() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=0i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converted amounts never carry more than 2 decimal places.
    #[test]
    fn prop_convert_rounds_to_cents(
        amount in amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        prop_assert_eq!(result, round_money(result));
    }

    /// Any rate at or below zero behaves exactly like a rate of one.
    #[test]
    fn prop_non_positive_rate_is_identity(
        amount in amount(),
        rate in non_positive_rate(),
    ) {
        prop_assert_eq!(convert_amount(amount, rate), convert_amount(amount, Decimal::ONE));
    }

    /// Non-negative inputs never produce negative money.
    #[test]
    fn prop_convert_never_negative(
        amount in amount(),
        rate in positive_rate(),
    ) {
        prop_assert!(convert_amount(amount, rate) >= Decimal::ZERO);
    }

    /// Even splits always add back up to the total, with no negative part.
    #[test]
    fn prop_split_evenly_sum_invariant(
        total in amount(),
        count in 1usize..=24,
    ) {
        let parts = AllocationUtil::split_evenly(total, count);
        prop_assert_eq!(parts.len(), count);
        prop_assert_eq!(parts.iter().copied().sum::<Decimal>(), total);
        prop_assert!(parts.iter().all(|p| *p >= Decimal::ZERO));
    }

    /// Proportional allocations always add back up to the total.
    #[test]
    fn prop_allocate_proportional_sum_invariant(
        total in amount(),
        weights in prop::collection::vec(amount(), 1..12),
    ) {
        let parts = AllocationUtil::allocate_proportional(total, &weights);
        prop_assert_eq!(parts.len(), weights.len());
        if weights.iter().any(|w| *w > Decimal::ZERO) {
            prop_assert_eq!(parts.iter().copied().sum::<Decimal>(), total);
        } else {
            prop_assert!(parts.iter().all(Decimal::is_zero));
        }
    }
}
