//! Property-based tests for installment distribution.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::distributor::InstallmentDistributor;
use super::types::{FirstPayment, InstallmentPlan, PaymentInterval};
use super::validation::validate_schedule;

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn interval() -> impl Strategy<Value = PaymentInterval> {
    prop_oneof![
        Just(PaymentInterval::Monthly),
        Just(PaymentInterval::Bimonthly),
        Just(PaymentInterval::Quarterly),
        Just(PaymentInterval::FourMonthly),
    ]
}

fn first_payment() -> impl Strategy<Value = FirstPayment> {
    prop_oneof![
        money().prop_map(FirstPayment::Fixed),
        (0i64..=10_000i64).prop_map(|bp| FirstPayment::Percentage(Decimal::new(bp, 2))),
    ]
}

fn plan() -> impl Strategy<Value = InstallmentPlan> {
    prop_oneof![
        (1u32..=12).prop_map(|count| InstallmentPlan::Equal { count }),
        (first_payment(), 1u32..=12, interval()).prop_map(
            |(first_payment, recurring_count, interval)| InstallmentPlan::FirstPaymentWithInterval {
                first_payment,
                recurring_count,
                interval,
            }
        ),
    ]
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Generated schedules always sum to the grand total to the cent.
    #[test]
    fn prop_generated_schedule_sums_to_total(total in money(), plan in plan()) {
        let list = InstallmentDistributor::default().distribute(&plan, total, start());
        let sum: Decimal = list.iter().map(|i| i.amount).sum();

        prop_assert_eq!(sum, total);
        prop_assert!(validate_schedule(&list, total).is_valid);
    }

    /// No generated installment is negative and due dates never go backwards.
    #[test]
    fn prop_generated_schedule_is_ordered(total in money(), plan in plan()) {
        let list = InstallmentDistributor::default().distribute(&plan, total, start());

        prop_assert!(!list.is_empty());
        prop_assert!(list.iter().all(|i| i.amount >= Decimal::ZERO));
        prop_assert!(list.windows(2).all(|w| w[0].due_date <= w[1].due_date));
        prop_assert_eq!(list[0].due_date, start());
    }

    /// Equal split produces exactly the requested number of installments.
    #[test]
    fn prop_equal_split_count(total in money(), count in 1u32..=12) {
        let list = InstallmentDistributor::default().equal_split(total, count, start());
        prop_assert_eq!(list.len(), count as usize);
    }
}
