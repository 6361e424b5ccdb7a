//! Reconciliation of an installment list against the grand total.

use rust_decimal::Decimal;
use tracing::warn;

use super::types::{Installment, ScheduleValidation};
use crate::currency::round_money;

/// Checks that an installment list can be submitted for the given total.
///
/// Rules, in order:
/// - an empty list is only acceptable when nothing is owed
/// - no installment may be negative
/// - the rounded sum must equal the rounded grand total
#[must_use]
pub fn validate_schedule(installments: &[Installment], grand_total: Decimal) -> ScheduleValidation {
    let expected = round_money(grand_total);

    if installments.is_empty() {
        return if expected > Decimal::ZERO {
            ScheduleValidation::invalid(format!("No installments scheduled for a total of {expected}"))
        } else {
            ScheduleValidation::valid("Nothing to schedule")
        };
    }

    if let Some(index) = installments.iter().position(|i| i.amount < Decimal::ZERO) {
        return ScheduleValidation::invalid(format!(
            "Installment #{} has a negative amount: {}",
            index + 1,
            installments[index].amount
        ));
    }

    let scheduled = round_money(installments.iter().map(|i| i.amount).sum());
    if scheduled == expected {
        ScheduleValidation::valid(format!(
            "{} installment(s) reconcile to {expected}",
            installments.len()
        ))
    } else {
        let difference = expected - scheduled;
        warn!(%scheduled, %expected, %difference, "Installment schedule does not reconcile");
        ScheduleValidation::invalid(format!(
            "Installments sum to {scheduled} but the grand total is {expected} (difference {difference})"
        ))
    }
}

/// Returns true when a previously produced list still matches the total.
///
/// A list goes stale whenever anything feeding the grand total changes; the
/// caller must then redistribute.
#[must_use]
pub fn is_schedule_current(installments: &[Installment], grand_total: Decimal) -> bool {
    validate_schedule(installments, grand_total).is_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installment::InstallmentDistributor;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn installment(amount: Decimal) -> Installment {
        Installment {
            amount,
            payment_type: "installment".to_string(),
            description: "Payment".to_string(),
            due_date: start(),
        }
    }

    #[test]
    fn test_generated_schedule_is_valid() {
        let list = InstallmentDistributor::default().equal_split(dec!(1234.56), 5, start());
        let result = validate_schedule(&list, dec!(1234.56));
        assert!(result.is_valid, "{}", result.message);
    }

    #[test]
    fn test_mismatch_reports_difference() {
        let list = vec![installment(dec!(700)), installment(dec!(200))];
        let result = validate_schedule(&list, dec!(1000));

        assert!(!result.is_valid);
        assert!(result.message.contains("900"));
        assert!(result.message.contains("difference 100"));
    }

    #[test]
    fn test_negative_installment_rejected() {
        let list = vec![installment(dec!(1100)), installment(dec!(-100))];
        let result = validate_schedule(&list, dec!(1000));

        assert!(!result.is_valid);
        assert!(result.message.starts_with("Installment #2"));
    }

    #[test]
    fn test_empty_schedule() {
        assert!(!validate_schedule(&[], dec!(10)).is_valid);
        assert!(validate_schedule(&[], Decimal::ZERO).is_valid);
    }

    #[test]
    fn test_sub_cent_noise_reconciles() {
        let list = vec![installment(dec!(500.001)), installment(dec!(500))];
        assert!(validate_schedule(&list, dec!(1000)).is_valid);
    }

    #[test]
    fn test_list_goes_stale_when_total_changes() {
        let list = InstallmentDistributor::default().equal_split(dec!(810), 3, start());

        assert!(is_schedule_current(&list, dec!(810)));
        assert!(!is_schedule_current(&list, dec!(891)));
    }
}
