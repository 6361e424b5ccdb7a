//! Installment distribution strategies.
//!
//! Every run produces a fresh list from the current grand total; there is no
//! patching of a previous list. For generated strategies the amounts always
//! sum to the grand total to the cent.

use chrono::NaiveDate;
use rentboard_shared::ScheduleConfig;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{FirstPayment, Installment, InstallmentPlan, ManualInstallment, PaymentInterval};
use crate::calendar::{add_days, add_months};
use crate::currency::{AllocationUtil, round_money};
use crate::discount::clamp_percent;

/// Splits a grand total into dated, labeled installments.
#[derive(Debug, Clone, Default)]
pub struct InstallmentDistributor {
    config: ScheduleConfig,
}

impl InstallmentDistributor {
    /// Creates a distributor using the given labels and installation offset.
    #[must_use]
    pub const fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Runs the plan's strategy.
    #[must_use]
    pub fn distribute(
        &self,
        plan: &InstallmentPlan,
        grand_total: Decimal,
        start_date: NaiveDate,
    ) -> Vec<Installment> {
        let installments = match plan {
            InstallmentPlan::Equal { count } => self.equal_split(grand_total, *count, start_date),
            InstallmentPlan::FirstPaymentWithInterval {
                first_payment,
                recurring_count,
                interval,
            } => self.first_payment_with_interval(
                grand_total,
                *first_payment,
                *recurring_count,
                *interval,
                start_date,
            ),
            InstallmentPlan::Manual { installments } => self.manual(installments),
        };

        debug!(
            %grand_total,
            installments = installments.len(),
            "Installment schedule produced"
        );
        installments
    }

    /// Splits the total into `count` equal installments.
    ///
    /// - 1: full amount at signing
    /// - 2: half at signing, the rest at installation (`offset` days later)
    /// - n: one per calendar month from the start date
    ///
    /// The last installment absorbs rounding. A count of zero is read as one.
    #[must_use]
    pub fn equal_split(&self, grand_total: Decimal, count: u32, start_date: NaiveDate) -> Vec<Installment> {
        let count = normalize_count(count);
        let total = round_money(grand_total).max(Decimal::ZERO);

        match count {
            1 => vec![self.single(total, start_date)],
            2 => {
                let parts = AllocationUtil::split_evenly(total, 2);
                vec![
                    Installment {
                        amount: parts[0],
                        payment_type: self.config.signing_label.clone(),
                        description: "Payment 1 of 2".to_string(),
                        due_date: start_date,
                    },
                    Installment {
                        amount: parts[1],
                        payment_type: self.config.installation_label.clone(),
                        description: "Payment 2 of 2".to_string(),
                        due_date: add_days(start_date, self.config.installation_offset_days),
                    },
                ]
            }
            n => AllocationUtil::split_evenly(total, n as usize)
                .into_iter()
                .zip(0u32..)
                .map(|(amount, i)| Installment {
                    amount,
                    payment_type: self.label_for(i),
                    description: format!("Payment {} of {n}", i + 1),
                    due_date: add_months(start_date, i),
                })
                .collect(),
        }
    }

    /// A first payment at signing, then the balance over recurring payments.
    ///
    /// The first payment is clamped to `[0, grand_total]`. A zero first
    /// payment is omitted and the recurring payments start at the start date;
    /// with a single recurring payment that is the one-installment case.
    #[must_use]
    pub fn first_payment_with_interval(
        &self,
        grand_total: Decimal,
        first_payment: FirstPayment,
        recurring_count: u32,
        interval: PaymentInterval,
        start_date: NaiveDate,
    ) -> Vec<Installment> {
        let total = round_money(grand_total).max(Decimal::ZERO);
        let first = match first_payment {
            FirstPayment::Fixed(amount) => round_money(amount),
            FirstPayment::Percentage(percent) => {
                round_money(total * clamp_percent(percent) / Decimal::ONE_HUNDRED)
            }
        }
        .clamp(Decimal::ZERO, total);
        let recurring_count = normalize_count(recurring_count);
        let remaining = total - first;

        if remaining.is_zero() || (first.is_zero() && recurring_count == 1) {
            return vec![self.single(total, start_date)];
        }

        let has_first = !first.is_zero();
        let offset = u32::from(has_first);
        let count = recurring_count + offset;

        let mut installments = Vec::with_capacity(count as usize);
        if has_first {
            installments.push(Installment {
                amount: first,
                payment_type: self.config.signing_label.clone(),
                description: format!("Payment 1 of {count}"),
                due_date: start_date,
            });
        }

        let parts = AllocationUtil::split_evenly(remaining, recurring_count as usize);
        installments.extend(parts.into_iter().zip(offset..).map(|(amount, i)| {
            Installment {
                amount,
                payment_type: self.label_for(i),
                description: format!("Payment {} of {count}", i + 1),
                due_date: add_months(start_date, interval.months().saturating_mul(i)),
            }
        }));

        installments
    }

    /// Takes caller-entered installments as they are.
    ///
    /// Amounts are never altered; reconciliation is reported separately by
    /// `validate_schedule`.
    #[must_use]
    pub fn manual(&self, entries: &[ManualInstallment]) -> Vec<Installment> {
        entries
            .iter()
            .zip(0u32..)
            .map(|(entry, i)| Installment {
                amount: entry.amount,
                payment_type: entry
                    .payment_type
                    .clone()
                    .unwrap_or_else(|| self.label_for(i)),
                description: entry.description.clone(),
                due_date: entry.due_date,
            })
            .collect()
    }

    fn single(&self, total: Decimal, start_date: NaiveDate) -> Installment {
        Installment {
            amount: total,
            payment_type: self.config.signing_label.clone(),
            description: "Full payment".to_string(),
            due_date: start_date,
        }
    }

    fn label_for(&self, index: u32) -> String {
        if index == 0 {
            self.config.signing_label.clone()
        } else {
            self.config.recurring_label.clone()
        }
    }
}

fn normalize_count(count: u32) -> u32 {
    if count == 0 {
        warn!("Installment count of zero, using a single installment");
        1
    } else {
        count
    }
}
