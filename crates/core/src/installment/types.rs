//! Installment data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InstallmentError;

/// One scheduled, dated partial payment toward the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Amount due in display currency.
    pub amount: Decimal,
    /// Free-text payment label (e.g., "on signing").
    pub payment_type: String,
    /// Human-readable description.
    pub description: String,
    /// Date the payment is due.
    pub due_date: NaiveDate,
}

/// How the first payment of an interval plan is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FirstPayment {
    /// Fixed display-currency amount.
    Fixed(Decimal),
    /// Percentage (0-100) of the grand total.
    Percentage(Decimal),
}

/// Months between recurring payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PaymentInterval {
    /// Every month.
    Monthly,
    /// Every two months.
    Bimonthly,
    /// Every three months.
    Quarterly,
    /// Every four months.
    FourMonthly,
}

impl PaymentInterval {
    /// Returns the interval length in months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Bimonthly => 2,
            Self::Quarterly => 3,
            Self::FourMonthly => 4,
        }
    }
}

impl TryFrom<u32> for PaymentInterval {
    type Error = InstallmentError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(Self::Monthly),
            2 => Ok(Self::Bimonthly),
            3 => Ok(Self::Quarterly),
            4 => Ok(Self::FourMonthly),
            other => Err(InstallmentError::UnsupportedInterval(other)),
        }
    }
}

impl From<PaymentInterval> for u32 {
    fn from(interval: PaymentInterval) -> Self {
        interval.months()
    }
}

/// A caller-entered installment of a manual plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualInstallment {
    /// Amount due, kept exactly as entered.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Date the payment is due.
    pub due_date: NaiveDate,
    /// Optional payment label; defaults follow the schedule configuration.
    #[serde(default)]
    pub payment_type: Option<String>,
}

/// Distribution strategy of a contract's grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum InstallmentPlan {
    /// `count` installments of equal rounded size.
    Equal {
        /// Number of installments.
        count: u32,
    },
    /// A first payment, then the balance split over recurring payments.
    FirstPaymentWithInterval {
        /// First payment at signing.
        first_payment: FirstPayment,
        /// Number of recurring payments after the first.
        recurring_count: u32,
        /// Months between recurring payments.
        interval: PaymentInterval,
    },
    /// Caller-entered, possibly unequal installments.
    Manual {
        /// Installments as entered.
        installments: Vec<ManualInstallment>,
    },
}

impl Default for InstallmentPlan {
    fn default() -> Self {
        Self::Equal { count: 1 }
    }
}

/// Result of reconciling an installment list with the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleValidation {
    /// True when the schedule can be submitted.
    pub is_valid: bool,
    /// Explanation for the operator.
    pub message: String,
}

impl ScheduleValidation {
    /// A passing result.
    #[must_use]
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    /// A failing result.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}
