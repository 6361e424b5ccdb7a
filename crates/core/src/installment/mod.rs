//! Installment schedules.
//!
//! Distributes a contract's grand total into dated payments and reconciles a
//! list against the current total.

pub mod distributor;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use distributor::InstallmentDistributor;
pub use error::InstallmentError;
pub use types::{
    FirstPayment, Installment, InstallmentPlan, ManualInstallment, PaymentInterval,
    ScheduleValidation,
};
pub use validation::{is_schedule_current, validate_schedule};
