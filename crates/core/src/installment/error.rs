//! Installment error types.

use thiserror::Error;

/// Installment plan errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallmentError {
    /// Recurring payments can only be 1, 2, 3 or 4 months apart.
    #[error("Unsupported payment interval: {0} months (expected 1, 2, 3 or 4)")]
    UnsupportedInterval(u32),
}
