//! Currency conversion and money allocation.

pub mod allocation;
pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use conversion::{CurrencyConverter, convert_amount, effective_rate, round_money};
pub use exchange::DisplayCurrency;
