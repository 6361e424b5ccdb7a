//! Contract totals aggregation.

pub mod aggregator;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::TotalsAggregator;
pub use types::{ContractTotals, TotalsInput};
