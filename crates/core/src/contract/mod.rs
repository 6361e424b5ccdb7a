//! Contract-level pricing: one call from selected billboards to a reconciled
//! payment schedule.

pub mod service;
pub mod types;


pub use service::ContractPricer;
pub use types::{ContractDraft, ContractInputs, ContractQuote, PricedContract};
