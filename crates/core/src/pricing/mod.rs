//! Billboard line items and unit price resolution.

pub mod error;
pub mod normalize;
pub mod resolver;
pub mod tier;
pub mod types;

pub use error::PricingError;
pub use resolver::{price_line_item, price_line_items, resolve_unit_price};
pub use tier::{PriceTable, PriceTier, PricingTierLookup};
pub use types::{BillboardLineItem, PricedLineItem, PricingMode};
