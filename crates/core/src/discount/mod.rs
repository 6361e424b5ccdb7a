//! Level-based and additional contract discounts.

pub mod engine;
pub mod types;

pub use engine::DiscountEngine;
pub use types::{
    AdditionalDiscount, BillboardDiscountShare, DiscountBreakdown, DiscountConfig, clamp_percent,
};
