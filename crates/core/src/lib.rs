//! Contract pricing engine for Rentboard.
//!
//! This crate contains pure computation with ZERO web or database dependencies.
//! It turns a selection of billboards, a rental duration, a display currency,
//! discounts and add-on options into contract totals and a payment schedule.
//!
//! # Modules
//!
//! - `currency` - Base-to-display conversion, rounding and allocation
//! - `pricing` - Line item normalization and unit price resolution
//! - `addons` - Print and installation costs
//! - `discount` - Level and additional discounts, per-billboard apportionment
//! - `totals` - Headline contract figures and operating fee
//! - `installment` - Payment schedules and reconciliation
//! - `contract` - The full pipeline

pub mod addons;
pub mod contract;
pub mod currency;
pub mod discount;
pub mod installment;
pub mod pricing;
pub mod totals;

mod calendar;

pub use contract::{ContractDraft, ContractInputs, ContractPricer, ContractQuote, PricedContract};
