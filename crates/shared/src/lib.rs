//! Shared types, errors, and configuration for Rentboard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for contracts and billboards
//! - Currency catalog entries
//! - Application-wide error types
//! - Engine configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{EngineConfig, PricingConfig, ScheduleConfig};
pub use error::{AppError, AppResult};
