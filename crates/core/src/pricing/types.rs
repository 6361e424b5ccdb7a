//! Billboard line items and pricing modes.

use chrono::NaiveDate;
use rentboard_shared::types::BillboardId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, add_months};

/// A billboard selected for a contract.
///
/// Immutable input owned by the billboard catalog; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillboardLineItem {
    /// Catalog id.
    pub id: BillboardId,
    /// Panel size as written in the catalog (e.g., "12x4").
    pub size_label: String,
    /// Number of advertising faces.
    pub face_count: u32,
    /// Billboard level/category used for tiers and level discounts.
    pub level: String,
    /// Key the pricing-tier table is indexed by.
    pub price_key: String,
}

impl BillboardLineItem {
    /// Creates a line item whose price key is its size label.
    #[must_use]
    pub fn new(
        id: impl Into<BillboardId>,
        size_label: impl Into<String>,
        face_count: u32,
        level: impl Into<String>,
    ) -> Self {
        let size_label = size_label.into();
        Self {
            id: id.into(),
            price_key: size_label.clone(),
            size_label,
            face_count,
            level: level.into(),
        }
    }

    /// Replaces the pricing-tier key.
    #[must_use]
    pub fn with_price_key(mut self, price_key: impl Into<String>) -> Self {
        self.price_key = price_key.into();
        self
    }
}

/// Contract duration, selecting which tier table is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum PricingMode {
    /// Duration in calendar months.
    Months {
        /// Number of months.
        count: u32,
    },
    /// Duration in days.
    Days {
        /// Number of days.
        count: u32,
    },
}

impl PricingMode {
    /// Returns the duration count regardless of unit.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Months { count } | Self::Days { count } => count,
        }
    }

    /// Returns the date the rental period ends when it starts on `start`.
    #[must_use]
    pub fn end_date(self, start: NaiveDate) -> NaiveDate {
        match self {
            Self::Months { count } => add_months(start, count),
            Self::Days { count } => add_days(start, u64::from(count)),
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months { count } => write!(f, "{count} month(s)"),
            Self::Days { count } => write!(f, "{count} day(s)"),
        }
    }
}

/// A billboard with its resolved unit price in display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    /// The priced billboard.
    pub billboard: BillboardLineItem,
    /// Rental price for the whole contract period.
    pub unit_price: Decimal,
    /// True when no pricing tier matched and the price defaulted to zero.
    pub missing_tier: bool,
}
