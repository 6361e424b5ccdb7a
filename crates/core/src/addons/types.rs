//! Add-on configuration and cost breakdown types.

use rentboard_shared::types::BillboardId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Installation and print add-ons of a contract.
///
/// Each add-on is enabled independently and, when enabled, is either
/// included in the rental price (free to the customer) or billed separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnConfig {
    /// Whether installation is part of the contract.
    pub installation_enabled: bool,
    /// Whether installation is absorbed into the rental price.
    pub installation_included_in_price: bool,
    /// Whether printing is part of the contract.
    pub print_enabled: bool,
    /// Base-currency print price per square unit of panel area.
    pub print_price_per_area_unit: Decimal,
    /// Whether printing is absorbed into the rental price.
    pub print_included_in_price: bool,
}

impl AddOnConfig {
    /// Installation cost billed on top of the rental price.
    #[must_use]
    pub fn billed_installation(&self, installation_cost: Decimal) -> Decimal {
        if self.installation_enabled && !self.installation_included_in_price {
            installation_cost
        } else {
            Decimal::ZERO
        }
    }

    /// Installation cost absorbed into the rental price.
    #[must_use]
    pub fn included_installation(&self, installation_cost: Decimal) -> Decimal {
        if self.installation_enabled && self.installation_included_in_price {
            installation_cost
        } else {
            Decimal::ZERO
        }
    }

    /// Print cost billed on top of the rental price.
    #[must_use]
    pub fn billed_print(&self, print_cost: Decimal) -> Decimal {
        if self.print_enabled && !self.print_included_in_price {
            print_cost
        } else {
            Decimal::ZERO
        }
    }

    /// Print cost absorbed into the rental price.
    #[must_use]
    pub fn included_print(&self, print_cost: Decimal) -> Decimal {
        if self.print_enabled && self.print_included_in_price {
            print_cost
        } else {
            Decimal::ZERO
        }
    }
}

/// Print cost of one billboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillboardPrintCost {
    /// Billboard id.
    pub billboard_id: BillboardId,
    /// Panel area (width * height), zero when the size label is unparseable.
    pub area: Decimal,
    /// Number of faces printed.
    pub face_count: u32,
    /// Print cost in display currency.
    pub cost: Decimal,
}

/// Print cost breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintCost {
    /// Per-billboard costs, in selection order.
    pub per_billboard: Vec<BillboardPrintCost>,
    /// Sum of per-billboard costs.
    pub total: Decimal,
}

/// Installation cost of all billboards sharing a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeInstallation {
    /// Size label as written on the billboards.
    pub size_label: String,
    /// Number of selected billboards of this size.
    pub billboard_count: u32,
    /// Installation price per billboard in display currency.
    pub unit_price: Decimal,
    /// `unit_price * billboard_count`.
    pub subtotal: Decimal,
}

/// Installation cost breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationCost {
    /// Per-size lines, sorted by size label.
    pub per_size: Vec<SizeInstallation>,
    /// Flat sum over all selected billboards.
    pub total: Decimal,
}
