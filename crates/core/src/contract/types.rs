//! Contract pipeline inputs and outputs.

use chrono::NaiveDate;
use rentboard_shared::types::ContractId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::addons::{AddOnConfig, InstallationCost, InstallationPriceTable, PrintCost};
use crate::currency::DisplayCurrency;
use crate::discount::{BillboardDiscountShare, DiscountBreakdown, DiscountConfig};
use crate::installment::{Installment, InstallmentPlan, ScheduleValidation};
use crate::pricing::{BillboardLineItem, PriceTable, PricedLineItem, PricingError, PricingMode};
use crate::totals::ContractTotals;

/// Everything that feeds one contract's totals and schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInputs {
    /// Draft being priced, if it already has one.
    #[serde(default)]
    pub contract_id: Option<ContractId>,
    /// Selected billboards, in selection order.
    pub billboards: Vec<BillboardLineItem>,
    /// Rental duration.
    pub mode: PricingMode,
    /// Customer pricing category.
    pub customer_category: String,
    /// Display currency; `None` shows the contract in base currency.
    #[serde(default)]
    pub currency: Option<DisplayCurrency>,
    /// Level and additional discounts.
    #[serde(default)]
    pub discount: DiscountConfig,
    /// Installation and print options.
    #[serde(default)]
    pub add_ons: AddOnConfig,
    /// Overrides the configured operating fee rate (percent).
    #[serde(default)]
    pub operating_fee_rate: Option<Decimal>,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Installment plan.
    #[serde(default)]
    pub plan: InstallmentPlan,
}

/// Priced contract, before installments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedContract {
    /// Draft the figures belong to.
    pub contract_id: Option<ContractId>,
    /// Display currency code.
    pub currency_code: String,
    /// Effective base-to-display rate.
    pub exchange_rate: Decimal,
    /// Last day of the rental period.
    pub end_date: NaiveDate,
    /// Per-billboard rental prices.
    pub line_items: Vec<PricedLineItem>,
    /// Print cost breakdown.
    pub print: PrintCost,
    /// Installation cost breakdown by size.
    pub installation: InstallationCost,
    /// Aggregate discount amounts.
    pub discount: DiscountBreakdown,
    /// Per-billboard discount records.
    pub discount_shares: Vec<BillboardDiscountShare>,
    /// Headline figures.
    pub totals: ContractTotals,
}

impl PricedContract {
    /// Number of billboards priced at zero because no tier matched.
    #[must_use]
    pub fn missing_tier_count(&self) -> usize {
        self.line_items.iter().filter(|item| item.missing_tier).count()
    }
}

/// A priced contract with its payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractQuote {
    /// Pricing results.
    #[serde(flatten)]
    pub contract: PricedContract,
    /// Payment schedule.
    pub installments: Vec<Installment>,
    /// Reconciliation of the schedule against the grand total.
    pub schedule_check: ScheduleValidation,
}

/// A self-contained quote request as read from a file.
///
/// Billboard records are raw catalog rows and go through normalization before
/// pricing; the price and installation tables travel with the draft.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractDraft {
    /// Draft identifier.
    #[serde(default)]
    pub contract_id: Option<ContractId>,
    /// Raw billboard records.
    pub billboards: Vec<Value>,
    /// Rental price tiers.
    #[serde(default)]
    pub price_table: PriceTable,
    /// Installation prices per size.
    #[serde(default)]
    pub installation_prices: InstallationPriceTable,
    /// Rental duration.
    pub mode: PricingMode,
    /// Customer pricing category.
    pub customer_category: String,
    /// Display currency.
    #[serde(default)]
    pub currency: Option<DisplayCurrency>,
    /// Discounts.
    #[serde(default)]
    pub discount: DiscountConfig,
    /// Add-on options.
    #[serde(default)]
    pub add_ons: AddOnConfig,
    /// Operating fee override.
    #[serde(default)]
    pub operating_fee_rate: Option<Decimal>,
    /// Contract start date.
    pub start_date: NaiveDate,
    /// Installment plan.
    #[serde(default)]
    pub plan: InstallmentPlan,
}

impl ContractDraft {
    /// Normalizes the raw billboard records into pricing inputs.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InBatch` naming the first record that cannot
    /// be normalized.
    pub fn inputs(&self) -> Result<ContractInputs, PricingError> {
        Ok(ContractInputs {
            contract_id: self.contract_id,
            billboards: BillboardLineItem::from_records(&self.billboards)?,
            mode: self.mode,
            customer_category: self.customer_category.clone(),
            currency: self.currency.clone(),
            discount: self.discount.clone(),
            add_ons: self.add_ons,
            operating_fee_rate: self.operating_fee_rate,
            start_date: self.start_date,
            plan: self.plan.clone(),
        })
    }
}
