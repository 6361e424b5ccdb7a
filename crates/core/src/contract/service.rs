//! Contract pricing pipeline.
//!
//! Runs unit pricing, add-on costs, discounts, totals and installment
//! distribution in that order. Every call recomputes from its inputs; the
//! pricer holds configuration only.

use chrono::NaiveDate;
use rayon::prelude::*;
use rentboard_shared::types::CurrencyInfo;
use rentboard_shared::{EngineConfig, PricingConfig};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{ContractDraft, ContractInputs, ContractQuote, PricedContract};
use crate::addons::{InstallationPriceLookup, installation_cost, print_cost};
use crate::currency::DisplayCurrency;
use crate::discount::DiscountEngine;
use crate::installment::{Installment, InstallmentDistributor, InstallmentPlan, validate_schedule};
use crate::pricing::{PricingError, PricingTierLookup, price_line_items};
use crate::totals::{TotalsAggregator, TotalsInput};

/// Prices contracts and builds their payment schedules.
#[derive(Debug, Clone)]
pub struct ContractPricer {
    pricing: PricingConfig,
    distributor: InstallmentDistributor,
}

impl ContractPricer {
    /// Creates a pricer from engine configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            pricing: config.pricing.clone(),
            distributor: InstallmentDistributor::new(config.schedule.clone()),
        }
    }

    /// Computes every derived figure of a contract.
    #[must_use]
    pub fn compute_totals<T, L>(
        &self,
        inputs: &ContractInputs,
        tiers: &T,
        installation_prices: &L,
    ) -> PricedContract
    where
        T: PricingTierLookup + ?Sized,
        L: InstallationPriceLookup + ?Sized,
    {
        let currency = self.display_currency(inputs);
        let converter = currency.converter();

        let line_items = price_line_items(
            &inputs.billboards,
            inputs.mode,
            &inputs.customer_category,
            tiers,
            &converter,
        );
        let base_total: Decimal = line_items.iter().map(|item| item.unit_price).sum();

        let print = print_cost(&inputs.billboards, &inputs.add_ons, &converter);
        let installation = installation_cost(
            &inputs.billboards,
            inputs.add_ons.installation_enabled,
            installation_prices,
            &converter,
        );

        // Level discount first; the percentage discount sees what remains.
        let discount = DiscountEngine::compute_for_line_items(&line_items, &inputs.discount, &converter);
        let discount_shares = DiscountEngine::apportion_line_items(&line_items, &inputs.discount, &discount);

        let totals = TotalsAggregator::aggregate(&TotalsInput {
            base_total,
            discount,
            installation_cost: installation.total,
            print_cost: print.total,
            add_ons: inputs.add_ons,
            operating_fee_rate: inputs
                .operating_fee_rate
                .unwrap_or(self.pricing.operating_fee_rate),
        });

        let contract = PricedContract {
            contract_id: inputs.contract_id,
            currency_code: currency.currency.code.clone(),
            exchange_rate: converter.rate(),
            end_date: inputs.mode.end_date(inputs.start_date),
            line_items,
            print,
            installation,
            discount,
            discount_shares,
            totals,
        };

        debug!(
            billboards = contract.line_items.len(),
            missing_tiers = contract.missing_tier_count(),
            currency = %contract.currency_code,
            grand_total = %contract.totals.grand_total,
            "Contract priced"
        );

        contract
    }

    /// Builds a fresh installment list for the grand total.
    #[must_use]
    pub fn distribute(
        &self,
        plan: &InstallmentPlan,
        grand_total: Decimal,
        start_date: NaiveDate,
    ) -> Vec<Installment> {
        self.distributor.distribute(plan, grand_total, start_date)
    }

    /// Prices a contract, distributes its grand total and reconciles the result.
    ///
    /// A schedule that does not reconcile is reported in
    /// `ContractQuote::schedule_check`, never as an error.
    #[must_use]
    pub fn quote<T, L>(&self, inputs: &ContractInputs, tiers: &T, installation_prices: &L) -> ContractQuote
    where
        T: PricingTierLookup + ?Sized,
        L: InstallationPriceLookup + ?Sized,
    {
        let contract = self.compute_totals(inputs, tiers, installation_prices);
        let installments = self.distribute(&inputs.plan, contract.totals.grand_total, inputs.start_date);
        let schedule_check = validate_schedule(&installments, contract.totals.grand_total);

        if !schedule_check.is_valid {
            warn!(
                contract_id = ?contract.contract_id,
                message = %schedule_check.message,
                "Installment schedule needs attention"
            );
        }

        ContractQuote {
            contract,
            installments,
            schedule_check,
        }
    }

    /// Quotes many contracts against the same lookups in parallel.
    ///
    /// Results keep the order of `inputs`.
    #[must_use]
    pub fn quote_batch<T, L>(
        &self,
        inputs: &[ContractInputs],
        tiers: &T,
        installation_prices: &L,
    ) -> Vec<ContractQuote>
    where
        T: PricingTierLookup + Sync + ?Sized,
        L: InstallationPriceLookup + Sync + ?Sized,
    {
        inputs
            .par_iter()
            .map(|contract| self.quote(contract, tiers, installation_prices))
            .collect()
    }

    /// Normalizes and quotes a self-contained draft.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` when a billboard record cannot be normalized.
    pub fn quote_draft(&self, draft: &ContractDraft) -> Result<ContractQuote, PricingError> {
        let inputs = draft.inputs()?;
        Ok(self.quote(&inputs, &draft.price_table, &draft.installation_prices))
    }

    /// Quotes several drafts in parallel, one result per draft.
    #[must_use]
    pub fn quote_drafts(&self, drafts: &[ContractDraft]) -> Vec<Result<ContractQuote, PricingError>> {
        drafts.par_iter().map(|draft| self.quote_draft(draft)).collect()
    }

    fn display_currency(&self, inputs: &ContractInputs) -> DisplayCurrency {
        inputs.currency.clone().unwrap_or_else(|| {
            let code = self.pricing.base_currency.as_str();
            DisplayCurrency::base(CurrencyInfo::new(code, code, code))
        })
    }
}

impl Default for ContractPricer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
