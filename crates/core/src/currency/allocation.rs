//! Amount allocation utilities.
//!
//! Both allocators guarantee the sum of the parts EXACTLY equals the rounded
//! total (no cents lost):
//! - `split_evenly` rounds each share and lets the last part absorb the
//!   rounding remainder, the rule printed installment schedules follow
//! - `allocate_proportional` uses the Largest Remainder Method:
//!   1. Calculate exact allocations
//!   2. Round down each allocation
//!   3. Calculate the remainder (total - sum of rounded)
//!   4. Distribute remainder cents to items with largest fractional parts

use rentboard_shared::types::MONEY_SCALE;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::conversion::round_money;

/// Allocation utility for distributing money amounts.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Split an amount into `count` parts of equal rounded size.
    ///
    /// All parts but the last are `round(total / count, 2)`; the last part is
    /// `total - sum(previous)`. When rounding up would leave the last part
    /// negative (tiny totals over many parts) the shares are truncated instead.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rentboard_core::currency::AllocationUtil;
    ///
    /// // 100 / 3 = [33.33, 33.33, 33.34], sum = 100.00
    /// let result = AllocationUtil::split_evenly(dec!(100), 3);
    /// assert_eq!(result, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);
    /// ```
    #[must_use]
    pub fn split_evenly(total: Decimal, count: usize) -> Vec<Decimal> {
        if count == 0 {
            return vec![];
        }

        let total = round_money(total);
        if count == 1 {
            return vec![total];
        }

        let exact = total / Decimal::from(count);
        let others = Decimal::from(count - 1);

        let mut share = round_money(exact);
        if share * others > total {
            share = exact.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero);
        }
        let last = total - share * others;

        let mut parts = vec![share; count - 1];
        parts.push(last);
        parts
    }

    /// Allocate an amount proportionally to the given weights.
    ///
    /// Non-positive weights receive nothing. If no weight is positive every
    /// part is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rentboard_core::currency::AllocationUtil;
    ///
    /// // 100 split by 1:1:1 -> [33.34, 33.33, 33.33]
    /// let weights = vec![dec!(1), dec!(1), dec!(1)];
    /// let result = AllocationUtil::allocate_proportional(dec!(100), &weights);
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    #[must_use]
    pub fn allocate_proportional(total: Decimal, weights: &[Decimal]) -> Vec<Decimal> {
        if weights.is_empty() {
            return vec![];
        }

        let unit = Decimal::new(1, MONEY_SCALE);
        let total_rounded = round_money(total);

        let weight_sum: Decimal = weights.iter().copied().filter(|w| *w > Decimal::ZERO).sum();
        if weight_sum.is_zero() {
            return vec![Decimal::ZERO; weights.len()];
        }

        // Calculate exact allocations
        let exact: Vec<Decimal> = weights
            .iter()
            .map(|w| {
                if *w > Decimal::ZERO {
                    total_rounded * *w / weight_sum
                } else {
                    Decimal::ZERO
                }
            })
            .collect();

        // Round down each
        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| a.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero))
            .collect();

        // Calculate remainder to distribute
        let sum_rounded: Decimal = rounded.iter().copied().sum();
        let remainder = total_rounded - sum_rounded;

        let units_to_distribute = (remainder / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_u64()
            .unwrap_or(0);
        let units_to_distribute = usize::try_from(units_to_distribute).unwrap_or(0);

        if units_to_distribute == 0 {
            return rounded;
        }

        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(rounded.iter())
            .enumerate()
            .filter(|(i, _)| weights[*i] > Decimal::ZERO)
            .map(|(i, (e, r))| (i, *e - *r))
            .collect();

        // Largest fractional part first; earlier items win ties
        remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        for (idx, _) in remainders.iter().cycle().take(units_to_distribute) {
            rounded[*idx] += unit;
        }

        rounded
    }
}
