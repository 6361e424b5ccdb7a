//! Print cost from panel dimensions.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{AddOnConfig, BillboardPrintCost, PrintCost};
use crate::currency::CurrencyConverter;
use crate::pricing::BillboardLineItem;

/// The whole label is `<width><sep><height>`, optionally followed by `m`.
/// Separators are x, X, ×, - and decimals use `.` or `,`.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*[xX×\-]\s*(\d+(?:[.,]\d+)?)\s*(?:m)?\s*$")
        .expect("size pattern is a valid regex")
});

/// Width and height of a billboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDimensions {
    /// Panel width.
    pub width: Decimal,
    /// Panel height.
    pub height: Decimal,
}

impl PanelDimensions {
    /// Parses a size label such as `"12x4"` or `"3,5×2"`.
    ///
    /// Returns `None` unless the whole label is a single dimension pair.
    #[must_use]
    pub fn parse(size_label: &str) -> Option<Self> {
        let caps = SIZE_PATTERN.captures(size_label)?;
        let width = parse_number(caps.get(1)?.as_str())?;
        let height = parse_number(caps.get(2)?.as_str())?;
        Some(Self { width, height })
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> Decimal {
        self.width * self.height
    }
}

fn parse_number(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', ".")).ok()
}

/// Print cost of one billboard in display currency.
///
/// `round(area * faces * price_per_area_unit * rate, 2)`; an unparseable
/// size label costs `0` without affecting other billboards.
#[must_use]
pub fn billboard_print_cost(
    billboard: &BillboardLineItem,
    price_per_area_unit: Decimal,
    converter: &CurrencyConverter,
) -> BillboardPrintCost {
    let area = match PanelDimensions::parse(&billboard.size_label) {
        Some(dims) => dims.area(),
        None => {
            warn!(
                billboard_id = %billboard.id,
                size_label = %billboard.size_label,
                "Unparseable size label, print cost is zero"
            );
            Decimal::ZERO
        }
    };

    let cost = converter.convert(area * Decimal::from(billboard.face_count) * price_per_area_unit);

    BillboardPrintCost {
        billboard_id: billboard.id.clone(),
        area,
        face_count: billboard.face_count,
        cost: cost.max(Decimal::ZERO),
    }
}

/// Print cost across the selected billboards; empty when printing is disabled.
#[must_use]
pub fn print_cost(
    billboards: &[BillboardLineItem],
    config: &AddOnConfig,
    converter: &CurrencyConverter,
) -> PrintCost {
    if !config.print_enabled {
        return PrintCost::default();
    }

    let per_billboard: Vec<BillboardPrintCost> = billboards
        .iter()
        .map(|billboard| billboard_print_cost(billboard, config.print_price_per_area_unit, converter))
        .collect();
    let total = per_billboard.iter().map(|line| line.cost).sum();

    PrintCost {
        per_billboard,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("12x4", dec!(12), dec!(4))]
    #[case("12X4", dec!(12), dec!(4))]
    #[case("3,5×2", dec!(3.5), dec!(2))]
    #[case("4.5-3", dec!(4.5), dec!(3))]
    #[case("13 x 5 m", dec!(13), dec!(5))]
    fn test_parse_dimensions(#[case] label: &str, #[case] width: Decimal, #[case] height: Decimal) {
        let dims = PanelDimensions::parse(label).unwrap();
        assert_eq!(dims.width, width);
        assert_eq!(dims.height, height);
    }

    #[rstest]
    #[case("invalid")]
    #[case("")]
    #[case("12")]
    #[case("x4")]
    #[case("1-2x3")]
    #[case("12x4x2")]
    #[case("Panel 12x4")]
    fn test_parse_rejects(#[case] label: &str) {
        assert_eq!(PanelDimensions::parse(label), None);
    }

    #[test]
    fn test_billboard_print_cost() {
        // 12x4 = 48, 2 faces, 10 per unit -> 960
        let billboard = BillboardLineItem::new("1", "12x4", 2, "A");
        let line = billboard_print_cost(&billboard, dec!(10), &CurrencyConverter::identity());
        assert_eq!(line.area, dec!(48));
        assert_eq!(line.cost, dec!(960));
    }

    #[test]
    fn test_invalid_size_costs_zero() {
        let billboard = BillboardLineItem::new("1", "invalid", 2, "A");
        let line = billboard_print_cost(&billboard, dec!(10), &CurrencyConverter::identity());
        assert_eq!(line.cost, Decimal::ZERO);
    }

    #[test]
    fn test_print_cost_applies_rate() {
        let billboard = BillboardLineItem::new("1", "3,5×2", 1, "A");
        // 7 * 1 * 3 = 21 base, * 0.333 = 6.993 -> 6.99
        let line = billboard_print_cost(&billboard, dec!(3), &CurrencyConverter::new(dec!(0.333)));
        assert_eq!(line.cost, dec!(6.99));
    }

    #[test]
    fn test_print_cost_sums_only_when_enabled() {
        let billboards = vec![
            BillboardLineItem::new("1", "12x4", 2, "A"),
            BillboardLineItem::new("2", "invalid", 2, "A"),
            BillboardLineItem::new("3", "8x3", 1, "B"),
        ];
        let mut config = AddOnConfig {
            print_enabled: true,
            print_price_per_area_unit: dec!(10),
            ..AddOnConfig::default()
        };

        let cost = print_cost(&billboards, &config, &CurrencyConverter::identity());
        assert_eq!(cost.per_billboard.len(), 3);
        assert_eq!(cost.total, dec!(1200)); // 960 + 0 + 240

        config.print_enabled = false;
        let cost = print_cost(&billboards, &config, &CurrencyConverter::identity());
        assert_eq!(cost, PrintCost::default());
    }
}
