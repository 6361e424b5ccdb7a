//! Calendar arithmetic for contract periods and due dates.

use chrono::{Days, Months, NaiveDate};

/// Adds calendar months, clamping to the last day of shorter months.
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Adds whole days.
pub(crate) fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 1, 1), 12), date(2025, 1, 1));
    }

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(add_days(date(2024, 1, 28), 7), date(2024, 2, 4));
    }
}
