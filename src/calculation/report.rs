//! Monthly and annual earnings reports.
//!
//! This module derives the report view of the ledger: earnings bucketed
//! into the twelve calendar months of a selected year, the stats derived
//! from those buckets, and the list of years a report can be selected for.

use rust_decimal::Decimal;

use crate::calculation::entry_earnings;
use crate::models::{RateSchedule, WorkEntry};

/// The canonical month labels in calendar order, as rendered by report
/// consumers.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Earnings for one calendar year, bucketed by month.
///
/// A report always has exactly twelve buckets in calendar order
/// (Jan → Dec); months without matching entries hold zero. Built with
/// [`monthly_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    earnings: [Decimal; 12],
}

impl MonthlyReport {
    /// Iterates the buckets as `(label, earnings)` pairs, Jan → Dec.
    pub fn months(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        self.earnings
            .iter()
            .copied()
            .enumerate()
            .map(|(index, value)| (MONTH_LABELS[index], value))
    }

    /// Returns the earnings bucket for a zero-based month index
    /// (0 = January).
    ///
    /// # Panics
    ///
    /// Panics if `month_index` is 12 or greater.
    pub fn month(&self, month_index: usize) -> Decimal {
        self.earnings[month_index]
    }

    /// Total earnings for the year: the sum of all twelve buckets.
    pub fn total_earnings(&self) -> Decimal {
        self.earnings.iter().copied().sum()
    }

    /// Average monthly earnings: the total divided by the fixed twelve
    /// months, regardless of how many months had activity.
    pub fn average_monthly(&self) -> Decimal {
        self.total_earnings() / Decimal::from(12)
    }

    /// The `(label, earnings)` pair of the highest-earning month.
    ///
    /// Ties are broken by earliest calendar order. A year with no
    /// activity reports `("Jan", 0)`.
    pub fn highest_month(&self) -> (&'static str, Decimal) {
        let mut best = 0;
        for (index, value) in self.earnings.iter().enumerate() {
            // strictly greater keeps the earliest month on ties
            if *value > self.earnings[best] {
                best = index;
            }
        }
        (MONTH_LABELS[best], self.earnings[best])
    }
}

/// Builds the monthly earnings report for `year`.
///
/// Entries dated outside `year` are ignored; every entry inside it
/// contributes its earnings (under `schedule`) to its month's bucket.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::monthly_report;
/// use worklog_engine::config::RatePolicy;
/// use worklog_engine::models::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::from_hourly(Decimal::new(20, 0), &RatePolicy::default());
/// let report = monthly_report(&[], 2024, &schedule);
/// assert_eq!(report.total_earnings(), Decimal::ZERO);
/// assert_eq!(report.months().count(), 12);
/// ```
pub fn monthly_report(entries: &[WorkEntry], year: i32, schedule: &RateSchedule) -> MonthlyReport {
    let mut earnings = [Decimal::ZERO; 12];
    for entry in entries.iter().filter(|e| e.year() == year) {
        earnings[entry.month_index()] += entry_earnings(entry, schedule);
    }
    MonthlyReport { earnings }
}

/// Returns the distinct calendar years present in the ledger, newest
/// first.
///
/// An empty ledger yields `[fallback_year]` (callers pass the current
/// year) so a year selector is never empty.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::available_years;
///
/// assert_eq!(available_years(&[], 2026), vec![2026]);
/// ```
pub fn available_years(entries: &[WorkEntry], fallback_year: i32) -> Vec<i32> {
    let mut years: Vec<i32> = entries.iter().map(WorkEntry::year).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();

    if years.is_empty() {
        years.push(fallback_year);
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::total_earnings;
    use crate::config::RatePolicy;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> RateSchedule {
        RateSchedule::from_hourly(dec("20"), &RatePolicy::default())
    }

    fn entry_on(date_str: &str, regular: u32, weekend: u32, holiday: u32) -> WorkEntry {
        WorkEntry {
            id: format!("entry-{date_str}-{regular}-{weekend}-{holiday}"),
            user_id: "user-001".to_string(),
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            regular_days: regular,
            weekend_days: weekend,
            holiday_days: holiday,
            notes: String::new(),
        }
    }

    #[test]
    fn test_report_always_has_twelve_buckets_in_calendar_order() {
        let report = monthly_report(&[], 2024, &schedule());
        let labels: Vec<&str> = report.months().map(|(label, _)| label).collect();
        assert_eq!(labels, MONTH_LABELS);
    }

    #[test]
    fn test_entries_land_in_their_month_bucket() {
        let entries = vec![
            entry_on("2024-01-10", 1, 0, 0), // 160
            entry_on("2024-01-20", 0, 1, 0), // 240
            entry_on("2024-03-05", 2, 0, 0), // 320
        ];
        let report = monthly_report(&entries, 2024, &schedule());

        assert_eq!(report.month(0), dec("400"));
        assert_eq!(report.month(1), Decimal::ZERO);
        assert_eq!(report.month(2), dec("320"));
    }

    #[test]
    fn test_other_years_are_excluded() {
        let entries = vec![
            entry_on("2023-06-01", 4, 0, 0),
            entry_on("2024-06-01", 1, 0, 0),
        ];
        let report = monthly_report(&entries, 2024, &schedule());
        assert_eq!(report.month(5), dec("160"));
        assert_eq!(report.total_earnings(), dec("160"));
    }

    #[test]
    fn test_report_total_matches_total_earnings_of_year() {
        let entries = vec![
            entry_on("2024-02-01", 2, 1, 0),
            entry_on("2024-02-15", 0, 0, 2),
            entry_on("2024-11-30", 3, 0, 0),
            entry_on("2025-01-01", 9, 9, 9), // different year, excluded
        ];
        let in_year: Vec<WorkEntry> = entries
            .iter()
            .filter(|e| e.year() == 2024)
            .cloned()
            .collect();

        let report = monthly_report(&entries, 2024, &schedule());
        assert_eq!(
            report.total_earnings(),
            total_earnings(&in_year, &schedule())
        );
    }

    #[test]
    fn test_average_monthly_divides_by_fixed_twelve() {
        // One active month only; the average still divides by 12.
        let entries = vec![entry_on("2024-05-01", 6, 0, 0)]; // 960
        let report = monthly_report(&entries, 2024, &schedule());
        assert_eq!(report.average_monthly(), dec("80"));
    }

    #[test]
    fn test_highest_month_picks_maximum() {
        let entries = vec![
            entry_on("2024-01-10", 1, 0, 0), // Jan 160
            entry_on("2024-04-10", 0, 0, 2), // Apr 640
            entry_on("2024-09-10", 1, 1, 0), // Sep 400
        ];
        let report = monthly_report(&entries, 2024, &schedule());
        assert_eq!(report.highest_month(), ("Apr", dec("640")));
    }

    #[test]
    fn test_highest_month_tie_goes_to_earliest() {
        let entries = vec![
            entry_on("2024-03-10", 2, 0, 0), // Mar 320
            entry_on("2024-08-10", 2, 0, 0), // Aug 320
        ];
        let report = monthly_report(&entries, 2024, &schedule());
        assert_eq!(report.highest_month(), ("Mar", dec("320")));
    }

    #[test]
    fn test_highest_month_of_empty_year_is_january_zero() {
        let report = monthly_report(&[], 2024, &schedule());
        assert_eq!(report.highest_month(), ("Jan", Decimal::ZERO));
    }

    #[test]
    fn test_available_years_distinct_descending() {
        let entries = vec![
            entry_on("2022-01-01", 1, 0, 0),
            entry_on("2024-01-01", 1, 0, 0),
            entry_on("2022-06-01", 1, 0, 0),
            entry_on("2023-12-31", 1, 0, 0),
        ];
        assert_eq!(available_years(&entries, 2026), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_available_years_empty_falls_back_to_current_year() {
        assert_eq!(available_years(&[], 2026), vec![2026]);
    }
}
