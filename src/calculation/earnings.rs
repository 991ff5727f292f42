//! Earnings calculation.
//!
//! Pure functions turning work entries and a rate schedule into monetary
//! amounts. All arithmetic is `Decimal`; no rounding is applied.

use rust_decimal::Decimal;

use crate::models::{RateSchedule, WorkEntry};

/// Computes the earnings for a single entry under a rate schedule.
///
/// `regular_days × regular + weekend_days × weekend + holiday_days ×
/// holiday`. Deterministic and total over all valid entries.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::entry_earnings;
/// use worklog_engine::config::RatePolicy;
/// use worklog_engine::models::{RateSchedule, WorkEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::from_hourly(Decimal::new(20, 0), &RatePolicy::default());
/// let entry = WorkEntry {
///     id: "entry-001".to_string(),
///     user_id: "user-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     regular_days: 2,
///     weekend_days: 1,
///     holiday_days: 0,
///     notes: String::new(),
/// };
/// // 2 × 160 + 1 × 240 = 560
/// assert_eq!(entry_earnings(&entry, &schedule), Decimal::new(560, 0));
/// ```
pub fn entry_earnings(entry: &WorkEntry, schedule: &RateSchedule) -> Decimal {
    Decimal::from(entry.regular_days) * schedule.regular
        + Decimal::from(entry.weekend_days) * schedule.weekend
        + Decimal::from(entry.holiday_days) * schedule.holiday
}

/// Computes the total earnings over a collection of entries.
///
/// Zero for an empty collection; the sum is order-independent.
pub fn total_earnings(entries: &[WorkEntry], schedule: &RateSchedule) -> Decimal {
    entries
        .iter()
        .map(|entry| entry_earnings(entry, schedule))
        .sum()
}
