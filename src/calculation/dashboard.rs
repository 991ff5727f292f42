//! Dashboard day-count statistics.

use serde::Serialize;

use crate::models::WorkEntry;

/// Field-wise day-count totals over the ledger, shown on the dashboard.
///
/// Recomputed from the entry collection whenever it changes; there is no
/// cached state to invalidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of all regular-day counts.
    pub total_regular_days: u64,
    /// Sum of all weekend-day counts.
    pub total_weekend_days: u64,
    /// Sum of all holiday-day counts.
    pub total_holiday_days: u64,
    /// Sum of the three totals above.
    pub total_days: u64,
}

/// Computes the dashboard statistics for a collection of entries.
///
/// Total over any collection: an empty ledger yields all-zero stats.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::dashboard_stats;
///
/// let stats = dashboard_stats(&[]);
/// assert_eq!(stats.total_days, 0);
/// ```
pub fn dashboard_stats(entries: &[WorkEntry]) -> DashboardStats {
    let total_regular_days = entries.iter().map(|e| u64::from(e.regular_days)).sum();
    let total_weekend_days = entries.iter().map(|e| u64::from(e.weekend_days)).sum();
    let total_holiday_days = entries.iter().map(|e| u64::from(e.holiday_days)).sum();

    DashboardStats {
        total_regular_days,
        total_weekend_days,
        total_holiday_days,
        total_days: total_regular_days + total_weekend_days + total_holiday_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(regular: u32, weekend: u32, holiday: u32) -> WorkEntry {
        WorkEntry {
            id: "entry-001".to_string(),
            user_id: "user-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            regular_days: regular,
            weekend_days: weekend,
            holiday_days: holiday,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_ledger_yields_zero_stats() {
        assert_eq!(dashboard_stats(&[]), DashboardStats::default());
    }

    #[test]
    fn test_stats_are_field_wise_sums() {
        // {1,0,0} and {2,1,0} ⇒ 3 regular, 1 weekend, 0 holiday, 4 total
        let entries = vec![entry(1, 0, 0), entry(2, 1, 0)];
        let stats = dashboard_stats(&entries);

        assert_eq!(stats.total_regular_days, 3);
        assert_eq!(stats.total_weekend_days, 1);
        assert_eq!(stats.total_holiday_days, 0);
        assert_eq!(stats.total_days, 4);
    }

    #[test]
    fn test_total_days_matches_entry_totals() {
        let entries = vec![entry(5, 2, 1), entry(0, 0, 4)];
        let stats = dashboard_stats(&entries);
        let expected: u64 = entries.iter().map(|e| u64::from(e.total_days())).sum();
        assert_eq!(stats.total_days, expected);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_string(&dashboard_stats(&[entry(1, 0, 0)])).unwrap();
        assert!(json.contains("totalRegularDays"));
        assert!(json.contains("totalDays"));
    }
}
