//! Calculation and aggregation logic for the work-entry ledger.
//!
//! This module contains the pure functions derived from the ledger: the
//! per-entry and total earnings calculator, the dashboard day-count
//! statistics, the monthly/annual earnings report with its derived stats,
//! the available-years list, and the stable multi-field sort used for list
//! presentation. Everything here is deterministic and total: empty
//! collections produce zeroed results, never errors.

mod dashboard;
mod earnings;
mod report;
mod sorting;

pub use dashboard::{DashboardStats, dashboard_stats};
pub use earnings::{entry_earnings, total_earnings};
pub use report::{MONTH_LABELS, MonthlyReport, available_years, monthly_report};
pub use sorting::{SortDirection, SortField, SortSelection, sort_entries};
