//! Configuration types for rate derivation.

use rust_decimal::Decimal;
use serde::Deserialize;

/// How per-day pay rates are derived from a user's hourly rate.
///
/// `regular = hourly_rate × hours_per_day`, `weekend = regular ×
/// weekend_multiplier`, `holiday = regular × holiday_multiplier`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatePolicy {
    /// Hours counted for one day of work.
    pub hours_per_day: Decimal,
    /// Multiplier applied to the regular day rate for weekend days.
    pub weekend_multiplier: Decimal,
    /// Multiplier applied to the regular day rate for holiday days.
    pub holiday_multiplier: Decimal,
}

impl Default for RatePolicy {
    /// The standard policy: 8-hour day, 1.5× weekends, 2× holidays.
    fn default() -> Self {
        Self {
            hours_per_day: Decimal::new(8, 0),
            weekend_multiplier: Decimal::new(15, 1),
            holiday_multiplier: Decimal::new(2, 0),
        }
    }
}
