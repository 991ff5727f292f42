//! Derived per-day pay rates.

use rust_decimal::Decimal;

use crate::config::RatePolicy;
use crate::models::User;

/// The three per-day pay rates derived from a user's hourly rate.
///
/// A `RateSchedule` is derived on demand and never persisted. Under the
/// default [`RatePolicy`] the regular rate is `hourly_rate × 8`, the
/// weekend rate is `regular × 1.5` and the holiday rate is `regular × 2`.
///
/// # Examples
///
/// ```
/// use worklog_engine::config::RatePolicy;
/// use worklog_engine::models::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::from_hourly(Decimal::new(20, 0), &RatePolicy::default());
/// assert_eq!(schedule.regular, Decimal::new(160, 0));
/// assert_eq!(schedule.weekend, Decimal::new(240, 0));
/// assert_eq!(schedule.holiday, Decimal::new(320, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    /// Pay for one regular weekday of work.
    pub regular: Decimal,
    /// Pay for one weekend day of work.
    pub weekend: Decimal,
    /// Pay for one public-holiday day of work.
    pub holiday: Decimal,
}

impl RateSchedule {
    /// Derives the schedule from an hourly rate under the given policy.
    pub fn from_hourly(hourly_rate: Decimal, policy: &RatePolicy) -> Self {
        let regular = hourly_rate * policy.hours_per_day;
        Self {
            regular,
            weekend: regular * policy.weekend_multiplier,
            holiday: regular * policy.holiday_multiplier,
        }
    }

    /// Derives the schedule for a user's hourly rate.
    pub fn for_user(user: &User, policy: &RatePolicy) -> Self {
        Self::from_hourly(user.hourly_rate, policy)
    }
}
