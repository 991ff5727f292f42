//! Configuration for the earnings engine.
//!
//! This module provides the [`RatePolicy`] type describing how per-day pay
//! rates are derived from an hourly rate, and a loader for reading a policy
//! from a YAML file. Embedders that do not ship a policy file use
//! [`RatePolicy::default`]: an 8-hour day with 1.5× weekend and 2× holiday
//! multipliers.
//!
//! # Example
//!
//! ```no_run
//! use worklog_engine::config::RatePolicy;
//!
//! let policy = RatePolicy::load("./config/rate_policy.yaml").unwrap();
//! println!("Hours per day: {}", policy.hours_per_day);
//! ```

mod loader;
mod types;

pub use types::RatePolicy;
