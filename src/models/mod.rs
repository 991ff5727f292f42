//! Core data models for the work-entry ledger.
//!
//! This module contains all the domain models used throughout the engine.

mod rate_schedule;
mod user;
mod work_entry;

pub use rate_schedule::RateSchedule;
pub use user::User;
pub use work_entry::{EntryDraft, EntryPatch, WorkEntry};
