//! Work entry model and its creation/update payloads.
//!
//! This module defines [`WorkEntry`], the single record type of the ledger,
//! together with the caller-facing [`EntryDraft`] (add payload) and
//! [`EntryPatch`] (partial update). Validation and patch application are
//! pure functions on these types; the store only adds the persistence
//! effect on top of them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One logged record of days worked, split into regular, weekend and
/// holiday counts for a calendar date.
///
/// Invariants (enforced at creation and update time):
/// - every day count is non-negative (guaranteed by the `u32` type);
/// - the three counts sum to at least one day.
///
/// Multiple entries may share the same date. `id` and `user_id` are
/// assigned once by the store and never change afterwards.
///
/// Field names serialize in camelCase so the persisted collection is
/// compatible with the documents written by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    /// Unique identifier, assigned at creation. Immutable.
    pub id: String,
    /// Id of the owning user. Immutable.
    pub user_id: String,
    /// The calendar date the work was performed. No time component.
    pub date: NaiveDate,
    /// Number of regular weekdays worked.
    pub regular_days: u32,
    /// Number of weekend days worked.
    pub weekend_days: u32,
    /// Number of public-holiday days worked.
    pub holiday_days: u32,
    /// Optional free-text notes. Empty when not provided.
    #[serde(default)]
    pub notes: String,
}

impl WorkEntry {
    /// Returns the total number of days this entry represents.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::models::WorkEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = WorkEntry {
    ///     id: "entry-001".to_string(),
    ///     user_id: "user-001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     regular_days: 2,
    ///     weekend_days: 1,
    ///     holiday_days: 0,
    ///     notes: String::new(),
    /// };
    /// assert_eq!(entry.total_days(), 3);
    /// ```
    pub fn total_days(&self) -> u32 {
        self.regular_days + self.weekend_days + self.holiday_days
    }

    /// Returns the calendar year of the entry's date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the zero-based month index (0 = January) of the entry's date.
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    /// Returns a copy of this entry with the patch applied.
    ///
    /// Only `date`, the three day counts and `notes` can change; `id` and
    /// `user_id` are carried over untouched. The merged entry is validated
    /// against the same rules as a fresh draft.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] when a patched count is
    /// negative or when the patched counts no longer represent at least
    /// one day.
    pub fn patched(&self, patch: &EntryPatch) -> EngineResult<WorkEntry> {
        let regular_days = match patch.regular_days {
            Some(v) => validate_day_count("regular_days", v)?,
            None => self.regular_days,
        };
        let weekend_days = match patch.weekend_days {
            Some(v) => validate_day_count("weekend_days", v)?,
            None => self.weekend_days,
        };
        let holiday_days = match patch.holiday_days {
            Some(v) => validate_day_count("holiday_days", v)?,
            None => self.holiday_days,
        };
        validate_total(regular_days, weekend_days, holiday_days)?;

        Ok(WorkEntry {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            date: patch.date.unwrap_or(self.date),
            regular_days,
            weekend_days,
            holiday_days,
            notes: patch.notes.clone().unwrap_or_else(|| self.notes.clone()),
        })
    }
}

/// The caller-supplied payload for adding a new entry.
///
/// The store assigns `id` and `user_id`; callers never supply them. Counts
/// are accepted as signed integers so that negative form input is rejected
/// with a field-level validation message instead of a type error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    /// The calendar date of the work. Required.
    pub date: Option<NaiveDate>,
    /// Number of regular weekdays worked.
    #[serde(default)]
    pub regular_days: i64,
    /// Number of weekend days worked.
    #[serde(default)]
    pub weekend_days: i64,
    /// Number of public-holiday days worked.
    #[serde(default)]
    pub holiday_days: i64,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl EntryDraft {
    /// Validates the draft against the entry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] with the offending field when:
    /// - `date` is missing;
    /// - any day count is negative;
    /// - all three day counts are zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.date.is_none() {
            return Err(EngineError::InvalidEntry {
                field: "date".to_string(),
                message: "a date is required".to_string(),
            });
        }
        let regular = validate_day_count("regular_days", self.regular_days)?;
        let weekend = validate_day_count("weekend_days", self.weekend_days)?;
        let holiday = validate_day_count("holiday_days", self.holiday_days)?;
        validate_total(regular, weekend, holiday)
    }

    /// Consumes the draft into a [`WorkEntry`] with the given identity.
    ///
    /// The draft must have been validated first; this is enforced by
    /// re-running [`EntryDraft::validate`].
    pub fn into_entry(self, id: String, user_id: String) -> EngineResult<WorkEntry> {
        self.validate()?;
        Ok(WorkEntry {
            id,
            user_id,
            // validate() guarantees the date is present
            date: self.date.unwrap_or_default(),
            regular_days: self.regular_days as u32,
            weekend_days: self.weekend_days as u32,
            holiday_days: self.holiday_days as u32,
            notes: self.notes,
        })
    }
}

/// A partial update of an existing entry.
///
/// Absent fields keep their current value. `id` and `user_id` cannot be
/// patched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    /// Replacement date, if any.
    pub date: Option<NaiveDate>,
    /// Replacement regular-day count, if any.
    pub regular_days: Option<i64>,
    /// Replacement weekend-day count, if any.
    pub weekend_days: Option<i64>,
    /// Replacement holiday-day count, if any.
    pub holiday_days: Option<i64>,
    /// Replacement notes, if any.
    pub notes: Option<String>,
}

fn validate_day_count(field: &str, value: i64) -> EngineResult<u32> {
    if value < 0 {
        return Err(EngineError::InvalidEntry {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    u32::try_from(value).map_err(|_| EngineError::InvalidEntry {
        field: field.to_string(),
        message: "is too large".to_string(),
    })
}

fn validate_total(regular: u32, weekend: u32, holiday: u32) -> EngineResult<()> {
    if regular + weekend + holiday == 0 {
        return Err(EngineError::InvalidEntry {
            field: "days".to_string(),
            message: "an entry must represent at least one day".to_string(),
        });
    }
    Ok(())
}
