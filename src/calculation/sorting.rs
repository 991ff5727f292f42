//! Stable multi-field ordering for list presentation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::WorkEntry;

/// The entry field a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Order by the entry date (chronological comparison).
    Date,
    /// Order by the regular-day count.
    RegularDays,
    /// Order by the weekend-day count.
    WeekendDays,
    /// Order by the holiday-day count.
    HolidayDays,
}

/// The direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The list's active sort selection.
///
/// Defaults to date descending. Re-selecting the active field flips the
/// direction; selecting a new field resets it to descending.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{SortDirection, SortField, SortSelection};
///
/// let mut selection = SortSelection::default();
/// assert_eq!(selection.field, SortField::Date);
/// assert_eq!(selection.direction, SortDirection::Descending);
///
/// selection.select(SortField::Date);
/// assert_eq!(selection.direction, SortDirection::Ascending);
///
/// selection.select(SortField::RegularDays);
/// assert_eq!(selection.direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSelection {
    /// The field currently ordered by.
    pub field: SortField,
    /// The current direction.
    pub direction: SortDirection,
}

impl Default for SortSelection {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSelection {
    /// Applies a field selection: toggles the direction when the field is
    /// already active, otherwise switches to the field at descending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// Sorts entries by the current selection.
    pub fn apply(&self, entries: &[WorkEntry]) -> Vec<WorkEntry> {
        sort_entries(entries, self.field, self.direction)
    }
}

/// Returns a stable-sorted copy of the entries.
///
/// Dates compare chronologically, day counts numerically. Entries with
/// equal keys keep their original relative order in both directions,
/// which matters because multiple entries may share a date or count.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{SortDirection, SortField, sort_entries};
///
/// let sorted = sort_entries(&[], SortField::Date, SortDirection::Descending);
/// assert!(sorted.is_empty());
/// ```
pub fn sort_entries(
    entries: &[WorkEntry],
    field: SortField,
    direction: SortDirection,
) -> Vec<WorkEntry> {
    let mut sorted = entries.to_vec();
    // sort_by is stable; reversing the comparator (rather than the output)
    // keeps ties in insertion order for the descending case too
    sorted.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_field(a: &WorkEntry, b: &WorkEntry, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::RegularDays => a.regular_days.cmp(&b.regular_days),
        SortField::WeekendDays => a.weekend_days.cmp(&b.weekend_days),
        SortField::HolidayDays => a.holiday_days.cmp(&b.holiday_days),
    }
}
