//! The session-scoped work-entry store.

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation;
use crate::config::RatePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{EntryDraft, EntryPatch, RateSchedule, User, WorkEntry};

use super::backend::{KeyValueBackend, entries_key};

/// The CRUD ledger of the active user's work entries.
///
/// The store holds the working set for exactly one user at a time; a
/// session change ([`EntryStore::set_session`]) swaps the entire working
/// set, loading the new user's collection from the backend or clearing it
/// on logout. Every mutation computes the next collection as a pure value,
/// writes the whole serialized collection through the backend, and only
/// then commits it in memory, so a storage failure never leaves the
/// working set diverging from what is persisted.
///
/// # Example
///
/// ```
/// use worklog_engine::models::{EntryDraft, User};
/// use worklog_engine::store::{EntryStore, MemoryBackend};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = EntryStore::new(MemoryBackend::new());
/// store.set_session(Some(User {
///     id: "user-001".to_string(),
///     name: "Ada".to_string(),
///     email: "ada@example.com".to_string(),
///     hourly_rate: Decimal::new(20, 0),
/// })).unwrap();
///
/// let entry = store.add(EntryDraft {
///     date: NaiveDate::from_ymd_opt(2024, 3, 1),
///     regular_days: 2,
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(entry.user_id, "user-001");
/// assert_eq!(store.entries().len(), 1);
/// ```
#[derive(Debug)]
pub struct EntryStore<B: KeyValueBackend> {
    backend: B,
    user: Option<User>,
    entries: Vec<WorkEntry>,
}

impl<B: KeyValueBackend> EntryStore<B> {
    /// Creates a store with no active session.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            user: None,
            entries: Vec::new(),
        }
    }

    /// Switches the active session.
    ///
    /// With `Some(user)` the store loads that user's persisted collection
    /// (empty when nothing is stored yet); with `None` it clears the
    /// working set. Called by the session collaborator on login, logout
    /// and identity change.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] when the backend read fails or the
    /// stored payload cannot be parsed; the store is left logged out in
    /// that case.
    pub fn set_session(&mut self, user: Option<User>) -> EngineResult<()> {
        self.user = None;
        self.entries.clear();

        let Some(user) = user else {
            info!("session cleared");
            return Ok(());
        };

        let key = entries_key(&user.id);
        let entries = match self.backend.get(&key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!(key = %key, error = %e, "stored entry collection is unreadable");
                EngineError::Storage {
                    key: key.clone(),
                    message: e.to_string(),
                }
            })?,
            None => Vec::new(),
        };

        info!(user_id = %user.id, entry_count = entries.len(), "session started");
        self.user = Some(user);
        self.entries = entries;
        Ok(())
    }

    /// Returns the current session user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the active user's entries in insertion order.
    ///
    /// Empty when logged out or when the user has no entries yet.
    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    /// Adds a new entry for the current user.
    ///
    /// The store validates the draft, assigns a fresh id (guaranteed
    /// unique across all existing ids, even for identical payloads
    /// submitted back-to-back) and the session user's id, appends the
    /// entry and persists the full collection before returning it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoActiveSession`] when logged out
    /// - [`EngineError::InvalidEntry`] when the draft fails validation
    /// - [`EngineError::Storage`] when the persist write fails
    pub fn add(&mut self, draft: EntryDraft) -> EngineResult<WorkEntry> {
        let user = self.user.as_ref().ok_or(EngineError::NoActiveSession)?;
        draft.validate()?;

        let id = format!("entry-{}", Uuid::new_v4());
        let entry = draft.into_entry(id, user.id.clone())?;

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.persist(&next)?;
        self.entries = next;

        info!(entry_id = %entry.id, date = %entry.date, "entry added");
        Ok(entry)
    }

    /// Applies a partial update to the entry with the given id.
    ///
    /// Only date, day counts and notes can change; id and owner never do.
    /// The merged entry is re-validated and the full collection persisted
    /// before the change is committed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoActiveSession`] when logged out
    /// - [`EngineError::EntryNotFound`] when no entry of the current user
    ///   has this id (ids owned by other users are reported the same way)
    /// - [`EngineError::InvalidEntry`] when the merged entry is invalid
    /// - [`EngineError::Storage`] when the persist write fails
    pub fn update(&mut self, id: &str, patch: &EntryPatch) -> EngineResult<WorkEntry> {
        let position = self.position_of(id)?;
        let updated = self.entries[position].patched(patch)?;

        let mut next = self.entries.clone();
        next[position] = updated.clone();
        self.persist(&next)?;
        self.entries = next;

        info!(entry_id = %id, "entry updated");
        Ok(updated)
    }

    /// Deletes the entry with the given id.
    ///
    /// A second delete of the same id fails with
    /// [`EngineError::EntryNotFound`] and leaves the collection untouched.
    ///
    /// # Errors
    ///
    /// Same not-found and storage semantics as [`EntryStore::update`].
    pub fn delete(&mut self, id: &str) -> EngineResult<()> {
        let position = self.position_of(id)?;

        let mut next = self.entries.clone();
        next.remove(position);
        self.persist(&next)?;
        self.entries = next;

        info!(entry_id = %id, "entry deleted");
        Ok(())
    }

    /// Returns the rate schedule for the current user, or `None` when
    /// logged out.
    pub fn rate_schedule(&self, policy: &RatePolicy) -> Option<RateSchedule> {
        self.user
            .as_ref()
            .map(|user| RateSchedule::for_user(user, policy))
    }

    /// Returns the earnings for one entry under the current user's rates.
    ///
    /// Zero when no session user exists.
    pub fn entry_earnings(&self, entry: &WorkEntry, policy: &RatePolicy) -> Decimal {
        match self.rate_schedule(policy) {
            Some(schedule) => calculation::entry_earnings(entry, &schedule),
            None => Decimal::ZERO,
        }
    }

    /// Returns the total earnings over the working set.
    ///
    /// Zero when logged out or when the ledger is empty.
    pub fn total_earnings(&self, policy: &RatePolicy) -> Decimal {
        match self.rate_schedule(policy) {
            Some(schedule) => calculation::total_earnings(&self.entries, &schedule),
            None => Decimal::ZERO,
        }
    }

    /// Finds the index of the current user's entry with the given id.
    ///
    /// An id belonging to another user is indistinguishable from an absent
    /// one, so foreign ids cannot be probed through this store.
    fn position_of(&self, id: &str) -> EngineResult<usize> {
        let user = self.user.as_ref().ok_or(EngineError::NoActiveSession)?;
        self.entries
            .iter()
            .position(|e| e.id == id && e.user_id == user.id)
            .ok_or_else(|| {
                warn!(entry_id = %id, "entry not found in current ledger");
                EngineError::EntryNotFound { id: id.to_string() }
            })
    }

    /// Writes the full serialized collection through the backend.
    fn persist(&mut self, entries: &[WorkEntry]) -> EngineResult<()> {
        let user = self.user.as_ref().ok_or(EngineError::NoActiveSession)?;
        let key = entries_key(&user.id);
        let payload = serde_json::to_string(entries).map_err(|e| EngineError::Storage {
            key: key.clone(),
            message: e.to_string(),
        })?;
        self.backend.set(&key, &payload)
    }
}
