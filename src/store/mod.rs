//! The per-user work-entry ledger and its persistence boundary.
//!
//! [`EntryStore`] owns the CRUD lifecycle of the active user's entries and
//! writes the whole serialized collection through a [`KeyValueBackend`] on
//! every mutation. The backend is an abstract key-value seam so embedders
//! can plug in whatever storage they have; [`MemoryBackend`] is provided
//! for tests and in-process use.

mod backend;
mod entry_store;

pub use backend::{KeyValueBackend, MemoryBackend, entries_key};
pub use entry_store::EntryStore;
