//! Error types for the work-entry ledger and earnings engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the ledger and its
//! configuration and persistence boundaries.

use thiserror::Error;

/// The main error type for the engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout an embedding application.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::EntryNotFound {
///     id: "entry-42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Work entry not found: entry-42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A work entry failed validation before reaching the store.
    #[error("Invalid work entry field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No work entry with the given id exists in the current user's ledger.
    ///
    /// Also returned when the id exists but belongs to another user, so
    /// foreign entry ids are not discoverable through error responses.
    #[error("Work entry not found: {id}")]
    EntryNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A mutating operation was attempted with no authenticated user.
    #[error("No active session")]
    NoActiveSession,

    /// The key-value persistence boundary failed.
    #[error("Storage failure for key '{key}': {message}")]
    Storage {
        /// The storage key involved in the failed operation.
        key: String,
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
