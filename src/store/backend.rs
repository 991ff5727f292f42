//! The abstract key-value persistence boundary.

use std::collections::HashMap;

use crate::error::EngineResult;

/// Builds the storage key for a user's entry collection.
///
/// The key format matches the web client's stored documents, so a backend
/// pointed at existing data keeps working.
///
/// # Examples
///
/// ```
/// use worklog_engine::store::entries_key;
///
/// assert_eq!(entries_key("user-001"), "workEntries-user-001");
/// ```
pub fn entries_key(user_id: &str) -> String {
    format!("workEntries-{user_id}")
}

/// An abstract key-value store used to persist entry collections.
///
/// Values are whole serialized collections; every write replaces the
/// previous value for the key. Implementations report failures (for
/// example storage-quota exhaustion) through the `Result`; the engine
/// propagates them without retrying.
pub trait KeyValueBackend {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> EngineResult<()>;
}

/// An in-memory [`KeyValueBackend`] backed by a `HashMap`.
///
/// Used by the test suites and by embedders that keep the ledger purely
/// in process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value for a key, for inspection in tests.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
