//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RatePolicy;

impl RatePolicy {
    /// Loads a rate policy from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/rate_policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed policy on success, or an error if:
    /// - The file does not exist ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or is missing a field
    ///   ([`EngineError::ConfigParse`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worklog_engine::config::RatePolicy;
    ///
    /// let policy = RatePolicy::load("./config/rate_policy.yaml")?;
    /// # Ok::<(), worklog_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| EngineError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
