//! Configuration loading functionality.
//!
//! This module loads [`AnalyticsConfig`] overrides from a YAML file. A
//! missing override for any field falls back to the engine default, so a
//! deployment only states what it changes.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::AnalyticsConfig;

impl AnalyticsConfig {
    /// Loads configuration from a YAML file and validates it.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file (e.g., "./config/analytics.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration on success, or an error if the file
    /// is missing, is not valid YAML, or contains out-of-bounds values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_analytics::config::AnalyticsConfig;
    ///
    /// let config = AnalyticsConfig::from_yaml_file("./config/analytics.yaml")?;
    /// # Ok::<(), shift_analytics::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AnalyticsConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;
        debug!(path = %path_str, "Loaded analytics configuration");
        Ok(config)
    }
}
