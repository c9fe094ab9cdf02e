//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! allowance configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::LeaveAllowanceConfig;

/// Loads and provides access to leave allowance configuration.
///
/// The `ConfigLoader` reads a YAML configuration file from a directory
/// and exposes the parsed allowances.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// └── allowances.yaml   # Aggregate and per-category leave allowances
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Annual allowance: {}", loader.config().annual_allowance);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveAllowanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// allowances file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), hr_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let allowances_path = path.as_ref().join("allowances.yaml");
        let config = Self::load_yaml::<LeaveAllowanceConfig>(&allowances_path)?;
        Ok(Self { config })
    }

    /// Builds a loader from the built-in default allowances.
    pub fn with_defaults() -> Self {
        Self {
            config: LeaveAllowanceConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying allowance configuration.
    pub fn config(&self) -> &LeaveAllowanceConfig {
        &self.config
    }
}
