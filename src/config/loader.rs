//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading grade rate
//! tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

use super::types::{RateTable, RatesFile};

/// Loads and provides access to a grade rate table.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── rates.yaml   # grades: { junior: 10, middle: 15, senior: 20 }
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_record::config::ConfigLoader;
/// use employee_record::models::Grade;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// assert_eq!(loader.rate_for(Grade::Senior), 20);
/// # Ok::<(), employee_record::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    name: Option<String>,
    rates: RateTable,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            name: None,
            rates: RateTable::default(),
        }
    }
}

impl ConfigLoader {
    /// Loads `rates.yaml` from the specified directory.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// describes a rate table that fails [`RateTable::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let path_str = rates_path.display().to_string();

        let content = fs::read_to_string(&rates_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, rates = ?loader.rates, "Loaded rate table");
        Ok(loader)
    }

    /// Parses a rate table from in-memory YAML.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let file: RatesFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        file.grades.validate()?;

        Ok(Self {
            name: file.name,
            rates: file.grades,
        })
    }

    /// Returns the schedule name, if the file declared one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Gets the hourly rate for a grade.
    pub fn rate_for(&self, grade: Grade) -> u64 {
        self.rates.rate_for(grade)
    }
}
