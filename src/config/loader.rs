//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! rule table from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::RemunerationScheme;

use super::types::{RuleTable, SalaryRule, SchemesConfig};

/// Loads and provides access to the salary rule table.
///
/// # Directory Structure
///
/// ```text
/// config/remuneration/
/// └── schemes.yaml   # One rule per scheme code, plus the fallback code
/// ```
///
/// # Example
///
/// ```no_run
/// use taxi_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/remuneration")?;
/// let rule = loader.get_rule("tiered-40-30");
/// println!("Tiered rule: {}", rule.label);
/// # Ok::<(), taxi_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleTable,
}

impl ConfigLoader {
    /// Loads the rule table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `schemes.yaml` is missing (`ConfigNotFound`)
    /// - it is not valid YAML for the expected shape (`ConfigParseError`)
    /// - a rule is missing, unknown, or out of range (`InvalidRule`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let schemes_path = path.as_ref().join("schemes.yaml");
        let config = Self::load_yaml::<SchemesConfig>(&schemes_path)?;
        let rules = RuleTable::from_config(config)?;

        info!(
            path = %schemes_path.display(),
            fallback = %rules.fallback_scheme(),
            "Loaded salary rule table"
        );

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Gets the rule applied for a scheme code.
    ///
    /// Unknown codes get the fallback rule, same as in a calculation.
    pub fn get_rule(&self, code: &str) -> &SalaryRule {
        self.rules.rule_for(&RemunerationScheme::from_code(code))
    }
}
