//! Config resolution and loading operations.

use super::env::{Environment, RETRY_VAR, SILENT_VAR, is_truthy};
use super::model::Configuration;
use super::types::{RetrySchedule, SetupOptions};
use crate::error::{Result, RunAloneError};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

impl Configuration {
    /// Merge setup-time options with environment overrides.
    ///
    /// For both `silent` and `retry`, a set environment variable replaces the
    /// setup-time value. An empty retry value disables retrying.
    ///
    /// # Returns
    ///
    /// * `Ok(Configuration)` - Fully resolved configuration
    /// * `Err(RunAloneError::InvalidRetry)` - The effective retry value is malformed
    pub fn resolve<E: Environment>(options: &SetupOptions, env: &E) -> Result<Self> {
        let silent = env
            .var(SILENT_VAR)
            .map(|v| is_truthy(&v))
            .or(options.silent)
            .unwrap_or(false);

        let retry = match env.var(RETRY_VAR).or_else(|| options.retry.clone()) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse::<RetrySchedule>()?),
            _ => None,
        };

        Ok(Self { silent, retry })
    }
}

impl SetupOptions {
    /// Load setup options from a YAML file.
    ///
    /// The file is a mapping with optional `silent` and `retry` keys. Any
    /// other key is rejected the same way unknown setup options are.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RunAloneError::InvalidConfigFile(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse setup options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let map: BTreeMap<String, Value> = serde_yaml::from_str(yaml)
            .map_err(|e| RunAloneError::InvalidConfigFile(format!("failed to parse YAML: {}", e)))?;

        let pairs = map
            .into_iter()
            .map(|(key, value)| {
                let value = scalar_to_string(&key, &value)?;
                Ok((key, value))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_pairs(pairs)
    }
}

/// Render a YAML scalar the way the setup option string form expects it.
fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok("0".to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(RunAloneError::InvalidConfigFile(format!(
            "'{}' must be a scalar value",
            key
        ))),
    }
}
