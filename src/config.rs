//! Generator configuration.
//!
//! The only tunables are the target configuration table and the tool name in
//! the output header; the column defaults are fixed in the templates.
//!
//! Resolution order for the target table (highest first):
//! 1. `--config-table` on the command line
//! 2. `OPTCONF_CONFIG_TABLE` environment variable
//! 3. `config_table` in the YAML file given with `--config`
//! 4. [`CONFIG_TABLE_NAME`]

use crate::codegen::templates::{CONFIG_TABLE_NAME, DEFAULT_GENERATED_BY};
use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the target table.
pub const CONFIG_TABLE_ENV: &str = "OPTCONF_CONFIG_TABLE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fully qualified table the INSERT statements target
    pub config_table: String,

    /// Written on the `-- Generated by:` header line
    pub generated_by: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            config_table: CONFIG_TABLE_NAME.to_string(),
            generated_by: DEFAULT_GENERATED_BY.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml_str(&contents)
            .map_err(|e| GeneratorError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, String> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)
            .map_err(|e| format!("Failed to parse YAML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.config_table.trim().is_empty() {
            return Err("config_table must not be empty".to_string());
        }
        if self.config_table.chars().any(|c| c.is_whitespace() || c == ';' || c == '\'') {
            return Err(format!("Invalid config_table '{}'", self.config_table));
        }
        Ok(())
    }

    /// Resolve the effective configuration from every source.
    ///
    /// `env_table` is the value of [`CONFIG_TABLE_ENV`], passed in so callers
    /// (and tests) control where it comes from.
    pub fn resolve(
        cli_table: Option<String>,
        env_table: Option<String>,
        config_file: Option<&Path>,
    ) -> Result<Self, GeneratorError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let non_empty = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        if let Some(table) = non_empty(cli_table) {
            tracing::info!("Using config table from CLI flag: {}", table);
            config.config_table = table;
        } else if let Some(table) = non_empty(env_table) {
            tracing::info!("Using config table from {}: {}", CONFIG_TABLE_ENV, table);
            config.config_table = table;
        }

        config.validate().map_err(GeneratorError::Config)?;
        Ok(config)
    }

    /// Resolve using the process environment for the env-var level.
    pub fn from_env(
        cli_table: Option<String>,
        config_file: Option<&Path>,
    ) -> Result<Self, GeneratorError> {
        Self::resolve(cli_table, std::env::var(CONFIG_TABLE_ENV).ok(), config_file)
    }
}
