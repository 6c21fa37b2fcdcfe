//! Configuration structures for the extraction pipeline.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{JdxError, Result};

/// Default VND to USD conversion rate.
pub const DEFAULT_VND_PER_USD: u32 = 25_000;

/// Main configuration for jdx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JdxConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Column-wise batch configuration.
    pub batch: BatchConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many VND make one USD when converting salaries.
    pub vnd_per_usd: u32,

    /// Normalise whitespace before extraction.
    pub clean_input: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            vnd_per_usd: DEFAULT_VND_PER_USD,
            clean_input: true,
        }
    }
}

/// Batch (CSV column) processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Columns holding job description text.
    pub text_columns: Vec<String>,

    /// Number of parallel workers.
    pub jobs: usize,

    /// Keep going when a file fails.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_columns: vec!["description".to_string()],
            jobs: 4,
            continue_on_error: false,
        }
    }
}

/// A settable configuration value, addressed as `section.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    VndPerUsd,
    CleanInput,
    TextColumns,
    Jobs,
    ContinueOnError,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::VndPerUsd,
        ConfigKey::CleanInput,
        ConfigKey::TextColumns,
        ConfigKey::Jobs,
        ConfigKey::ContinueOnError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::VndPerUsd => "extraction.vnd_per_usd",
            ConfigKey::CleanInput => "extraction.clean_input",
            ConfigKey::TextColumns => "batch.text_columns",
            ConfigKey::Jobs => "batch.jobs",
            ConfigKey::ContinueOnError => "batch.continue_on_error",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = JdxError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(ConfigKey::as_str).collect();
                JdxError::Config(format!(
                    "unknown key '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

fn parse_flag(key: ConfigKey, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(JdxError::Config(format!(
            "{} must be true or false, got '{}'",
            key, raw
        ))),
    }
}

impl JdxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Current value of `key`, rendered the way `set_value` accepts it.
    pub fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::VndPerUsd => self.extraction.vnd_per_usd.to_string(),
            ConfigKey::CleanInput => self.extraction.clean_input.to_string(),
            ConfigKey::TextColumns => self.batch.text_columns.join(","),
            ConfigKey::Jobs => self.batch.jobs.to_string(),
            ConfigKey::ContinueOnError => self.batch.continue_on_error.to_string(),
        }
    }

    /// Parse `raw` for `key` and store it. The config is left untouched on error.
    pub fn set_value(&mut self, key: ConfigKey, raw: &str) -> Result<()> {
        match key {
            ConfigKey::VndPerUsd => {
                let rate = raw.trim().parse::<u32>().ok().filter(|&rate| rate > 0);
                self.extraction.vnd_per_usd = rate.ok_or_else(|| {
                    JdxError::Config(format!(
                        "{} must be a positive whole number of VND per USD, got '{}'",
                        key, raw
                    ))
                })?;
            }
            ConfigKey::CleanInput => self.extraction.clean_input = parse_flag(key, raw)?,
            ConfigKey::TextColumns => {
                let columns: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                if columns.is_empty() {
                    return Err(JdxError::Config(format!(
                        "{} needs at least one column name",
                        key
                    )));
                }
                self.batch.text_columns = columns;
            }
            ConfigKey::Jobs => {
                let jobs = raw.trim().parse::<usize>().ok().filter(|&jobs| jobs > 0);
                self.batch.jobs = jobs.ok_or_else(|| {
                    JdxError::Config(format!(
                        "{} must be a worker count of at least 1, got '{}'",
                        key, raw
                    ))
                })?;
            }
            ConfigKey::ContinueOnError => {
                self.batch.continue_on_error = parse_flag(key, raw)?
            }
        }
        Ok(())
    }

    /// Reject values no extractor can work with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.vnd_per_usd == 0 {
            return Err(JdxError::Config(
                "extraction.vnd_per_usd must be greater than zero".to_string(),
            ));
        }
        if self.batch.jobs == 0 {
            return Err(JdxError::Config("batch.jobs must be at least 1".to_string()));
        }
        if self.batch.text_columns.is_empty() {
            return Err(JdxError::Config(
                "batch.text_columns needs at least one column name".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = JdxConfig::default();
        assert_eq!(config.extraction.vnd_per_usd, 25_000);
        assert!(config.extraction.clean_input);
        assert_eq!(config.batch.text_columns, vec!["description".to_string()]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: JdxConfig =
            serde_json::from_str(r#"{"extraction": {"vnd_per_usd": 24000}}"#).unwrap();
        assert_eq!(config.extraction.vnd_per_usd, 24_000);
        assert!(config.extraction.clean_input);
        assert_eq!(config.batch.jobs, 4);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = JdxConfig::default();
        config.batch.text_columns = vec!["title".to_string(), "body".to_string()];
        config.save(&path).unwrap();

        let loaded = JdxConfig::from_file(&path).unwrap();
        assert_eq!(loaded.batch.text_columns, config.batch.text_columns);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"vnd_per_usd": 0}}"#).unwrap();

        let err = JdxConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, JdxError::Config(_)));
    }

    #[test]
    fn test_config_key_parse() {
        assert_eq!(
            "extraction.vnd_per_usd".parse::<ConfigKey>().unwrap(),
            ConfigKey::VndPerUsd
        );
        let err = "extraction.rate".parse::<ConfigKey>().unwrap_err();
        assert!(err.to_string().contains("batch.jobs"));
    }

    #[test]
    fn test_set_value() {
        let mut config = JdxConfig::default();
        config.set_value(ConfigKey::VndPerUsd, "24500").unwrap();
        config.set_value(ConfigKey::TextColumns, "title, body").unwrap();
        config.set_value(ConfigKey::ContinueOnError, "yes").unwrap();

        assert_eq!(config.value_of(ConfigKey::VndPerUsd), "24500");
        assert_eq!(config.value_of(ConfigKey::TextColumns), "title,body");
        assert!(config.batch.continue_on_error);
    }

    #[test]
    fn test_set_value_rejects_zero() {
        let mut config = JdxConfig::default();

        let err = config.set_value(ConfigKey::Jobs, "0").unwrap_err();
        assert!(err.to_string().contains("batch.jobs"));
        let err = config.set_value(ConfigKey::VndPerUsd, "0").unwrap_err();
        assert!(err.to_string().contains("extraction.vnd_per_usd"));
        assert!(config.set_value(ConfigKey::CleanInput, "maybe").is_err());
        assert!(config.set_value(ConfigKey::TextColumns, " , ").is_err());

        assert_eq!(config.batch.jobs, 4);
        assert_eq!(config.extraction.vnd_per_usd, DEFAULT_VND_PER_USD);
    }
}
