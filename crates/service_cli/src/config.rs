//! CLI configuration management
//!
//! Loads configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (`COSTSIM_*`)
//! 3. Config file (`costsim.toml`)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use costsim_core::register::DEFAULT_TRIALS;
use costsim_core::Currency;
use costsim_engine::mc::{DEFAULT_CHUNK_SIZE, DEFAULT_NUM_BINS};
use serde::Deserialize;

use crate::{CliError, Result};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "costsim.toml";

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Requested trial count; clamped to the register bounds before use
    pub trials: i64,
    /// Currency used to format table output
    #[serde(deserialize_with = "deserialize_currency")]
    pub currency: Currency,
    /// Histogram bins
    pub num_bins: usize,
    /// Run trials on the rayon pool
    pub parallel: bool,
    /// Trials per parallel partition
    pub chunk_size: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_currency<'de, D>(deserializer: D) -> std::result::Result<Currency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Currency::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS as i64,
            currency: Currency::USD,
            num_bins: DEFAULT_NUM_BINS,
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_level: LogLevel::Info,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `COSTSIM_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trials) = lookup("COSTSIM_TRIALS") {
            self.trials = trials.trim().parse().map_err(|_| {
                CliError::Config(format!("COSTSIM_TRIALS is not an integer: {}", trials))
            })?;
        }

        if let Some(currency) = lookup("COSTSIM_CURRENCY") {
            self.currency = Currency::from_str(&currency)
                .map_err(|e| CliError::Config(e.to_string()))?;
        }

        if let Some(log_level) = lookup("COSTSIM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(parallel) = lookup("COSTSIM_PARALLEL") {
            self.parallel = parse_flag(&parallel).ok_or_else(|| {
                CliError::Config(format!(
                    "COSTSIM_PARALLEL must be one of 1, true, yes, 0, false, no: {}",
                    parallel
                ))
            })?;
        }

        if let Some(chunk_size) = lookup("COSTSIM_CHUNK_SIZE") {
            self.chunk_size = chunk_size.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "COSTSIM_CHUNK_SIZE is not a positive integer: {}",
                    chunk_size
                ))
            })?;
        }

        self.validate()
    }

    /// Merge with CLI flags (flags take precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(trials) = cli.trials {
            self.trials = trials;
        }
        if let Some(currency) = cli.currency {
            self.currency = currency;
        }
        if let Some(num_bins) = cli.num_bins {
            self.num_bins = num_bins;
        }
        if let Some(parallel) = cli.parallel {
            self.parallel = parallel;
        }
        if let Some(chunk_size) = cli.chunk_size {
            self.chunk_size = chunk_size;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(CliError::Config("num_bins must be at least 1".to_string()));
        }
        if self.chunk_size == 0 {
            return Err(CliError::Config("chunk_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Requested trial count (`--trials`)
    pub trials: Option<i64>,
    /// Output currency (`--currency`)
    pub currency: Option<Currency>,
    /// Histogram bins (`--bins`)
    pub num_bins: Option<usize>,
    /// `Some(true)` from `--parallel`, `Some(false)` from `--sequential`
    pub parallel: Option<bool>,
    /// Trials per parallel partition (`--chunk-size`)
    pub chunk_size: Option<usize>,
    /// Log level (`--verbose` selects debug)
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.trials, 5000);
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.num_bins, 20);
        assert!(!config.parallel);
        assert_eq!(config.chunk_size, 256);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml_str(
            r#"
            trials = 2000
            currency = "gbp"
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(config.trials, 2000);
        assert_eq!(config.currency, Currency::GBP);
        assert!(config.parallel);
        assert_eq!(config.num_bins, 20);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(CliConfig::from_toml_str("currency = \"JPY\"").is_err());
        assert!(CliConfig::from_toml_str("num_bins = 0").is_err());
        assert!(CliConfig::from_toml_str("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/costsim.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("COSTSIM_TRIALS", "750"),
                ("COSTSIM_CURRENCY", "INR"),
                ("COSTSIM_LOG_LEVEL", "debug"),
                ("COSTSIM_PARALLEL", "true"),
                ("COSTSIM_CHUNK_SIZE", "64"),
            ]))
            .unwrap();
        assert_eq!(config.trials, 750);
        assert_eq!(config.currency, Currency::INR);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.parallel);
        assert_eq!(config.chunk_size, 64);
    }

    #[test]
    fn test_apply_env_invalid_values() {
        let mut config = CliConfig::default();
        assert!(config.apply_env(env(&[("COSTSIM_TRIALS", "many")])).is_err());

        let mut config = CliConfig::default();
        assert!(config.apply_env(env(&[("COSTSIM_CHUNK_SIZE", "0")])).is_err());

        for bad in ["on", "ture", ""] {
            let mut config = CliConfig::default();
            let err = config
                .apply_env(env(&[("COSTSIM_PARALLEL", bad)]))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(_)));
        }
    }

    #[test]
    fn test_apply_env_parallel_flags() {
        let cases = [
            ("1", true),
            ("YES", true),
            ("0", false),
            ("False", false),
            (" no ", false),
        ];
        for (value, expected) in cases {
            let mut config = CliConfig {
                parallel: !expected,
                ..CliConfig::default()
            };
            config
                .apply_env(env(&[("COSTSIM_PARALLEL", value)]))
                .unwrap();
            assert_eq!(config.parallel, expected, "COSTSIM_PARALLEL={}", value);
        }
    }

    #[test]
    fn test_sequential_flag_overrides_config() {
        let mut config = CliConfig::from_toml_str("parallel = true").unwrap();
        config.merge_with_cli(&CliOverrides::default());
        assert!(config.parallel);

        config.merge_with_cli(&CliOverrides {
            parallel: Some(false),
            ..Default::default()
        });
        assert!(!config.parallel);
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = CliConfig::from_toml_str("trials = 2000\ncurrency = \"EUR\"").unwrap();
        config.merge_with_cli(&CliOverrides {
            trials: Some(300),
            num_bins: Some(10),
            parallel: Some(true),
            ..Default::default()
        });
        assert_eq!(config.trials, 300);
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.num_bins, 10);
        assert!(config.parallel);
    }
}
