//! CLI configuration management.
//!
//! Settings are read from a TOML file (by default `retail.toml` in the
//! working directory), then overridden from `RETAIL_*` environment
//! variables, then validated as a whole.
//!
//! ```toml
//! log_level = "info"
//!
//! [rounding]
//! template = "*.95"
//! align = "down"
//!
//! [optimiser]
//! range = 0.15
//! step = 0.01
//!
//! [distribution]
//! bin_width = 0.5
//! ```

use retail_analytics::{Align, OptimiserConfig, RoundingTemplate, SmartRounder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "RETAIL_LOG_LEVEL";
/// Environment variable overriding `rounding.template`.
pub const ENV_TEMPLATE: &str = "RETAIL_TEMPLATE";
/// Environment variable overriding `rounding.align`.
pub const ENV_ALIGN: &str = "RETAIL_ALIGN";
/// Environment variable overriding `optimiser.range`.
pub const ENV_RANGE: &str = "RETAIL_RANGE";
/// Environment variable overriding `optimiser.step`.
pub const ENV_STEP: &str = "RETAIL_STEP";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more settings are out of range
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Smart rounding defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoundingSettings {
    /// Template string, e.g. `*.**` or `*.95`
    pub template: String,
    /// Alignment for ending-digit templates
    pub align: Align,
}

impl Default for RoundingSettings {
    fn default() -> Self {
        Self {
            template: "*.**".to_string(),
            align: Align::Fair,
        }
    }
}

/// Retail optimiser defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OptimiserSettings {
    /// Search half-width as a fraction of the current retail
    pub range: f64,
    /// Candidate grid spacing
    pub step: f64,
}

impl Default for OptimiserSettings {
    fn default() -> Self {
        let defaults = OptimiserConfig::default();
        Self {
            range: defaults.range,
            step: defaults.step,
        }
    }
}

/// Price distribution defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DistributionSettings {
    /// Histogram bin width in currency units
    pub bin_width: f64,
}

impl Default for DistributionSettings {
    fn default() -> Self {
        Self { bin_width: 0.5 }
    }
}

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// `[rounding]` section
    pub rounding: RoundingSettings,
    /// `[optimiser]` section
    pub optimiser: OptimiserSettings,
    /// `[distribution]` section
    pub distribution: DistributionSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rounding: RoundingSettings::default(),
            optimiser: OptimiserSettings::default(),
            distribution: DistributionSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    ///
    /// A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `RETAIL_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Unparsable numeric or alignment values are reported together.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if let Some(template) = lookup(ENV_TEMPLATE) {
            self.rounding.template = template;
        }

        if let Some(align) = lookup(ENV_ALIGN) {
            match align.parse() {
                Ok(align) => self.rounding.align = align,
                Err(e) => errors.push(format!("{}: {}", ENV_ALIGN, e)),
            }
        }

        if let Some(range) = lookup(ENV_RANGE) {
            match range.trim().parse() {
                Ok(range) => self.optimiser.range = range,
                Err(_) => errors.push(format!("{} is not a number: '{}'", ENV_RANGE, range)),
            }
        }

        if let Some(step) = lookup(ENV_STEP) {
            match step.trim().parse() {
                Ok(step) => self.optimiser.step = step,
                Err(_) => errors.push(format!("{} is not a number: '{}'", ENV_STEP, step)),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = RoundingTemplate::parse(&self.rounding.template) {
            errors.push(format!("rounding.template: {}", e));
        }

        if let Err(e) = self.optimiser_config() {
            errors.push(format!("optimiser: {}", e));
        }

        let bin_width = self.distribution.bin_width;
        if !(bin_width.is_finite() && bin_width > 0.0) {
            errors.push(format!(
                "distribution.bin_width must be positive, got {}",
                bin_width
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Optimiser configuration from the `[optimiser]` section
    pub fn optimiser_config(&self) -> Result<OptimiserConfig, retail_analytics::RetailError> {
        OptimiserConfig::new(self.optimiser.range, self.optimiser.step)
    }

    /// Smart rounder from the `[rounding]` section
    pub fn rounder(&self) -> Result<SmartRounder, retail_analytics::RetailError> {
        let template = RoundingTemplate::parse(&self.rounding.template)?;
        Ok(SmartRounder::new(template, self.rounding.align))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rounding.template, "*.**");
        assert_eq!(config.rounding.align, Align::Fair);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[rounding]
template = "*.95"
align = "down"

[optimiser]
range = 0.2

[distribution]
bin_width = 1.0
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rounding.template, "*.95");
        assert_eq!(config.rounding.align, Align::Down);
        assert_eq!(config.optimiser.range, 0.2);
        // unset keys keep their defaults
        assert_eq!(config.optimiser.step, 0.01);
        assert_eq!(config.distribution.bin_width, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("retail.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = ").unwrap();
        assert!(matches!(
            CliConfig::load_or_default(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_align_is_a_parse_error() {
        let result = CliConfig::from_toml("[rounding]\nalign = \"sideways\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_applied() {
        let config = CliConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_TEMPLATE, "*.*9"),
                (ENV_ALIGN, "UP"),
                (ENV_RANGE, "0.05"),
                (ENV_STEP, "0.05"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.rounding.template, "*.*9");
        assert_eq!(config.rounding.align, Align::Up);
        assert_eq!(config.optimiser.range, 0.05);
        assert_eq!(config.optimiser.step, 0.05);
    }

    #[test]
    fn test_bad_overrides_reported_together() {
        let result = CliConfig::default().with_overrides(lookup_from(&[
            (ENV_ALIGN, "sideways"),
            (ENV_RANGE, "ten percent"),
        ]));

        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.rounding.template = "*.(95)".to_string();
        config.optimiser.range = 1.5;
        config.distribution.bin_width = 0.0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_rounder_from_config() {
        let config = CliConfig::default()
            .with_overrides(lookup_from(&[(ENV_TEMPLATE, "*.95"), (ENV_ALIGN, "down")]))
            .unwrap();
        let rounded = config.rounder().unwrap().round(12.567).unwrap();
        assert!((rounded - 11.95).abs() < 1e-9);
    }

    #[test]
    fn test_flag_overrides_reach_built_objects() {
        let mut config = CliConfig::default();
        config.optimiser.range = 0.25;
        config.optimiser.step = 0.5;
        config.rounding.template = "*.*9".to_string();

        let optimiser = config.optimiser_config().unwrap();
        assert_eq!(optimiser, OptimiserConfig::new(0.25, 0.5).unwrap());

        let rounded = config.rounder().unwrap().round(12.456).unwrap();
        assert!((rounded - 12.49).abs() < 1e-9);

        config.optimiser.range = 1.0;
        assert!(config.optimiser_config().is_err());
    }
}
