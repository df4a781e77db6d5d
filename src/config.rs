use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use recommend::MatchWeights;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub matching: MatchWeights,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file. When unset, the builtin seed is used.
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BLENDERY__MATCHING__COVERAGE_WEIGHT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BLENDERY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        let weights = &self.matching;
        for (name, value) in [
            ("coverage_weight", weights.coverage_weight),
            ("layering_weight", weights.layering_weight),
            ("rating_weight", weights.rating_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("matching.{} must be within 0.0..=1.0", name));
            }
        }
        let total = weights.coverage_weight + weights.layering_weight + weights.rating_weight;
        if total <= 0.0 {
            return Err("matching weights must not all be zero".to_string());
        }
        if self.observability.log_level.is_empty() {
            return Err("observability.log_level must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_all_zero_weights() {
        let mut config = Config::default();
        config.matching.coverage_weight = 0.0;
        config.matching.layering_weight = 0.0;
        config.matching.rating_weight = 0.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_weight() {
        let mut config = Config::default();
        config.matching.coverage_weight = 1.5;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_log_level() {
        let mut config = Config::default();
        config.observability.log_level = String::new();

        assert!(config.validate().is_err());
    }
}
