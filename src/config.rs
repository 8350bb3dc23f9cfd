//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to the defaults shown below.
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [ranking]
//! max_combination_size = 3
//! min_coverage = 0
//! tie_band = 5
//!
//! [recommend]
//! near_complete = 90
//!
//! [catalog]
//! path = "catalog.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

mod logging;
mod ranking;

pub use logging::LoggingConfig;
pub use ranking::{RankingConfig, RecommendConfig};

/// Where the catalog snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "catalog.path",
            }
            .into());
        }
        self.ranking.validate()?;
        self.recommend.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ranking.max_combination_size, 3);
        assert_eq!(config.ranking.tie_band, 5);
        assert_eq!(config.recommend.near_complete, 90);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse("[ranking]\nmin_coverage = 80\n").unwrap();
        assert_eq!(config.ranking.min_coverage, 80);
        assert_eq!(config.ranking.max_combination_size, 3);
    }

    #[test]
    fn rejects_oversized_combinations() {
        let result = Config::parse("[ranking]\nmax_combination_size = 5\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_combination_size",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_catalog_path() {
        let result = Config::parse("[catalog]\npath = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "catalog.path"
            }))
        ));
    }

    #[test]
    fn options_follow_settings() {
        let config = Config::parse("[ranking]\nmax_combination_size = 2\ntie_band = 0\n").unwrap();
        let options = config.ranking.options().unwrap();
        assert_eq!(options.max_combination_size(), 2);
        assert_eq!(options.tie_band(), 0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse("[ranking\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
