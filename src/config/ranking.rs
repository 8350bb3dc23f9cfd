//! Ranking and gap-filling settings.

use serde::{Deserialize, Serialize};

use crate::domain::{RankOptions, RecommendOptions, MAX_COMBINATION_SIZE};
use crate::error::{ConfigError, Result};

/// Settings for [`crate::domain::Ranker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Largest bundle considered, 1..=4.
    pub max_combination_size: usize,
    /// Minimum aggregate coverage percent a bundle needs to be listed.
    pub min_coverage: u32,
    /// Coverage points within which bundles count as tied.
    pub tie_band: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        let defaults = RankOptions::default();
        Self {
            max_combination_size: defaults.max_combination_size(),
            min_coverage: u32::from(defaults.min_coverage()),
            tie_band: u32::from(defaults.tie_band()),
        }
    }
}

impl RankingConfig {
    pub(super) fn validate(&self) -> Result<()> {
        if self.max_combination_size == 0 || self.max_combination_size > MAX_COMBINATION_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "max_combination_size",
                reason: format!(
                    "must be between 1 and {MAX_COMBINATION_SIZE}, got {}",
                    self.max_combination_size
                ),
            }
            .into());
        }
        percent_field("min_coverage", self.min_coverage)?;
        percent_field("tie_band", self.tie_band)?;
        Ok(())
    }

    /// Build ranker options from these settings.
    pub fn options(&self) -> Result<RankOptions> {
        Ok(RankOptions::try_new(self.max_combination_size, self.min_coverage)?
            .with_tie_band(self.tie_band)?)
    }
}

/// Settings for [`crate::domain::Ranker::recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Coverage percent a single provider needs to anchor gap filling.
    pub near_complete: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            near_complete: u32::from(RecommendOptions::DEFAULT_NEAR_COMPLETE),
        }
    }
}

impl RecommendConfig {
    pub(super) fn validate(&self) -> Result<()> {
        percent_field("near_complete", self.near_complete)
    }

    pub fn options(&self) -> Result<RecommendOptions> {
        Ok(RecommendOptions::try_new(self.near_complete)?)
    }
}

fn percent_field(field: &'static str, value: u32) -> Result<()> {
    if value > 100 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be between 0 and 100, got {value}"),
        }
        .into());
    }
    Ok(())
}
