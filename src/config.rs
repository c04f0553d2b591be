//! Search configuration
//!
//! Stored as JSON under the platform config directory. A missing file
//! yields the defaults.

use crate::error::SearchError;
use crate::search::{BonusKeying, RankingEngine, ScoringWeights};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Threshold a result's total must exceed to be listed
pub const DEFAULT_MIN_SCORE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_score: f64,
    pub bonus_keying: BonusKeying,
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            bonus_keying: BonusKeying::default(),
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Reject values that would make ranking meaningless
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.min_score.is_finite() {
            return Err(SearchError::InvalidConfig(
                "min_score must be finite".to_string(),
            ));
        }
        if self
            .weights
            .values()
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(SearchError::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a ranking engine from the configured weights and keying
    pub fn engine(&self) -> RankingEngine {
        RankingEngine::with_weights(self.weights.clone()).keying(self.bonus_keying)
    }
}

/// Get the path to the default configuration file
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
    Ok(config_dir.join("settings-search").join("config.json"))
}

/// Load configuration from `path`, or the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(SearchConfig::default());
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: SearchConfig = serde_json::from_str(&data).context("Failed to parse config file")?;
    config.validate()?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to `path`
pub fn save_config(config: &SearchConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let data = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, data).context("Failed to write config file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.min_score, 2.0);
        assert_eq!(config.bonus_keying, BonusKeying::LegacyTitleKeyedBonus);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_carries_configured_policy() {
        let mut config = SearchConfig::default();
        config.bonus_keying = BonusKeying::PerFieldKeyedBonus;
        config.weights.item_name.threshold = 0.9;

        let engine = config.engine();
        assert_eq!(engine.bonus_keying(), BonusKeying::PerFieldKeyedBonus);
        assert_eq!(engine.weights().item_name.threshold, 0.9);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"min_score": 1.5, "bonus_keying": "per-field-keyed-bonus"}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.min_score, 1.5);
        assert_eq!(config.bonus_keying, BonusKeying::PerFieldKeyedBonus);
        assert_eq!(config.weights, ScoringWeights::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = SearchConfig::default();
        config.min_score = 0.75;
        config.weights.title.bonus = 0.5;

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = SearchConfig::default();
        config.weights.description.perfect_bonus = -0.1;
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
