use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::scoring::WeightTable;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.challonge.com/v1/".to_string(),
            api_key: String::new(),
            user_agent: "TournamentLeaderboard/1.0".to_string(),
            timeout_secs: 30,
            rate_limit_ms: 250, // 4 req/sec
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: "leaderboard.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub provider: ProviderSettings,
    pub storage: StorageSettings,
    pub weights: WeightTable,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file, then applies environment overrides.
    /// A missing file falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Self::from_json(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            warn!("Config file {} not found, using defaults", path.display());
            Self::new()
        };

        let config = config.with_env_overrides();
        info!(
            "Loaded config: database {}, {} weighted ranks",
            config.storage.database_path,
            config.weights.len()
        );
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid configuration JSON")
    }

    fn with_env_overrides(self) -> Self {
        self.apply_overrides(
            std::env::var("DATABASE_PATH").ok(),
            std::env::var("CHALLONGE_API_KEY").ok(),
        )
    }

    fn apply_overrides(mut self, database_path: Option<String>, api_key: Option<String>) -> Self {
        if let Some(path) = database_path.filter(|p| !p.is_empty()) {
            self.storage.database_path = path;
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.provider.api_key = key;
        }
        self
    }
}
