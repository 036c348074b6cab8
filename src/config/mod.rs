use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Environment variables checked for the summary service credential,
/// in order. Takes precedence over the config file so the key never
/// has to live on disk.
pub const API_KEY_ENV_VARS: [&str; 2] = ["RECAP_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub summary: SummaryConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            provider: Some("openai-api".to_string()),
            model: Some("gpt-4.1-mini".to_string()),
            api_endpoint: None,
            api_key: None,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }
}

impl SummaryConfig {
    /// Resolve the service credential: environment first, config file second.
    pub fn resolved_api_key(&self) -> Option<String> {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    return Some(key);
                }
            }
        }
        self.api_key.clone().filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3838 }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_config_defaults() {
        let config = SummaryConfig::default();
        assert_eq!(config.provider.as_deref(), Some("openai-api"));
        assert_eq!(config.model.as_deref(), Some("gpt-4.1-mini"));
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, 3838);
        assert_eq!(parsed.summary.provider.as_deref(), Some("openai-api"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[server]\nport = 4000\n").unwrap();
        assert_eq!(parsed.server.port, 4000);
        assert_eq!(parsed.summary.timeout_seconds, 30);
    }
}
