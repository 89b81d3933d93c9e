use crate::api::{Category, DEFAULT_BASE_URL, DEFAULT_SOURCES_TTL};
use crate::error::NewsError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_ENV: &str = "NEWSAPI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// NewsAPI credential; the environment variable takes precedence
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_sources_cache_ttl")]
    pub sources_cache_ttl_secs: u64,
    #[serde(default)]
    pub default_category: Category,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sources_cache_ttl() -> u64 {
    DEFAULT_SOURCES_TTL.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            language: default_language(),
            sources_cache_ttl_secs: default_sources_cache_ttl(),
            default_category: Category::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("news-explorer");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn sources_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.sources_cache_ttl_secs)
    }

    /// Pick the API key from `env_value` (the environment) or the file.
    ///
    /// Blank values count as unset.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String, NewsError> {
        env_value
            .into_iter()
            .chain(self.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
            .ok_or(NewsError::MissingApiKey {
                env_var: API_KEY_ENV,
            })
    }

    /// In-memory config for tests; never touches the filesystem.
    pub fn test_config() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            base_url: "http://localhost".to_string(),
            ..Self::default()
        }
    }
}
