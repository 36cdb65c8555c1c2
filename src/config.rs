use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::youtube::mock::MOCK_VIDEO_ID;

pub const CONFIG_DIR_NAME: &str = ".perspectize";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct YouTubeConfig {
    /// Data API v3 key; without one the mock fixture is served
    pub api_key: Option<String>,
    /// Serve fixtures even when an API key is set
    #[serde(default)]
    pub force_mock: bool,
    #[serde(default = "default_video_id")]
    pub video_id: String,
    /// Optional API URL override for testing (e.g. mocking)
    pub api_url: Option<String>,
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

fn default_video_id() -> String {
    MOCK_VIDEO_ID.to_string()
}

fn default_mock_latency_ms() -> u64 {
    800
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            force_mock: false,
            video_id: default_video_id(),
            api_url: None,
            mock_latency_ms: default_mock_latency_ms(),
        }
    }
}

impl YouTubeConfig {
    /// Key to use for live requests, or `None` when fixtures should be served.
    pub fn live_api_key(&self) -> Option<&str> {
        if self.force_mock {
            return None;
        }
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QueryConfig {
    #[serde(default = "default_stale_time_secs")]
    pub stale_time_secs: u64,
    #[serde(default)]
    pub retry: u32,
}

fn default_stale_time_secs() -> u64 {
    5 * 60
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: default_stale_time_secs(),
            retry: 0,
        }
    }
}

impl QueryConfig {
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.retry > 10 {
            anyhow::bail!("query.retry must be at most 10, got {}", self.retry);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CacheConfig {
    /// Optional override for cache directory (for testing)
    pub dir_override: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.query.validate()?;
        if self.youtube.video_id.trim().is_empty() {
            anyhow::bail!("youtube.video_id must not be empty");
        }
        Ok(())
    }

    /// Directory holding the query cache
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache.dir_override {
            return Ok(dir.clone());
        }
        config_dir()
    }
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(CONFIG_DIR_NAME))
}

fn env_source() -> Environment {
    // PERSPECTIZE_QUERY__RETRY=2 -> query.retry
    Environment::with_prefix("PERSPECTIZE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Config> {
    let mut builder = builder.add_source(env_source());

    if let Ok(key) = std::env::var("PERSPECTIZE_YT_API_KEY") {
        builder = builder
            .set_override("youtube.api_key", key)
            .context("Failed to apply PERSPECTIZE_YT_API_KEY")?;
    }
    if let Ok(flag) = std::env::var("PERSPECTIZE_FORCE_MOCK") {
        builder = builder
            .set_override("youtube.force_mock", flag == "true")
            .context("Failed to apply PERSPECTIZE_FORCE_MOCK")?;
    }

    let loader = builder.build().context("Failed to build config loader")?;
    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    build(ConfigBuilder::builder().add_source(File::from(path.as_ref()).format(FileFormat::Toml)))
}

/// Load `~/.perspectize/config.toml`; a missing file means defaults plus environment.
pub fn load() -> Result<Config> {
    let config_path = config_dir()?.join("config.toml");
    build(
        ConfigBuilder::builder().add_source(
            File::from(config_path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        ),
    )
}
