use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site-level settings loaded from `config.toml`. Deployment secrets
/// (issue tracker token and repo) live in the environment, not here.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub server: ServerConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin used for sitemap locations and canonical URLs.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Bound on the outbound issue-tracker call. No retries are attempted.
    pub timeout_seconds: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openalternatives.github.io".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { timeout_seconds: 10 }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Reads the given TOML file, falling back to defaults when it does not
    /// exist so offline commands (collect, sitemap) run without deployment
    /// config in place.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
