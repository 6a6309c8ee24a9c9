use serde::{Deserialize, Serialize};
use std::path::Path;
use std::fs;
use std::env;
use anyhow::Result;
use crate::api::dexscreener::API_BASE_URL;
use crate::api::gmgn::clearance::DEFAULT_CLEARANCE_URL;
use crate::api::gmgn::session::DEFAULT_USER_AGENT;
use crate::api::gmgn::GMGN_BASE_URL;

pub const PROXY_URL_ENV: &str = "GMGN_PROXY_URL";
pub const CLEARANCE_URL_ENV: &str = "GMGN_CLEARANCE_URL";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dexscreener: DexScreenerConfig,
    pub gmgn: GmgnConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DexScreenerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GmgnConfig {
    pub base_url: String,
    pub clearance_url: String,
    /// Forward proxy used when direct requests are blocked. No fallback
    /// without one.
    pub proxy_url: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GmgnConfig {
    fn default() -> Self {
        Self {
            base_url: GMGN_BASE_URL.to_string(),
            clearance_url: DEFAULT_CLEARANCE_URL.to_string(),
            proxy_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    pub trade_limit: u32,
    pub short_resolution: String,
    pub short_window_secs: i64,
    pub long_resolution: String,
    pub long_window_secs: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trade_limit: 20,
            short_resolution: "5m".to_string(),
            // last 4 hours
            short_window_secs: 4 * 3600,
            long_resolution: "4h".to_string(),
            // last 31 days
            long_window_secs: 31 * 86400,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Loads `path` when it exists, defaults otherwise, then applies
    /// environment overrides.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(env::var(PROXY_URL_ENV).ok(), env::var(CLEARANCE_URL_ENV).ok());
    }

    fn apply_overrides(&mut self, proxy_url: Option<String>, clearance_url: Option<String>) {
        if let Some(proxy) = proxy_url.filter(|v| !v.trim().is_empty()) {
            self.gmgn.proxy_url = Some(proxy);
        }
        if let Some(url) = clearance_url.filter(|v| !v.trim().is_empty()) {
            self.gmgn.clearance_url = url;
        }
    }
}
