use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::CoreError;

/// Default HTTP timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which upstream serves quotes for valuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Iex,
    #[serde(alias = "alphavantage")]
    AlphaVantage,
    Yahoo,
}

impl ProviderKind {
    /// Key used in `Settings::api_keys` and in config files.
    pub fn key(self) -> &'static str {
        match self {
            ProviderKind::Iex => "iex",
            ProviderKind::AlphaVantage => "alphavantage",
            ProviderKind::Yahoo => "yahoo",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "iex" => Ok(ProviderKind::Iex),
            "alphavantage" => Ok(ProviderKind::AlphaVantage),
            "yahoo" => Ok(ProviderKind::Yahoo),
            other => Err(CoreError::Config(format!("unknown quote provider: {other}"))),
        }
    }
}

/// User-configurable settings for quote providers and HTTP behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API keys per provider (e.g. "alphavantage", "iex").
    #[serde(default)]
    pub api_keys: HashMap<String, String>,

    /// Provider used for valuation quotes.
    #[serde(default)]
    pub quote_provider: ProviderKind,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Overrides the IEX endpoint (self-hosted mirrors, test servers).
    #[serde(default)]
    pub iex_base_url: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_keys: HashMap::new(),
            quote_provider: ProviderKind::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            iex_base_url: None,
        }
    }
}

impl Settings {
    /// Build settings from `STOCKIFY_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(key) = lookup("STOCKIFY_API_KEY") {
            settings
                .api_keys
                .insert(ProviderKind::AlphaVantage.key().to_string(), key);
        }
        if let Some(token) = lookup("STOCKIFY_IEX_TOKEN") {
            settings
                .api_keys
                .insert(ProviderKind::Iex.key().to_string(), token);
        }
        if let Some(provider) = lookup("STOCKIFY_QUOTE_PROVIDER") {
            settings.quote_provider = provider.parse()?;
        }
        if let Some(secs) = lookup("STOCKIFY_TIMEOUT_SECS") {
            settings.request_timeout_secs = secs.trim().parse().map_err(|_| {
                CoreError::Config(format!("STOCKIFY_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        if let Some(url) = lookup("STOCKIFY_IEX_BASE_URL") {
            settings.iex_base_url = Some(url);
        }

        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn api_key(&self, provider: ProviderKind) -> Option<&str> {
        self.api_keys.get(provider.key()).map(String::as_str)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
