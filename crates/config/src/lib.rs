//! Configuration loading, validation, and management for DualMind.
//!
//! Loads configuration from `~/.dualmind/config.toml` with environment
//! variable overrides (a `.env` file in the working directory is honored).
//! Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.dualmind/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key (can be overridden per-provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Completion provider name
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// History capacity, which is also the context window size
    #[serde(default = "default_memory_size")]
    pub memory_size: usize,

    /// Timeout applied to each outbound provider call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Intent classification call
    #[serde(default = "SamplingConfig::classifier")]
    pub classifier: SamplingConfig,

    /// Factual response generation
    #[serde(default = "SamplingConfig::factual")]
    pub factual: SamplingConfig,

    /// Creative response generation
    #[serde(default = "SamplingConfig::creative")]
    pub creative: SamplingConfig,

    /// Provider-specific configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_provider() -> String {
    "openai".into()
}
fn default_model() -> String {
    "gpt-4o".into()
}
fn default_memory_size() -> usize {
    3
}
fn default_request_timeout_secs() -> u64 {
    60
}

/// Sampling knobs for one kind of provider call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingConfig {
    pub fn classifier() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 10,
        }
    }

    pub fn factual() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 250,
        }
    }

    pub fn creative() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 250,
        }
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "{section}.temperature must be between 0.0 and 2.0"
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{section}.max_tokens must be > 0"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("memory_size", &self.memory_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("classifier", &self.classifier)
            .field("factual", &self.factual)
            .field("creative", &self.creative)
            .field("providers", &self.providers)
            .finish()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from `path`, then apply `.env` and overrides.
    ///
    /// Override values come from `lookup`, keyed by environment variable
    /// name, so callers can layer their own settings (command-line flags)
    /// over the process environment:
    /// - `DUALMIND_API_KEY`, `OPENAI_API_KEY`, `OPENROUTER_API_KEY` (first
    ///   found, only when the file has no key)
    /// - `DUALMIND_PROVIDER`, `DUALMIND_MODEL`, `DUALMIND_MEMORY_SIZE`
    ///
    /// `.env` is loaded before the first lookup. Validation runs once, on
    /// the fully merged result.
    pub fn load_with_lookup(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // A missing .env is the normal case
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from(path)?;
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a specific file. A missing file yields the defaults.
    ///
    /// Does not validate: overrides may still fix the values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply overrides from an environment lookup. Split out from
    /// `load_with_lookup` so tests don't touch process-wide state.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            self.api_key = lookup("DUALMIND_API_KEY")
                .or_else(|| lookup("OPENAI_API_KEY"))
                .or_else(|| lookup("OPENROUTER_API_KEY"));
        }

        if let Some(provider) = lookup("DUALMIND_PROVIDER") {
            self.provider = provider;
        }

        if let Some(model) = lookup("DUALMIND_MODEL") {
            self.model = model;
        }

        if let Some(size) = lookup("DUALMIND_MEMORY_SIZE") {
            self.memory_size = size.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "DUALMIND_MEMORY_SIZE must be a positive integer, got {size:?}"
                ))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".dualmind")
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ValidationError(
                "memory_size must be at least 1".into(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be at least 1".into(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()));
        }

        self.classifier.validate("classifier")?;
        self.factual.validate("factual")?;
        self.creative.validate("creative")?;
        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
            || self
                .providers
                .get(&self.provider)
                .is_some_and(|p| p.api_key.is_some())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: default_provider(),
            model: default_model(),
            memory_size: default_memory_size(),
            request_timeout_secs: default_request_timeout_secs(),
            classifier: SamplingConfig::classifier(),
            factual: SamplingConfig::factual(),
            creative: SamplingConfig::creative(),
            providers: HashMap::new(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for dualmind_core::Error {
    fn from(err: ConfigError) -> Self {
        dualmind_core::Error::Config {
            message: err.to_string(),
        }
    }
}
