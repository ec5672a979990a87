use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings for the two outbound surfaces:
/// the timed-text endpoint and the completion service.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Timed-text endpoint config
    #[serde(default)]
    pub timedtext: TimedTextConfig,

    /// Translation provider config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the unofficial timed-text endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimedTextConfig {
    // @field: Endpoint URL template
    #[serde(default = "default_timedtext_endpoint")]
    pub endpoint: String,

    // @field: Request timeout seconds
    #[serde(default = "default_timedtext_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the completion service used for word translation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    // @field: Model name
    #[serde(default = "default_translation_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL (empty uses the public API)
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_translation_timeout_secs")]
    pub timeout_secs: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_timedtext_endpoint() -> String {
    "https://www.youtube.com/api/timedtext".to_string()
}

fn default_timedtext_timeout_secs() -> u64 {
    10
}

fn default_translation_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_translation_timeout_secs() -> u64 {
    120
}

impl Default for TimedTextConfig {
    fn default() -> Self {
        Self {
            endpoint: default_timedtext_endpoint(),
            timeout_secs: default_timedtext_timeout_secs(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_translation_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_translation_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timedtext: TimedTextConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.timedtext.endpoint)
            .map_err(|e| anyhow!("Invalid timed-text endpoint URL: {}", e))?;

        if self.timedtext.timeout_secs == 0 {
            return Err(anyhow!("Timed-text timeout must be greater than zero"));
        }

        if self.translation.api_key.is_empty() {
            return Err(anyhow!("Translation API key is required"));
        }

        if self.translation.model.is_empty() {
            return Err(anyhow!("Translation model is required"));
        }

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be greater than zero"));
        }

        Ok(())
    }
}
