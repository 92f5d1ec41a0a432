use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".py", ".js", ".java", ".cpp", ".cs"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .pr-critic.toml.
///
/// All fields are optional — the tool works with zero config as long as
/// GROQ_API_KEY is set in the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Completion-provider settings
    #[serde(default)]
    pub groq: GroqConfig,

    /// File-filter settings
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqConfig {
    /// Groq API key. If None, falls back to the GROQ_API_KEY env var.
    pub api_key: Option<String>,

    /// Model identifier sent with every completion request.
    pub model: Option<String>,

    /// Override for the API base URL (useful for OpenAI-compatible proxies).
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// File extensions whose diffs are analyzed (e.g., [".py", ".rs"])
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl Config {
    /// Load configuration from .pr-critic.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".pr-critic.toml");
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };

        if config.groq.api_key.is_none() {
            if let Ok(key) = std::env::var("GROQ_API_KEY") {
                config.groq.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The resolved API key. The GROQ_API_KEY env fallback is applied once,
    /// in load(); this only reflects the loaded value.
    pub fn groq_api_key(&self) -> Option<String> {
        self.groq.api_key.clone()
    }

    pub fn model(&self) -> String {
        self.groq
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn base_url(&self) -> String {
        self.groq
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn extensions(&self) -> Vec<String> {
        if self.filter.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.filter.extensions.clone()
        }
    }
}
