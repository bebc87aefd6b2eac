//! Configuration for the analyzer.
//!
//! Loads settings from a TOML file or uses defaults. The remote API key is
//! never stored in the file; the config only names the environment variable
//! that holds it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default config file path.
pub const CONFIG_PATH: &str = "/etc/gap-analyzer/config.toml";

/// Remote OpenAI-compatible backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_base_url")]
    pub base_url: String,

    #[serde(default = "default_remote_model")]
    pub model: String,

    /// Environment variable holding the API key. Absence of the variable
    /// disables the remote stage entirely.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Local Ollama-style backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default = "default_local_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_local_model")]
    pub model: String,

    /// Timeout for the one-shot availability probe at startup.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_remote_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_remote_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_local_endpoint() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_local_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_probe_timeout() -> u64 {
    2
}

fn default_request_timeout() -> u64 {
    120
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_remote_base_url(),
            model: default_remote_model(),
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            endpoint: default_local_endpoint(),
            model: default_local_model(),
            probe_timeout_secs: default_probe_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub local: LocalConfig,
}

impl AnalyzerConfig {
    /// Load from a TOML file, falling back to defaults when the file is
    /// absent. A present but unparseable file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.remote.base_url, "https://api.openai.com/v1");
        assert_eq!(config.remote.model, "gpt-4o-mini");
        assert_eq!(config.remote.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.remote.max_tokens, 300);
        assert_eq!(config.local.endpoint, "http://127.0.0.1:11434");
        assert_eq!(config.local.probe_timeout_secs, 2);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AnalyzerConfig::load("/nonexistent/gap-analyzer.toml").unwrap();
        assert_eq!(config.remote.model, "gpt-4o-mini");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[local]\nmodel = \"qwen2.5:7b-instruct\"").unwrap();

        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.local.model, "qwen2.5:7b-instruct");
        assert_eq!(config.local.endpoint, "http://127.0.0.1:11434");
        assert_eq!(config.remote.model, "gpt-4o-mini");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        assert!(AnalyzerConfig::load(file.path()).is_err());
    }
}
