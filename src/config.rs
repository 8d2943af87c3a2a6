//! Configuration for the CLI and the generation collaborator
//!
//! Loaded from `mom3ntum/config.toml` under the user config directory, with
//! environment variables as a fallback for the API key so nothing secret
//! has to live on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key for the quest-generation collaborator. Falls back to
    /// `MOM3NTUM_API_KEY` or `GEMINI_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Model used for quest generation
    pub model: String,
    /// Default theme handed to the collaborator when none is given
    pub default_theme: String,
    /// How many quests one generation call asks for
    pub generation_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            default_theme: "new season kickoff".to_string(),
            generation_count: 3,
        }
    }
}

impl Config {
    /// Resolve the API key from config or environment
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("MOM3NTUM_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }

    /// Default config file location (`<config dir>/mom3ntum/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mom3ntum").join("config.toml"))
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Load from the given path, the default location, or fall back to
    /// defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        if let Some(default) = Self::default_path() {
            if default.exists() {
                debug!(path = %default.display(), "loading config");
                return Self::load_from(&default);
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.generation_count, 3);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_key = \"k-123\"\nmodel = \"gemini-test\"\ngeneration_count = 5\n",
        )
        .expect("write config");

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.generation_count, 5);
        // Unspecified fields keep their defaults
        assert_eq!(config.default_theme, "new season kickoff");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        assert!(Config::load_from(&path).is_err());
    }
}
