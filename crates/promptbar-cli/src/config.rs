//! Configuration management for Promptbar CLI
//!
//! Stores the catalog location and log level in ~/.config/promptbar/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "promptbar";
const CONFIG_FILE: &str = "config.toml";
const PROMPTS_FILE: &str = "prompts.json";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Override for the prompt catalog location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts_file: Option<PathBuf>,
    /// Default log filter when PROMPTBAR_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Where the prompt catalog lives
    pub fn prompts_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.prompts_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_DIR);
        Ok(data_dir.join(PROMPTS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_prompts_file_override() {
        let config = Config::parse(
            r#"
prompts_file = "/tmp/my-prompts.json"
log_level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.prompts_path().unwrap(),
            PathBuf::from("/tmp/my-prompts.json")
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::parse("log_level = [").is_err());
    }
}
