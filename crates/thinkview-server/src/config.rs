//! Server configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thinkview_core::{Classifier, DEFAULT_SUMMARY_LENGTH, KeywordExtensions, KeywordTables};
use thinkview_types::{DEFAULT_PREVIEW_LENGTH, DisplayOptions};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Show full traces by default; the condensed indicator otherwise
    #[serde(default)]
    pub show_thinking: bool,
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: usize,
    /// Extra entries appended to the built-in keyword tables
    #[serde(default)]
    pub keywords: KeywordExtensions,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_summary_max_length() -> usize {
    DEFAULT_SUMMARY_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            show_thinking: false,
            preview_length: default_preview_length(),
            summary_max_length: default_summary_max_length(),
            keywords: KeywordExtensions::default(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load config from `config/default.toml`, then the user config dir, or fall back to defaults.
    pub fn load() -> Result<Self> {
        let local = PathBuf::from("config/default.toml");
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user) = dirs::config_dir().map(|d| d.join("thinkview").join("config.toml")) {
            if user.exists() {
                return Self::load_from(&user);
            }
        }

        Ok(Config::default())
    }

    /// Display defaults applied when a request leaves them out.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_thinking: self.show_thinking,
            preview_length: self.preview_length,
        }
    }

    /// Build a classifier from the built-in tables plus configured extensions.
    pub fn build_classifier(&self) -> Result<Classifier> {
        let tables = KeywordTables::default().extended(&self.keywords);
        Classifier::new(tables).context("Invalid keyword configuration")
    }
}
