//! Configuration loading for the demo shell.
//!
//! Parses `redline.toml` (or a path supplied with `--config`). Unknown fields
//! are ignored so the file can grow without breaking older binaries, and a
//! parse error falls back to defaults rather than aborting startup.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PromptConfig {
    #[serde(default = "PromptConfig::default_text")]
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: Self::default_text(),
        }
    }
}

impl PromptConfig {
    fn default_text() -> String {
        "demo> ".to_string()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default tracing filter, overridden by `RUST_LOG` when set.
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

impl LogConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

fn discover() -> PathBuf {
    PathBuf::from("redline.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<Config>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(target: "config", file = %path.display(), %e, "parse failed, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
