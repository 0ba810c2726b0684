use crate::commands::SelectionPolicy;
use crate::error::{Result, ShopdirError};
use crate::store::FallbackMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SOURCE: &str = "shops.json";

/// Client configuration, stored as `config.json` in the config directory.
///
/// Only where the data comes from and how the UI behaves is kept here; filter
/// selections are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopdirConfig {
    /// File path or http(s) URL of the shop list
    #[serde(default = "default_source")]
    pub source: String,

    /// Substitute the bundled shop list when loading fails
    #[serde(default = "default_fallback")]
    pub fallback: bool,

    /// Picking a category also clears the search text
    #[serde(default)]
    pub clear_search_on_category: bool,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_fallback() -> bool {
    true
}

impl Default for ShopdirConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fallback: default_fallback(),
            clear_search_on_category: false,
        }
    }
}

impl ShopdirConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShopdirConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        if self.fallback {
            FallbackMode::Embedded
        } else {
            FallbackMode::Disabled
        }
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            clear_search_on_category: self.clear_search_on_category,
        }
    }

    /// Current value of a key, by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "source" => Ok(self.source.clone()),
            "fallback" => Ok(self.fallback.to_string()),
            "clear-search-on-category" => Ok(self.clear_search_on_category.to_string()),
            other => Err(ShopdirError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a key from its CLI name and textual value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source" => {
                if value.trim().is_empty() {
                    return Err(ShopdirError::Config("source cannot be empty".into()));
                }
                self.source = value.to_string();
            }
            "fallback" => self.fallback = parse_bool(key, value)?,
            "clear-search-on-category" => self.clear_search_on_category = parse_bool(key, value)?,
            other => {
                return Err(ShopdirError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["source", "fallback", "clear-search-on-category"]
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ShopdirError::Config(format!(
            "{} expects true or false, got {}",
            key, value
        ))),
    }
}
