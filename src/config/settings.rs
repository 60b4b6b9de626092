//! User settings for readlog
//!
//! Manages defaults for new entries, the recency window used in statistics
//! and the language names substituted into generated prompts.

use serde::{Deserialize, Serialize};

use super::paths::ReadlogPaths;
use crate::error::ReadlogError;
use crate::models::{EntryDefaults, LooseNumber, Topic};

/// User settings for readlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Topic given to new entries
    #[serde(default = "default_topic")]
    pub default_topic: String,

    /// Minutes estimate given to new entries
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,

    /// Difficulty given to new entries
    #[serde(default = "default_difficulty")]
    pub default_difficulty: u32,

    /// Length of the "recent entries" window, in days
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,

    /// Language of the articles being read
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language the user translates into
    #[serde(default = "default_native_language")]
    pub native_language: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_topic() -> String {
    Topic::default().to_string()
}

fn default_minutes() -> u32 {
    30
}

fn default_difficulty() -> u32 {
    3
}

fn default_recent_window_days() -> u32 {
    7
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_native_language() -> String {
    "Korean".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_topic: default_topic(),
            default_minutes: default_minutes(),
            default_difficulty: default_difficulty(),
            recent_window_days: default_recent_window_days(),
            source_language: default_source_language(),
            native_language: default_native_language(),
        }
    }
}

impl Settings {
    /// Defaults applied by the store when creating entries
    pub fn entry_defaults(&self) -> EntryDefaults {
        EntryDefaults {
            topic: self.default_topic.clone(),
            minutes: LooseNumber::from(self.default_minutes),
            difficulty: LooseNumber::from(self.default_difficulty),
        }
    }

    /// Update one setting from a `key=value` pair
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ReadlogError> {
        let value = value.trim();
        match key.trim() {
            "default_topic" => {
                if value.is_empty() {
                    return Err(ReadlogError::Validation("Topic cannot be empty".into()));
                }
                self.default_topic = value.to_string();
            }
            "default_minutes" => self.default_minutes = parse_u32(key, value)?,
            "default_difficulty" => self.default_difficulty = parse_u32(key, value)?,
            "recent_window_days" => {
                let days = parse_u32(key, value)?;
                if days == 0 {
                    return Err(ReadlogError::Validation(
                        "recent_window_days must be at least 1".into(),
                    ));
                }
                self.recent_window_days = days;
            }
            "source_language" => self.source_language = non_empty(key, value)?,
            "native_language" => self.native_language = non_empty(key, value)?,
            other => {
                return Err(ReadlogError::Config(format!("Unknown setting: {}", other)));
            }
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReadlogPaths) -> Result<Self, ReadlogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReadlogError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReadlogError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReadlogPaths) -> Result<(), ReadlogError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReadlogError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReadlogError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ReadlogError> {
    value.parse().map_err(|_| {
        ReadlogError::Validation(format!("{} expects a whole number, got '{}'", key, value))
    })
}

fn non_empty(key: &str, value: &str) -> Result<String, ReadlogError> {
    if value.is_empty() {
        Err(ReadlogError::Validation(format!("{} cannot be empty", key)))
    } else {
        Ok(value.to_string())
    }
}
