//! Configuration management for AlertRelay
//!
//! This module defines the `Config` struct holding the persisted
//! notification channel definitions. It uses the `figment` crate to load
//! configuration from a TOML file and merge it with environment variables.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Generic settings store for one notification channel.
///
/// Settings are persisted as an opaque JSON object. The core never
/// interprets them; notifier factories pull out the fields they need with
/// the typed accessors.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(transparent)]
pub struct ChannelSettings(Map<String, Value>);

impl ChannelSettings {
    /// Creates an empty settings store.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses settings from a raw JSON document, as persisted for a channel.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns the string value stored under `key`, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One persisted notification channel definition.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationChannel {
    /// Display name of the channel, unique per installation.
    pub name: String,
    /// Notifier type that handles this channel (e.g. "hangoutschat").
    pub kind: String,
    /// Disabled channels are kept in configuration but never constructed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Suppress the notification sent when an alert returns to normal.
    #[serde(default)]
    pub disable_resolve_message: bool,
    /// Channel specific settings, opaque to the core.
    #[serde(default)]
    pub settings: ChannelSettings,
}

fn default_enabled() -> bool {
    true
}

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// The configured notification channels.
    #[serde(default)]
    pub channels: Vec<NotificationChannel>,
}

impl Config {
    /// Loads the application configuration from the specified file.
    ///
    /// # Arguments
    /// * `config_path` - The path to the TOML configuration file.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., ALERTRELAY_LOG_LEVEL=debug
            .merge(Env::prefixed("ALERTRELAY_"))
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            channels: vec![],
        }
    }
}
