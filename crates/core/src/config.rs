//! Mapper configuration via `strata-json.toml`
//!
//! Configuration is read once at startup from a key/value [`PropertySource`]
//! and frozen into a [`JsonConfig`]. There is no runtime reconfiguration path:
//! build a new config (and a new mapper) instead.
//!
//! # Example
//!
//! ```toml
//! [json]
//! # false = "yyyy-MM-dd HH:mm:ss" strings, true = epoch milliseconds at UTC+8
//! epoch_date = false
//! enum_properties = ["status", "kind"]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Config file name looked up by callers that keep it next to their data.
pub const CONFIG_FILE_NAME: &str = "strata-json.toml";

/// Key selecting epoch-based date-time encoding.
pub const EPOCH_DATE_KEY: &str = "json.epoch_date";

/// Key listing property names carried as enum-valued properties.
pub const ENUM_PROPERTIES_KEY: &str = "json.enum_properties";

/// How date-time values are represented.
///
/// Exactly one mode is active per codec; it is chosen at construction and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// `yyyy-MM-dd HH:mm:ss`
    #[default]
    String,
    /// Epoch seconds followed by three millisecond digits, at UTC+8
    Epoch,
}

impl DateMode {
    /// Map the `epoch_date` flag onto a mode.
    pub fn from_epoch_flag(epoch_based: bool) -> Self {
        if epoch_based {
            DateMode::Epoch
        } else {
            DateMode::String
        }
    }

    /// True when date-times are encoded as epoch milliseconds.
    pub fn is_epoch_based(self) -> bool {
        matches!(self, DateMode::Epoch)
    }
}

/// A key/value configuration source with typed lookups.
pub trait PropertySource {
    /// Boolean lookup; `default` when the key is absent.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool>;

    /// Set-of-strings lookup; empty when the key is absent.
    fn get_string_set(&self, key: &str) -> Result<BTreeSet<String>>;
}

/// Split a comma-separated list, dropping blanks.
fn split_set(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::Config(format!(
            "'{}' must be true or false, got '{}'",
            key, other
        ))),
    }
}

/// Walk a dotted key (`json.epoch_date`) through nested tables.
fn lookup<'a>(table: &'a toml::Table, key: &str) -> Option<&'a toml::Value> {
    if let Some(v) = table.get(key) {
        return Some(v);
    }
    let mut segments = key.split('.');
    let mut current = table.get(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}

impl PropertySource for toml::Table {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match lookup(self, key) {
            None => Ok(default),
            Some(toml::Value::Boolean(b)) => Ok(*b),
            Some(toml::Value::String(s)) => parse_bool(key, s),
            Some(other) => Err(Error::Config(format!(
                "'{}' must be a boolean, got {}",
                key,
                other.type_str()
            ))),
        }
    }

    fn get_string_set(&self, key: &str) -> Result<BTreeSet<String>> {
        match lookup(self, key) {
            None => Ok(BTreeSet::new()),
            Some(toml::Value::String(s)) => Ok(split_set(s)),
            Some(toml::Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::Config(format!("'{}' must only contain strings", key))
                    })
                })
                .collect(),
            Some(other) => Err(Error::Config(format!(
                "'{}' must be a string list, got {}",
                key,
                other.type_str()
            ))),
        }
    }
}

/// Flat `key=value` properties, as read from a `.properties`-style source.
impl PropertySource for HashMap<String, String> {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => parse_bool(key, raw),
        }
    }

    fn get_string_set(&self, key: &str) -> Result<BTreeSet<String>> {
        Ok(self.get(key).map(|raw| split_set(raw)).unwrap_or_default())
    }
}

/// Mapper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Date-time representation used by every codec built from this config.
    #[serde(default)]
    pub date_mode: DateMode,
    /// Property names declared as enum-valued.
    #[serde(default)]
    pub enum_properties: BTreeSet<String>,
}

impl JsonConfig {
    /// Config with the given date mode and no enum properties.
    pub fn new(date_mode: DateMode) -> Self {
        Self {
            date_mode,
            enum_properties: BTreeSet::new(),
        }
    }

    /// Replace the enum property names.
    pub fn with_enum_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_properties = names.into_iter().map(Into::into).collect();
        self
    }

    /// Read the config from any property source.
    pub fn from_source<P: PropertySource + ?Sized>(source: &P) -> Result<Self> {
        let epoch_based = source.get_bool(EPOCH_DATE_KEY, false)?;
        let enum_properties = source.get_string_set(ENUM_PROPERTIES_KEY)?;
        Ok(Self {
            date_mode: DateMode::from_epoch_flag(epoch_based),
            enum_properties,
        })
    }

    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text.parse()?;
        Self::from_source(&table)
    }

    /// Load from a file. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml_str(&text)?;
                info!(
                    target: "strata_json::config",
                    path = ?path,
                    date_mode = ?config.date_mode,
                    "Loaded JSON mapper configuration"
                );
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    target: "strata_json::config",
                    path = ?path,
                    "No configuration file, using defaults"
                );
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// True when date-times are encoded as epoch milliseconds.
    pub fn is_epoch_based(&self) -> bool {
        self.date_mode.is_epoch_based()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# strata-json configuration

[json]
# Date-time encoding: false (default) = "yyyy-MM-dd HH:mm:ss" strings,
# true = epoch milliseconds interpreted at UTC+8.
epoch_date = false

# Property names carried as enum-valued properties.
enum_properties = []
"#
    }
}
