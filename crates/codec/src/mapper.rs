//! JSON mapper
//!
//! [`JsonMapper`] is the explicit encode/decode context. It is built once
//! from a [`JsonConfig`], never mutated afterwards, and cheap to clone, so
//! independently configured mappers can live side by side (for example one
//! string-based and one epoch-based).
//!
//! Every call runs with the mapper's [`DateTimeCodec`] installed in the
//! per-thread scope, which is how the [`crate::fields`] adapters learn the
//! date mode.
//!
//! Failures are logged and returned. Only blank input is treated as
//! "nothing to decode".

use crate::date_time::DateTimeCodec;
use crate::scope::with_codec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;
use strata_json_core::{DateMode, Error, JsonConfig, Result};
use tracing::warn;

/// Configured JSON encoder/decoder.
#[derive(Debug, Clone)]
pub struct JsonMapper {
    config: Arc<JsonConfig>,
    codec: DateTimeCodec,
}

impl Default for JsonMapper {
    fn default() -> Self {
        Self::new(JsonConfig::default())
    }
}

impl JsonMapper {
    /// Mapper for the given configuration.
    pub fn new(config: JsonConfig) -> Self {
        let codec = DateTimeCodec::new(config.date_mode);
        Self {
            config: Arc::new(config),
            codec,
        }
    }

    /// Mapper writing date-times as `yyyy-MM-dd HH:mm:ss`.
    pub fn string_based() -> Self {
        Self::new(JsonConfig::new(DateMode::String))
    }

    /// Mapper writing date-times as epoch milliseconds at UTC+8.
    pub fn epoch_based() -> Self {
        Self::new(JsonConfig::new(DateMode::Epoch))
    }

    /// Mapper configured from a TOML file (defaults when the file is missing).
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::new(JsonConfig::load(path)?))
    }

    /// The configuration this mapper was built from.
    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// The date/time codec applied to annotated fields.
    pub fn codec(&self) -> DateTimeCodec {
        self.codec
    }

    /// True when date-times are written as epoch milliseconds.
    pub fn is_epoch_based(&self) -> bool {
        self.codec.mode().is_epoch_based()
    }

    /// Encode `value` as a JSON string.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        with_codec(self.codec, || serde_json::to_string(value)).map_err(encode_failure)
    }

    /// Encode `value` as an indented JSON string.
    pub fn to_pretty_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        with_codec(self.codec, || serde_json::to_string_pretty(value)).map_err(encode_failure)
    }

    /// Encode `value` as UTF-8 JSON bytes.
    pub fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        with_codec(self.codec, || serde_json::to_vec(value)).map_err(encode_failure)
    }

    /// Encode `value` as a JSON tree.
    pub fn to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<serde_json::Value> {
        with_codec(self.codec, || serde_json::to_value(value)).map_err(encode_failure)
    }

    /// Write `value` as JSON to `writer`.
    pub fn write_value<W: io::Write, T: Serialize + ?Sized>(
        &self,
        writer: W,
        value: &T,
    ) -> Result<()> {
        with_codec(self.codec, || serde_json::to_writer(writer, value)).map_err(|e| {
            if e.is_io() {
                warn!(target: "strata_json::mapper", error = %e, "JSON write failed");
                Error::Io(e.into())
            } else {
                encode_failure(e)
            }
        })
    }

    /// Decode a JSON string. Blank input yields `Ok(None)`.
    pub fn to_object<T: DeserializeOwned>(&self, json: &str) -> Result<Option<T>> {
        if json.trim().is_empty() {
            return Ok(None);
        }
        with_codec(self.codec, || serde_json::from_str(json))
            .map(Some)
            .map_err(decode_failure)
    }

    /// Decode JSON bytes.
    pub fn from_slice<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        with_codec(self.codec, || serde_json::from_slice(bytes)).map_err(decode_failure)
    }

    /// Decode a JSON object into a map. Blank input yields an empty map.
    pub fn to_map<V: DeserializeOwned>(&self, json: &str) -> Result<HashMap<String, V>> {
        Ok(self.to_object(json)?.unwrap_or_default())
    }

    /// Decode a JSON array into a list. Blank input yields an empty list.
    pub fn to_list<T: DeserializeOwned>(&self, json: &str) -> Result<Vec<T>> {
        Ok(self.to_object(json)?.unwrap_or_default())
    }
}

fn encode_failure(e: serde_json::Error) -> Error {
    warn!(target: "strata_json::mapper", error = %e, "JSON encode failed");
    Error::Encode(e.to_string())
}

fn decode_failure(e: serde_json::Error) -> Error {
    warn!(
        target: "strata_json::mapper",
        error = %e,
        line = e.line(),
        column = e.column(),
        "JSON decode failed"
    );
    Error::Decode(e.to_string())
}
