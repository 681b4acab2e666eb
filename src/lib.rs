//! strata-json - JSON marshalling utilities with configurable date/time encoding
//!
//! # Quick Start
//!
//! ```ignore
//! use strata_json::{JsonConfig, JsonMapper, Marshaller};
//!
//! // Date-times as "yyyy-MM-dd HH:mm:ss" (or epoch millis with epoch_date = true)
//! let mapper = JsonMapper::new(JsonConfig::from_toml_str("[json]\nepoch_date = false")?);
//! let json = mapper.to_json(&order)?;
//!
//! // Cache keys and values
//! let marshaller = Marshaller::new(mapper);
//! assert_eq!(marshaller.marshal(&42)?, b"42");
//! ```
//!
//! # Architecture
//!
//! | Crate | Provides |
//! |-------|----------|
//! | `strata-json-core` | [`Error`], [`JsonConfig`], [`DateMode`] |
//! | `strata-json-codec` | [`DateTimeCodec`], [`fields`], [`JsonMapper`], [`format_currency`] |
//! | `strata-json-marshal` | [`Marshaller`], [`TypeClass`], [`marshal_all!`] |
//!
//! Nothing is global: every mapper and marshaller carries its own
//! configuration, fixed at construction.

pub use strata_json_codec::{
    active_codec, fields, format_currency, parse_date_lenient, with_codec, DateTimeCodec,
    JsonMapper, TemporalKind, DATE_PATTERN, DATE_TIME_PATTERN, EPOCH_OFFSET_SECONDS, TIME_PATTERN,
};
pub use strata_json_core::{
    DateMode, Error, JsonConfig, PropertySource, Result, CONFIG_FILE_NAME, ENUM_PROPERTIES_KEY,
    EPOCH_DATE_KEY,
};
pub use strata_json_marshal::{classify, marshal_all, Marshaller, Shape, TimeUnit, TypeClass, EMPTY_BYTES};
