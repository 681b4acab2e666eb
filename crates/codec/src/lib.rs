//! Date/time codec and JSON mapper for strata-json
//!
//! - [`DateTimeCodec`]: `yyyy-MM-dd` dates, `HH:mm:ss` times, and date-times
//!   either as `yyyy-MM-dd HH:mm:ss` or as epoch milliseconds at UTC+8
//! - [`fields`]: `#[serde(with = ...)]` adapters applying the active codec
//! - [`JsonMapper`]: explicit, immutable JSON encode/decode context
//! - [`format_currency`]: grouped decimal display

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date_time;
pub mod fields;
pub mod mapper;
pub mod number;
pub mod scope;

pub use date_time::{
    parse_date_lenient, DateTimeCodec, TemporalKind, DATE_PATTERN, DATE_TIME_PATTERN,
    EPOCH_OFFSET_SECONDS, TIME_PATTERN,
};
pub use mapper::JsonMapper;
pub use number::format_currency;
pub use scope::{active_codec, with_codec};
