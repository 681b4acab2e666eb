//! Date/time codec
//!
//! Converts calendar dates, date-times and times of day to and from text.
//!
//! | Kind | String mode | Epoch mode |
//! |------|-------------|------------|
//! | Date | `yyyy-MM-dd` | `yyyy-MM-dd` |
//! | DateTime | `yyyy-MM-dd HH:mm:ss` | `<epoch seconds><millis:3>` at UTC+8 |
//! | Time | `HH:mm:ss` | `HH:mm:ss` |
//!
//! The epoch representation is the decimal digits of the epoch seconds
//! (1 to 19 digits, unsigned) immediately followed by the zero-padded
//! millisecond-of-second. Read as one number it is the epoch milliseconds,
//! which is how it travels in JSON.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use strata_json_core::{DateMode, Error, Result};
use tracing::warn;

/// Date pattern, both modes.
pub const DATE_PATTERN: &str = "yyyy-MM-dd";
/// Date-time pattern, string mode.
pub const DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";
/// Time-of-day pattern, both modes.
pub const TIME_PATTERN: &str = "HH:mm:ss";

/// Fixed offset applied to naive date-times in epoch mode (UTC+8).
pub const EPOCH_OFFSET_SECONDS: i64 = 8 * 3600;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

const MAX_EPOCH_SECONDS_DIGITS: usize = 19;
const MILLIS_DIGITS: usize = 3;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

/// Semantic kind of a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// Calendar date
    Date,
    /// Date and time of day, no zone
    DateTime,
    /// Time of day
    Time,
}

impl TemporalKind {
    /// Short name used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::DateTime => "datetime",
            TemporalKind::Time => "time",
        }
    }
}

/// Encoder/decoder set for one [`DateMode`].
///
/// The mode is fixed at construction. Every call is stateless, so a codec
/// can be copied freely and shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeCodec {
    mode: DateMode,
}

impl DateTimeCodec {
    /// Codec for the given mode.
    pub const fn new(mode: DateMode) -> Self {
        Self { mode }
    }

    /// String-mode codec.
    pub const fn string() -> Self {
        Self::new(DateMode::String)
    }

    /// Epoch-mode codec.
    pub const fn epoch() -> Self {
        Self::new(DateMode::Epoch)
    }

    /// The active mode.
    pub fn mode(&self) -> DateMode {
        self.mode
    }

    /// Pattern registered for `kind`, or `None` when the kind is encoded
    /// numerically (date-time in epoch mode).
    pub fn pattern(&self, kind: TemporalKind) -> Option<&'static str> {
        match (kind, self.mode) {
            (TemporalKind::Date, _) => Some(DATE_PATTERN),
            (TemporalKind::Time, _) => Some(TIME_PATTERN),
            (TemporalKind::DateTime, DateMode::String) => Some(DATE_TIME_PATTERN),
            (TemporalKind::DateTime, DateMode::Epoch) => None,
        }
    }

    /// Format a date as `yyyy-MM-dd`.
    pub fn encode_date(&self, date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a `yyyy-MM-dd` date.
    ///
    /// Input that does not have the `dddd-dd-dd` shape, or that names a day
    /// the calendar does not have, is logged and rejected.
    pub fn decode_date(&self, text: &str) -> Result<NaiveDate> {
        if !ISO_DATE.is_match(text) {
            warn!(
                target: "strata_json::codec",
                input = %text,
                "Input does not match the yyyy-MM-dd date format"
            );
            return Err(Error::parse(
                TemporalKind::Date.name(),
                text,
                format!("expected {}", DATE_PATTERN),
            ));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| parse_failure(TemporalKind::Date, text, e))
    }

    /// Encode a date-time in the active mode.
    ///
    /// Sub-second precision is dropped in string mode and sub-millisecond
    /// precision in epoch mode.
    pub fn encode_date_time(&self, value: &NaiveDateTime) -> Result<String> {
        match self.mode {
            DateMode::String => Ok(value.format(DATE_TIME_FORMAT).to_string()),
            DateMode::Epoch => {
                let utc = to_utc(value)?;
                let seconds = utc.and_utc().timestamp();
                if seconds < 0 {
                    return Err(Error::format(
                        TemporalKind::DateTime.name(),
                        format!("{} precedes the epoch at UTC+8", value),
                    ));
                }
                let millis = utc.and_utc().timestamp_subsec_millis();
                Ok(format!("{}{:03}", seconds, millis))
            }
        }
    }

    /// Decode a date-time written in the active mode.
    pub fn decode_date_time(&self, text: &str) -> Result<NaiveDateTime> {
        match self.mode {
            DateMode::String => NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
                .map_err(|e| parse_failure(TemporalKind::DateTime, text, e)),
            DateMode::Epoch => decode_epoch_digits(text),
        }
    }

    /// Format a time of day as `HH:mm:ss`.
    pub fn encode_time(&self, time: &NaiveTime) -> String {
        time.format(TIME_FORMAT).to_string()
    }

    /// Parse a `HH:mm:ss` time of day.
    pub fn decode_time(&self, text: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(text, TIME_FORMAT)
            .map_err(|e| parse_failure(TemporalKind::Time, text, e))
    }

    /// Epoch milliseconds of a date-time read at UTC+8.
    ///
    /// Same value as the epoch-mode digit string, as a number.
    pub fn encode_epoch_millis(&self, value: &NaiveDateTime) -> Result<i64> {
        let millis = to_utc(value)?.and_utc().timestamp_millis();
        if millis < 0 {
            return Err(Error::format(
                TemporalKind::DateTime.name(),
                format!("{} precedes the epoch at UTC+8", value),
            ));
        }
        Ok(millis)
    }

    /// Local date-time at UTC+8 of an epoch-millisecond instant.
    pub fn decode_epoch_millis(&self, millis: i64) -> Result<NaiveDateTime> {
        if millis < 0 {
            return Err(Error::parse(
                TemporalKind::DateTime.name(),
                millis.to_string(),
                "epoch milliseconds must not be negative",
            ));
        }
        from_epoch_parts(millis / 1000, (millis % 1000) as u32, &millis.to_string())
    }
}

/// Parse a `yyyy-MM-dd` date, returning `None` (and logging a warning) for
/// anything else.
///
/// Callers that treat "unparseable" and "absent" the same way use this;
/// everything else should call [`DateTimeCodec::decode_date`].
pub fn parse_date_lenient(source: &str) -> Option<NaiveDate> {
    match DateTimeCodec::string().decode_date(source) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(
                target: "strata_json::codec",
                input = %source,
                "{} does not match any date format, treating as absent",
                source
            );
            None
        }
    }
}

fn parse_failure(kind: TemporalKind, text: &str, e: chrono::ParseError) -> Error {
    warn!(
        target: "strata_json::codec",
        kind = kind.name(),
        input = %text,
        error = %e,
        "Failed to parse temporal value"
    );
    Error::parse(kind.name(), text, e.to_string())
}

fn to_utc(value: &NaiveDateTime) -> Result<NaiveDateTime> {
    value
        .checked_sub_signed(Duration::seconds(EPOCH_OFFSET_SECONDS))
        .ok_or_else(|| {
            Error::format(
                TemporalKind::DateTime.name(),
                format!("{} is out of range", value),
            )
        })
}

fn decode_epoch_digits(text: &str) -> Result<NaiveDateTime> {
    let max_len = MAX_EPOCH_SECONDS_DIGITS + MILLIS_DIGITS;
    if text.len() <= MILLIS_DIGITS
        || text.len() > max_len
        || !text.bytes().all(|b| b.is_ascii_digit())
    {
        warn!(
            target: "strata_json::codec",
            input = %text,
            "Input is not an epoch seconds+millis digit string"
        );
        return Err(Error::parse(
            TemporalKind::DateTime.name(),
            text,
            format!(
                "expected 1-{} digits of epoch seconds followed by {} digits of millis",
                MAX_EPOCH_SECONDS_DIGITS, MILLIS_DIGITS
            ),
        ));
    }
    let (seconds, millis) = text.split_at(text.len() - MILLIS_DIGITS);
    let seconds: i64 = seconds
        .parse()
        .map_err(|e| Error::parse(TemporalKind::DateTime.name(), text, format!("seconds: {}", e)))?;
    let millis: u32 = millis
        .parse()
        .map_err(|e| Error::parse(TemporalKind::DateTime.name(), text, format!("millis: {}", e)))?;
    from_epoch_parts(seconds, millis, text)
}

fn from_epoch_parts(seconds: i64, millis: u32, input: &str) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(seconds, millis * 1_000_000)
        .and_then(|utc| {
            utc.naive_utc()
                .checked_add_signed(Duration::seconds(EPOCH_OFFSET_SECONDS))
        })
        .ok_or_else(|| {
            Error::parse(
                TemporalKind::DateTime.name(),
                input,
                "instant is outside the supported date range",
            )
        })
}
