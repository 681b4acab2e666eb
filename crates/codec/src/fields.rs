//! serde field adapters for chrono values.
//!
//! Use with `#[serde(with = "...")]`:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Order {
//!     #[serde(with = "strata_json_codec::fields::datetime")]
//!     created: NaiveDateTime,
//!     #[serde(with = "strata_json_codec::fields::date::option")]
//!     shipped: Option<NaiveDate>,
//! }
//! ```
//!
//! | Adapter | String mode | Epoch mode |
//! |---------|-------------|------------|
//! | `date` | `"2019-12-21"` | `"2019-12-21"` |
//! | `datetime` | `"2019-12-21 19:15:34"` | `1576926934000` |
//! | `time` | `"19:15:34"` | `"19:15:34"` |
//!
//! The mode comes from the mapper performing the call (see [`crate::scope`]).
//! In epoch mode `datetime` also accepts the digit string form on input.

use crate::date_time::DateTimeCodec;
use crate::scope::active_codec;
use serde::de::{self, Unexpected, Visitor};
use serde::{ser, Deserializer, Serializer};
use std::fmt;
use strata_json_core::DateMode;

/// `yyyy-MM-dd` dates.
pub mod date {
    use super::*;
    use chrono::NaiveDate;

    /// Serialize a date as `yyyy-MM-dd`.
    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&active_codec().encode_date(value))
    }

    /// Deserialize a `yyyy-MM-dd` date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateVisitor(DateTimeCodec);

        impl<'de> Visitor<'de> for DateVisitor {
            type Value = NaiveDate;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a date formatted as yyyy-MM-dd")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NaiveDate, E> {
                self.0.decode_date(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor(active_codec()))
    }

    /// `Option<NaiveDate>`, `null` when absent.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        struct Wrapped(#[serde(with = "crate::fields::date")] NaiveDate);

        /// Serialize an optional date.
        pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.map(Wrapped).serialize(serializer)
        }

        /// Deserialize an optional date.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
        }
    }
}

/// `HH:mm:ss` times of day.
pub mod time {
    use super::*;
    use chrono::NaiveTime;

    /// Serialize a time as `HH:mm:ss`.
    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&active_codec().encode_time(value))
    }

    /// Deserialize a `HH:mm:ss` time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeVisitor(DateTimeCodec);

        impl<'de> Visitor<'de> for TimeVisitor {
            type Value = NaiveTime;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a time formatted as HH:mm:ss")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NaiveTime, E> {
                self.0.decode_time(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor(active_codec()))
    }

    /// `Option<NaiveTime>`, `null` when absent.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        struct Wrapped(#[serde(with = "crate::fields::time")] NaiveTime);

        /// Serialize an optional time.
        pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.map(Wrapped).serialize(serializer)
        }

        /// Deserialize an optional time.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
        }
    }
}

/// Date-times in the active mode.
pub mod datetime {
    use super::*;
    use chrono::NaiveDateTime;

    /// Serialize a date-time: a `yyyy-MM-dd HH:mm:ss` string in string mode,
    /// epoch milliseconds in epoch mode.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let codec = active_codec();
        match codec.mode() {
            DateMode::String => {
                let text = codec.encode_date_time(value).map_err(ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            DateMode::Epoch => {
                let millis = codec
                    .encode_epoch_millis(value)
                    .map_err(ser::Error::custom)?;
                serializer.serialize_i64(millis)
            }
        }
    }

    /// Deserialize a date-time written in the active mode.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateTimeVisitor(DateTimeCodec);

        impl<'de> Visitor<'de> for DateTimeVisitor {
            type Value = NaiveDateTime;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.0.mode() {
                    DateMode::String => f.write_str("a date-time formatted as yyyy-MM-dd HH:mm:ss"),
                    DateMode::Epoch => f.write_str("epoch milliseconds as a number or digit string"),
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NaiveDateTime, E> {
                self.0.decode_date_time(v).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NaiveDateTime, E> {
                match self.0.mode() {
                    DateMode::Epoch => self.0.decode_epoch_millis(v).map_err(E::custom),
                    DateMode::String => Err(E::invalid_type(Unexpected::Signed(v), &self)),
                }
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NaiveDateTime, E> {
                match (self.0.mode(), i64::try_from(v)) {
                    (DateMode::Epoch, Ok(millis)) => {
                        self.0.decode_epoch_millis(millis).map_err(E::custom)
                    }
                    _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(DateTimeVisitor(active_codec()))
    }

    /// `Option<NaiveDateTime>`, `null` when absent.
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        struct Wrapped(#[serde(with = "crate::fields::datetime")] NaiveDateTime);

        /// Serialize an optional date-time.
        pub fn serialize<S>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.map(Wrapped).serialize(serializer)
        }

        /// Deserialize an optional date-time.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
        }
    }
}
