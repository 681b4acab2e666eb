//! Codec Round-trip Tests
//!
//! Property tests for date-time round trips in both modes, plus the fixed
//! date examples.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use strata_json::{parse_date_lenient, DateTimeCodec, Error, EPOCH_OFFSET_SECONDS};
use tracing_test::traced_test;

/// Seconds since the epoch up to year 9999
const MAX_SECONDS: i64 = 253_402_300_799;

fn naive_from(seconds: i64, nanos: u32) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, nanos).unwrap().naive_utc()
}

proptest! {
    #[test]
    fn string_mode_roundtrip_at_second_precision(seconds in -62_135_596_800i64..MAX_SECONDS) {
        let codec = DateTimeCodec::string();
        let value = naive_from(seconds, 0);
        let text = codec.encode_date_time(&value).unwrap();
        prop_assert_eq!(codec.decode_date_time(&text).unwrap(), value);
    }

    #[test]
    fn string_mode_drops_sub_second(seconds in 0i64..MAX_SECONDS, nanos in 0u32..1_000_000_000) {
        let codec = DateTimeCodec::string();
        let value = naive_from(seconds, nanos);
        let decoded = codec
            .decode_date_time(&codec.encode_date_time(&value).unwrap())
            .unwrap();
        prop_assert_eq!(decoded, value.with_nanosecond(0).unwrap());
    }

    #[test]
    fn epoch_mode_roundtrip_at_milli_precision(
        seconds in (EPOCH_OFFSET_SECONDS + 1)..MAX_SECONDS,
        millis in 0u32..1_000,
    ) {
        let codec = DateTimeCodec::epoch();
        let value = naive_from(seconds, millis * 1_000_000);
        let text = codec.encode_date_time(&value).unwrap();
        prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(codec.decode_date_time(&text).unwrap(), value);
        prop_assert_eq!(
            codec.encode_epoch_millis(&value).unwrap().to_string(),
            text
        );
    }

    #[test]
    fn date_roundtrip(days in 0i64..2_900_000) {
        let codec = DateTimeCodec::string();
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
        prop_assert_eq!(codec.decode_date(&codec.encode_date(&date)).unwrap(), date);
    }
}

#[test]
fn decode_iso_date() {
    let date = DateTimeCodec::string().decode_date("2019-12-21").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2019, 12, 21).unwrap());
}

#[test]
#[traced_test]
fn non_iso_date_is_error_or_absent() {
    let result = DateTimeCodec::epoch().decode_date("21-12-2019");
    assert!(matches!(result, Err(Error::Parse { kind: "date", .. })));

    assert_eq!(parse_date_lenient("21-12-2019"), None);
    assert!(logs_contain("21-12-2019"));
}

#[test]
fn epoch_offset_is_applied_both_ways() {
    let codec = DateTimeCodec::epoch();
    // midnight at UTC+8 is 16:00 the previous day in UTC
    let local = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let millis = codec.encode_epoch_millis(&local).unwrap();
    assert_eq!(millis, 1_577_808_000_000);
    assert_eq!(codec.decode_date_time("1577808000000").unwrap(), local);
}
