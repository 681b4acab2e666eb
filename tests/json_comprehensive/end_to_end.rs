//! End-to-end Tests
//!
//! Encode annotated structs with a mapper, decode them back, and check the
//! date-time survives in the expected representation.

use crate::common::*;
use strata_json::{DateTimeCodec, JsonConfig, JsonMapper, DATE_TIME_PATTERN};

// ============================================================================
// String mode
// ============================================================================

#[test]
fn datetime_survives_json_roundtrip_in_string_mode() {
    let mapper = JsonMapper::string_based();

    let json = mapper
        .to_json(&DateObj {
            datetime: sample_datetime(),
        })
        .unwrap();
    let parsed: DateObj = mapper.to_object(&json).unwrap().unwrap();

    let formatted = parsed.datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    assert_eq!(formatted, "2019-12-21 19:15:34");
    assert_eq!(
        DateTimeCodec::string()
            .encode_date_time(&parsed.datetime)
            .unwrap(),
        "2019-12-21 19:15:34"
    );
    assert_eq!(DATE_TIME_PATTERN, "yyyy-MM-dd HH:mm:ss");
}

#[test]
fn order_json_shape_in_string_mode() {
    let mapper = JsonMapper::default();
    let value = mapper.to_value(&sample_order()).unwrap();

    assert_eq!(value["placed_on"], "2019-12-21");
    assert_eq!(value["cutoff"], "18:00:00");
    assert_eq!(value["shipped_at"], "2019-12-21 19:15:34");
}

// ============================================================================
// Epoch mode
// ============================================================================

#[test]
fn order_roundtrip_in_epoch_mode() {
    let mapper = JsonMapper::new(JsonConfig::from_toml_str("[json]\nepoch_date = true").unwrap());

    let bytes = mapper.to_bytes(&sample_order()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["shipped_at"], 1_576_926_934_000_i64);
    assert_eq!(value["placed_on"], "2019-12-21");
    assert_eq!(value["cutoff"], "18:00:00");

    let parsed: Order = mapper.from_slice(&bytes).unwrap();
    assert_eq!(parsed, sample_order());
}

#[test]
fn absent_optional_datetime_is_null() {
    let mapper = JsonMapper::epoch_based();
    let mut order = sample_order();
    order.shipped_at = None;

    let json = mapper.to_json(&order).unwrap();
    assert!(json.contains("\"shipped_at\":null"));
    let parsed: Order = mapper.to_object(&json).unwrap().unwrap();
    assert_eq!(parsed.shipped_at, None);
}

#[test]
fn lists_and_maps_of_annotated_structs() {
    let mapper = JsonMapper::epoch_based();
    let orders = vec![sample_order(), sample_order()];
    let json = mapper.to_json(&orders).unwrap();

    let parsed: Vec<Order> = mapper.to_list(&json).unwrap();
    assert_eq!(parsed, orders);

    let map_json = format!("{{\"first\":{}}}", mapper.to_json(&orders[0]).unwrap());
    let map = mapper.to_map::<Order>(&map_json).unwrap();
    assert_eq!(map["first"], orders[0]);
}

#[test]
fn mappers_run_concurrently_with_different_modes() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mapper = if i % 2 == 0 {
                    JsonMapper::string_based()
                } else {
                    JsonMapper::epoch_based()
                };
                let json = mapper
                    .to_json(&DateObj {
                        datetime: sample_datetime(),
                    })
                    .unwrap();
                (i, json)
            })
        })
        .collect();

    for handle in handles {
        let (i, json) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(json, r#"{"datetime":"2019-12-21 19:15:34"}"#);
        } else {
            assert_eq!(json, r#"{"datetime":1576926934000}"#);
        }
    }
}
