//! Marshaller Invariant Tests
//!
//! Dispatch by shape, absent handling, and bulk cardinality/order.

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use std::str::FromStr;
use strata_json::{classify, marshal_all, JsonMapper, Marshaller, TimeUnit, TypeClass};

use crate::common::*;

// ============================================================================
// Scalars and text
// ============================================================================

#[test]
fn integer_marshals_to_decimal_text() {
    let m = Marshaller::default();
    assert_eq!(m.marshal(&42).unwrap(), b"42");
    assert_eq!(m.marshal_i32(42), b"42");
    assert_eq!(m.marshal_i64(42), b"42");
}

#[test]
fn decimal_keeps_canonical_scale() {
    let m = Marshaller::default();
    let value = BigDecimal::from_str("3.50").unwrap();
    assert_eq!(m.marshal(&value).unwrap(), b"3.50");
    assert_eq!(m.marshal_decimal(&value), b"3.50");
}

#[test]
fn absent_marshals_to_empty() {
    let m = Marshaller::default();
    assert_eq!(m.marshal(&None::<DateObj>).unwrap(), Vec::<u8>::new());
    assert_eq!(classify(&None::<i32>).unwrap().type_class(), TypeClass::Absent);
}

#[test]
fn duration_is_whole_seconds() {
    let m = Marshaller::default();
    assert_eq!(m.marshal_duration(1, TimeUnit::Days), b"86400");
    assert_eq!(m.marshal_duration(2_500, TimeUnit::Milliseconds), b"2");
}

// ============================================================================
// Structured values
// ============================================================================

#[test]
fn structured_value_matches_mapper_output() {
    let mapper = JsonMapper::epoch_based();
    let m = Marshaller::new(mapper.clone());
    let order = sample_order();
    assert_eq!(m.marshal(&order).unwrap(), mapper.to_bytes(&order).unwrap());
    assert_eq!(classify(&order).unwrap().type_class(), TypeClass::Structured);
}

// ============================================================================
// Bulk
// ============================================================================

proptest! {
    #[test]
    fn bulk_matches_elementwise(values in proptest::collection::vec(any::<Option<i64>>(), 0..32)) {
        let m = Marshaller::default();
        let bulk = m.marshal_list(&values).unwrap();
        prop_assert_eq!(bulk.len(), values.len());
        for (bytes, value) in bulk.iter().zip(values.iter()) {
            prop_assert_eq!(bytes, &m.marshal(value).unwrap());
        }
    }

    #[test]
    fn scalar_marshal_is_display(v in any::<i64>(), f in any::<f64>(), c in any::<char>()) {
        let m = Marshaller::default();
        prop_assert_eq!(m.marshal(&v).unwrap(), v.to_string().into_bytes());
        prop_assert_eq!(m.marshal(&f).unwrap(), f.to_string().into_bytes());
        prop_assert_eq!(m.marshal(&c).unwrap(), c.to_string().into_bytes());
    }
}

#[test]
fn heterogeneous_bulk_keeps_order() {
    let m = Marshaller::default();
    let out = marshal_all!(m; "key", 1.5f64, vec!["a"], None::<i32>, 'c').unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[0], b"key");
    assert_eq!(out[1], b"1.5");
    assert_eq!(out[2], br#"["a"]"#);
    assert!(out[3].is_empty());
    assert_eq!(out[4], b"c");
}
