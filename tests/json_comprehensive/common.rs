//! Common test utilities

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The date-time used by the end-to-end scenarios: 2019-12-21 19:15:34
pub fn sample_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 12, 21)
        .unwrap()
        .and_hms_opt(19, 15, 34)
        .unwrap()
}

/// A struct carrying a single annotated date-time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateObj {
    #[serde(with = "strata_json::fields::datetime")]
    pub datetime: NaiveDateTime,
}

/// A struct mixing every temporal adapter with plain fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub item: String,
    #[serde(with = "strata_json::fields::date")]
    pub placed_on: chrono::NaiveDate,
    #[serde(with = "strata_json::fields::time")]
    pub cutoff: chrono::NaiveTime,
    #[serde(with = "strata_json::fields::datetime::option", default)]
    pub shipped_at: Option<NaiveDateTime>,
}

pub fn sample_order() -> Order {
    Order {
        id: 7,
        item: "widget".into(),
        placed_on: NaiveDate::from_ymd_opt(2019, 12, 21).unwrap(),
        cutoff: chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        shipped_at: Some(sample_datetime()),
    }
}
