//! Core types for strata-json
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Error: Error type hierarchy shared by the codec and the marshaller
//! - DateMode: String vs. epoch date-time representation
//! - JsonConfig: Mapper configuration read once from a PropertySource

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

pub use config::{
    DateMode, JsonConfig, PropertySource, CONFIG_FILE_NAME, ENUM_PROPERTIES_KEY, EPOCH_DATE_KEY,
};
pub use error::{Error, Result};
