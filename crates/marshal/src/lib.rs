//! Type-dispatching marshaller for strata-json
//!
//! Converts arbitrary values to UTF-8 byte sequences:
//! - absent values become empty bytes
//! - scalars and text become their unquoted text
//! - sequences and structured values become JSON
//!
//! The choice is made once per value by [`shape::classify`] and dispatched
//! with a single `match` in [`Marshaller::marshal`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod marshaller;
pub mod shape;
pub mod time_unit;

pub use marshaller::{Marshaller, EMPTY_BYTES};
pub use shape::{classify, Shape, TypeClass};
pub use strata_json_core::{Error, Result};
pub use time_unit::TimeUnit;
