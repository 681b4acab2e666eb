//! Value-to-bytes marshalling.
//!
//! Scalars and text take the fast path: their text rendering, unquoted, as
//! UTF-8. Everything else is JSON-encoded by the marshaller's
//! [`JsonMapper`]. Absent values marshal to empty bytes.
//!
//! | Input | Bytes |
//! |-------|-------|
//! | `None`, `()` | `b""` |
//! | `42` | `b"42"` |
//! | `"abc"` | `b"abc"` |
//! | `BigDecimal 3.50` | `b"3.50"` |
//! | `vec![1, 2]` | `b"[1,2]"` |
//! | `Point { x: 1 }` | `b"{\"x\":1}"` |

use crate::shape::{classify, Shape};
use crate::time_unit::TimeUnit;
use bigdecimal::BigDecimal;
use serde::Serialize;
use strata_json_codec::{with_codec, JsonMapper};
use strata_json_core::Result;
use tracing::debug;

/// Shared empty byte value.
pub const EMPTY_BYTES: &[u8] = &[];

/// Converts values to UTF-8 byte sequences, e.g. for cache keys and values.
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    mapper: JsonMapper,
}

impl Marshaller {
    /// Marshaller falling back to `mapper` for structured values.
    pub fn new(mapper: JsonMapper) -> Self {
        Self { mapper }
    }

    /// The JSON mapper used for sequences and structured values.
    pub fn mapper(&self) -> &JsonMapper {
        &self.mapper
    }

    /// Marshal any serializable value, choosing the encoding by its shape.
    pub fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let shape = with_codec(self.mapper.codec(), || classify(value))?;
        let class = shape.type_class();
        match shape {
            Shape::Absent => Ok(Vec::new()),
            Shape::Scalar(text) | Shape::Text(text) => Ok(text.into_bytes()),
            Shape::Sequence | Shape::Structured => {
                debug!(
                    target: "strata_json::marshal",
                    class = ?class,
                    "Falling back to JSON encoding"
                );
                self.mapper.to_bytes(value)
            }
        }
    }

    /// UTF-8 bytes of `value`.
    pub fn marshal_str(&self, value: &str) -> Vec<u8> {
        value.as_bytes().to_vec()
    }

    /// Decimal text of `value`.
    pub fn marshal_i64(&self, value: i64) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    /// Decimal text of `value`.
    pub fn marshal_i32(&self, value: i32) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    /// Display text of `value`.
    pub fn marshal_f64(&self, value: f64) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    /// Display text of `value`, scale preserved (`3.50` stays `3.50`).
    pub fn marshal_decimal(&self, value: &BigDecimal) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    /// Whole seconds of `amount` `unit`s, as decimal text.
    pub fn marshal_duration(&self, amount: i64, unit: TimeUnit) -> Vec<u8> {
        self.marshal_i64(unit.to_seconds(amount))
    }

    /// Marshal each element, keeping order: `output.len() == values.len()`.
    pub fn marshal_list<T: Serialize>(&self, values: &[T]) -> Result<Vec<Vec<u8>>> {
        values.iter().map(|value| self.marshal(value)).collect()
    }
}

/// Marshal a heterogeneous list of values, keeping order.
///
/// ```ignore
/// let parts = marshal_all!(marshaller; "user", 42, Some(1.5))?;
/// assert_eq!(parts.len(), 3);
/// ```
#[macro_export]
macro_rules! marshal_all {
    ($marshaller:expr; $($value:expr),* $(,)?) => {{
        let marshaller: &$crate::Marshaller = &$marshaller;
        let results: ::std::vec::Vec<$crate::Result<::std::vec::Vec<u8>>> =
            ::std::vec![$(marshaller.marshal(&$value)),*];
        results
            .into_iter()
            .collect::<$crate::Result<::std::vec::Vec<::std::vec::Vec<u8>>>>()
    }};
}
