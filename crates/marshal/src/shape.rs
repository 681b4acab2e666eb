//! Top-level shape classification.
//!
//! [`classify`] drives a value's `Serialize` impl into a probe serializer
//! that looks only at the outermost shape. Scalars and text are rendered on
//! the spot; sequences and structured values are recognized without
//! visiting their contents.
//!
//! | serde data model | [`TypeClass`] |
//! |------------------|---------------|
//! | `none`, `unit` | `Absent` |
//! | bool, integers, floats, char | `Scalar` |
//! | string | `Text` |
//! | seq, tuple, bytes | `Sequence` |
//! | struct, map, tuple struct, enum variants, unit struct | `Structured` |
//!
//! `Some(x)` and newtype structs are transparent. Types that serialize as
//! strings (`BigDecimal`, chrono values) classify as `Text`.

use serde::ser::{self, Serialize, Serializer};
use std::fmt;
use strata_json_core::{Error, Result};

/// Closed classification of a value for marshalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// `None` or `()`
    Absent,
    /// Boolean, integer, floating point or character
    Scalar,
    /// Text
    Text,
    /// Sequence or collection
    Sequence,
    /// Any other structured value
    Structured,
}

/// A classified value, carrying its text rendering where one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Nothing to encode
    Absent,
    /// Display rendering of a scalar
    Scalar(String),
    /// The text itself
    Text(String),
    /// Needs the JSON encoder
    Sequence,
    /// Needs the JSON encoder
    Structured,
}

impl Shape {
    /// The classification without payload.
    pub fn type_class(&self) -> TypeClass {
        match self {
            Shape::Absent => TypeClass::Absent,
            Shape::Scalar(_) => TypeClass::Scalar,
            Shape::Text(_) => TypeClass::Text,
            Shape::Sequence => TypeClass::Sequence,
            Shape::Structured => TypeClass::Structured,
        }
    }
}

/// Classify `value` by its top-level shape.
pub fn classify<T: Serialize + ?Sized>(value: &T) -> Result<Shape> {
    value
        .serialize(Probe)
        .map_err(|e| Error::Encode(e.0))
}

#[derive(Debug)]
struct ProbeError(String);

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ProbeError {}

impl ser::Error for ProbeError {
    fn custom<M: fmt::Display>(msg: M) -> Self {
        ProbeError(msg.to_string())
    }
}

struct Probe;

fn scalar(v: impl fmt::Display) -> std::result::Result<Shape, ProbeError> {
    Ok(Shape::Scalar(v.to_string()))
}

impl Serializer for Probe {
    type Ok = Shape;
    type Error = ProbeError;
    type SerializeSeq = Compound;
    type SerializeTuple = Compound;
    type SerializeTupleStruct = Compound;
    type SerializeTupleVariant = Compound;
    type SerializeMap = Compound;
    type SerializeStruct = Compound;
    type SerializeStructVariant = Compound;

    fn serialize_bool(self, v: bool) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_i8(self, v: i8) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_i16(self, v: i16) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_i32(self, v: i32) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_i64(self, v: i64) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_i128(self, v: i128) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_u8(self, v: u8) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_u16(self, v: u16) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_u32(self, v: u32) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_u64(self, v: u64) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_u128(self, v: u128) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_f32(self, v: f32) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_f64(self, v: f64) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_char(self, v: char) -> std::result::Result<Shape, ProbeError> {
        scalar(v)
    }

    fn serialize_str(self, v: &str) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Text(v.to_owned()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Sequence)
    }

    fn serialize_none(self) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Absent)
    }

    fn serialize_some<T: ?Sized + Serialize>(
        self,
        value: &T,
    ) -> std::result::Result<Shape, ProbeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Absent)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Structured)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Structured)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> std::result::Result<Shape, ProbeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> std::result::Result<Shape, ProbeError> {
        Ok(Shape::Structured)
    }

    fn serialize_seq(self, _len: Option<usize>) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Sequence))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Structured))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Structured))
    }

    fn serialize_map(self, _len: Option<usize>) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Structured))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Structured))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Compound, ProbeError> {
        Ok(Compound(TypeClass::Structured))
    }
}

/// Accepts and ignores the contents of a compound value.
struct Compound(TypeClass);

impl Compound {
    fn finish(self) -> std::result::Result<Shape, ProbeError> {
        Ok(match self.0 {
            TypeClass::Sequence => Shape::Sequence,
            _ => Shape::Structured,
        })
    }
}

impl ser::SerializeSeq for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeTuple for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeMap for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_key<T: ?Sized + Serialize>(
        &mut self,
        _key: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(
        &mut self,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeStruct for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for Compound {
    type Ok = Shape;
    type Error = ProbeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> std::result::Result<(), ProbeError> {
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, ProbeError> {
        self.finish()
    }
}
