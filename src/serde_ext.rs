//! serde integration for decoded values
//!
//! Nested arrays serialize as nested sequences, the shape consumers expect
//! from a `tolist()` call. Half floats are widened to f32.
//!
//! Enable with the `serde` feature flag.

use crate::types::{Element, NestedArray};
use serde::ser::{Serialize, SerializeSeq, Serializer};

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Element::U8(v) => serializer.serialize_u8(*v),
            Element::I8(v) => serializer.serialize_i8(*v),
            Element::U16(v) => serializer.serialize_u16(*v),
            Element::I16(v) => serializer.serialize_i16(*v),
            Element::U32(v) => serializer.serialize_u32(*v),
            Element::I32(v) => serializer.serialize_i32(*v),
            Element::F16(v) => serializer.serialize_f32(v.to_f32()),
            Element::F32(v) => serializer.serialize_f32(*v),
            Element::F64(v) => serializer.serialize_f64(*v),
            Element::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for NestedArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NestedArray::Element(e) => e.serialize(serializer),
            NestedArray::Axis(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}
