//! Element codecs: byte width plus a decode rule per dtype
//!
//! Numeric codecs are little-endian only. Text codecs decode each fixed-width
//! chunk as UTF-8 (lossily, so a multi-byte sequence cut at the chunk boundary
//! becomes U+FFFD) and drop every NUL.

use crate::error::Result;
use crate::types::{DType, Element};
use half::f16;

/// Decoder for one element type
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    dtype: DType,
    element_width: usize,
    decode: fn(&[u8]) -> Element,
}

impl Codec {
    /// Codec for an already validated dtype
    pub fn for_dtype(dtype: DType) -> Self {
        let decode: fn(&[u8]) -> Element = match dtype {
            DType::U8 => |b| Element::U8(b[0]),
            DType::I8 => |b| Element::I8(i8::from_le_bytes([b[0]])),
            DType::U16 => |b| Element::U16(u16::from_le_bytes([b[0], b[1]])),
            DType::I16 => |b| Element::I16(i16::from_le_bytes([b[0], b[1]])),
            DType::U32 => |b| Element::U32(u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            DType::I32 => |b| Element::I32(i32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            DType::F16 => |b| Element::F16(f16::from_le_bytes([b[0], b[1]])),
            DType::F32 => |b| Element::F32(f32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            DType::F64 => |b| {
                Element::F64(f64::from_le_bytes([
                    b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
                ]))
            },
            DType::Text(_) => decode_text,
        };
        Self {
            dtype,
            element_width: dtype.element_width(),
            decode,
        }
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn element_width(&self) -> usize {
        self.element_width
    }

    /// Decode the element starting at `bytes[0]`.
    ///
    /// Bytes past `element_width` are ignored; `None` if fewer are given.
    pub fn decode_one(&self, bytes: &[u8]) -> Option<Element> {
        bytes.get(..self.element_width).map(self.decode)
    }
}

fn decode_text(bytes: &[u8]) -> Element {
    let text = String::from_utf8_lossy(bytes);
    Element::Text(text.chars().filter(|&c| c != '\0').collect())
}

/// Resolve a `descr` string to its codec
pub fn resolve_codec(descr: &str) -> Result<Codec> {
    DType::from_descr(descr).map(Codec::for_dtype)
}
