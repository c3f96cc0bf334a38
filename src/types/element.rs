//! Decoded element values

use half::f16;
use std::fmt;

/// A single decoded array element
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    F16(f16),
    F32(f32),
    F64(f64),
    Text(String),
}

impl Element {
    /// Numeric value widened to f64, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::U8(v) => Some(f64::from(*v)),
            Element::I8(v) => Some(f64::from(*v)),
            Element::U16(v) => Some(f64::from(*v)),
            Element::I16(v) => Some(f64::from(*v)),
            Element::U32(v) => Some(f64::from(*v)),
            Element::I32(v) => Some(f64::from(*v)),
            Element::F16(v) => Some(v.to_f64()),
            Element::F32(v) => Some(f64::from(*v)),
            Element::F64(v) => Some(*v),
            Element::Text(_) => None,
        }
    }

    /// Integer value, `None` for floats and text
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::U8(v) => Some(i64::from(*v)),
            Element::I8(v) => Some(i64::from(*v)),
            Element::U16(v) => Some(i64::from(*v)),
            Element::I16(v) => Some(i64::from(*v)),
            Element::U32(v) => Some(i64::from(*v)),
            Element::I32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::U8(v) => write!(f, "{v}"),
            Element::I8(v) => write!(f, "{v}"),
            Element::U16(v) => write!(f, "{v}"),
            Element::I16(v) => write!(f, "{v}"),
            Element::U32(v) => write!(f, "{v}"),
            Element::I32(v) => write!(f, "{v}"),
            Element::F16(v) => write!(f, "{v}"),
            Element::F32(v) => write!(f, "{v}"),
            Element::F64(v) => write!(f, "{v}"),
            Element::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::Text(v.to_string())
    }
}

macro_rules! element_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(v: $ty) -> Self {
                    Element::$variant(v)
                }
            }
        )*
    };
}

element_from! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f16 => F16,
    f32 => F32,
    f64 => F64,
    String => Text,
}
