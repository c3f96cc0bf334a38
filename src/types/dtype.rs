//! Data types for array elements

use crate::error::DecodeError;

/// Element type declared by the header's `descr` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F16,
    F32,
    F64,
    /// Fixed-width byte string of `n > 0` bytes (`|Sn`)
    Text(usize),
}

/// Registry of fixed-width numeric descriptors
const NUMERIC_DESCRS: [(&str, DType); 9] = [
    ("|u1", DType::U8),
    ("|i1", DType::I8),
    ("<u2", DType::U16),
    ("<i2", DType::I16),
    ("<u4", DType::U32),
    ("<i4", DType::I32),
    ("<f2", DType::F16),
    ("<f4", DType::F32),
    ("<f8", DType::F64),
];

const TEXT_PREFIX: &str = "|S";

impl DType {
    /// Size in bytes of a single element
    pub fn element_width(self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 | DType::F16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::F64 => 8,
            DType::Text(n) => n,
        }
    }

    /// Look up a `descr` string. Big-endian and native-order codes are rejected
    /// rather than guessed at.
    pub fn from_descr(descr: &str) -> Result<Self, DecodeError> {
        if let Some((_, dtype)) = NUMERIC_DESCRS.iter().find(|(d, _)| *d == descr) {
            return Ok(*dtype);
        }

        descr
            .strip_prefix(TEXT_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .map(DType::Text)
            .ok_or_else(|| DecodeError::UnsupportedDtype {
                descr: descr.to_string(),
            })
    }

    /// Canonical `descr` string for this type
    pub fn descr(self) -> String {
        match self {
            DType::Text(n) => format!("{TEXT_PREFIX}{n}"),
            numeric => NUMERIC_DESCRS
                .iter()
                .find(|(_, d)| *d == numeric)
                .map(|(descr, _)| (*descr).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, DType::Text(_))
    }
}
