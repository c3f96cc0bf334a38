//! .npy header parsing and whole-buffer decoding
//!
//! The header is a Python dictionary literal. It is tokenized and parsed by a
//! small literal-only grammar, never evaluated.

mod dict;
mod header;
mod lexer;

use crate::codec::Codec;
use crate::error::{DecodeError, Result};
use crate::materialize::materialize;
use crate::types::{DecodedArray, HeaderDescriptor, MAGIC, PREAMBLE_SIZE, SUPPORTED_VERSION};

/// Parse the preamble and header dictionary.
///
/// Returns the descriptor and the offset where the payload starts, always
/// `10 + header_len`.
pub fn parse_header(bytes: &[u8]) -> Result<(HeaderDescriptor, usize)> {
    if bytes.len() < MAGIC.len() || &bytes[..MAGIC.len()] != MAGIC {
        return Err(DecodeError::InvalidMagic);
    }

    if bytes.len() < PREAMBLE_SIZE {
        return Err(DecodeError::syntax("truncated preamble", bytes.len()));
    }

    let (major, minor) = (bytes[6], bytes[7]);
    if (major, minor) != SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion { major, minor });
    }

    let header_len = usize::from(u16::from_le_bytes([bytes[8], bytes[9]]));
    let payload_offset = PREAMBLE_SIZE + header_len;
    let text = bytes.get(PREAMBLE_SIZE..payload_offset).ok_or_else(|| {
        DecodeError::syntax(
            format!("header declares {header_len} bytes, buffer has {}", bytes.len() - PREAMBLE_SIZE),
            bytes.len(),
        )
    })?;

    let entries = dict::parse_dict(text, PREAMBLE_SIZE)?;
    let descriptor = header::descriptor_from_entries(entries)?;

    tracing::debug!(
        shape = ?descriptor.shape,
        dtype = ?descriptor.dtype,
        order = ?descriptor.order,
        payload_offset,
        "parsed npy header"
    );

    Ok((descriptor, payload_offset))
}

/// Decode a complete .npy buffer into a flat, shaped array
///
/// The buffer is only borrowed for the call; the result owns its elements.
pub fn decode(bytes: &[u8]) -> Result<DecodedArray> {
    let (descriptor, payload_offset) = parse_header(bytes)?;
    let codec = Codec::for_dtype(descriptor.dtype);
    materialize(&bytes[payload_offset..], &descriptor, &codec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::npy_bytes;
    use crate::types::{DType, Element, Order};

    #[test]
    fn test_parse_header_offset() {
        let bytes = npy_bytes("<f4", false, "(3,)", &[0u8; 12]);
        let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
        let (descriptor, offset) = parse_header(&bytes).unwrap();
        assert_eq!(offset, 10 + header_len);
        assert_eq!(descriptor.shape, vec![3]);
        assert_eq!(descriptor.dtype, DType::F32);
    }

    #[test]
    fn test_decode_matrix() {
        let payload: Vec<u8> = (1..=6i32).flat_map(|i| i.to_le_bytes()).collect();
        let bytes = npy_bytes("<i4", false, "(2, 3)", &payload);
        let arr = decode(&bytes).unwrap();
        assert_eq!(arr.order, Order::RowMajor);
        assert_eq!(arr.get(&[1, 2]), Some(&Element::I32(6)));
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = npy_bytes("|u1", false, "(1,)", &[7]);
        bytes[0] = b'X';
        assert_eq!(parse_header(&bytes).unwrap_err(), DecodeError::InvalidMagic);
        assert_eq!(parse_header(b"\x93NUM").unwrap_err(), DecodeError::InvalidMagic);
        assert_eq!(parse_header(b"").unwrap_err(), DecodeError::InvalidMagic);
    }

    #[test]
    fn test_unsupported_version() {
        let mut bytes = npy_bytes("|u1", false, "(1,)", &[7]);
        bytes[6] = 2;
        assert_eq!(
            parse_header(&bytes).unwrap_err(),
            DecodeError::UnsupportedVersion { major: 2, minor: 0 }
        );
    }

    #[test]
    fn test_truncated_preamble_and_header() {
        assert!(matches!(
            parse_header(b"\x93NUMPY\x01\x00\x10").unwrap_err(),
            DecodeError::HeaderSyntax { position: 9, .. }
        ));

        let bytes = npy_bytes("|u1", false, "(1,)", &[]);
        assert!(matches!(
            parse_header(&bytes[..30]).unwrap_err(),
            DecodeError::HeaderSyntax { position: 30, .. }
        ));
    }

    #[test]
    fn test_error_positions_are_absolute() {
        let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
        let text = b"{'descr' '<f4'}";
        bytes.extend_from_slice(&(text.len() as u16).to_le_bytes());
        bytes.extend_from_slice(text);
        assert!(matches!(
            parse_header(&bytes).unwrap_err(),
            DecodeError::HeaderSyntax { position: 19, .. }
        ));
    }
}
