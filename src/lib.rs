//! npyload - Decoder for .npy array files
//!
//! Turns a buffer holding a NumPy `.npy` file (format version 1.0) into a typed,
//! shaped array. The header dictionary is parsed with a literal-only grammar,
//! elements are decoded through a fixed codec table, and a reshape pass builds
//! a nested view that honors C or Fortran order.
//!
//! # Supported dtypes
//!
//! `|u1`, `|i1`, `<u2`, `<i2`, `<u4`, `<i4`, `<f2`, `<f4`, `<f8` and
//! fixed-width byte strings `|Sn`. Anything else is rejected with
//! [`DecodeError::UnsupportedDtype`].
//!
//! # Example
//!
//! ```rust
//! use npyload::{Element, decode};
//!
//! let header = b"{'descr': '<i4', 'fortran_order': False, 'shape': (2, 3), }\n";
//! let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
//! bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
//! bytes.extend_from_slice(header);
//! for v in 1..=6i32 {
//!     bytes.extend_from_slice(&v.to_le_bytes());
//! }
//!
//! let array = decode(&bytes).unwrap();
//! let nested = array.nested().unwrap();
//! assert_eq!(nested.shape(), vec![2, 3]);
//! assert_eq!(nested.get(&[1, 0]), Some(&Element::I32(4)));
//! ```

pub mod codec;
pub mod error;
pub mod materialize;
pub mod parser;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

#[cfg(feature = "serde")]
pub mod serde_ext;

// Re-export common types at crate root
pub use codec::{Codec, resolve_codec};
pub use error::DecodeError;
pub use materialize::{flatten, materialize, reshape};
pub use parser::{decode, parse_header};
pub use types::{
    DType, DecodedArray, Element, HeaderDescriptor, MAGIC, NestedArray, Order, PREAMBLE_SIZE,
    SUPPORTED_VERSION, checked_element_count, element_count,
};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{ArrayType, NdarrayError};

#[cfg(test)]
pub(crate) mod test_support {
    /// Build a version 1.0 .npy buffer the way numpy pads it
    pub fn npy_bytes(descr: &str, fortran_order: bool, shape: &str, payload: &[u8]) -> Vec<u8> {
        let flag = if fortran_order { "True" } else { "False" };
        let mut header =
            format!("{{'descr': '{descr}', 'fortran_order': {flag}, 'shape': {shape}, }}");
        let unpadded = crate::PREAMBLE_SIZE + header.len() + 1;
        header.push_str(&" ".repeat((64 - unpadded % 64) % 64));
        header.push('\n');

        let mut bytes = crate::MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }
}
