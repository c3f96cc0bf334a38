//! Header constants and the parsed header descriptor

use super::DType;

/// Magic bytes identifying an .npy file
pub const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// The only format version understood: (major, minor)
pub const SUPPORTED_VERSION: (u8, u8) = (1, 0);

/// Preamble size in bytes (magic + version + header length)
pub const PREAMBLE_SIZE: usize = 10;

/// Memory layout of the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Row-major (C): the last axis varies fastest
    #[default]
    RowMajor,
    /// Column-major (Fortran): the first axis varies fastest
    ColumnMajor,
}

impl Order {
    pub fn from_fortran_flag(fortran_order: bool) -> Self {
        if fortran_order {
            Order::ColumnMajor
        } else {
            Order::RowMajor
        }
    }

    pub fn is_fortran(self) -> bool {
        self == Order::ColumnMajor
    }

    /// Per-axis strides, in elements, for a contiguous array of `shape`
    ///
    /// `None` when a stride does not fit in `usize`, which can only happen
    /// for shapes with a zero extent.
    pub fn strides(self, shape: &[usize]) -> Option<Vec<usize>> {
        let mut strides = vec![1usize; shape.len()];
        match self {
            Order::RowMajor => {
                for axis in (0..shape.len().saturating_sub(1)).rev() {
                    strides[axis] = strides[axis + 1].checked_mul(shape[axis + 1])?;
                }
            }
            Order::ColumnMajor => {
                for axis in 1..shape.len() {
                    strides[axis] = strides[axis - 1].checked_mul(shape[axis - 1])?;
                }
            }
        }
        Some(strides)
    }
}

/// Parsed header dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDescriptor {
    pub shape: Vec<usize>,
    pub dtype: DType,
    pub order: Order,
}

impl HeaderDescriptor {
    /// Total number of elements (1 for a scalar)
    pub fn element_count(&self) -> usize {
        element_count(&self.shape)
    }

    /// Bytes the payload must hold, saturating at `usize::MAX`
    pub fn payload_size(&self) -> usize {
        self.element_count()
            .saturating_mul(self.dtype.element_width())
    }
}

/// Product of the shape, with the empty product being 1.
///
/// Any zero extent makes the count 0 regardless of the other extents.
/// Saturates at `usize::MAX`; see [`checked_element_count`].
pub fn element_count(shape: &[usize]) -> usize {
    checked_element_count(shape).unwrap_or(usize::MAX)
}

/// Like [`element_count`], but `None` when the product overflows
pub fn checked_element_count(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}
