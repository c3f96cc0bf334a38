//! ndarray integration for decoded arrays
//!
//! Converts a [`DecodedArray`] into an `ndarray::ArrayD`, keeping the
//! declared memory order so Fortran-ordered files index the same way numpy
//! would.
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{DType, DecodedArray, Element};
use half::f16;
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use thiserror::Error;

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdarrayError {
    /// Requested element type doesn't match the array's dtype
    #[error("DType mismatch: requested {requested}, array holds {}", .actual.descr())]
    DTypeMismatch {
        requested: &'static str,
        actual: DType,
    },
    /// Shape doesn't match the number of elements
    #[error("Shape {shape:?} doesn't match {len} elements")]
    ShapeMismatch { shape: Vec<usize>, len: usize },
}

/// Element types an array can be converted into
pub trait ArrayType: Sized + Clone + 'static {
    /// Whether arrays of `dtype` convert to this type
    fn accepts(dtype: DType) -> bool;

    fn from_element(element: &Element) -> Option<Self>;
}

macro_rules! numeric_array_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArrayType for $ty {
                fn accepts(dtype: DType) -> bool {
                    dtype == DType::$variant
                }

                fn from_element(element: &Element) -> Option<Self> {
                    match element {
                        Element::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

numeric_array_type! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f16 => F16,
    f32 => F32,
    f64 => F64,
}

impl ArrayType for String {
    fn accepts(dtype: DType) -> bool {
        dtype.is_text()
    }

    fn from_element(element: &Element) -> Option<Self> {
        element.as_str().map(str::to_string)
    }
}

impl DecodedArray {
    /// Convert to an ndarray ArrayD, honoring the declared memory order
    pub fn to_ndarray<T: ArrayType>(&self) -> Result<ArrayD<T>, NdarrayError> {
        let mismatch = || NdarrayError::DTypeMismatch {
            requested: std::any::type_name::<T>(),
            actual: self.dtype,
        };
        if !T::accepts(self.dtype) {
            return Err(mismatch());
        }

        let elements = self
            .flat
            .iter()
            .map(|e| T::from_element(e).ok_or_else(mismatch))
            .collect::<Result<Vec<T>, _>>()?;

        let shape = IxDyn(&self.shape).set_f(self.order.is_fortran());
        ArrayD::from_shape_vec(shape, elements).map_err(|_| NdarrayError::ShapeMismatch {
            shape: self.shape.clone(),
            len: self.flat.len(),
        })
    }
}
