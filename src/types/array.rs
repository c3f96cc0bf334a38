//! Decoded and nested array types

use super::{DType, Element, Order};
use crate::error::DecodeError;

/// Owned result of decoding a buffer
///
/// `flat` holds the elements in buffer order; `order` says how that order
/// maps onto `shape`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedArray {
    pub dtype: DType,
    pub shape: Vec<usize>,
    pub order: Order,
    pub flat: Vec<Element>,
}

impl DecodedArray {
    /// Total number of elements
    pub fn num_elements(&self) -> usize {
        self.flat.len()
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Nested view honoring the declared shape and order
    pub fn nested(&self) -> Result<NestedArray<'_>, DecodeError> {
        crate::materialize::reshape(&self.flat, &self.shape, self.order)
    }

    /// Element at a logical multi-index, independent of memory order
    pub fn get(&self, index: &[usize]) -> Option<&Element> {
        let in_bounds = index.iter().zip(&self.shape).all(|(&i, &dim)| i < dim);
        if index.len() != self.shape.len() || !in_bounds {
            return None;
        }
        let strides = self.order.strides(&self.shape)?;
        let offset = index
            .iter()
            .zip(&strides)
            .try_fold(0usize, |acc, (&i, &stride)| acc.checked_add(i.checked_mul(stride)?))?;
        self.flat.get(offset)
    }
}

/// Nested view over a flat element slice (zero-copy leaves)
#[derive(Debug, Clone, PartialEq)]
pub enum NestedArray<'a> {
    /// A single element: the whole array for rank 0, or a leaf otherwise
    Element(&'a Element),
    /// One axis worth of sub-arrays
    Axis(Vec<NestedArray<'a>>),
}

impl<'a> NestedArray<'a> {
    /// Try to get as a single element
    pub fn as_element(&self) -> Option<&'a Element> {
        match self {
            NestedArray::Element(e) => Some(e),
            NestedArray::Axis(_) => None,
        }
    }

    /// Try to get the sub-arrays of the outermost axis
    pub fn as_axis(&self) -> Option<&[NestedArray<'a>]> {
        match self {
            NestedArray::Axis(items) => Some(items),
            NestedArray::Element(_) => None,
        }
    }

    /// Length of the outermost axis (0 for an element)
    pub fn len(&self) -> usize {
        self.as_axis().map_or(0, <[_]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sub-array along the outermost axis
    pub fn at(&self, i: usize) -> Option<&NestedArray<'a>> {
        self.as_axis()?.get(i)
    }

    /// Element at a full multi-index
    pub fn get(&self, index: &[usize]) -> Option<&'a Element> {
        let mut current = self;
        for &i in index {
            current = current.at(i)?;
        }
        current.as_element()
    }

    /// Shape recovered by following the first sub-array of every axis
    ///
    /// An empty axis ends the walk, so `(0, 3)` reports as `[0]`.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut current = self;
        while let NestedArray::Axis(items) = current {
            shape.push(items.len());
            match items.first() {
                Some(first) => current = first,
                None => break,
            }
        }
        shape
    }

    /// Leaves in depth-first (logical row-major) order
    pub fn leaves(&self) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<&'a Element>) {
        match self {
            NestedArray::Element(e) => out.push(e),
            NestedArray::Axis(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }
}
