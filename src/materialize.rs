//! Flat decoding of the payload and shape-driven reshaping

use crate::codec::Codec;
use crate::error::{DecodeError, Result};
use crate::types::{
    DecodedArray, Element, HeaderDescriptor, NestedArray, Order, checked_element_count,
};

/// Most sub-arrays [`reshape`] builds for an array without elements
pub const MAX_EMPTY_VIEW_AXES: usize = 1 << 16;

/// Decode `payload` into a flat array in buffer order.
///
/// Bytes past the declared size are ignored; a short payload is an error and
/// nothing is decoded.
pub fn materialize(
    payload: &[u8],
    descriptor: &HeaderDescriptor,
    codec: &Codec,
) -> Result<DecodedArray> {
    let width = codec.element_width();
    if width == 0 {
        return Err(DecodeError::UnsupportedDtype {
            descr: codec.dtype().descr(),
        });
    }
    let expected = checked_element_count(&descriptor.shape)
        .and_then(|count| count.checked_mul(width))
        .ok_or(DecodeError::TruncatedBuffer {
            expected: usize::MAX,
            actual: payload.len(),
        })?;

    if payload.len() < expected {
        return Err(DecodeError::TruncatedBuffer {
            expected,
            actual: payload.len(),
        });
    }

    let flat = payload[..expected]
        .chunks_exact(width)
        .map(|chunk| codec.decode_one(chunk))
        .collect::<Option<Vec<Element>>>()
        .ok_or(DecodeError::TruncatedBuffer {
            expected,
            actual: payload.len(),
        })?;

    tracing::debug!(
        elements = flat.len(),
        width,
        trailing = payload.len() - expected,
        "materialized payload"
    );

    Ok(DecodedArray {
        dtype: codec.dtype(),
        shape: descriptor.shape.clone(),
        order: descriptor.order,
        flat,
    })
}

/// Build a nested view of `flat` with the given shape.
///
/// Leaves borrow from `flat`; `order` decides which flat position lands at each
/// logical index. Rank 0 yields the single element unwrapped.
///
/// An array without elements still gets one sub-array per index of the axes
/// before its first zero extent; more than [`MAX_EMPTY_VIEW_AXES`] of those is
/// refused with [`DecodeError::ViewTooLarge`].
pub fn reshape<'a>(flat: &'a [Element], shape: &[usize], order: Order) -> Result<NestedArray<'a>> {
    let expected = checked_element_count(shape).unwrap_or(usize::MAX);
    if flat.len() != expected {
        return Err(DecodeError::ShapeMismatch {
            expected,
            actual: flat.len(),
        });
    }

    tracing::trace!(?shape, ?order, "reshaping");
    if flat.is_empty() {
        let sub_arrays = axis_count(shape);
        if sub_arrays > MAX_EMPTY_VIEW_AXES {
            return Err(DecodeError::ViewTooLarge {
                sub_arrays,
                limit: MAX_EMPTY_VIEW_AXES,
            });
        }
        // no leaf is ever reached, so strides are irrelevant
        return Ok(build(flat, shape, &vec![0; shape.len()], 0));
    }

    let strides = order.strides(shape).ok_or(DecodeError::ShapeMismatch {
        expected,
        actual: flat.len(),
    })?;
    Ok(build(flat, shape, &strides, 0))
}

/// Number of `Axis` nodes a nested view of `shape` holds, saturating
fn axis_count(shape: &[usize]) -> usize {
    let mut nodes = 1usize;
    let mut total = 0usize;
    for &dim in shape {
        total = total.saturating_add(nodes);
        nodes = nodes.saturating_mul(dim);
        if nodes == 0 {
            break;
        }
    }
    total
}

fn build<'a>(flat: &'a [Element], shape: &[usize], strides: &[usize], base: usize) -> NestedArray<'a> {
    match (shape.split_first(), strides.split_first()) {
        (Some((&dim, inner_shape)), Some((&stride, inner_strides))) => NestedArray::Axis(
            (0..dim)
                .map(|i| build(flat, inner_shape, inner_strides, base + i * stride))
                .collect(),
        ),
        _ => NestedArray::Element(&flat[base]),
    }
}

/// Flatten a nested array back into the memory order `order`.
///
/// Inverse of [`reshape`] under the same order.
pub fn flatten<'a>(nested: &NestedArray<'a>, order: Order) -> Vec<&'a Element> {
    let leaves = nested.leaves();
    match order {
        Order::RowMajor => leaves,
        Order::ColumnMajor => {
            let shape = nested.shape();
            let (Some(row_strides), Some(col_strides)) = (
                Order::RowMajor.strides(&shape),
                Order::ColumnMajor.strides(&shape),
            ) else {
                return leaves;
            };
            let mut out = vec![None; leaves.len()];
            for (linear, leaf) in leaves.into_iter().enumerate() {
                let target: usize = shape
                    .iter()
                    .zip(&row_strides)
                    .zip(&col_strides)
                    .map(|((&dim, &row), &col)| (linear / row) % dim * col)
                    .sum();
                out[target] = Some(leaf);
            }
            out.into_iter().flatten().collect()
        }
    }
}
