//! Header dictionary to descriptor

use super::dict::{Literal, Spanned};
use crate::error::{DecodeError, Result};
use crate::types::{DType, HeaderDescriptor, Order};

const DESCR: &str = "descr";
const FORTRAN_ORDER: &str = "fortran_order";
const SHAPE: &str = "shape";

/// Validate parsed entries and build the descriptor
pub fn descriptor_from_entries(entries: Vec<(Spanned, Spanned)>) -> Result<HeaderDescriptor> {
    let mut descr = None;
    let mut fortran_order = None;
    let mut shape = None;

    for (key, value) in entries {
        let Literal::Str(name) = key.value else {
            return Err(DecodeError::syntax("header keys must be strings", key.position));
        };
        let slot = match name.as_str() {
            DESCR => &mut descr,
            FORTRAN_ORDER => &mut fortran_order,
            SHAPE => &mut shape,
            _ => {
                return Err(DecodeError::syntax(
                    format!("unexpected key '{name}'"),
                    key.position,
                ));
            }
        };
        if slot.is_some() {
            return Err(DecodeError::syntax(
                format!("duplicate key '{name}'"),
                key.position,
            ));
        }
        *slot = Some(value);
    }

    let descr = descr.ok_or(DecodeError::MissingField { field: DESCR })?;
    let fortran_order = fortran_order.ok_or(DecodeError::MissingField {
        field: FORTRAN_ORDER,
    })?;
    let shape = shape.ok_or(DecodeError::MissingField { field: SHAPE })?;

    let dtype = match descr.value {
        Literal::Str(s) => DType::from_descr(&s)?,
        _ => {
            return Err(DecodeError::syntax(
                "'descr' must be a string",
                descr.position,
            ));
        }
    };

    let order = match &fortran_order.value {
        Literal::Ident(b) if b == "True" => Order::ColumnMajor,
        Literal::Ident(b) if b == "False" => Order::RowMajor,
        _ => {
            return Err(DecodeError::syntax(
                "'fortran_order' must be True or False",
                fortran_order.position,
            ));
        }
    };

    let shape_position = shape.position;
    let shape = parse_shape(shape)?;
    check_sizes(&shape, dtype, shape_position)?;

    Ok(HeaderDescriptor {
        shape,
        dtype,
        order,
    })
}

fn parse_shape(shape: Spanned) -> Result<Vec<usize>> {
    let Literal::Tuple(items) = shape.value else {
        return Err(DecodeError::shape("shape must be a tuple", shape.position));
    };

    items
        .into_iter()
        .map(|item| match item.value {
            Literal::Number(text) => parse_dim(&text)
                .ok_or_else(|| DecodeError::shape(format!("invalid dimension {text}"), item.position)),
            other => Err(DecodeError::shape(
                format!("dimension must be an integer, found {other:?}"),
                item.position,
            )),
        })
        .collect()
}

fn parse_dim(text: &str) -> Option<usize> {
    let digits = text.strip_suffix(['L', 'l']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Payload size must be representable.
///
/// Zero extents are skipped, so the verdict does not depend on where a zero
/// sits in the shape.
fn check_sizes(shape: &[usize], dtype: DType, position: usize) -> Result<()> {
    shape
        .iter()
        .filter(|&&dim| dim != 0)
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .and_then(|count| count.checked_mul(dtype.element_width()))
        .map(|_| ())
        .ok_or_else(|| DecodeError::shape("array size overflows usize", position))
}
