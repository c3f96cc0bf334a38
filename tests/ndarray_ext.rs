//! Integration tests for ndarray support
//!
//! ndarray acts as the reference for where each flat element lands under
//! C and Fortran order.

#![cfg(feature = "ndarray")]

mod common;

use common::{le_bytes_f64, le_bytes_i32, npy_bytes};
use half::f16;
use ndarray::{ArrayD, Dimension, IxDyn, ShapeBuilder, array};
use npyload::{Element, NdarrayError, decode};

fn assert_parity(bytes: &[u8], reference: &ArrayD<i32>) {
    let array = decode(bytes).unwrap();
    let nested = array.nested().unwrap();
    assert_eq!(nested.shape(), reference.shape());

    for (index, &expected) in reference.indexed_iter() {
        let index = index.slice().to_vec();
        assert_eq!(nested.get(&index), Some(&Element::I32(expected)), "{index:?}");
        assert_eq!(array.get(&index), Some(&Element::I32(expected)), "{index:?}");
    }

    let converted: ArrayD<i32> = array.to_ndarray().unwrap();
    assert_eq!(&converted, reference);
}

// =============================================================================
// Reshape parity
// =============================================================================

#[test]
fn parity_row_major() {
    for shape in [vec![6], vec![2, 3], vec![2, 3, 4], vec![3, 1, 2, 2]] {
        let n: usize = shape.iter().product();
        let flat: Vec<i32> = (0..n as i32).collect();
        let reference = ArrayD::from_shape_vec(IxDyn(&shape), flat.clone()).unwrap();
        assert_parity(&npy_bytes("<i4", false, &shape, &le_bytes_i32(&flat)), &reference);
    }
}

#[test]
fn parity_column_major() {
    for shape in [vec![6], vec![2, 3], vec![2, 3, 4], vec![3, 1, 2, 2], vec![4, 2, 1]] {
        let n: usize = shape.iter().product();
        let flat: Vec<i32> = (0..n as i32).collect();
        let reference = ArrayD::from_shape_vec(IxDyn(&shape).f(), flat.clone()).unwrap();
        assert_parity(&npy_bytes("<i4", true, &shape, &le_bytes_i32(&flat)), &reference);
    }
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn neural_data_cube() {
    // categories x sensors x time
    let cube = ArrayD::<f64>::from_shape_fn(IxDyn(&[3, 4, 5]), |idx| {
        (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
    });
    let flat: Vec<f64> = cube.iter().copied().collect();
    let bytes = npy_bytes("<f8", false, &[3, 4, 5], &le_bytes_f64(&flat));

    let back: ArrayD<f64> = decode(&bytes).unwrap().to_ndarray().unwrap();
    assert_eq!(back, cube);
    assert_eq!(back[[2, 3, 4]], 234.0);
}

#[test]
fn half_precision() {
    let values = [0.5f32, -1.0, 65504.0];
    let payload: Vec<u8> = values
        .iter()
        .flat_map(|v| f16::from_f32(*v).to_le_bytes())
        .collect();
    let bytes = npy_bytes("<f2", false, &[3], &payload);

    let back: ArrayD<f16> = decode(&bytes).unwrap().to_ndarray().unwrap();
    let widened: Vec<f32> = back.iter().map(|v| v.to_f32()).collect();
    assert_eq!(widened, values.to_vec());
}

#[test]
fn text_labels() {
    let bytes = npy_bytes("|S5", false, &[2], b"facestool\0");
    let back: ArrayD<String> = decode(&bytes).unwrap().to_ndarray().unwrap();
    assert_eq!(back, array!["faces".to_string(), "tool".to_string()].into_dyn());
}

#[test]
fn wrong_element_type() {
    let bytes = npy_bytes("<i4", false, &[2], &le_bytes_i32(&[1, 2]));
    let result: Result<ArrayD<u32>, _> = decode(&bytes).unwrap().to_ndarray();
    assert!(matches!(result, Err(NdarrayError::DTypeMismatch { .. })));
}
