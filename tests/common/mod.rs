//! Builders for .npy buffers used across the integration tests

#![allow(dead_code)]

use npyload::{MAGIC, PREAMBLE_SIZE};

/// Version 1.0 buffer with numpy-style padding to a 64-byte boundary
pub fn npy_bytes(descr: &str, fortran_order: bool, shape: &[usize], payload: &[u8]) -> Vec<u8> {
    let shape = match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        dims => format!(
            "({})",
            dims.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
        ),
    };
    let flag = if fortran_order { "True" } else { "False" };
    let header = format!("{{'descr': '{descr}', 'fortran_order': {flag}, 'shape': {shape}, }}");
    with_header(&header, payload)
}

/// Buffer around arbitrary header text
pub fn with_header(header: &str, payload: &[u8]) -> Vec<u8> {
    let mut header = header.to_string();
    let unpadded = PREAMBLE_SIZE + header.len() + 1;
    header.push_str(&" ".repeat((64 - unpadded % 64) % 64));
    header.push('\n');

    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&[1, 0]);
    bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

pub fn le_bytes_i32(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn le_bytes_f64(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
