//! Core types for decoded .npy arrays

mod array;
mod dtype;
mod element;
mod header;

pub use array::{DecodedArray, NestedArray};
pub use dtype::DType;
pub use element::Element;
pub use header::{
    HeaderDescriptor, MAGIC, Order, PREAMBLE_SIZE, SUPPORTED_VERSION, checked_element_count,
    element_count,
};
