//! Error types for npyload

use thiserror::Error;

/// Reasons a buffer cannot be decoded. Every variant is terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// First six bytes are not `\x93NUMPY`
    #[error("invalid magic bytes, not an .npy file")]
    InvalidMagic,

    /// Version bytes other than 1.0
    #[error("unsupported .npy format version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    /// Malformed header dictionary, or header text running past the buffer
    #[error("header syntax error at byte {position}: {message}")]
    HeaderSyntax { message: String, position: usize },

    /// Required header key absent
    #[error("header is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Shape tuple holds something other than non-negative integers
    #[error("invalid shape at byte {position}: {message}")]
    ShapeParse { message: String, position: usize },

    /// `descr` not in the codec table
    #[error("unsupported dtype descr '{descr}'")]
    UnsupportedDtype { descr: String },

    /// Payload shorter than shape * element width
    #[error("truncated payload: expected {expected} bytes, got {actual}")]
    TruncatedBuffer { expected: usize, actual: usize },

    /// Flat sequence length disagrees with the requested shape
    #[error("shape needs {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Nested view of an empty array would need more sub-arrays than allowed
    #[error("empty array view needs {sub_arrays} sub-arrays, limit is {limit}")]
    ViewTooLarge { sub_arrays: usize, limit: usize },
}

impl DecodeError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        DecodeError::HeaderSyntax {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn shape(message: impl Into<String>, position: usize) -> Self {
        DecodeError::ShapeParse {
            message: message.into(),
            position,
        }
    }
}

/// Result type alias using DecodeError
pub type Result<T> = std::result::Result<T, DecodeError>;
