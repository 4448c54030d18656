//! Error types for commons-util
//!
//! Most helpers in this crate follow a sentinel policy and never fail. The
//! few that do (single-index insert/remove, byte-order parsing, codec length
//! checks, replacement cycles, type descriptors) report through this enum.

use thiserror::Error;

/// Main error type for commons-util
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    // Index errors

    /// Single-element index outside the valid range of an array
    #[error("Index: {index}, Length: {length}")]
    IndexOutOfBounds { index: isize, length: usize },

    /// A boxed element was absent where a primitive was required
    #[error("Null element at index {index}")]
    NullElement { index: usize },

    // Codec errors

    /// Byte order name that is neither big nor little endian
    #[error("Unsupported byte order: {0}")]
    UnsupportedByteOrder(String),

    /// Byte slice whose length does not match the integer width
    #[error("Invalid byte array length: expected {expected}, got {actual}")]
    InvalidByteLength { expected: usize, actual: usize },

    // String errors

    /// Search and replacement lists of different sizes
    #[error("Search and replace array lengths don't match: {searches} vs {replacements}")]
    MismatchedReplaceLengths { searches: usize, replacements: usize },

    /// Repeated replacement that revisits earlier text or grows without bound
    #[error("Aborting replacement: passes never settle ({0})")]
    ReplaceCycle(String),

    // Type errors

    /// Malformed textual type descriptor
    #[error("Invalid type descriptor: {0}")]
    InvalidTypeDescriptor(String),

    /// Name that does not denote a primitive type
    #[error("Unknown primitive type: {0}")]
    UnknownPrimitive(String),

    /// Argument rejected by a precondition check
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using UtilError
pub type Result<T> = std::result::Result<T, UtilError>;

impl UtilError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        UtilError::Custom(msg.into())
    }

    /// Create an index error for `index` against an array of `length`
    pub fn index_out_of_bounds(index: isize, length: usize) -> Self {
        UtilError::IndexOutOfBounds { index, length }
    }

    /// Check if this error is an index/element error
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            UtilError::IndexOutOfBounds { .. } | UtilError::NullElement { .. }
        )
    }

    /// Check if this error came from the byte-array codec
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            UtilError::UnsupportedByteOrder(_) | UtilError::InvalidByteLength { .. }
        )
    }

    /// Check if this error is a rejected argument
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            UtilError::MismatchedReplaceLengths { .. }
                | UtilError::ReplaceCycle(_)
                | UtilError::InvalidTypeDescriptor(_)
                | UtilError::UnknownPrimitive(_)
                | UtilError::InvalidArgument(_)
        )
    }
}
