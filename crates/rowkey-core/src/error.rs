//! Error types for the core crate.

use thiserror::Error;

/// Maximum length for value display in error messages.
const MAX_VALUE_DISPLAY_LEN: usize = 100;

/// Result alias used throughout the crate.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while encoding, decoding, or parsing column specifiers.
///
/// Every variant describes a local, deterministic failure. Nothing here is
/// transient, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The requested type tag is not one the codec knows.
    #[error("unsupported type: {tag}")]
    UnsupportedType {
        /// The tag name as given by the caller.
        tag: String,
    },

    /// The bytes handed to a decoder do not form a valid encoding for the tag.
    #[error("malformed {tag} encoding: {reason}")]
    MalformedEncoding {
        /// The tag being decoded.
        tag: String,
        /// What was wrong with the input.
        reason: String,
    },

    /// A column specifier could not be split into family and qualifier.
    #[error("invalid column name: {0}")]
    InvalidColumnName(String),

    /// A value cannot be represented under the explicitly requested tag.
    #[error("type mismatch: cannot encode {actual} as {expected}")]
    TypeMismatch {
        /// The requested tag.
        expected: String,
        /// The tag inferred from the value.
        actual: String,
    },

    /// An integer does not fit in the width of the requested tag.
    #[error("value {value} out of range for {tag}")]
    ValueOutOfRange {
        /// The requested tag.
        tag: String,
        /// The offending value, truncated for display.
        value: String,
    },

    /// A key reader ran out of bytes.
    #[error("truncated key: {tag} needs {needed} bytes, {remaining} remaining")]
    Truncated {
        /// The tag being read.
        tag: String,
        /// Bytes required by the read.
        needed: usize,
        /// Bytes left in the key.
        remaining: usize,
    },
}

impl CodecError {
    /// Creates an unsupported type error.
    #[must_use]
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedType { tag: tag.into() }
    }

    /// Creates a malformed encoding error.
    #[must_use]
    pub fn malformed(tag: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::MalformedEncoding { tag: tag.to_string(), reason: reason.into() }
    }

    /// Creates a malformed encoding error for a fixed-width length mismatch.
    #[must_use]
    pub fn wrong_length(tag: impl std::fmt::Display, expected: usize, actual: usize) -> Self {
        Self::malformed(tag, format!("expected {expected} bytes, got {actual}"))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: impl std::fmt::Display, actual: impl std::fmt::Display) -> Self {
        Self::TypeMismatch { expected: expected.to_string(), actual: actual.to_string() }
    }

    /// Creates an out-of-range error.
    ///
    /// The value is truncated to 100 characters for display.
    #[must_use]
    pub fn out_of_range(tag: impl std::fmt::Display, value: impl std::fmt::Display) -> Self {
        let value_str = value.to_string();
        let truncated = if value_str.len() > MAX_VALUE_DISPLAY_LEN {
            let mut end = MAX_VALUE_DISPLAY_LEN;
            while !value_str.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &value_str[..end])
        } else {
            value_str
        };
        Self::ValueOutOfRange { tag: tag.to_string(), value: truncated }
    }
}
