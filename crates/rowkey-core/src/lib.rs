//! rowkey core
//!
//! Typed, order-preserving encoding of row keys for sorted key-value stores.
//!
//! # Overview
//!
//! - **Byte arrays**: [`OrderedByteArray`] orders keys the way the store does
//!   (unsigned lexicographic) and computes prefix-scan stop keys
//! - **Codec**: [`TypedCodec`] encodes [`Value`]s under an inferred or explicit
//!   [`TypeTag`] and decodes them back
//! - **Columns**: [`ColumnLocator`] splits `family:qualifier` specifiers
//! - **Configuration**: [`CodecConfig`] selects the [`BoundaryPolicy`] and
//!   boolean strictness
//!
//! # Example
//!
//! ```
//! use rowkey_core::{Boundary, ColumnLocator, TypeTag, TypedCodec, TypedValue, Value};
//!
//! let codec = TypedCodec::default();
//!
//! // Row key made of a text prefix and a fixed-width id
//! let prefix = codec.encode("user:").unwrap();
//! let key = codec.encode_all([TypedValue::from("user:"), TypedValue::from(42i64)]).unwrap();
//! assert!(key.starts_with(&prefix));
//!
//! // Every "user:" row sorts below the stop key
//! let Boundary::Key(stop) = codec.stop_key_for_prefix(&prefix) else { unreachable!() };
//! assert!(key < stop);
//!
//! // Columns
//! let col = ColumnLocator::parse("info:email").unwrap();
//! assert_eq!(col.family, b"info");
//!
//! // Decoding
//! assert_eq!(codec.decode(TypeTag::Text, &prefix).unwrap(), Value::Text("user:".into()));
//! ```
//!
//! # Modules
//!
//! - [`types`] - Byte arrays, tags, values, column locators
//! - [`encoding`] - Codec, key reader, byte layouts
//! - [`config`] - Codec configuration
//! - [`error`] - Error types ([`CodecError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{BoundaryPolicy, CodecConfig};
pub use encoding::{KeyReader, TypedCodec};
pub use error::{CodecError, CodecResult};
pub use types::{
    Boundary, ColumnLocator, ColumnSpec, OrderedByteArray, TypeTag, TypedValue, Value,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_types_are_send_and_sync() {
        assert_send_sync::<OrderedByteArray>();
        assert_send_sync::<Boundary>();
        assert_send_sync::<TypedCodec>();
        assert_send_sync::<CodecConfig>();
        assert_send_sync::<ColumnLocator>();
        assert_send_sync::<TypedValue>();
        assert_send_sync::<KeyReader<'static>>();
    }
}
