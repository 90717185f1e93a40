//! Typed encode/decode entry points.

use std::ops::Bound;

use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::types::{Boundary, OrderedByteArray, TypeTag, TypedValue, Value};

use super::sortable;

/// Converts tagged values to ordered byte arrays and back.
///
/// The codec holds only its configuration and is cheap to clone and share
/// across threads.
///
/// # Example
///
/// ```
/// use rowkey_core::{TypeTag, TypedCodec, TypedValue, Value};
///
/// let codec = TypedCodec::default();
///
/// // Inferred tag: i64 encodes as an 8-byte long
/// let key = codec.encode(-5i64).unwrap();
/// assert_eq!(key.len(), 8);
/// assert!(key < codec.encode(5i64).unwrap());
///
/// // Forced tag: the same value as a 2-byte short
/// let short = codec.encode(TypedValue::new(TypeTag::Short, -5i64)).unwrap();
/// assert_eq!(short.len(), 2);
///
/// assert_eq!(codec.decode(TypeTag::Short, &short).unwrap(), Value::Short(-5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypedCodec {
    config: CodecConfig,
}

impl TypedCodec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a bare value (tag inferred) or a [`TypedValue`] (tag forced).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`](crate::CodecError::TypeMismatch) or
    /// [`CodecError::ValueOutOfRange`](crate::CodecError::ValueOutOfRange) if a
    /// forced tag cannot represent the value.
    pub fn encode(&self, value: impl Into<TypedValue>) -> CodecResult<OrderedByteArray> {
        let mut buf = Vec::new();
        self.encode_to(value, &mut buf)?;
        Ok(OrderedByteArray::new(buf))
    }

    /// Encode `value` under an explicit tag.
    ///
    /// # Errors
    ///
    /// See [`encode`](Self::encode).
    pub fn encode_as(
        &self,
        tag: TypeTag,
        value: impl Into<Value>,
    ) -> CodecResult<OrderedByteArray> {
        self.encode(TypedValue::new(tag, value))
    }

    /// Encode `value` under a tag given by name.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedType`](crate::CodecError::UnsupportedType)
    /// for an unknown tag name, otherwise see [`encode`](Self::encode).
    pub fn encode_as_str(
        &self,
        tag: &str,
        value: impl Into<Value>,
    ) -> CodecResult<OrderedByteArray> {
        self.encode_as(tag.parse()?, value)
    }

    /// Append the encoding of `value` to a buffer.
    ///
    /// Nothing is appended if encoding fails.
    ///
    /// # Errors
    ///
    /// See [`encode`](Self::encode).
    pub fn encode_to(&self, value: impl Into<TypedValue>, buf: &mut Vec<u8>) -> CodecResult<()> {
        let TypedValue { tag, value } = value.into();
        let value = value.convert_to(tag)?;
        sortable::encode_value(&value, buf);
        Ok(())
    }

    /// Encode several values and concatenate them into one key.
    ///
    /// Variable-width parts carry no delimiter; composing them unambiguously
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Fails on the first value that cannot be encoded.
    pub fn encode_all<I, V>(&self, values: I) -> CodecResult<OrderedByteArray>
    where
        I: IntoIterator<Item = V>,
        V: Into<TypedValue>,
    {
        let mut buf = Vec::new();
        for value in values {
            self.encode_to(value, &mut buf)?;
        }
        Ok(OrderedByteArray::new(buf))
    }

    /// Decode `bytes` as a value of `tag`.
    ///
    /// Variable-width tags consume the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedEncoding`](crate::CodecError::MalformedEncoding)
    /// if the length does not match a fixed-width tag or the bytes are not a
    /// valid encoding.
    pub fn decode(&self, tag: TypeTag, bytes: impl AsRef<[u8]>) -> CodecResult<Value> {
        let bytes = bytes.as_ref();
        sortable::decode_value(tag, bytes, self.config.strict_boolean).inspect_err(|e| {
            tracing::debug!(%tag, len = bytes.len(), error = %e, "decode failed");
        })
    }

    /// Decode `bytes` under a tag given by name.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedType`](crate::CodecError::UnsupportedType)
    /// for an unknown tag name, otherwise see [`decode`](Self::decode).
    pub fn decode_str(&self, tag: &str, bytes: impl AsRef<[u8]>) -> CodecResult<Value> {
        self.decode(tag.parse()?, bytes)
    }

    /// Stop key for a prefix scan, using the configured boundary policy.
    #[must_use]
    pub fn stop_key_for_prefix(&self, prefix: &OrderedByteArray) -> Boundary {
        prefix.successor_of_prefix_with(self.config.boundary_policy)
    }

    /// Start and stop bounds for a prefix scan, using the configured policy.
    #[must_use]
    pub fn scan_range(&self, prefix: &OrderedByteArray) -> (Bound<Vec<u8>>, Bound<Vec<u8>>) {
        prefix.prefix_range(self.config.boundary_policy)
    }
}
