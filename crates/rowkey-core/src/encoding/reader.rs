//! Sequential decoding of composite keys.

use crate::error::{CodecError, CodecResult};
use crate::types::{OrderedByteArray, TypeTag, Value};

use super::TypedCodec;

/// Reads typed values off the front of a key, one after another.
///
/// Fixed-width tags know their own length. Variable-width tags need an
/// explicit length, or can take whatever remains.
///
/// ```
/// use rowkey_core::{KeyReader, TypeTag, TypedCodec, TypedValue, Value};
///
/// let codec = TypedCodec::default();
/// let key = codec
///     .encode_all([TypedValue::new(TypeTag::Int, 7i64), TypedValue::from("user-1")])
///     .unwrap();
///
/// let mut reader = KeyReader::new(&codec, &key);
/// assert_eq!(reader.read(TypeTag::Int).unwrap(), Value::Int(7));
/// assert_eq!(reader.read_rest(TypeTag::Text).unwrap(), Value::Text("user-1".into()));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug)]
pub struct KeyReader<'a> {
    codec: &'a TypedCodec,
    bytes: &'a [u8],
    position: usize,
}

impl<'a> KeyReader<'a> {
    /// Start reading at the beginning of `key`.
    #[must_use]
    pub fn new(codec: &'a TypedCodec, key: &'a OrderedByteArray) -> Self {
        Self::from_slice(codec, key.as_bytes())
    }

    /// Start reading at the beginning of a byte slice.
    #[must_use]
    pub const fn from_slice(codec: &'a TypedCodec, bytes: &'a [u8]) -> Self {
        Self { codec, bytes, position: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Read one fixed-width value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedEncoding`] for variable-width tags and
    /// [`CodecError::Truncated`] if too few bytes remain.
    pub fn read(&mut self, tag: TypeTag) -> CodecResult<Value> {
        let width = tag.fixed_width().ok_or_else(|| {
            CodecError::malformed(tag, "variable-width values need an explicit length")
        })?;
        self.read_len(tag, width)
    }

    /// Read exactly `len` bytes and decode them as `tag`.
    ///
    /// The reader does not advance if decoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than `len` bytes remain, or
    /// any decode error for the slice.
    pub fn read_len(&mut self, tag: TypeTag, len: usize) -> CodecResult<Value> {
        let remaining = self.remaining();
        if remaining.len() < len {
            return Err(CodecError::Truncated {
                tag: tag.to_string(),
                needed: len,
                remaining: remaining.len(),
            });
        }
        let value = self.codec.decode(tag, &remaining[..len])?;
        self.position += len;
        Ok(value)
    }

    /// Decode everything that remains as `tag`.
    ///
    /// # Errors
    ///
    /// Any decode error for the remaining bytes.
    pub fn read_rest(&mut self, tag: TypeTag) -> CodecResult<Value> {
        let len = self.remaining().len();
        self.read_len(tag, len)
    }
}
