//! Native values that can be encoded into keys.
//!
//! A [`Value`] carries one native value per [`TypeTag`]. Passing a bare value
//! to the codec infers the tag from the variant; wrapping it in a
//! [`TypedValue`] forces a specific on-wire representation.
//!
//! # Example
//!
//! ```
//! use rowkey_core::{TypeTag, TypedValue, Value};
//!
//! // Tags are inferred from the native type
//! let id: Value = 42i64.into();
//! assert_eq!(id.tag(), TypeTag::Long);
//!
//! let name: Value = "alice".into();
//! assert_eq!(name.tag(), TypeTag::Text);
//!
//! // Or stated explicitly
//! let narrow = TypedValue::new(TypeTag::Short, 42i64);
//! assert_eq!(narrow.tag, TypeTag::Short);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TypeTag;
use crate::error::{CodecError, CodecResult};

/// A native value, one variant per [`TypeTag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit signed integer
    Int(i32),
    /// 16-bit signed integer
    Short(i16),
    /// 8-bit signed integer
    Byte(i8),
    /// 32-bit floating point number
    Float(f32),
    /// 64-bit floating point number
    Double(f64),
    /// Arbitrary-precision decimal
    Decimal(Decimal),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    Text(String),
    /// Symbolic name, stored like text
    Symbol(String),
    /// Raw bytes
    Raw(Vec<u8>),
}

impl Value {
    /// The tag inferred from this value's native kind.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Long(_) => TypeTag::Long,
            Self::Int(_) => TypeTag::Int,
            Self::Short(_) => TypeTag::Short,
            Self::Byte(_) => TypeTag::Byte,
            Self::Float(_) => TypeTag::Float,
            Self::Double(_) => TypeTag::Double,
            Self::Decimal(_) => TypeTag::BigDecimal,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Text(_) => TypeTag::Text,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Raw(_) => TypeTag::Raw,
        }
    }

    /// Returns the value as an `i64` if it is any integer variant.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(i) => Some(*i),
            Self::Int(i) => Some(i64::from(*i)),
            Self::Short(i) => Some(i64::from(*i)),
            Self::Byte(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is a float variant.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(f64::from(*f)),
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a decimal if it is one.
    #[inline]
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text of a `Text` or `Symbol` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the bytes of a `Raw` value.
    #[must_use]
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(b) => Some(b),
            _ => None,
        }
    }

    /// Convert this value to the native representation of `tag`.
    ///
    /// Integers narrow or widen with a range check and may become floats or
    /// decimals; floats may become decimals; text and symbols interchange and
    /// may be written as raw bytes. Float conversions round to the target
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueOutOfRange`] when an integer does not fit
    /// the target width, and [`CodecError::TypeMismatch`] for any other
    /// pairing with no sensible conversion.
    pub fn convert_to(self, tag: TypeTag) -> CodecResult<Self> {
        if self.tag() == tag {
            return Ok(self);
        }
        let actual = self.tag();
        let mismatch = || CodecError::type_mismatch(tag, actual);

        if let Some(i) = self.as_i64() {
            return match tag {
                TypeTag::Long => Ok(Self::Long(i)),
                TypeTag::Int => {
                    i32::try_from(i).map(Self::Int).map_err(|_| CodecError::out_of_range(tag, i))
                }
                TypeTag::Short => {
                    i16::try_from(i).map(Self::Short).map_err(|_| CodecError::out_of_range(tag, i))
                }
                TypeTag::Byte => {
                    i8::try_from(i).map(Self::Byte).map_err(|_| CodecError::out_of_range(tag, i))
                }
                TypeTag::Float => Ok(Self::Float(i as f32)),
                TypeTag::Double => Ok(Self::Double(i as f64)),
                TypeTag::BigDecimal => Ok(Self::Decimal(Decimal::from(i))),
                _ => Err(mismatch()),
            };
        }

        match (self, tag) {
            (Self::Float(f), TypeTag::Double) => Ok(Self::Double(f64::from(f))),
            (Self::Double(f), TypeTag::Float) => Ok(Self::Float(f as f32)),
            (Self::Float(f), TypeTag::BigDecimal) => {
                Decimal::try_from(f).map(Self::Decimal).map_err(|_| mismatch())
            }
            (Self::Double(f), TypeTag::BigDecimal) => {
                Decimal::try_from(f).map(Self::Decimal).map_err(|_| mismatch())
            }
            (Self::Text(s) | Self::Symbol(s), TypeTag::Text) => Ok(Self::Text(s)),
            (Self::Text(s) | Self::Symbol(s), TypeTag::Symbol) => Ok(Self::Symbol(s)),
            (Self::Text(s) | Self::Symbol(s), TypeTag::Raw) => Ok(Self::Raw(s.into_bytes())),
            _ => Err(mismatch()),
        }
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Long(i)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i16> for Value {
    #[inline]
    fn from(i: i16) -> Self {
        Self::Short(i)
    }
}

impl From<i8> for Value {
    #[inline]
    fn from(i: i8) -> Self {
        Self::Byte(i)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    #[inline]
    fn from(b: Vec<u8>) -> Self {
        Self::Raw(b)
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(b: &[u8]) -> Self {
        Self::Raw(b.to_vec())
    }
}

/// A value paired with the tag it should be encoded as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    /// The tag selecting the encoding.
    pub tag: TypeTag,
    /// The value to encode.
    pub value: Value,
}

impl TypedValue {
    /// Pair a value with an explicit tag.
    pub fn new(tag: TypeTag, value: impl Into<Value>) -> Self {
        Self { tag, value: value.into() }
    }

    /// Pair a value with the tag inferred from its native kind.
    pub fn inferred(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self { tag: value.tag(), value }
    }
}

macro_rules! impl_inferred_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for TypedValue {
                fn from(value: $t) -> Self {
                    Self::inferred(value)
                }
            }
        )*
    };
}

impl_inferred_from!(
    Value, i64, i32, i16, i8, f32, f64, Decimal, bool, String, &str, Vec<u8>, &[u8]
);
