//! Type tags selecting an encode/decode strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Discriminator selecting how a value is laid out as bytes.
///
/// | Tag | Width | Layout |
/// |-----|-------|--------|
/// | `Long` | 8 | big-endian, sign bit flipped |
/// | `Int` | 4 | big-endian, sign bit flipped |
/// | `Short` | 2 | big-endian, sign bit flipped |
/// | `Byte` | 1 | sign bit flipped |
/// | `Float` | 4 | IEEE 754 bits, order-preserving flip |
/// | `Double` | 8 | IEEE 754 bits, order-preserving flip |
/// | `BigDecimal` | variable | scale (4 bytes) + unscaled two's complement |
/// | `Boolean` | 1 | `0x00` / `0x01` |
/// | `Text` | variable | UTF-8 |
/// | `Symbol` | variable | UTF-8 |
/// | `Raw` | variable | the bytes themselves |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// 64-bit signed integer.
    Long,
    /// 32-bit signed integer.
    Int,
    /// 16-bit signed integer.
    Short,
    /// 8-bit signed integer.
    Byte,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Arbitrary-precision decimal.
    BigDecimal,
    /// Boolean.
    Boolean,
    /// UTF-8 text.
    Text,
    /// Symbolic name stored as UTF-8 text.
    Symbol,
    /// Uninterpreted bytes.
    Raw,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Long,
        Self::Int,
        Self::Short,
        Self::Byte,
        Self::Float,
        Self::Double,
        Self::BigDecimal,
        Self::Boolean,
        Self::Text,
        Self::Symbol,
        Self::Raw,
    ];

    /// Canonical lower-case name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Int => "int",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::BigDecimal => "bigdecimal",
            Self::Boolean => "boolean",
            Self::Text => "string",
            Self::Symbol => "symbol",
            Self::Raw => "raw",
        }
    }

    /// Encoded width in bytes, or `None` for variable-width tags.
    #[inline]
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Long | Self::Double => Some(8),
            Self::Int | Self::Float => Some(4),
            Self::Short => Some(2),
            Self::Byte | Self::Boolean => Some(1),
            Self::BigDecimal | Self::Text | Self::Symbol | Self::Raw => None,
        }
    }

    /// Returns `true` for the signed integer tags.
    #[inline]
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Long | Self::Int | Self::Short | Self::Byte)
    }

    /// Returns `true` if unsigned byte order of encodings matches value order.
    ///
    /// Decimals are excluded because values with different scales do not
    /// compare by their encoded bytes.
    #[inline]
    #[must_use]
    pub const fn is_order_preserving(self) -> bool {
        !matches!(self, Self::BigDecimal)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = CodecError;

    /// Resolve a tag from its name. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.to_ascii_lowercase().as_str() {
            "long" | "fixnum" | "integer" | "i64" => Self::Long,
            "int" | "i32" => Self::Int,
            "short" | "i16" => Self::Short,
            "byte" | "i8" => Self::Byte,
            "float" | "f32" => Self::Float,
            "double" | "f64" => Self::Double,
            "bigdecimal" | "big_decimal" | "decimal" => Self::BigDecimal,
            "boolean" | "bool" => Self::Boolean,
            "string" | "text" | "str" => Self::Text,
            "symbol" | "sym" => Self::Symbol,
            "raw" | "bytes" => Self::Raw,
            _ => return Err(CodecError::unsupported(s)),
        };
        tracing::trace!(name = s, %tag, "resolved type tag");
        Ok(tag)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_parse_back() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.name().parse::<TypeTag>().unwrap(), tag);
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("fixnum".parse::<TypeTag>().unwrap(), TypeTag::Long);
        assert_eq!("Integer".parse::<TypeTag>().unwrap(), TypeTag::Long);
        assert_eq!("TEXT".parse::<TypeTag>().unwrap(), TypeTag::Text);
        assert_eq!("bytes".parse::<TypeTag>().unwrap(), TypeTag::Raw);
        assert_eq!("big_decimal".parse::<TypeTag>().unwrap(), TypeTag::BigDecimal);
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let err = "uuid".parse::<TypeTag>().unwrap_err();
        assert_eq!(err, CodecError::UnsupportedType { tag: "uuid".into() });
    }

    #[test]
    fn widths() {
        assert_eq!(TypeTag::Long.fixed_width(), Some(8));
        assert_eq!(TypeTag::Int.fixed_width(), Some(4));
        assert_eq!(TypeTag::Short.fixed_width(), Some(2));
        assert_eq!(TypeTag::Byte.fixed_width(), Some(1));
        assert_eq!(TypeTag::Float.fixed_width(), Some(4));
        assert_eq!(TypeTag::Double.fixed_width(), Some(8));
        assert_eq!(TypeTag::Boolean.fixed_width(), Some(1));
        assert_eq!(TypeTag::Text.fixed_width(), None);
        assert_eq!(TypeTag::BigDecimal.fixed_width(), None);
    }
}
