//! Per-tag byte layouts.
//!
//! Every fixed-width numeric layout is chosen so that comparing encoded bytes
//! as unsigned sequences gives the same order as comparing the values, for
//! values of the same tag.
//!
//! # Integer Encoding
//!
//! Signed integers use a "sign-flip" encoding:
//! - XOR with the type's sign bit (`0x80` for the most significant byte)
//! - This makes negative numbers sort before non-negative numbers
//! - Result is stored in big-endian format
//!
//! # Float Encoding
//!
//! Floats use IEEE 754 bit representation with transformations:
//! - Non-negative floats: flip sign bit
//! - Negative floats: flip all bits
//! - The result follows IEEE total order, `-NaN < -inf < ... < -0 < +0 < ... < +inf < +NaN`,
//!   and is a bijection, so NaN payloads survive a round trip
//!
//! # Decimal Encoding
//!
//! Decimals are stored as a 4-byte big-endian scale followed by the unscaled
//! value in minimal big-endian two's complement. This is exact, including the
//! scale, but byte order only matches numeric order for equal scales.
//!
//! # Text and Bytes
//!
//! Text is stored as its UTF-8 bytes and raw bytes as themselves, with no
//! length prefix and no terminator. A decoder therefore consumes the whole
//! input.

use rust_decimal::Decimal;

use crate::error::{CodecError, CodecResult};
use crate::types::{TypeTag, Value};

/// Constant for flipping the sign bit of 64-bit values.
const SIGN_FLIP_64: u64 = 0x8000_0000_0000_0000;
/// Constant for flipping the sign bit of 32-bit values.
const SIGN_FLIP_32: u32 = 0x8000_0000;
/// Constant for flipping the sign bit of 16-bit values.
const SIGN_FLIP_16: u16 = 0x8000;
/// Constant for flipping the sign bit of 8-bit values.
const SIGN_FLIP_8: u8 = 0x80;

/// Width of the decimal scale header.
const DECIMAL_SCALE_LEN: usize = 4;
/// Largest unscaled value width (an `i128`).
const DECIMAL_MAX_MANTISSA_LEN: usize = 16;

/// Boolean bytes.
const FALSE: u8 = 0x00;
const TRUE: u8 = 0x01;

/// Check a fixed-width input and copy it into an array.
fn fixed<const N: usize>(tag: TypeTag, bytes: &[u8]) -> CodecResult<[u8; N]> {
    bytes.try_into().map_err(|_| CodecError::wrong_length(tag, N, bytes.len()))
}

#[inline]
pub(crate) fn encode_i64(value: i64) -> [u8; 8] {
    ((value as u64) ^ SIGN_FLIP_64).to_be_bytes()
}

#[inline]
pub(crate) fn encode_i32(value: i32) -> [u8; 4] {
    ((value as u32) ^ SIGN_FLIP_32).to_be_bytes()
}

#[inline]
pub(crate) fn encode_i16(value: i16) -> [u8; 2] {
    ((value as u16) ^ SIGN_FLIP_16).to_be_bytes()
}

#[inline]
pub(crate) fn encode_i8(value: i8) -> [u8; 1] {
    [(value as u8) ^ SIGN_FLIP_8]
}

pub(crate) fn decode_i64(bytes: &[u8]) -> CodecResult<i64> {
    let encoded = u64::from_be_bytes(fixed(TypeTag::Long, bytes)?);
    Ok((encoded ^ SIGN_FLIP_64) as i64)
}

pub(crate) fn decode_i32(bytes: &[u8]) -> CodecResult<i32> {
    let encoded = u32::from_be_bytes(fixed(TypeTag::Int, bytes)?);
    Ok((encoded ^ SIGN_FLIP_32) as i32)
}

pub(crate) fn decode_i16(bytes: &[u8]) -> CodecResult<i16> {
    let encoded = u16::from_be_bytes(fixed(TypeTag::Short, bytes)?);
    Ok((encoded ^ SIGN_FLIP_16) as i16)
}

pub(crate) fn decode_i8(bytes: &[u8]) -> CodecResult<i8> {
    let [encoded] = fixed::<1>(TypeTag::Byte, bytes)?;
    Ok((encoded ^ SIGN_FLIP_8) as i8)
}

pub(crate) fn encode_f64(value: f64) -> [u8; 8] {
    let bits = value.to_bits();
    let encoded = if bits & SIGN_FLIP_64 == 0 {
        // Non-negative (including +0 and positive NaN): flip sign bit
        bits ^ SIGN_FLIP_64
    } else {
        // Negative (including -0 and negative NaN): flip all bits
        !bits
    };
    encoded.to_be_bytes()
}

pub(crate) fn decode_f64(bytes: &[u8]) -> CodecResult<f64> {
    let encoded = u64::from_be_bytes(fixed(TypeTag::Double, bytes)?);
    let bits = if encoded & SIGN_FLIP_64 != 0 { encoded ^ SIGN_FLIP_64 } else { !encoded };
    Ok(f64::from_bits(bits))
}

pub(crate) fn encode_f32(value: f32) -> [u8; 4] {
    let bits = value.to_bits();
    let encoded = if bits & SIGN_FLIP_32 == 0 { bits ^ SIGN_FLIP_32 } else { !bits };
    encoded.to_be_bytes()
}

pub(crate) fn decode_f32(bytes: &[u8]) -> CodecResult<f32> {
    let encoded = u32::from_be_bytes(fixed(TypeTag::Float, bytes)?);
    let bits = if encoded & SIGN_FLIP_32 != 0 { encoded ^ SIGN_FLIP_32 } else { !encoded };
    Ok(f32::from_bits(bits))
}

#[inline]
pub(crate) const fn encode_bool(value: bool) -> [u8; 1] {
    if value {
        [TRUE]
    } else {
        [FALSE]
    }
}

/// Decode a boolean byte. Lenient decoding maps any non-zero byte to `true`.
pub(crate) fn decode_bool(bytes: &[u8], strict: bool) -> CodecResult<bool> {
    match fixed::<1>(TypeTag::Boolean, bytes)? {
        [FALSE] => Ok(false),
        [TRUE] => Ok(true),
        [other] if strict => {
            Err(CodecError::malformed(TypeTag::Boolean, format!("invalid byte 0x{other:02x}")))
        }
        [_] => Ok(true),
    }
}

/// Returns `true` if `byte` only repeats the sign carried by the next byte.
#[inline]
const fn is_sign_extension(byte: u8, next: u8) -> bool {
    let next_negative = next & 0x80 != 0;
    (byte == 0x00 && !next_negative) || (byte == 0xFF && next_negative)
}

/// Negative zero has no distinct mantissa, so it encodes as zero at the same
/// scale.
pub(crate) fn encode_decimal(value: &Decimal, buf: &mut Vec<u8>) {
    // Scale is at most 28.
    buf.extend_from_slice(&value.scale().to_be_bytes());

    let full = value.mantissa().to_be_bytes();
    let mut start = 0;
    while start < DECIMAL_MAX_MANTISSA_LEN - 1 && is_sign_extension(full[start], full[start + 1]) {
        start += 1;
    }
    buf.extend_from_slice(&full[start..]);
}

pub(crate) fn decode_decimal(bytes: &[u8]) -> CodecResult<Decimal> {
    let tag = TypeTag::BigDecimal;
    let max_len = DECIMAL_SCALE_LEN + DECIMAL_MAX_MANTISSA_LEN;
    if bytes.len() <= DECIMAL_SCALE_LEN || bytes.len() > max_len {
        return Err(CodecError::malformed(
            tag,
            format!("expected {} to {max_len} bytes, got {}", DECIMAL_SCALE_LEN + 1, bytes.len()),
        ));
    }

    let (scale_bytes, mantissa_bytes) = bytes.split_at(DECIMAL_SCALE_LEN);
    let scale = u32::from_be_bytes(fixed(tag, scale_bytes)?);
    if let [first, second, ..] = *mantissa_bytes {
        if is_sign_extension(first, second) {
            return Err(CodecError::malformed(tag, "mantissa is not in minimal form"));
        }
    }

    let fill = if mantissa_bytes[0] & 0x80 != 0 { 0xFF } else { 0x00 };
    let mut full = [fill; DECIMAL_MAX_MANTISSA_LEN];
    full[DECIMAL_MAX_MANTISSA_LEN - mantissa_bytes.len()..].copy_from_slice(mantissa_bytes);
    let mantissa = i128::from_be_bytes(full);

    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map_err(|e| CodecError::malformed(tag, format!("unrepresentable decimal: {e}")))
}

fn decode_utf8(tag: TypeTag, bytes: &[u8]) -> CodecResult<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| CodecError::malformed(tag, format!("invalid UTF-8: {e}")))
}

/// Append the encoding of `value` to `buf`, using the value's own tag.
pub(crate) fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Long(i) => buf.extend_from_slice(&encode_i64(*i)),
        Value::Int(i) => buf.extend_from_slice(&encode_i32(*i)),
        Value::Short(i) => buf.extend_from_slice(&encode_i16(*i)),
        Value::Byte(i) => buf.extend_from_slice(&encode_i8(*i)),
        Value::Float(f) => buf.extend_from_slice(&encode_f32(*f)),
        Value::Double(f) => buf.extend_from_slice(&encode_f64(*f)),
        Value::Decimal(d) => encode_decimal(d, buf),
        Value::Boolean(b) => buf.extend_from_slice(&encode_bool(*b)),
        Value::Text(s) | Value::Symbol(s) => buf.extend_from_slice(s.as_bytes()),
        Value::Raw(b) => buf.extend_from_slice(b),
    }
}

/// Decode `bytes` as a complete value of `tag`.
pub(crate) fn decode_value(tag: TypeTag, bytes: &[u8], strict_boolean: bool) -> CodecResult<Value> {
    Ok(match tag {
        TypeTag::Long => Value::Long(decode_i64(bytes)?),
        TypeTag::Int => Value::Int(decode_i32(bytes)?),
        TypeTag::Short => Value::Short(decode_i16(bytes)?),
        TypeTag::Byte => Value::Byte(decode_i8(bytes)?),
        TypeTag::Float => Value::Float(decode_f32(bytes)?),
        TypeTag::Double => Value::Double(decode_f64(bytes)?),
        TypeTag::BigDecimal => Value::Decimal(decode_decimal(bytes)?),
        TypeTag::Boolean => Value::Boolean(decode_bool(bytes, strict_boolean)?),
        TypeTag::Text => Value::Text(decode_utf8(tag, bytes)?),
        TypeTag::Symbol => Value::Symbol(decode_utf8(tag, bytes)?),
        TypeTag::Raw => Value::Raw(bytes.to_vec()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_ascending<T: std::fmt::Debug, const N: usize>(
        values: &[T],
        encode: fn(&T) -> [u8; N],
    ) {
        for pair in values.windows(2) {
            assert!(
                encode(&pair[0]) < encode(&pair[1]),
                "{:?} should sort before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    // ========================================================================
    // Sort order tests
    // ========================================================================

    #[test]
    fn sort_order_i64() {
        assert_ascending(
            &[i64::MIN, i64::MIN + 1, -1000, -2, -1, 0, 1, 2, 1000, i64::MAX - 1, i64::MAX],
            |i| encode_i64(*i),
        );
    }

    #[test]
    fn sort_order_i32() {
        assert_ascending(&[i32::MIN, -70_000, -1, 0, 1, 70_000, i32::MAX], |i| encode_i32(*i));
    }

    #[test]
    fn sort_order_i16() {
        assert_ascending(&[i16::MIN, -300, -1, 0, 1, 300, i16::MAX], |i| encode_i16(*i));
    }

    #[test]
    fn sort_order_i8() {
        let all: Vec<i8> = (i8::MIN..=i8::MAX).collect();
        assert_ascending(&all, |i| encode_i8(*i));
    }

    #[test]
    fn sort_order_f64() {
        assert_ascending(
            &[
                f64::NEG_INFINITY,
                -1000.0,
                -1.0,
                -f64::MIN_POSITIVE,
                -0.0,
                0.0,
                5e-324,
                f64::MIN_POSITIVE,
                1.0,
                1000.0,
                f64::INFINITY,
                f64::NAN,
            ],
            |f| encode_f64(*f),
        );
    }

    #[test]
    fn sort_order_f32() {
        assert_ascending(
            &[f32::NEG_INFINITY, -1.5, -0.0, 0.0, f32::MIN_POSITIVE, 1.5, f32::INFINITY],
            |f| encode_f32(*f),
        );
    }

    #[test]
    fn bool_order() {
        assert!(encode_bool(false) < encode_bool(true));
        assert_eq!(encode_bool(true), [0x01]);
    }

    // ========================================================================
    // Layout tests
    // ========================================================================

    #[test]
    fn integer_layouts() {
        assert_eq!(encode_i64(0), [0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_i64(-1), [0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encode_i32(1), [0x80, 0, 0, 1]);
        assert_eq!(encode_i16(i16::MIN), [0x00, 0x00]);
        assert_eq!(encode_i8(i8::MAX), [0xFF]);
    }

    #[test]
    fn decimal_layout() {
        let mut buf = Vec::new();
        encode_decimal(&Decimal::new(12345, 2), &mut buf);
        // scale 2, unscaled 12345 = 0x3039
        assert_eq!(buf, vec![0, 0, 0, 2, 0x30, 0x39]);

        buf.clear();
        encode_decimal(&Decimal::new(-1, 0), &mut buf);
        assert_eq!(buf, vec![0, 0, 0, 0, 0xFF]);

        buf.clear();
        encode_decimal(&Decimal::new(128, 0), &mut buf);
        assert_eq!(buf, vec![0, 0, 0, 0, 0x00, 0x80]);

        buf.clear();
        encode_decimal(&Decimal::ZERO, &mut buf);
        assert_eq!(buf, vec![0, 0, 0, 0, 0x00]);
    }

    // ========================================================================
    // Round-trip tests
    // ========================================================================

    #[test]
    fn roundtrip_integers() {
        for i in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(decode_i64(&encode_i64(i)).unwrap(), i);
        }
        for i in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(decode_i32(&encode_i32(i)).unwrap(), i);
        }
        for i in [i16::MIN, 0, i16::MAX] {
            assert_eq!(decode_i16(&encode_i16(i)).unwrap(), i);
        }
        for i in i8::MIN..=i8::MAX {
            assert_eq!(decode_i8(&encode_i8(i)).unwrap(), i);
        }
    }

    #[test]
    fn roundtrip_floats_bit_exact() {
        let nan_with_payload = f64::from_bits(0x7FF8_0000_0000_0042);
        let negative_nan = f64::from_bits(0xFFF8_0000_0000_0001);
        for f in [f64::NEG_INFINITY, -0.0, 0.0, 1.5, f64::MAX, nan_with_payload, negative_nan] {
            assert_eq!(decode_f64(&encode_f64(f)).unwrap().to_bits(), f.to_bits());
        }
        for f in [f32::MIN, -0.0, 0.0, f32::NAN, f32::EPSILON] {
            assert_eq!(decode_f32(&encode_f32(f)).unwrap().to_bits(), f.to_bits());
        }
    }

    #[test]
    fn roundtrip_decimals_keep_scale() {
        for d in [
            Decimal::new(12345, 2),
            Decimal::new(-12345, 2),
            Decimal::new(100, 2),
            Decimal::ZERO,
            Decimal::MAX,
            Decimal::MIN,
            Decimal::new(1, 28),
        ] {
            let mut buf = Vec::new();
            encode_decimal(&d, &mut buf);
            let decoded = decode_decimal(&buf).unwrap();
            assert_eq!(decoded, d);
            assert_eq!(decoded.scale(), d.scale());
        }
    }

    #[test]
    fn negative_zero_decimal_encodes_as_zero() {
        let negative_zero = Decimal::from_parts(0, 0, 0, true, 2);
        let mut buf = Vec::new();
        encode_decimal(&negative_zero, &mut buf);
        assert_eq!(buf, vec![0, 0, 0, 2, 0x00]);

        let decoded = decode_decimal(&buf).unwrap();
        assert!(decoded.is_zero());
        assert!(!decoded.is_sign_negative());
        assert_eq!(decoded.scale(), 2);
    }

    // ========================================================================
    // Error handling tests
    // ========================================================================

    #[test]
    fn wrong_widths_fail() {
        assert!(decode_i64(&[0; 7]).is_err());
        assert!(decode_i64(&[0; 9]).is_err());
        assert!(decode_i32(&[0; 8]).is_err());
        assert!(decode_i16(&[]).is_err());
        assert!(decode_i8(&[0, 0]).is_err());
        assert!(decode_f32(&[0; 8]).is_err());
        assert!(decode_f64(&[0; 4]).is_err());
        assert!(decode_bool(&[], true).is_err());
    }

    #[test]
    fn boolean_strictness() {
        assert!(decode_bool(&[0x02], true).is_err());
        assert!(decode_bool(&[0x02], false).unwrap());
        assert!(!decode_bool(&[0x00], false).unwrap());
    }

    #[test]
    fn malformed_decimals_fail() {
        // Scale only
        assert!(decode_decimal(&[0, 0, 0, 2]).is_err());
        // Scale beyond 28
        assert!(decode_decimal(&[0, 0, 0, 29, 1]).is_err());
        // Mantissa wider than an i128
        assert!(decode_decimal(&[0; 21]).is_err());
        // Redundant sign bytes
        assert!(decode_decimal(&[0, 0, 0, 0, 0x00, 0x05]).is_err());
        assert!(decode_decimal(&[0, 0, 0, 0, 0xFF, 0xFF]).is_err());
        assert!(decode_decimal(&[0, 0, 0, 0, 0x00, 0x80]).is_ok());
        assert!(decode_decimal(&[0, 0, 0, 0, 0xFF, 0x7F]).is_ok());
        // Mantissa wider than 96 bits
        let mut too_big = vec![0, 0, 0, 0];
        too_big.extend_from_slice(&[0x7F; 16]);
        assert!(decode_decimal(&too_big).is_err());
    }

    #[test]
    fn invalid_utf8_fails() {
        let err = decode_value(TypeTag::Text, &[0xFF, 0xFE], true).unwrap_err();
        assert!(matches!(err, CodecError::MalformedEncoding { .. }));
        assert!(decode_value(TypeTag::Symbol, &[0xC0], true).is_err());
        assert_eq!(decode_value(TypeTag::Raw, &[0xFF], true).unwrap(), Value::Raw(vec![0xFF]));
    }
}
