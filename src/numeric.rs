//! Hex, quantity, and big-integer conversions for the wire format.
//!
//! Everything here is a pure transformation between decimal text, hex text
//! (with or without the `0x` marker), raw bytes, and [`BigInt`]. The script
//! assembler and the transaction layer both build on these primitives, so
//! each conversion either succeeds losslessly or fails with a typed error.

use std::borrow::Cow;

use num_bigint::{BigInt, Sign};
use rust_decimal::Decimal;

use crate::error::{DecodeError, EncodeError};

/// Encodes a nonnegative integer as a minimal `0x`-prefixed hex quantity.
///
/// Zero encodes as `"0x0"`; anything else gets no leading zero padding.
pub fn encode_quantity(value: &BigInt) -> Result<String, EncodeError> {
    if value.sign() == Sign::Minus {
        return Err(EncodeError::NegativeValue);
    }
    Ok(format!("0x{}", value.to_str_radix(16)))
}

/// Decodes a minimal `0x`-prefixed hex quantity back into an integer.
///
/// Rejects missing prefixes, the bare `"0x"`, and zero-padded forms such as
/// `"0x00"`; only `"0x0"` may start with a `'0'` digit.
pub fn decode_quantity(value: &str) -> Result<BigInt, DecodeError> {
    if !is_valid_hex_quantity(value) {
        return Err(DecodeError::InvalidQuantity(value.to_string()));
    }
    BigInt::parse_bytes(value[2..].as_bytes(), 16)
        .ok_or_else(|| DecodeError::InvalidQuantity(value.to_string()))
}

fn is_valid_hex_quantity(value: &str) -> bool {
    value.len() >= 3
        && value.starts_with("0x")
        && !(value.len() > 3 && value[2..].starts_with('0'))
}

/// Whether the input starts with the `0x` marker.
pub fn contains_hex_prefix(input: &str) -> bool {
    input.starts_with("0x")
}

/// Strips a leading `0x` marker if present.
pub fn clean_hex_prefix(input: &str) -> &str {
    input.strip_prefix("0x").unwrap_or(input)
}

/// Adds the `0x` marker unless the input already carries one.
pub fn prepend_hex_prefix(input: &str) -> Cow<'_, str> {
    if contains_hex_prefix(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("0x{input}"))
    }
}

/// Whether the input (after any `0x` marker) is even-length hex.
///
/// The empty string is valid.
pub fn is_valid_hex(input: &str) -> bool {
    let clean = clean_hex_prefix(input);
    clean.len() % 2 == 0 && clean.chars().all(|c| c.is_ascii_hexdigit())
}

/// Decodes hex text (optionally `0x`-prefixed) into bytes.
///
/// Odd-length input is legal: the first character alone becomes the first
/// byte, holding just that digit's value in its low nibble, and the remaining
/// characters pair up normally. `"123"` therefore decodes to `[0x01, 0x23]`,
/// not `[0x12, 0x3?]`. The wire format depends on this exact behavior.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    let clean = clean_hex_prefix(input);
    if clean.len() % 2 == 0 {
        return decode_pairs(clean);
    }
    let mut chars = clean.chars();
    match chars.next() {
        Some(c) => {
            let lead = c.to_digit(16).ok_or(DecodeError::InvalidHexDigit { c })? as u8;
            let mut bytes = Vec::with_capacity(clean.len() / 2 + 1);
            bytes.push(lead);
            bytes.extend(decode_pairs(chars.as_str())?);
            Ok(bytes)
        }
        None => Ok(Vec::new()),
    }
}

fn decode_pairs(clean: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(clean).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, .. } => DecodeError::InvalidHexDigit { c },
        _ => DecodeError::InvalidHex(clean.to_string()),
    })
}

/// Encodes bytes as `0x`-prefixed lowercase hex, two characters per byte.
pub fn to_hex_string(input: &[u8]) -> String {
    format!("0x{}", hex::encode(input))
}

/// Encodes bytes as lowercase hex without the `0x` marker.
pub fn to_hex_string_no_prefix(input: &[u8]) -> String {
    hex::encode(input)
}

/// Interprets bytes as an unsigned big-endian magnitude.
pub fn to_big_int(value: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, value)
}

/// Parses hex text (optionally `0x`-prefixed) as a radix-16 integer.
pub fn hex_to_big_int(input: &str) -> Result<BigInt, DecodeError> {
    let clean = clean_hex_prefix(input);
    BigInt::parse_bytes(clean.as_bytes(), 16)
        .ok_or_else(|| DecodeError::InvalidHex(input.to_string()))
}

/// Decodes hex text that stores its bytes in little-endian order.
pub fn hex_to_integer(input: &str) -> Result<BigInt, DecodeError> {
    hex_to_big_int(&reverse_hex(input)?)
}

/// Decodes hex text and re-encodes it with the byte order reversed.
///
/// Used wherever the wire format stores a big-endian-presented value in
/// little-endian byte order; the result carries no `0x` marker.
pub fn reverse_hex(input: &str) -> Result<String, DecodeError> {
    let mut bytes = hex_to_bytes(input)?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}

/// Decodes hex text into UTF-8 text, substituting replacement characters
/// for invalid sequences.
pub fn hex_to_string(input: &str) -> Result<String, DecodeError> {
    let bytes = hex_to_bytes(input)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encodes an integer into exactly `length` big-endian bytes.
///
/// The sign byte a positive magnitude acquires in two's complement is
/// stripped before padding, so 255 fits a single byte. Magnitudes wider than
/// `length` fail rather than truncate.
pub fn to_bytes_padded(value: &BigInt, length: usize) -> Result<Vec<u8>, EncodeError> {
    let bytes = value.to_signed_bytes_be();
    let magnitude = match bytes.split_first() {
        Some((&0, rest)) => rest,
        _ => &bytes[..],
    };
    if magnitude.len() > length {
        return Err(EncodeError::ValueTooLarge {
            needed: magnitude.len(),
            width: length,
        });
    }
    let mut padded = vec![0u8; length];
    padded[length - magnitude.len()..].copy_from_slice(magnitude);
    Ok(padded)
}

/// Renders a nonnegative integer as hex, left-padded with zeros to exactly
/// `size` characters.
pub fn to_hex_string_zero_padded(value: &BigInt, size: usize) -> Result<String, EncodeError> {
    zero_padded(value, size, false)
}

/// Like [`to_hex_string_zero_padded`], with the `0x` marker prepended.
pub fn to_hex_string_zero_padded_with_prefix(
    value: &BigInt,
    size: usize,
) -> Result<String, EncodeError> {
    zero_padded(value, size, true)
}

fn zero_padded(value: &BigInt, size: usize, with_prefix: bool) -> Result<String, EncodeError> {
    let rendered = value.to_str_radix(16);
    if rendered.len() > size {
        return Err(EncodeError::ValueTooWide { width: size });
    }
    if value.sign() == Sign::Minus {
        return Err(EncodeError::NegativeValue);
    }
    let padded = format!("{rendered:0>size$}");
    Ok(if with_prefix {
        format!("0x{padded}")
    } else {
        padded
    })
}

/// Parses decimal text into a [`Decimal`].
pub fn parse_decimal(value: &str) -> Result<Decimal, DecodeError> {
    value
        .parse::<Decimal>()
        .map_err(|_| DecodeError::InvalidDecimal(value.to_string()))
}

/// Whether a decimal value is an integer: zero, or no significant fractional
/// digits once trailing zeros are removed.
pub fn is_integer_value(value: Decimal) -> bool {
    value.is_zero() || value.scale() == 0 || value.normalize().scale() == 0
}
