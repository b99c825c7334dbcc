//! Fixed-point asset amounts with eight fractional decimal digits.
//!
//! Amounts are stored as a signed 64-bit integer scaled by 10^8 and travel on
//! the wire as exactly 8 big-endian bytes. The free functions mirror the
//! conversion chain the transaction layer uses: decimal value, scaled
//! integer, wire bytes, and back.

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{DecodeError, EncodeError};
use crate::numeric;

/// A fixed-point amount: a signed 64-bit integer scaled by 10^8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// Number of fractional decimal digits.
    pub const DECIMALS: u32 = 8;
    /// Factor between the raw integer and the decimal amount.
    pub const SCALE: i64 = 100_000_000;

    pub const ZERO: Fixed8 = Fixed8(0);
    pub const ONE: Fixed8 = Fixed8(Self::SCALE);
    pub const MIN: Fixed8 = Fixed8(i64::MIN);
    pub const MAX: Fixed8 = Fixed8(i64::MAX);

    /// Wraps an already-scaled raw value.
    pub fn from_raw(value: i64) -> Fixed8 {
        Fixed8(value)
    }

    /// The underlying scaled integer.
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Converts a decimal amount, truncating digits beyond the eighth.
    pub fn from_decimal(value: Decimal) -> Result<Fixed8, EncodeError> {
        let scaled = from_decimal_to_fixed8(value)?;
        match scaled.to_i64() {
            Some(raw) => Ok(Fixed8(raw)),
            None => Err(EncodeError::Fixed8OutOfRange {
                value: value.to_string(),
            }),
        }
    }

    /// The exact decimal amount, kept at scale 8 so one coin reads as
    /// `1.00000000`.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(self.0 as i128, Self::DECIMALS)
    }

    /// The 8-byte big-endian wire form.
    pub fn to_be_bytes(self) -> [u8; 8] {
        from_integer_to_fixed8_bytes(&BigInt::from(self.0))
            .expect("an i64 magnitude fits eight bytes")
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

/// Scales a decimal amount by 10^8 and truncates to an integer.
pub fn from_decimal_to_fixed8(value: Decimal) -> Result<BigInt, EncodeError> {
    let out_of_range = || EncodeError::Fixed8OutOfRange {
        value: value.to_string(),
    };
    let scaled = value
        .checked_mul(Decimal::from(Fixed8::SCALE))
        .ok_or_else(out_of_range)?
        .trunc();
    let scaled = scaled.to_i128().ok_or_else(out_of_range)?;
    Ok(BigInt::from(scaled))
}

/// Encodes an already-scaled integer into the 8-byte wire form.
///
/// The scaled value must lie within the signed 64-bit range.
pub fn from_integer_to_fixed8_bytes(value: &BigInt) -> Result<[u8; 8], EncodeError> {
    if value.to_i64().is_none() {
        return Err(EncodeError::Fixed8OutOfRange {
            value: value.to_string(),
        });
    }
    let padded = numeric::to_bytes_padded(value, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&padded);
    Ok(bytes)
}

/// Scales a decimal amount and encodes it into the 8-byte wire form.
pub fn from_decimal_to_fixed8_bytes(value: Decimal) -> Result<[u8; 8], EncodeError> {
    from_integer_to_fixed8_bytes(&from_decimal_to_fixed8(value)?)
}

/// Decodes the 8-byte wire form back into a decimal at scale 8.
///
/// The wire form is unsigned, so the full 64-bit range decodes even though
/// amounts above `i64::MAX` have no [`Fixed8`] representation.
pub fn from_fixed8_to_decimal(bytes: &[u8]) -> Result<Decimal, DecodeError> {
    if bytes.len() != 8 {
        return Err(DecodeError::InvalidFixed8Length { len: bytes.len() });
    }
    let mut array = [0u8; 8];
    array.copy_from_slice(bytes);
    let raw = u64::from_be_bytes(array);
    Ok(Decimal::from_i128_with_scale(raw as i128, Fixed8::DECIMALS))
}
