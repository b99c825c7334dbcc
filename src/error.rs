//! Error types for the codec and the script assembler.

use thiserror::Error;

/// A value cannot be represented in the requested target format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The unsigned formats carry no sign; negative input is unencodable.
    #[error("negative value has no unsigned hex representation")]
    NegativeValue,

    /// The magnitude needs more bytes than the target width allows.
    #[error("value needs {needed} bytes but the target width is {width}")]
    ValueTooLarge { needed: usize, width: usize },

    /// Zero-padded hex rendering would exceed the requested character count.
    #[error("value does not fit in {width} hex characters")]
    ValueTooWide { width: usize },

    /// The scaled fixed-point integer falls outside the signed 64-bit range.
    #[error("{value} does not fit the signed 64-bit fixed-point range")]
    Fixed8OutOfRange { value: String },
}

/// Malformed textual or binary input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not a canonical `0x`-prefixed minimal hex quantity.
    #[error("invalid hex quantity {0:?}")]
    InvalidQuantity(String),

    /// A character outside `[0-9a-fA-F]` in hex input.
    #[error("invalid hex character {c:?}")]
    InvalidHexDigit { c: char },

    /// Text that does not parse as hexadecimal at all.
    #[error("invalid hex text {0:?}")]
    InvalidHex(String),

    /// Text that does not parse as a decimal number.
    #[error("invalid decimal text {0:?}")]
    InvalidDecimal(String),

    /// A fixed-point byte value with the wrong length.
    #[error("fixed-point value must be 8 bytes long, got {len}")]
    InvalidFixed8Length { len: usize },
}

/// A script could not be assembled from the caller's input.
///
/// Raised synchronously by [`crate::ScriptBuilder`]; a build that fails leaves
/// the builder in an unspecified intermediate state and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Contract identifiers are exactly 160 bits.
    #[error("script hash must be 160 bits long, got {length} bytes")]
    InvalidScriptHashLength { length: usize },

    /// A `Hash160`/`Hash256` parameter payload with the wrong decoded length.
    #[error("hash parameter must be {expected} bytes long, got {length}")]
    InvalidHashLength { expected: usize, length: usize },

    /// Syscalls must name the interop service they invoke.
    #[error("syscall operation name is empty")]
    EmptySyscallName,

    /// The syscall name length must fit the single-byte prefix, capped at 252.
    #[error("syscall operation name is {length} bytes long, limit is 252")]
    SyscallNameTooLong { length: usize },

    /// A parameter variant with no encoding defined yet.
    #[error("parameter type {0} cannot be encoded yet")]
    UnsupportedParameter(&'static str),

    /// A codec failure while encoding a value into the script.
    #[error("unencodable value: {0}")]
    Encode(#[from] EncodeError),

    /// A codec failure while parsing caller-supplied text.
    #[error("invalid input text: {0}")]
    Decode(#[from] DecodeError),
}

/// Result alias for script assembly.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::InvalidScriptHashLength { length: 21 };
        assert_eq!(
            err.to_string(),
            "script hash must be 160 bits long, got 21 bytes"
        );

        let err = BuildError::from(DecodeError::InvalidHexDigit { c: 'g' });
        assert_eq!(err.to_string(), "invalid input text: invalid hex character 'g'");
    }

    #[test]
    fn test_codec_errors_nest_into_build_error() {
        let err: BuildError = EncodeError::NegativeValue.into();
        assert_eq!(err, BuildError::Encode(EncodeError::NegativeValue));
    }
}
