//! Typed parameters for contract invocations.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::numeric;

/// A tagged value destined for the VM stack.
///
/// The variant alone determines how [`crate::ScriptBuilder`] encodes the
/// payload; nothing is coerced between variants. Serialization follows the
/// RPC wire form, `{"type": "<Variant>", "value": ...}`, with binary payloads
/// rendered as hex text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ContractParameter {
    /// A raw signature, pushed exactly as given.
    Signature(#[serde(with = "serde_hex")] Vec<u8>),
    /// Bytes given either as hex text or as literal text.
    ByteArray(String),
    Boolean(bool),
    /// An arbitrary-precision integer as decimal text.
    Integer(String),
    /// A 20-byte hash as hex text, stored on the wire byte-reversed.
    Hash160(String),
    /// A 32-byte hash as hex text, stored on the wire byte-reversed.
    Hash256(String),
    /// Reserved; no encoding is defined for it yet.
    PublicKey(String),
    String(String),
    /// An ordered sequence, packed on the VM stack.
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    pub fn boolean(value: bool) -> ContractParameter {
        ContractParameter::Boolean(value)
    }

    /// Builds an integer parameter from any integer type.
    pub fn integer(value: impl Into<BigInt>) -> ContractParameter {
        ContractParameter::Integer(value.into().to_string())
    }

    pub fn byte_array(value: impl Into<String>) -> ContractParameter {
        ContractParameter::ByteArray(value.into())
    }

    pub fn byte_array_from_bytes(bytes: &[u8]) -> ContractParameter {
        ContractParameter::ByteArray(numeric::to_hex_string_no_prefix(bytes))
    }

    pub fn signature(bytes: impl Into<Vec<u8>>) -> ContractParameter {
        ContractParameter::Signature(bytes.into())
    }

    pub fn signature_from_hex(value: &str) -> Result<ContractParameter, DecodeError> {
        Ok(ContractParameter::Signature(numeric::hex_to_bytes(value)?))
    }

    pub fn hash160(value: impl Into<String>) -> ContractParameter {
        ContractParameter::Hash160(value.into())
    }

    pub fn hash256(value: impl Into<String>) -> ContractParameter {
        ContractParameter::Hash256(value.into())
    }

    pub fn string(value: impl Into<String>) -> ContractParameter {
        ContractParameter::String(value.into())
    }

    pub fn array(values: Vec<ContractParameter>) -> ContractParameter {
        ContractParameter::Array(values)
    }

    /// The canonical variant name, as it appears in the wire form.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContractParameter::Signature(_) => "Signature",
            ContractParameter::ByteArray(_) => "ByteArray",
            ContractParameter::Boolean(_) => "Boolean",
            ContractParameter::Integer(_) => "Integer",
            ContractParameter::Hash160(_) => "Hash160",
            ContractParameter::Hash256(_) => "Hash256",
            ContractParameter::PublicKey(_) => "PublicKey",
            ContractParameter::String(_) => "String",
            ContractParameter::Array(_) => "Array",
        }
    }
}

mod serde_hex {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        crate::numeric::hex_to_bytes(&text).map_err(D::Error::custom)
    }
}
