//! The materialized, immutable form of an assembled script.

use std::fmt;
use std::ops::Deref;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::numeric;

/// A finished VM script.
///
/// Produced by [`crate::ScriptBuilder::to_script`]; once created the bytes
/// never change. The transaction layer treats it as opaque.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new(bytes: Vec<u8>) -> Script {
        Script(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex rendering without the `0x` marker, the form scripts
    /// take inside transaction JSON.
    pub fn to_hex(&self) -> String {
        numeric::to_hex_string_no_prefix(&self.0)
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Script {
        Script(bytes)
    }
}

impl From<Script> for Vec<u8> {
    fn from(script: Script) -> Vec<u8> {
        script.0
    }
}

impl Deref for Script {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        numeric::hex_to_bytes(&encoded)
            .map(Script)
            .map_err(D::Error::custom)
    }
}
