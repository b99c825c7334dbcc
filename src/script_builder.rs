//! Incremental assembly of invocation scripts.
//!
//! `ScriptBuilder` appends instructions to an owned byte buffer and hands the
//! finished sequence to the transaction layer. Infallible appends return
//! `&mut Self` for chaining; anything that validates caller input returns
//! `BuildResult<&mut Self>` instead. A build that fails leaves the buffer in
//! an unspecified intermediate state and must be discarded whole.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::contract_parameter::ContractParameter;
use crate::error::{BuildError, BuildResult, DecodeError};
use crate::numeric;
use crate::op_code::OpCode;
use crate::script::Script;

/// Assembles one VM script.
#[derive(Debug)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Appends a single raw byte.
    pub fn emit(&mut self, byte: u8) -> &mut Self {
        self.script.push(byte);
        self
    }

    /// Appends raw bytes.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Appends an opcode.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.emit(op as u8)
    }

    /// Pushes a boolean with its dedicated opcode, not as data.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    /// Pushes an integer; see [`ScriptBuilder::emit_push_bigint`].
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_bigint(&BigInt::from(value))
    }

    /// Pushes an integer with the minimal encoding.
    ///
    /// −1, 0, and 1..=16 each have a dedicated single-byte opcode; every
    /// other value becomes a data push of its minimal little-endian
    /// two's-complement bytes. The dedicated range is closed: larger values
    /// never borrow a small-value opcode, no matter how they truncate.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> &mut Self {
        if *value >= BigInt::from(-1) && *value <= BigInt::from(16) {
            if let Some(v) = value.to_i64() {
                return match v {
                    -1 => self.emit_opcode(OpCode::PUSHM1),
                    0 => self.emit_opcode(OpCode::PUSH0),
                    _ => {
                        let base = OpCode::PUSH1 as u8 - 1;
                        self.emit(base + v as u8)
                    }
                };
            }
        }
        let bytes = value.to_signed_bytes_le();
        self.emit_push(&bytes)
    }

    /// Writes the length header for a data push of `length` bytes.
    ///
    /// Up to 75 the byte doubles as opcode and length; 76..=255 uses
    /// PUSHDATA1, 256..=65535 PUSHDATA2 (little-endian), and beyond that
    /// PUSHDATA4 (little-endian).
    pub fn emit_push_length(&mut self, length: usize) -> &mut Self {
        if length <= OpCode::PUSHBYTES75 as usize {
            return self.emit(length as u8);
        }
        if length <= u8::MAX as usize {
            return self.emit_opcode(OpCode::PUSHDATA1).emit(length as u8);
        }
        if length <= u16::MAX as usize {
            self.emit_opcode(OpCode::PUSHDATA2);
            return self.emit_bytes(&(length as u16).to_le_bytes());
        }
        self.emit_opcode(OpCode::PUSHDATA4);
        self.emit_bytes(&(length as u32).to_le_bytes())
    }

    /// Pushes bytes as length-prefixed data.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        self.emit_push_length(data.len());
        self.emit_bytes(data)
    }

    /// Pushes text as its UTF-8 bytes, length-prefixed.
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    /// Pushes one typed parameter, dispatching on its variant.
    pub fn emit_push_param(&mut self, param: &ContractParameter) -> BuildResult<&mut Self> {
        match param {
            ContractParameter::Signature(bytes) => Ok(self.emit_push(bytes)),
            ContractParameter::ByteArray(text) => {
                if numeric::is_valid_hex(text) {
                    let bytes = numeric::hex_to_bytes(text)?;
                    Ok(self.emit_push(&bytes))
                } else {
                    Ok(self.emit_push(text.as_bytes()))
                }
            }
            ContractParameter::Boolean(value) => Ok(self.emit_push_bool(*value)),
            ContractParameter::Integer(text) => {
                let value: BigInt = text
                    .parse()
                    .map_err(|_| DecodeError::InvalidDecimal(text.clone()))?;
                Ok(self.emit_push_bigint(&value))
            }
            ContractParameter::Hash160(text) => self.emit_push_reversed_hash(text, 20),
            ContractParameter::Hash256(text) => self.emit_push_reversed_hash(text, 32),
            ContractParameter::String(text) => Ok(self.emit_push_string(text)),
            ContractParameter::Array(values) => self.emit_push_array(values),
            ContractParameter::PublicKey(_) => {
                Err(BuildError::UnsupportedParameter(param.type_name()))
            }
        }
    }

    /// Pushes parameters in reverse order, then the count, then PACK.
    ///
    /// The VM pops elements off its stack while packing, so pushing the last
    /// element first reconstructs the original order.
    pub fn emit_push_array(&mut self, params: &[ContractParameter]) -> BuildResult<&mut Self> {
        for param in params.iter().rev() {
            self.emit_push_param(param)?;
        }
        self.emit_push_int(params.len() as i64);
        Ok(self.emit_opcode(OpCode::PACK))
    }

    /// Assembles a contract call.
    ///
    /// An empty `params` slice counts as absent. The four presence
    /// combinations of `operation` and `params` produce distinct calling
    /// sequences; all four end with the APPCALL instruction followed by the
    /// identifier's bytes reversed.
    pub fn emit_app_call(
        &mut self,
        script_hash: &[u8],
        operation: Option<&str>,
        params: &[ContractParameter],
    ) -> BuildResult<&mut Self> {
        Self::check_script_hash(script_hash)?;
        trace!(operation, params = params.len(), "assembling app call");
        match (operation, params.is_empty()) {
            (None, true) => self.emit_call(script_hash, OpCode::APPCALL),
            (Some(op), true) => {
                self.emit_push_bool(false);
                self.emit_push_string(op);
                self.emit_call(script_hash, OpCode::APPCALL)
            }
            (None, false) => {
                // Arguments land directly on the stack here; only the
                // named-operation form packs them into one array.
                for param in params.iter().rev() {
                    self.emit_push_param(param)?;
                }
                self.emit_call(script_hash, OpCode::APPCALL)
            }
            (Some(op), false) => {
                for param in params.iter().rev() {
                    self.emit_push_param(param)?;
                }
                self.emit_push_int(params.len() as i64);
                self.emit_opcode(OpCode::PACK);
                self.emit_push_string(op);
                self.emit_call(script_hash, OpCode::APPCALL)
            }
        }
    }

    /// Assembles a call that discards the current context before invoking
    /// the target.
    pub fn emit_tail_call(&mut self, script_hash: &[u8]) -> BuildResult<&mut Self> {
        self.emit_call(script_hash, OpCode::TAILCALL)
    }

    /// Assembles an interop service call.
    ///
    /// The name must be non-empty and at most 252 bytes once UTF-8 encoded.
    pub fn emit_syscall(&mut self, operation: &str) -> BuildResult<&mut Self> {
        if operation.is_empty() {
            return Err(BuildError::EmptySyscallName);
        }
        let name = operation.as_bytes();
        if name.len() > 252 {
            return Err(BuildError::SyscallNameTooLong { length: name.len() });
        }
        trace!(operation, "assembling syscall");
        // Interop dispatch expects the opcode byte twice: `68 68 <len> <name>`.
        self.emit_opcode(OpCode::SYSCALL);
        self.emit_opcode(OpCode::SYSCALL);
        self.emit(name.len() as u8);
        Ok(self.emit_bytes(name))
    }

    fn emit_call(&mut self, script_hash: &[u8], op: OpCode) -> BuildResult<&mut Self> {
        Self::check_script_hash(script_hash)?;
        self.emit_opcode(op);
        // The identifier is stored little-endian on the wire.
        let mut reversed = script_hash.to_vec();
        reversed.reverse();
        Ok(self.emit_bytes(&reversed))
    }

    fn emit_push_reversed_hash(&mut self, value: &str, expected: usize) -> BuildResult<&mut Self> {
        let mut bytes = numeric::hex_to_bytes(value)?;
        if bytes.len() != expected {
            return Err(BuildError::InvalidHashLength {
                expected,
                length: bytes.len(),
            });
        }
        bytes.reverse();
        Ok(self.emit_push(&bytes))
    }

    fn check_script_hash(script_hash: &[u8]) -> BuildResult<()> {
        if script_hash.len() != 20 {
            return Err(BuildError::InvalidScriptHashLength {
                length: script_hash.len(),
            });
        }
        Ok(())
    }

    /// Number of bytes assembled so far.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Snapshots the assembled bytes; the builder stays usable.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Snapshots the assembled bytes as an immutable [`Script`].
    pub fn to_script(&self) -> Script {
        Script::new(self.script.clone())
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
