//! Invocation-script assembly and wire-format numeric encoding for the Neo
//! legacy (2.x) protocol.
//!
//! Two pieces work together:
//!
//! - the numeric/hex codec ([`numeric`] and [`fixed8`]), pure conversions
//!   between hex text, arbitrary-precision integers, raw bytes, and
//!   fixed-point asset amounts, and
//! - the script assembler ([`ScriptBuilder`]), which turns a contract
//!   identifier, an operation name, and typed [`ContractParameter`] values
//!   into the exact byte sequence the VM executes.
//!
//! The produced [`Script`] is handed to the transaction layer as-is; a single
//! wrong byte would invalidate the invocation, so every encoding rule here is
//! bit-exact and covered by byte-layout tests.
//!
//! ## Example
//!
//! ```rust
//! use neo_script::{ContractParameter, ScriptBuilder};
//!
//! let contract = [0x41u8; 20];
//! let mut builder = ScriptBuilder::new();
//! builder
//!     .emit_app_call(
//!         &contract,
//!         Some("transfer"),
//!         &[
//!             ContractParameter::hash160("23ba2703c53263e8d6e522dc32203339dcd8eee9"),
//!             ContractParameter::integer(1000),
//!         ],
//!     )
//!     .unwrap();
//!
//! let script = builder.to_script();
//! // APPCALL and the reversed contract identifier close the script.
//! assert_eq!(script[script.len() - 21], 0x67);
//! ```

pub mod contract_parameter;
pub mod error;
pub mod fixed8;
pub mod numeric;
pub mod op_code;
pub mod script;
pub mod script_builder;

pub use contract_parameter::ContractParameter;
pub use error::{BuildError, BuildResult, DecodeError, EncodeError};
pub use fixed8::Fixed8;
pub use op_code::OpCode;
pub use script::Script;
pub use script_builder::ScriptBuilder;
