//! Instruction opcodes of the Neo legacy (2.x) virtual machine.
//!
//! The byte values are fixed by the VM's instruction set and must never be
//! changed here. `ScriptBuilder` emits a small subset of them; the full table
//! is kept so scripts and disassemblies read against one authoritative enum.

/// A single-byte VM instruction.
///
/// `0x01`..=`0x4B` double as data pushes where the opcode byte itself is the
/// length of the data that follows; only the named sizes from that range are
/// listed as variants.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    // Constants
    /// Pushes an empty byte array onto the stack, which numerically is zero.
    PUSH0 = 0x00,
    /// The next 1 byte is pushed as data.
    PUSHBYTES1 = 0x01,
    /// The next 33 bytes are pushed as data (the size of an encoded public key).
    PUSHBYTES33 = 0x21,
    /// The next 64 bytes are pushed as data (the size of a raw signature).
    PUSHBYTES64 = 0x40,
    /// The next 75 bytes are pushed as data; largest direct push.
    PUSHBYTES75 = 0x4B,
    /// The next byte is the length of the data to push.
    PUSHDATA1 = 0x4C,
    /// The next two bytes (little-endian) are the length of the data to push.
    PUSHDATA2 = 0x4D,
    /// The next four bytes (little-endian) are the length of the data to push.
    PUSHDATA4 = 0x4E,
    /// Pushes the number -1 onto the stack.
    PUSHM1 = 0x4F,
    /// Pushes the number 1 onto the stack.
    PUSH1 = 0x51,
    /// Pushes the number 2 onto the stack.
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    /// Pushes the number 16 onto the stack; largest small-integer push.
    PUSH16 = 0x60,

    // Flow control
    NOP = 0x61,
    JMP = 0x62,
    JMPIF = 0x63,
    JMPIFNOT = 0x64,
    CALL = 0x65,
    RET = 0x66,
    /// Invokes the contract whose 20-byte identifier follows, little-endian.
    APPCALL = 0x67,
    /// Invokes an interop service by its length-prefixed name.
    SYSCALL = 0x68,
    /// Like [`OpCode::APPCALL`] but discards the current context first.
    TAILCALL = 0x69,

    // Stack
    DUPFROMALTSTACK = 0x6A,
    TOALTSTACK = 0x6B,
    FROMALTSTACK = 0x6C,
    XDROP = 0x6D,
    XSWAP = 0x72,
    XTUCK = 0x73,
    DEPTH = 0x74,
    DROP = 0x75,
    DUP = 0x76,
    NIP = 0x77,
    OVER = 0x78,
    PICK = 0x79,
    ROLL = 0x7A,
    ROT = 0x7B,
    SWAP = 0x7C,
    TUCK = 0x7D,

    // Splice
    CAT = 0x7E,
    SUBSTR = 0x7F,
    LEFT = 0x80,
    RIGHT = 0x81,
    SIZE = 0x82,

    // Bitwise logic
    INVERT = 0x83,
    AND = 0x84,
    OR = 0x85,
    XOR = 0x86,
    EQUAL = 0x87,

    // Arithmetic
    INC = 0x8B,
    DEC = 0x8C,
    SIGN = 0x8D,
    NEGATE = 0x8F,
    ABS = 0x90,
    NOT = 0x91,
    NZ = 0x92,
    ADD = 0x93,
    SUB = 0x94,
    MUL = 0x95,
    DIV = 0x96,
    MOD = 0x97,
    SHL = 0x98,
    SHR = 0x99,
    BOOLAND = 0x9A,
    BOOLOR = 0x9B,
    NUMEQUAL = 0x9C,
    NUMNOTEQUAL = 0x9E,
    LT = 0x9F,
    GT = 0xA0,
    LTE = 0xA1,
    GTE = 0xA2,
    MIN = 0xA3,
    MAX = 0xA4,
    WITHIN = 0xA5,

    // Crypto
    SHA1 = 0xA7,
    SHA256 = 0xA8,
    HASH160 = 0xA9,
    HASH256 = 0xAA,
    CHECKSIG = 0xAC,
    VERIFY = 0xAD,
    CHECKMULTISIG = 0xAE,

    // Array
    ARRAYSIZE = 0xC0,
    /// Pops a count and that many items, pushing them back as one array.
    PACK = 0xC1,
    UNPACK = 0xC2,
    PICKITEM = 0xC3,
    SETITEM = 0xC4,
    NEWARRAY = 0xC5,
    NEWSTRUCT = 0xC6,
    NEWMAP = 0xC7,
    APPEND = 0xC8,
    REVERSE = 0xC9,
    REMOVE = 0xCA,
    HASKEY = 0xCB,
    KEYS = 0xCC,
    VALUES = 0xCD,

    // Stack isolation
    CALL_I = 0xE0,
    CALL_E = 0xE1,
    CALL_ED = 0xE2,
    CALL_ET = 0xE3,
    CALL_EDT = 0xE4,

    // Exceptions
    THROW = 0xF0,
    THROWIFNOT = 0xF1,
}

impl OpCode {
    /// Boolean `true`; same instruction as [`OpCode::PUSH1`].
    pub const PUSHT: OpCode = OpCode::PUSH1;
    /// Boolean `false`; same instruction as [`OpCode::PUSH0`].
    pub const PUSHF: OpCode = OpCode::PUSH0;
}
