//! Byte-layout tests for assembled invocation scripts, including a captured
//! mainnet-style reference script used as a golden regression check.

use neo_script::numeric::{hex_to_bytes, parse_decimal};
use neo_script::{fixed8, ContractParameter, ScriptBuilder};

const CONTRACT_HASH_HEX: &str = "1a70eac53f5882e40dd90f55463cce31a9f72cd4";
const ACCOUNT_SCRIPT_HASH_HEX: &str = "23ba2703c53263e8d6e522dc32203339dcd8eee9";

/// The invocation script of a previously captured `register` transaction:
/// the domain arguments go straight onto the stack (no operation name), and
/// the contract identifier trails the APPCALL opcode byte-reversed.
const REGISTER_SCRIPT_HEX: &str = "1423ba2703c53263e8d6e522dc32203339dcd8eee9\
                                   076e656f2e636f6d52c108726567697374657267d4\
                                   2cf7a931ce3c46550fd90de482583fc5ea701a";

fn contract_hash() -> Vec<u8> {
    hex_to_bytes(CONTRACT_HASH_HEX).unwrap()
}

fn register_params() -> Vec<ContractParameter> {
    vec![
        ContractParameter::string("register"),
        ContractParameter::array(vec![
            ContractParameter::string("neo.com"),
            ContractParameter::byte_array(ACCOUNT_SCRIPT_HASH_HEX),
        ]),
    ]
}

#[test]
fn register_invocation_matches_captured_reference() {
    let mut builder = ScriptBuilder::new();
    builder
        .emit_app_call(&contract_hash(), None, &register_params())
        .unwrap();

    let script = builder.to_script();
    assert_eq!(script.len(), 61);
    assert_eq!(script.to_hex(), REGISTER_SCRIPT_HEX);
}

#[test]
fn register_invocation_composes_from_explicit_pushes() {
    let params = register_params();

    let mut composed = ScriptBuilder::new();
    for param in params.iter().rev() {
        composed.emit_push_param(param).unwrap();
    }
    composed.emit_app_call(&contract_hash(), None, &[]).unwrap();

    let mut direct = ScriptBuilder::new();
    direct
        .emit_app_call(&contract_hash(), None, &params)
        .unwrap();

    assert_eq!(composed.to_array(), direct.to_array());
}

#[test]
fn named_operation_invocation_packs_its_arguments() {
    let args = vec![ContractParameter::array(vec![
        ContractParameter::string("neo.com"),
        ContractParameter::byte_array(ACCOUNT_SCRIPT_HASH_HEX),
    ])];

    let mut builder = ScriptBuilder::new();
    builder
        .emit_app_call(&contract_hash(), Some("register"), &args)
        .unwrap();

    let mut expected = Vec::new();
    expected.push(0x14);
    expected.extend(hex_to_bytes(ACCOUNT_SCRIPT_HASH_HEX).unwrap());
    expected.push(0x07);
    expected.extend(b"neo.com");
    expected.push(0x52); // inner element count
    expected.push(0xc1); // PACK
    expected.push(0x51); // outer argument count
    expected.push(0xc1); // PACK
    expected.push(0x08);
    expected.extend(b"register");
    expected.push(0x67); // APPCALL
    let mut reversed_hash = contract_hash();
    reversed_hash.reverse();
    expected.extend(reversed_hash);

    assert_eq!(builder.to_array(), expected);
}

#[test]
fn syscall_layout_doubles_the_opcode() {
    let mut builder = ScriptBuilder::new();
    builder.emit_syscall("Neo.Storage.GetContext").unwrap();

    let mut expected = vec![0x68, 0x68, 0x16];
    expected.extend(b"Neo.Storage.GetContext");
    assert_eq!(builder.to_array(), expected);
}

#[test]
fn asset_amount_flows_from_decimal_to_script() {
    // 0.001 of an asset is 100000 in fixed-point form; as an argument it
    // becomes a three-byte little-endian data push.
    let scaled = fixed8::from_decimal_to_fixed8(parse_decimal("0.001").unwrap()).unwrap();
    let amount = ContractParameter::integer(scaled);

    let mut builder = ScriptBuilder::new();
    builder.emit_push_param(&amount).unwrap();
    assert_eq!(builder.to_array(), vec![0x03, 0xa0, 0x86, 0x01]);
}
