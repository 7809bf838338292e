//! Integration tests for the literal scenario table (SPEC_FULL.md §8).

use mpack::value::Value;
use mpack::{decode_stream, encode_value, MPackError};

fn decode_one(bytes: &[u8]) -> Value {
    let (roots, count) = decode_stream(bytes).unwrap();
    assert_eq!(count, 1);
    roots.into_iter().next().unwrap()
}

#[test]
fn scenario_01_nil() {
    assert_eq!(decode_one(&[0xC0]), Value::Nil);
}

#[test]
fn scenario_02_bool_true() {
    assert_eq!(decode_one(&[0xC3]), Value::Bool(true));
}

#[test]
fn scenario_03_positive_fixnum() {
    assert_eq!(decode_one(&[0x7F]), Value::Int(127));
}

#[test]
fn scenario_04_uint8() {
    assert_eq!(decode_one(&[0xCC, 0xFF]), Value::Int(255));
}

#[test]
fn scenario_05_fixstr() {
    assert_eq!(
        decode_one(&[0xA3, 0x66, 0x6F, 0x6F]),
        Value::Str(b"foo".to_vec())
    );
}

#[test]
fn scenario_06_fixarray() {
    assert_eq!(
        decode_one(&[0x92, 0x01, 0x02]),
        Value::Array(vec![Value::int(1), Value::int(2)])
    );
}

#[test]
fn scenario_07_fixmap() {
    let mut expected = Value::map();
    expected.insert("a", Value::int(1)).unwrap();
    expected.insert("b", Value::bool(false)).unwrap();
    assert_eq!(
        decode_one(&[0x82, 0xA1, 0x61, 0x01, 0xA1, 0x62, 0xC2]),
        expected
    );
}

#[test]
fn scenario_08_empty_blob() {
    assert_eq!(decode_one(&[0xC4, 0x00]), Value::Bin(vec![]));
}

#[test]
fn scenario_09_fixext1() {
    assert_eq!(decode_one(&[0xD4, 0x07, 0x2A]), Value::Ext(7, vec![0x2A]));
}

#[test]
fn scenario_10_three_top_level_roots() {
    let (roots, count) = decode_stream(&[0xC0, 0xC3, 0x7F]).unwrap();
    assert_eq!(count, 3);
    assert_eq!(
        roots,
        vec![Value::nil(), Value::bool(true), Value::int(127)]
    );
}

// Scenarios 11/12 (the two CLI filters) are covered in tests/cli.rs, which
// spawns the actual binaries.

#[test]
fn unknown_header_byte_is_rejected() {
    assert_eq!(decode_stream(&[0xC1]), Err(MPackError::Unknown(0xC1)));
}

#[test]
fn truncated_stream_is_rejected() {
    assert_eq!(decode_stream(&[0xCC]), Err(MPackError::Truncated));
}

#[test]
fn round_trip_preserves_nested_structure() {
    let mut m = Value::map();
    m.insert("name", Value::str("alice")).unwrap();
    m.insert(
        "tags",
        Value::Array(vec![Value::int(1), Value::uint(2), Value::float(1.5)]),
    )
    .unwrap();
    m.insert("blob", Value::bin(vec![0xDE, 0xAD])).unwrap();
    m.insert("ext", Value::ext(-1, vec![1, 2, 3, 4])).unwrap();

    let bytes = encode_value(&m);
    let (roots, count) = decode_stream(&bytes).unwrap();
    assert_eq!(count, 1);
    assert_eq!(roots[0], m);
}

#[test]
fn integer_width_boundaries_round_trip() {
    let boundaries = [
        0i64,
        127,
        128,
        255,
        256,
        65535,
        65536,
        i32::MAX as i64,
        i32::MAX as i64 + 1,
        i64::MAX,
        -1,
        -32,
        -33,
        -128,
        -129,
        -32768,
        -32769,
        i32::MIN as i64,
        i32::MIN as i64 - 1,
        i64::MIN,
    ];
    for n in boundaries {
        let v = Value::int(n);
        let bytes = encode_value(&v);
        let (roots, _) = decode_stream(&bytes).unwrap();
        assert_eq!(roots[0], v, "round trip failed for {n}");
    }
}

#[test]
fn fixext_selects_powers_of_two_others_fall_to_ext8() {
    for len in [1usize, 2, 4, 8, 16] {
        let bytes = encode_value(&Value::ext(3, vec![0u8; len]));
        assert_ne!(bytes[0], 0xC7, "length {len} should use a fixext header");
    }
    for len in [3usize, 5, 6, 7, 9, 17] {
        let bytes = encode_value(&Value::ext(3, vec![0u8; len]));
        assert_eq!(bytes[0], 0xC7, "length {len} should fall back to ext8");
    }
}
