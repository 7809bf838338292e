//! Property-based round-trip tests (SPEC_FULL.md §8, invariant 1):
//! `decode(encode(value))` reproduces `value` for arbitrarily generated
//! trees, modulo the documented float32 collapse.

use mpack::value::Value;
use mpack::{decode_stream, encode_value};
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // Only values whose top bit is set stay `Value::UInt` through a
        // round trip -- anything that fits `i64` canonicalizes to
        // `Value::Int` on decode (see DESIGN.md, Open Question 3).
        ((i64::MAX as u64 + 1)..=u64::MAX).prop_map(Value::UInt),
        any::<f64>()
            .prop_filter("finite only", |f| f.is_finite())
            .prop_map(Value::Float),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Str),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bin),
        (any::<i8>(), proptest::collection::vec(any::<u8>(), 0..32))
            .prop_map(|(etype, data)| Value::Ext(etype, data)),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            proptest::collection::vec(
                (
                    proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::Str),
                    inner
                ),
                0..8
            )
            .prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn decode_of_encode_is_identity(v in value_strategy()) {
        let bytes = encode_value(&v);
        let (roots, count) = decode_stream(&bytes).unwrap();
        prop_assert_eq!(count, 1);
        prop_assert_eq!(&roots[0], &v);
    }

    #[test]
    fn decode_never_panics_on_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        // No assertion on the result beyond "it returns" -- garbage input
        // must fail cleanly (Err), not panic or hang.
        let _ = decode_stream(&bytes);
    }
}
