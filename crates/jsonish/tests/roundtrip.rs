#![allow(missing_docs)]
//! Property: encoding a value and decoding the result back must reproduce
//! the original value, for arbitrary (finite-float) value trees.

use jsonish::{decode, encode, DecodeOptions, EncodeOptions, Value};
use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

/// A finite float, since `NaN`/`Infinity` have no JSON representation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FiniteFloat(f64);

impl Arbitrary for FiniteFloat {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut v = f64::arbitrary(g);
        while !v.is_finite() {
            v = f64::arbitrary(g);
        }
        Self(v)
    }
}

/// An arbitrary, depth-bounded [`Value`] tree, wrapped to sidestep the
/// orphan rule (`Value` and `Arbitrary` both live outside this crate).
#[derive(Debug, Clone, PartialEq)]
struct ArbitraryValue(Value);

impl Arbitrary for ArbitraryValue {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_value(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Bool(bool::arbitrary(g)),
                    2 => Value::Integer(i64::arbitrary(g)),
                    _ => Value::Float(FiniteFloat::arbitrary(g).0),
                }
            } else {
                match usize::arbitrary(g) % 7 {
                    0 => Value::Null,
                    1 => Value::Bool(bool::arbitrary(g)),
                    2 => Value::Integer(i64::arbitrary(g)),
                    3 => Value::Float(FiniteFloat::arbitrary(g).0),
                    4 => Value::String(String::arbitrary(g)),
                    5 => {
                        let len = usize::arbitrary(g) % 4;
                        Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 4;
                        let mut map = jsonish::Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_value(g, depth - 1));
                        }
                        Value::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        Self(gen_value(g, depth))
    }
}

#[quickcheck]
fn encode_then_decode_is_identity(value: ArbitraryValue) -> bool {
    let text = encode(&value.0, EncodeOptions::default()).expect("finite floats always encode");
    let decoded = decode(text.as_bytes(), DecodeOptions {
        strict: true,
        ..Default::default()
    })
    .unwrap_or_else(|e| panic!("encoder output {text:?} failed to decode: {e}"));
    decoded == value.0
}

#[test]
fn object_key_order_does_not_affect_equality_after_a_round_trip() {
    fn prop(value: ArbitraryValue) -> bool {
        let text = encode(&value.0, EncodeOptions::default()).unwrap();
        let pretty = encode(&value.0, EncodeOptions {
            pretty: true,
            ..Default::default()
        })
        .unwrap();
        decode(text.as_bytes(), DecodeOptions {
            strict: true,
            ..Default::default()
        }) == decode(pretty.as_bytes(), DecodeOptions {
            strict: true,
            ..Default::default()
        })
    }
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(ArbitraryValue) -> bool);
}

#[test]
fn decode_never_exceeds_its_own_depth_limit_on_deeply_nested_input() {
    let input = "[".repeat(64) + &"]".repeat(64);
    let options = DecodeOptions {
        strict: false,
        max_depth: 16,
    };
    assert!(decode(input.as_bytes(), options).is_err());
}
