#![allow(missing_docs)]
//! Encoder output, pinned with inline snapshots.

use jsonish::{encode, EncodeOptions, Value};

fn sample() -> Value {
    let mut inner = jsonish::Map::new();
    inner.insert("sku".into(), Value::String("W-1".into()));
    inner.insert("qty".into(), Value::Integer(3));

    let mut outer = jsonish::Map::new();
    outer.insert("name".into(), Value::String("caf\u{e9}/latte".into()));
    outer.insert("price".into(), Value::Float(1.0));
    outer.insert("in_stock".into(), Value::Bool(true));
    outer.insert("notes".into(), Value::Null);
    outer.insert("variants".into(), Value::Array(vec![Value::Object(inner)]));
    Value::Object(outer)
}

#[test]
fn compact_default_escaping() {
    let text = encode(&sample(), EncodeOptions::default()).unwrap();
    insta::assert_snapshot!(text, @r#"{"in_stock":true,"name":"café\/latte","notes":null,"price":1.0,"variants":[{"qty":3,"sku":"W-1"}]}"#);
}

#[test]
fn unescaped_solidus_and_raw_utf8() {
    let options = EncodeOptions {
        escape_solidus: false,
        ..Default::default()
    };
    let text = encode(&sample(), options).unwrap();
    insta::assert_snapshot!(text, @r#"{"in_stock":true,"name":"café/latte","notes":null,"price":1.0,"variants":[{"qty":3,"sku":"W-1"}]}"#);
}

#[test]
fn ensure_ascii_escapes_non_ascii_independent_of_solidus_policy() {
    let options = EncodeOptions {
        ensure_ascii: true,
        escape_solidus: false,
        ..Default::default()
    };
    let text = encode(&Value::String("café/latte".into()), options).unwrap();
    insta::assert_snapshot!(text, @r#""caf\u00e9/latte""#);
}

#[test]
fn pretty_printed_output() {
    let options = EncodeOptions {
        pretty: true,
        ..Default::default()
    };
    let text = encode(&sample(), options).unwrap();
    insta::assert_snapshot!(text, @r#"
    {
      "in_stock": true,
      "name": "café\/latte",
      "notes": null,
      "price": 1.0,
      "variants": [
        {
          "qty": 3,
          "sku": "W-1"
        }
      ]
    }
    "#);
}

#[test]
fn control_characters_use_short_escapes_where_available() {
    let v = Value::String("\u{08}\u{0C}\n\r\t\u{01}".into());
    let text = encode(&v, EncodeOptions::default()).unwrap();
    insta::assert_snapshot!(text, @r#""\b\f\n\r\t\u0001""#);
}
