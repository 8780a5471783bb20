#![allow(missing_docs)]
//! Throughput of `decode`/`encode` over a representative document.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jsonish::{decode, encode, DecodeOptions, EncodeOptions, Value};

const DOCUMENT: &str = r#"{
  "id": 1047,
  "name": "Widget",
  "tags": ["a", "b", "c", "d", "e"],
  "price": 19.99,
  "in_stock": true,
  "description": null,
  "variants": [
    {"sku": "W-1", "qty": 3},
    {"sku": "W-2", "qty": 0},
    {"sku": "W-3", "qty": 12}
  ]
}"#;

fn decode_strict(c: &mut Criterion) {
    c.bench_function("decode_strict", |b| {
        b.iter(|| decode(black_box(DOCUMENT.as_bytes()), DecodeOptions {
            strict: true,
            ..Default::default()
        }))
    });
}

fn decode_loose(c: &mut Criterion) {
    c.bench_function("decode_loose", |b| {
        b.iter(|| decode(black_box(DOCUMENT.as_bytes()), DecodeOptions::default()))
    });
}

fn encode_compact(c: &mut Criterion) {
    let value: Value = decode(DOCUMENT.as_bytes(), DecodeOptions::default()).unwrap();
    c.bench_function("encode_compact", |b| {
        b.iter(|| encode(black_box(&value), EncodeOptions::default()))
    });
}

criterion_group!(benches, decode_strict, decode_loose, encode_compact);
criterion_main!(benches);
