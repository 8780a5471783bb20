#![no_main]

use arbitrary::Arbitrary;
use jsonish::{decode, encode, DecodeOptions, EncodeOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    strict: bool,
    max_depth: u8,
    ensure_ascii: bool,
    escape_solidus: bool,
    bytes: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let decode_options = DecodeOptions {
        strict: input.strict,
        // Zero would reject every value at depth 0; keep it meaningful.
        max_depth: usize::from(input.max_depth).max(1),
    };

    let Ok(value) = decode(&input.bytes, decode_options) else {
        return;
    };

    let encode_options = EncodeOptions {
        ensure_ascii: input.ensure_ascii,
        max_depth: decode_options.max_depth,
        escape_solidus: input.escape_solidus,
        pretty: false,
    };

    // Anything that decoded successfully must also encode without panicking
    // (a non-finite float is the only expected failure, and floats parsed
    // from JSON text are always finite).
    let Ok(text) = encode(&value, encode_options) else {
        return;
    };

    // And the re-encoded text must decode back to an equal value.
    let roundtripped = decode(text.as_bytes(), DecodeOptions {
        strict: true,
        max_depth: decode_options.max_depth,
    })
    .expect("encoder output must be valid strict JSON");
    assert_eq!(roundtripped, value);
});
