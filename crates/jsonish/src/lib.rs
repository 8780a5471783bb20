//! A lenient JSON codec.
//!
//! [`decode`] accepts RFC-8259 JSON by default, plus ("loose" mode, the
//! default) a handful of common relaxations: trailing commas in arrays and
//! objects, `//` and `/* */` comments, numbers with an omitted leading zero
//! (`.5`), and backslash-newline line continuations inside string literals.
//! Set [`DecodeOptions::strict`] to reject all of these and accept only
//! RFC-8259 grammar.
//!
//! [`encode`] writes a [`Value`] back out as JSON text, with a configurable
//! escape policy ([`EncodeOptions`]).
//!
//! Both functions are generic over the in-memory value representation they
//! build into or read from (see [`host`]); [`Value`] is the concrete,
//! always-available representation most callers want.
//!
//! ```rust
//! use jsonish::{decode, DecodeOptions};
//!
//! let v = decode(b"{ trailing: 1, } // a comment", DecodeOptions::default());
//! assert!(v.is_err()); // `trailing` is not a quoted string key
//!
//! let v = decode(br#"{"a": 1,} // a comment"#, DecodeOptions::default()).unwrap();
//! assert_eq!(v.as_object().unwrap().len(), 1);
//! ```

mod encoder;
mod error;
pub mod host;
mod number_reader;
mod options;
mod parser;
mod scanner;
mod string_reader;
mod value;

pub use error::{DecodeError, EncodeError, EncodeErrorKind, Position, SyntaxError};
pub use host::{HostBuild, HostInspect, ValueKind};
pub use options::{DecodeOptions, EncodeOptions};
pub use value::{Array, Map, Value};

/// Decodes `bytes` into a [`Value`], per `options`.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the first grammar violation found, the
/// position it was found at, and a short snippet of the offending input.
pub fn decode(bytes: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    parser::decode_into(bytes, options)
}

/// Decodes `bytes` directly into a host value model `H`, per `options`.
///
/// See [`host`] for how to implement [`HostBuild`] for a representation
/// other than [`Value`].
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the first grammar violation found, the
/// position it was found at, and a short snippet of the offending input.
pub fn decode_into<H: HostBuild>(bytes: &[u8], options: DecodeOptions) -> Result<H, DecodeError> {
    parser::decode_into(bytes, options)
}

/// Encodes `value` as JSON text, per `options`.
///
/// # Errors
///
/// Returns an [`EncodeError`] if `value` contains a non-finite float or
/// exceeds `options.max_depth`.
pub fn encode(value: &Value, options: EncodeOptions) -> Result<String, EncodeError> {
    encoder::encode_into(value, options)
}

/// Encodes a host value model `H` as JSON text, per `options`.
///
/// See [`host`] for how to implement [`HostInspect`] for a representation
/// other than [`Value`].
///
/// # Errors
///
/// Returns an [`EncodeError`] if `value` contains a non-finite float or
/// exceeds `options.max_depth`.
pub fn encode_into<H: HostInspect>(value: &H, options: EncodeOptions) -> Result<String, EncodeError> {
    encoder::encode_into(value, options)
}
