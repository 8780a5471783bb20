//! Recursive-descent value parser built on the scanner, string reader, and
//! number reader.
//!
//! The entry point ([`decode_into`]) parses exactly one value, then
//! requires the rest of the input to be insignificant, matching the spec's
//! "one document per call" contract (no streaming, no concatenated values).

use crate::error::{make_snippet, DecodeError, Position, SyntaxError};
use crate::host::HostBuild;
use crate::number_reader::{self, NumberLexeme};
use crate::options::DecodeOptions;
use crate::scanner::Scanner;
use crate::string_reader;

const SNIPPET_LEN: usize = 40;

fn err(scanner: &Scanner, kind: SyntaxError) -> DecodeError {
    err_at(scanner, scanner.position(), kind)
}

fn err_at(scanner: &Scanner, position: Position, kind: SyntaxError) -> DecodeError {
    let snippet = make_snippet(scanner.input(), position.offset, SNIPPET_LEN);
    DecodeError::new(kind, position, snippet)
}

/// Decodes `bytes` into a host value `H`, per `options`.
///
/// This is the generic form of [`crate::decode`]; most callers should use
/// that instead. Use this directly to decode straight into a host value
/// model other than [`crate::Value`] by implementing [`HostBuild`] for it.
pub fn decode_into<H: HostBuild>(bytes: &[u8], options: DecodeOptions) -> Result<H, DecodeError> {
    let mut scanner = Scanner::new(bytes);
    scanner
        .skip_insignificant(options.strict)
        .map_err(|e| err(&scanner, e))?;
    let value = parse_value::<H>(&mut scanner, options.strict, options.max_depth, 0)?;
    scanner
        .skip_insignificant(options.strict)
        .map_err(|e| err(&scanner, e))?;
    if !scanner.is_eof() {
        return Err(err(&scanner, SyntaxError::TrailingGarbage));
    }
    Ok(value)
}

fn parse_value<H: HostBuild>(
    scanner: &mut Scanner,
    strict: bool,
    max_depth: usize,
    depth: usize,
) -> Result<H, DecodeError> {
    let Some(b) = scanner.peek_byte() else {
        return Err(err(scanner, SyntaxError::UnexpectedEof));
    };
    match b {
        b'{' => parse_object(scanner, strict, max_depth, depth),
        b'[' => parse_array(scanner, strict, max_depth, depth),
        b'"' => {
            let s = string_reader::read_string(scanner, strict).map_err(|e| err(scanner, e))?;
            Ok(H::string(s))
        }
        b't' => parse_literal(scanner, "true", H::bool(true)),
        b'f' => parse_literal(scanner, "false", H::bool(false)),
        b'n' => parse_literal(scanner, "null", H::null()),
        b'-' | b'0'..=b'9' => parse_number(scanner, strict),
        b'.' if !strict => parse_number(scanner, strict),
        _ => Err(err(scanner, SyntaxError::UnexpectedCharacter)),
    }
}

fn parse_literal<H: HostBuild>(
    scanner: &mut Scanner,
    lit: &'static str,
    value: H,
) -> Result<H, DecodeError> {
    if scanner.eat_literal(lit) {
        Ok(value)
    } else {
        Err(err(scanner, SyntaxError::UnexpectedCharacter))
    }
}

fn parse_number<H: HostBuild>(scanner: &mut Scanner, strict: bool) -> Result<H, DecodeError> {
    let start = scanner.position();
    match number_reader::read_number(scanner, strict) {
        Ok(NumberLexeme::Integer(i)) => Ok(H::integer(i)),
        Ok(NumberLexeme::Float(f)) => Ok(H::float(f)),
        Err(e) => Err(err_at(scanner, start, e)),
    }
}

fn parse_object<H: HostBuild>(
    scanner: &mut Scanner,
    strict: bool,
    max_depth: usize,
    depth: usize,
) -> Result<H, DecodeError> {
    let depth = depth + 1;
    if depth > max_depth {
        return Err(err(scanner, SyntaxError::DepthExceeded));
    }
    scanner.advance_ascii(); // '{'
    let mut builder = H::ObjectBuilder::default();

    skip_ws(scanner, strict)?;
    if scanner.peek_byte() == Some(b'}') {
        scanner.advance_ascii();
        return Ok(H::object_finish(builder));
    }

    loop {
        if scanner.peek_byte() != Some(b'"') {
            return Err(err(scanner, SyntaxError::ExpectedStringKey));
        }
        let key = string_reader::read_string(scanner, strict).map_err(|e| err(scanner, e))?;

        skip_ws(scanner, strict)?;
        if scanner.peek_byte() != Some(b':') {
            return Err(err(scanner, SyntaxError::ExpectedColon));
        }
        scanner.advance_ascii();
        skip_ws(scanner, strict)?;

        let value = parse_value::<H>(scanner, strict, max_depth, depth)?;
        H::object_insert(&mut builder, key, value);

        skip_ws(scanner, strict)?;
        match scanner.peek_byte() {
            Some(b',') => {
                scanner.advance_ascii();
                skip_ws(scanner, strict)?;
                if scanner.peek_byte() == Some(b'}') {
                    if strict {
                        return Err(err(scanner, SyntaxError::TrailingCommaInStrict));
                    }
                    scanner.advance_ascii();
                    return Ok(H::object_finish(builder));
                }
            }
            Some(b'}') => {
                scanner.advance_ascii();
                return Ok(H::object_finish(builder));
            }
            _ => return Err(err(scanner, SyntaxError::ExpectedComma)),
        }
    }
}

fn parse_array<H: HostBuild>(
    scanner: &mut Scanner,
    strict: bool,
    max_depth: usize,
    depth: usize,
) -> Result<H, DecodeError> {
    let depth = depth + 1;
    if depth > max_depth {
        return Err(err(scanner, SyntaxError::DepthExceeded));
    }
    scanner.advance_ascii(); // '['
    let mut builder = H::ArrayBuilder::default();

    skip_ws(scanner, strict)?;
    if scanner.peek_byte() == Some(b']') {
        scanner.advance_ascii();
        return Ok(H::array_finish(builder));
    }

    loop {
        let value = parse_value::<H>(scanner, strict, max_depth, depth)?;
        H::array_push(&mut builder, value);

        skip_ws(scanner, strict)?;
        match scanner.peek_byte() {
            Some(b',') => {
                scanner.advance_ascii();
                skip_ws(scanner, strict)?;
                if scanner.peek_byte() == Some(b']') {
                    if strict {
                        return Err(err(scanner, SyntaxError::TrailingCommaInStrict));
                    }
                    scanner.advance_ascii();
                    return Ok(H::array_finish(builder));
                }
            }
            Some(b']') => {
                scanner.advance_ascii();
                return Ok(H::array_finish(builder));
            }
            _ => return Err(err(scanner, SyntaxError::ExpectedComma)),
        }
    }
}

fn skip_ws(scanner: &mut Scanner, strict: bool) -> Result<(), DecodeError> {
    scanner.skip_insignificant(strict).map_err(|e| err(scanner, e))
}
