//! Consumes a quoted string literal, resolving escapes and assembling UTF-16
//! surrogate pairs into scalar codepoints.

use crate::error::SyntaxError;
use crate::scanner::Scanner;

/// Reads a quoted string. On entry the scanner must sit at the opening `"`;
/// on success it sits one past the closing `"`.
pub(crate) fn read_string(scanner: &mut Scanner, strict: bool) -> Result<String, SyntaxError> {
    debug_assert_eq!(scanner.peek_byte(), Some(b'"'));
    scanner.advance_ascii();

    let mut out = String::new();
    // A `\uD800`..`\uDBFF` escape leaves its code unit here until the very
    // next thing read is its low-surrogate partner; anything else observed
    // in the meantime is a lone surrogate.
    let mut pending_high_surrogate: Option<u16> = None;

    loop {
        let Some(b) = scanner.peek_byte() else {
            return Err(SyntaxError::UnterminatedString);
        };
        match b {
            b'"' => {
                if pending_high_surrogate.is_some() {
                    return Err(SyntaxError::LoneSurrogate);
                }
                scanner.advance_ascii();
                return Ok(out);
            }
            b'\\' => {
                scanner.advance_ascii();
                read_escape(scanner, strict, &mut out, &mut pending_high_surrogate)?;
            }
            0x00..=0x1F => return Err(SyntaxError::InvalidControlCharInString),
            _ => {
                if pending_high_surrogate.is_some() {
                    return Err(SyntaxError::LoneSurrogate);
                }
                out.push(scanner.advance_codepoint()?);
            }
        }
    }
}

/// Pushes `ch`, first checking that no high surrogate is left dangling.
fn push_scalar(
    out: &mut String,
    pending: &mut Option<u16>,
    ch: char,
) -> Result<(), SyntaxError> {
    if pending.take().is_some() {
        return Err(SyntaxError::LoneSurrogate);
    }
    out.push(ch);
    Ok(())
}

/// Reads one escape sequence's target; the scanner sits just past the `\`.
fn read_escape(
    scanner: &mut Scanner,
    strict: bool,
    out: &mut String,
    pending_high_surrogate: &mut Option<u16>,
) -> Result<(), SyntaxError> {
    let next = scanner.peek_byte().ok_or(SyntaxError::InvalidEscape)?;
    match next {
        b'"' => {
            push_scalar(out, pending_high_surrogate, '"')?;
            scanner.advance_ascii();
        }
        b'\\' => {
            push_scalar(out, pending_high_surrogate, '\\')?;
            scanner.advance_ascii();
        }
        b'/' => {
            push_scalar(out, pending_high_surrogate, '/')?;
            scanner.advance_ascii();
        }
        b'b' => {
            push_scalar(out, pending_high_surrogate, '\u{0008}')?;
            scanner.advance_ascii();
        }
        b'f' => {
            push_scalar(out, pending_high_surrogate, '\u{000C}')?;
            scanner.advance_ascii();
        }
        b'n' => {
            push_scalar(out, pending_high_surrogate, '\n')?;
            scanner.advance_ascii();
        }
        b'r' => {
            push_scalar(out, pending_high_surrogate, '\r')?;
            scanner.advance_ascii();
        }
        b't' => {
            push_scalar(out, pending_high_surrogate, '\t')?;
            scanner.advance_ascii();
        }
        b'u' => {
            scanner.advance_ascii();
            read_unicode_escape(scanner, out, pending_high_surrogate)?;
        }
        b'\n' | b'\r' => {
            // Loose-only line continuation: both the backslash (already
            // consumed) and the line terminator are dropped.
            if strict {
                return Err(SyntaxError::LineContinuationInStrict);
            }
            if pending_high_surrogate.take().is_some() {
                return Err(SyntaxError::LoneSurrogate);
            }
            scanner.advance_ascii();
        }
        _ => return Err(SyntaxError::InvalidEscape),
    }
    Ok(())
}

/// Reads the four hex digits after `\u` and either assembles, starts, or
/// completes a surrogate pair.
fn read_unicode_escape(
    scanner: &mut Scanner,
    out: &mut String,
    pending_high_surrogate: &mut Option<u16>,
) -> Result<(), SyntaxError> {
    let unit = read_hex4(scanner)?;
    if let Some(hi) = pending_high_surrogate.take() {
        if (0xDC00..=0xDFFF).contains(&unit) {
            let scalar = 0x1_0000 + (u32::from(hi) - 0xD800) * 0x400 + (unit - 0xDC00);
            out.push(char::from_u32(scalar).expect("surrogate pair combination is always valid"));
        } else {
            return Err(SyntaxError::LoneSurrogate);
        }
    } else if (0xD800..=0xDBFF).contains(&unit) {
        *pending_high_surrogate = Some(u16::try_from(unit).expect("high surrogate fits in u16"));
    } else if (0xDC00..=0xDFFF).contains(&unit) {
        return Err(SyntaxError::LoneSurrogate);
    } else {
        out.push(char::from_u32(unit).expect("non-surrogate code unit is always a valid scalar value"));
    }
    Ok(())
}

fn read_hex4(scanner: &mut Scanner) -> Result<u32, SyntaxError> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let b = scanner.peek_byte().ok_or(SyntaxError::InvalidUnicodeEscape)?;
        let digit = (b as char)
            .to_digit(16)
            .ok_or(SyntaxError::InvalidUnicodeEscape)?;
        value = value * 16 + digit;
        scanner.advance_ascii();
    }
    Ok(value)
}
