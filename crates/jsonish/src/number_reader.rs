//! Consumes a number literal and classifies it as integer or float.

use crate::error::SyntaxError;
use crate::scanner::Scanner;

/// A number literal, classified by shape rather than by value: the decoder
/// never inspects the digits to decide integer-vs-float, only whether a
/// fractional part or exponent was present.
pub(crate) enum NumberLexeme {
    /// No `.` and no exponent, and the value fit in a signed 64-bit integer.
    Integer(i64),
    /// Has a `.`, an exponent, or overflowed a signed 64-bit integer.
    Float(f64),
}

/// Reads a number literal starting at the scanner's current position.
///
/// The caller (the value parser) has already confirmed the current byte is
/// `-`, a digit, or (loose mode only) `.`.
pub(crate) fn read_number(scanner: &mut Scanner, strict: bool) -> Result<NumberLexeme, SyntaxError> {
    let start = scanner.offset();

    if scanner.peek_byte() == Some(b'-') {
        scanner.advance_ascii();
    }

    read_integer_part(scanner, strict)?;

    let mut has_fraction = false;
    let mut has_exponent = false;

    if scanner.peek_byte() == Some(b'.') {
        has_fraction = true;
        scanner.advance_ascii();
        read_digit_run(scanner)?;
    }

    if matches!(scanner.peek_byte(), Some(b'e' | b'E')) {
        has_exponent = true;
        scanner.advance_ascii();
        if matches!(scanner.peek_byte(), Some(b'+' | b'-')) {
            scanner.advance_ascii();
        }
        read_digit_run(scanner)?;
    }

    // A second `.` (e.g. `-44.4.4`) directly attached to the literal, with
    // no intervening separator, is malformed rather than "a number followed
    // by something else".
    if scanner.peek_byte() == Some(b'.') {
        return Err(SyntaxError::MalformedNumber);
    }

    let text = std::str::from_utf8(&scanner.input()[start..scanner.offset()])
        .expect("number literal is pure ASCII");

    if has_fraction || has_exponent {
        let value: f64 = text.parse().map_err(|_| SyntaxError::MalformedNumber)?;
        Ok(NumberLexeme::Float(value))
    } else if let Ok(value) = text.parse::<i64>() {
        Ok(NumberLexeme::Integer(value))
    } else {
        // No arbitrary-precision integer facility: fall back to float for an
        // integer literal that overflows i64 (see DESIGN.md).
        let value: f64 = text.parse().map_err(|_| SyntaxError::MalformedNumber)?;
        Ok(NumberLexeme::Float(value))
    }
}

/// Integer part: a single `0`, or a digit `1..9` followed by more digits.
/// Loose mode additionally allows omitting the integer part entirely when a
/// fractional part follows (the `.` is left for the caller to consume).
fn read_integer_part(scanner: &mut Scanner, strict: bool) -> Result<(), SyntaxError> {
    match scanner.peek_byte() {
        Some(b'0') => {
            scanner.advance_ascii();
            if matches!(scanner.peek_byte(), Some(b'0'..=b'9')) {
                return Err(SyntaxError::MalformedNumber);
            }
            Ok(())
        }
        Some(b'1'..=b'9') => {
            scanner.advance_ascii();
            read_digit_run(scanner)
        }
        Some(b'.') if !strict => Ok(()),
        Some(b'.') => Err(SyntaxError::MissingLeadingZeroInStrict),
        _ => Err(SyntaxError::MalformedNumber),
    }
}

/// Consumes zero or more ASCII digits; used where the grammar already
/// guarantees at least one digit is required and checked by the caller.
fn read_digit_run(scanner: &mut Scanner) -> Result<(), SyntaxError> {
    match scanner.peek_byte() {
        Some(b'0'..=b'9') => {
            while matches!(scanner.peek_byte(), Some(b'0'..=b'9')) {
                scanner.advance_ascii();
            }
            Ok(())
        }
        _ => Err(SyntaxError::MalformedNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, strict: bool) -> Result<NumberLexeme, SyntaxError> {
        let mut scanner = Scanner::new(input.as_bytes());
        read_number(&mut scanner, strict)
    }

    fn assert_int(input: &str, expected: i64) {
        match read(input, false).unwrap() {
            NumberLexeme::Integer(v) => assert_eq!(v, expected),
            NumberLexeme::Float(v) => panic!("expected integer, got float {v}"),
        }
    }

    fn assert_float(input: &str, expected: f64) {
        match read(input, false).unwrap() {
            NumberLexeme::Float(v) => assert_eq!(v, expected),
            NumberLexeme::Integer(v) => panic!("expected float, got integer {v}"),
        }
    }

    #[test]
    fn plain_integer() {
        assert_int("123", 123);
    }

    #[test]
    fn negative_integer() {
        assert_int("-123", -123);
    }

    #[test]
    fn zero() {
        assert_int("0", 0);
    }

    #[test]
    fn float_with_fraction() {
        assert_float("1.5", 1.5);
    }

    #[test]
    fn float_with_exponent() {
        assert_float("1e10", 1e10);
    }

    #[test]
    fn float_with_fraction_and_exponent() {
        assert_float("1.5e-3", 1.5e-3);
    }

    #[test]
    fn loose_mode_allows_missing_leading_zero() {
        assert_float(".123", 0.123);
    }

    #[test]
    fn strict_mode_rejects_missing_leading_zero() {
        assert_eq!(
            read(".123", true).unwrap_err(),
            SyntaxError::MissingLeadingZeroInStrict
        );
    }

    #[test]
    fn strict_mode_rejects_leading_zero_before_digits() {
        assert_eq!(read("0123", true).unwrap_err(), SyntaxError::MalformedNumber);
    }

    #[test]
    fn loose_mode_still_rejects_extra_leading_zero() {
        assert_eq!(read("0123", false).unwrap_err(), SyntaxError::MalformedNumber);
    }

    #[test]
    fn second_decimal_point_is_malformed() {
        assert_eq!(read("-44.4.4", false).unwrap_err(), SyntaxError::MalformedNumber);
    }

    #[test]
    fn overflowing_integer_falls_back_to_float() {
        match read("99999999999999999999", false).unwrap() {
            NumberLexeme::Float(_) => {}
            NumberLexeme::Integer(v) => panic!("expected float fallback, got integer {v}"),
        }
    }
}
