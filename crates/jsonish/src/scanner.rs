//! Byte-level cursor over the input with lookahead-1 and position tracking.
//!
//! The scanner is the leaf of the decoder: it never allocates and never
//! knows about JSON grammar beyond whitespace and comments. The string
//! reader, number reader, and value parser are built on top of it.

use crate::error::{Position, SyntaxError};

/// A cursor over a byte slice, tracking byte offset, 1-based line, and
/// 1-based column (in Unicode scalar values).
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn input(&self) -> &'a [u8] {
        self.input
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_byte_at(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos + ahead).copied()
    }

    /// Returns `true` and consumes the upcoming bytes if they spell `lit`.
    /// Used for the `true`/`false`/`null` literals.
    pub(crate) fn eat_literal(&mut self, lit: &str) -> bool {
        let bytes = lit.as_bytes();
        if self.input[self.pos..].starts_with(bytes) {
            for _ in 0..bytes.len() {
                self.advance_ascii();
            }
            true
        } else {
            false
        }
    }

    /// Consumes a single ASCII byte, updating line/column. The caller must
    /// already know the current byte is ASCII (< 0x80) and exists.
    pub(crate) fn advance_ascii(&mut self) -> u8 {
        let b = self.input[self.pos];
        debug_assert!(b < 0x80, "advance_ascii called on a non-ASCII byte");
        self.pos += 1;
        match b {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\r' => {
                self.line += 1;
                self.column = 1;
                // CR LF counts as a single line break.
                if self.peek_byte() == Some(b'\n') {
                    self.pos += 1;
                }
            }
            _ => self.column += 1,
        }
        b
    }

    /// Decodes and consumes one Unicode scalar value starting at the
    /// current position, whether it is one ASCII byte or a multi-byte UTF-8
    /// sequence. Used for string content that is copied through verbatim.
    pub(crate) fn advance_codepoint(&mut self) -> Result<char, SyntaxError> {
        let b0 = self.peek_byte().ok_or(SyntaxError::UnexpectedEof)?;
        if b0 < 0x80 {
            return Ok(self.advance_ascii() as char);
        }
        let len = utf8_len(b0).ok_or(SyntaxError::InvalidUtf8)?;
        if self.pos + len > self.input.len() {
            return Err(SyntaxError::InvalidUtf8);
        }
        let candidate = &self.input[self.pos..self.pos + len];
        let s = std::str::from_utf8(candidate).map_err(|_| SyntaxError::InvalidUtf8)?;
        let ch = s.chars().next().ok_or(SyntaxError::InvalidUtf8)?;
        self.pos += len;
        self.column += 1;
        Ok(ch)
    }

    /// Skips whitespace and, in loose mode, comments. Leaves the cursor
    /// positioned at the next significant byte (or EOF).
    pub(crate) fn skip_insignificant(&mut self, strict: bool) -> Result<(), SyntaxError> {
        loop {
            match self.peek_byte() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.advance_ascii();
                }
                Some(b'/') if strict => {
                    return Err(SyntaxError::CommentInStrict);
                }
                Some(b'/') => {
                    self.skip_comment()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) -> Result<(), SyntaxError> {
        match self.peek_byte_at(1) {
            Some(b'/') => {
                self.advance_ascii();
                self.advance_ascii();
                loop {
                    match self.peek_byte() {
                        None | Some(b'\n' | b'\r') => break,
                        _ => {
                            self.advance_codepoint()?;
                        }
                    }
                }
                Ok(())
            }
            Some(b'*') => {
                self.advance_ascii();
                self.advance_ascii();
                loop {
                    match self.peek_byte() {
                        None => return Err(SyntaxError::UnterminatedComment),
                        Some(b'*') if self.peek_byte_at(1) == Some(b'/') => {
                            self.advance_ascii();
                            self.advance_ascii();
                            return Ok(());
                        }
                        _ => {
                            self.advance_codepoint()?;
                        }
                    }
                }
            }
            _ => Err(SyntaxError::UnexpectedCharacter),
        }
    }
}

/// The number of bytes a UTF-8 sequence occupies given its leading byte, or
/// `None` if the leading byte cannot start a valid sequence (a stray
/// continuation byte, an overlong-encoding lead, or a byte above `0xF4`).
fn utf8_len(b0: u8) -> Option<usize> {
    match b0 {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
