//! Configuration records accepted by [`crate::decode`] and [`crate::encode`].

/// Configuration for [`crate::decode`].
///
/// # Examples
///
/// ```rust
/// use jsonish::{decode, DecodeOptions};
///
/// let options = DecodeOptions {
///     strict: true,
///     ..Default::default()
/// };
/// assert!(decode(b"{\"a\":1,}", options).is_err());
/// ```
///
/// # Default
///
/// `strict` is `false`; `max_depth` is `1024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// When `true`, only RFC-8259 grammar is accepted: no trailing commas,
    /// no comments, no numbers with an omitted leading zero, and no
    /// backslash-newline line continuations inside strings.
    ///
    /// When `false` ("loose" or "JSON-ish" mode), all of the above are
    /// accepted in addition to the RFC-8259 grammar.
    pub strict: bool,

    /// The maximum nesting depth of arrays and objects. Exceeding this
    /// depth fails the decode with [`crate::SyntaxError::DepthExceeded`]
    /// rather than risking stack exhaustion on adversarial input.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 1024,
        }
    }
}

/// Configuration for [`crate::encode`].
///
/// # Default
///
/// All fields default to `false`, except `max_depth` (`1024`) and
/// `escape_solidus` (`true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Force non-ASCII codepoints into `\uXXXX` form (surrogate pairs above
    /// U+FFFF) instead of emitting them as UTF-8.
    pub ensure_ascii: bool,

    /// The maximum nesting depth the encoder will descend. Since this codec
    /// does not track visited nodes, this limit is also what surfaces a
    /// cyclic input graph as [`crate::EncodeErrorKind::DepthExceeded`]
    /// instead of looping forever.
    pub max_depth: usize,

    /// Emit `/` as `\/` (the default) rather than as a plain `/`.
    ///
    /// Both forms decode identically; this only affects which bytes the
    /// encoder writes.
    pub escape_solidus: bool,

    /// Insert two-space indentation and newlines between tokens.
    ///
    /// This only changes whitespace between tokens; it never changes which
    /// characters are escaped inside strings.
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ensure_ascii: false,
            max_depth: 1024,
            escape_solidus: true,
            pretty: false,
        }
    }
}
