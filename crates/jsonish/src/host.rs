//! The host value model boundary.
//!
//! This codec does not hard-depend on its own [`crate::Value`] type for
//! decoding and encoding; it parameterises over constructors
//! ([`HostBuild`]) and inspectors ([`HostInspect`]) the way the spec's
//! abstract "host value model" describes. [`crate::Value`] is simply the
//! default, always-available implementation of both traits, grounded on the
//! same shape as a dynamically-typed host object system would expose.
//!
//! Implement these traits once to decode straight into, or encode straight
//! out of, a different in-memory representation (for example, a scripting
//! language's own value type) without forking the scanner, string reader,
//! number reader, or escape tables.

/// The discriminant of a value, used by [`HostInspect::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number with neither a fractional part nor an exponent that fits in
    /// 64 bits.
    Integer,
    /// Any other number.
    Float,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// Constructors the decoder uses to build a host value.
///
/// Arrays and objects are built incrementally (push/insert as each element
/// or member is parsed) rather than assembled into an intermediate `Vec`
/// first, so a host that owns its own growable array/map type can grow it
/// directly.
pub trait HostBuild: Sized {
    /// Accumulator for an in-progress array.
    type ArrayBuilder: Default;
    /// Accumulator for an in-progress object.
    type ObjectBuilder: Default;

    /// Build `null`.
    fn null() -> Self;
    /// Build a boolean.
    fn bool(b: bool) -> Self;
    /// Build an integer that fit in 64 bits.
    fn integer(i: i64) -> Self;
    /// Build a float (used for numbers with a fractional part, an exponent,
    /// or an integer literal too large for 64 bits).
    fn float(f: f64) -> Self;
    /// Build a string from its fully-decoded scalar-value content.
    fn string(s: String) -> Self;

    /// Push a just-parsed element onto an in-progress array.
    fn array_push(builder: &mut Self::ArrayBuilder, value: Self);
    /// Finish an array, consuming its builder.
    fn array_finish(builder: Self::ArrayBuilder) -> Self;

    /// Insert a just-parsed member into an in-progress object. A duplicate
    /// key overwrites any value already inserted under it.
    fn object_insert(builder: &mut Self::ObjectBuilder, key: String, value: Self);
    /// Finish an object, consuming its builder.
    fn object_finish(builder: Self::ObjectBuilder) -> Self;
}

/// Inspectors the encoder uses to read a host value.
///
/// Callers are expected to check [`HostInspect::kind`] before calling the
/// variant-specific accessors; calling the wrong accessor for the current
/// kind panics, the same contract `serde_json::Value`'s `as_*` family
/// documents (except here the caller has already switched on `kind`, so the
/// mismatch only happens if a [`HostInspect`] impl itself is buggy).
pub trait HostInspect {
    /// The discriminant of this value.
    fn kind(&self) -> ValueKind;
    /// Read the boolean payload. Only valid when `kind() == ValueKind::Bool`.
    fn as_bool(&self) -> bool;
    /// Read the integer payload. Only valid when
    /// `kind() == ValueKind::Integer`.
    fn as_integer(&self) -> i64;
    /// Read the float payload. Only valid when `kind() == ValueKind::Float`.
    fn as_float(&self) -> f64;
    /// Read the string payload. Only valid when
    /// `kind() == ValueKind::String`.
    fn as_str(&self) -> &str;
    /// Read the array payload. Only valid when `kind() == ValueKind::Array`.
    fn as_array(&self) -> &[Self]
    where
        Self: Sized;
    /// Iterate the object payload's entries in unspecified order. Only valid
    /// when `kind() == ValueKind::Object`.
    fn object_entries(&self) -> impl Iterator<Item = (&str, &Self)>
    where
        Self: Sized;
}
