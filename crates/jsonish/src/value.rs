//! The in-repo host value model: [`Value`] and its [`Map`]/[`Array`]
//! aliases.
//!
//! This type is both a normal, usable JSON value type and this crate's own
//! reference implementation of the [`crate::host`] traits, so the codec can
//! be fully exercised without any external host object system.

use std::collections::BTreeMap;
use std::fmt;

use crate::host::{HostBuild, HostInspect, ValueKind};

/// A JSON object's backing map.
///
/// Key uniqueness is enforced (a duplicate key overwrites); insertion order
/// is not preserved, matching the spec's invariant that the host mapping
/// need not remember it.
pub type Map = BTreeMap<String, Value>;

/// A JSON array's backing sequence.
pub type Array = Vec<Value>;

/// A JSON value.
///
/// # Examples
///
/// ```rust
/// use jsonish::Value;
///
/// let mut map = jsonish::Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number literal with neither a fractional part nor an exponent that
    /// fit in a signed 64-bit integer.
    Integer(i64),
    /// Any other number literal.
    Float(f64),
    /// A string.
    String(String),
    /// An array, in source order.
    Array(Array),
    /// An object.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Value::Bool`].
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Value::Integer`] or [`Value::Float`].
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Value::Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the string payload, or `None` if this is not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the array payload, or `None` if this is not an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrows the object payload, or `None` if this is not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders this value with [`crate::EncodeOptions::default`].
    ///
    /// # Panics
    ///
    /// Panics if the value contains a `NaN` or infinite float, since those
    /// have no JSON representation. Use [`crate::encode`] directly to handle
    /// that case without panicking.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::encode(self, crate::EncodeOptions::default())
            .expect("Value::to_string: value contained a non-finite float");
        f.write_str(&text)
    }
}

impl HostBuild for Value {
    type ArrayBuilder = Array;
    type ObjectBuilder = Map;

    fn null() -> Self {
        Self::Null
    }

    fn bool(b: bool) -> Self {
        Self::Bool(b)
    }

    fn integer(i: i64) -> Self {
        Self::Integer(i)
    }

    fn float(f: f64) -> Self {
        Self::Float(f)
    }

    fn string(s: String) -> Self {
        Self::String(s)
    }

    fn array_push(builder: &mut Self::ArrayBuilder, value: Self) {
        builder.push(value);
    }

    fn array_finish(builder: Self::ArrayBuilder) -> Self {
        Self::Array(builder)
    }

    fn object_insert(builder: &mut Self::ObjectBuilder, key: String, value: Self) {
        builder.insert(key, value);
    }

    fn object_finish(builder: Self::ObjectBuilder) -> Self {
        Self::Object(builder)
    }
}

impl HostInspect for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            _ => unreachable!("as_bool called on a non-bool Value"),
        }
    }

    fn as_integer(&self) -> i64 {
        match self {
            Self::Integer(i) => *i,
            _ => unreachable!("as_integer called on a non-integer Value"),
        }
    }

    fn as_float(&self) -> f64 {
        match self {
            Self::Float(f) => *f,
            _ => unreachable!("as_float called on a non-float Value"),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s,
            _ => unreachable!("as_str called on a non-string Value"),
        }
    }

    fn as_array(&self) -> &[Self] {
        match self {
            Self::Array(a) => a,
            _ => unreachable!("as_array called on a non-array Value"),
        }
    }

    fn object_entries(&self) -> impl Iterator<Item = (&str, &Self)> {
        match self {
            Self::Object(o) => o.iter().map(|(k, v)| (k.as_str(), v)),
            _ => unreachable!("object_entries called on a non-object Value"),
        }
    }
}
