//! Type definitions for dot paths.

use std::fmt;

use serde_json::Value;

/// A single step of a dot path: an object key or an array index.
pub type Segment = String;

/// A parsed dot path.
pub type Path = Vec<Segment>;

/// Largest array index `set` is allowed to grow an array to (exclusive).
///
/// Writing at or past this index into an array that would have to grow fails
/// with [`PathError::InvalidIndex`](crate::PathError::InvalidIndex) instead of
/// allocating the padding.
pub const MAX_ARRAY_INDEX: usize = 10_000;

/// Shape of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    /// Lowercase JSON type name, as used in error messages and schemas.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the lowercase JSON type name of a value.
///
/// ```
/// use jsonx_path::kind_name;
/// use serde_json::json;
///
/// assert_eq!(kind_name(&json!({})), "object");
/// assert_eq!(kind_name(&json!(true)), "boolean");
/// ```
pub fn kind_name(value: &Value) -> &'static str {
    ValueKind::of(value).as_str()
}

/// Creates the empty container a segment addresses when a path has to be
/// materialized: an array for integer segments, an object otherwise.
pub fn container_for(segment: &str) -> Value {
    if crate::util::parse_index(segment).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(serde_json::Map::new())
    }
}
