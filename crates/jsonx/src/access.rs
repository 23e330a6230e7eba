//! Shape predicates and lossy coercing accessors.
//!
//! The accessors never fail: an errored value or an unconvertible shape
//! yields the zero value of the target type.

use jsonx_path::ValueKind;
use serde_json::Value;

use crate::json::Json;

impl Json {
    pub fn is_object(&self) -> bool {
        self.data.is_object()
    }

    pub fn is_array(&self) -> bool {
        self.data.is_array()
    }

    pub fn is_string(&self) -> bool {
        self.data.is_string()
    }

    pub fn is_number(&self) -> bool {
        self.data.is_number()
    }

    pub fn is_bool(&self) -> bool {
        self.data.is_boolean()
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    pub fn kind(&self) -> ValueKind {
        ValueKind::of(&self.data)
    }

    /// Strings as-is, `null` as `""`, numbers and booleans in their JSON
    /// spelling (`30`, `98.5`, `true`), containers as compact JSON text.
    pub fn as_string(&self) -> String {
        if self.error.is_some() {
            return String::new();
        }
        match &self.data {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => match n.as_i64() {
                Some(i) => i.to_string(),
                None => n.to_string(),
            },
            Value::Bool(b) => b.to_string(),
            container => container.to_string(),
        }
    }

    /// Integer value, truncating floats and parsing decimal strings.
    pub fn as_i64(&self) -> i64 {
        if self.error.is_some() {
            return 0;
        }
        match &self.data {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Value::String(s) => s.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// [`Json::as_i64`] narrowed to `i32`, saturating at the `i32` bounds.
    pub fn as_int(&self) -> i32 {
        self.as_i64().clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    pub fn as_f64(&self) -> f64 {
        if self.error.is_some() {
            return 0.0;
        }
        match &self.data {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Booleans as-is, `"true"` as true, non-zero numbers as true.
    pub fn as_bool(&self) -> bool {
        if self.error.is_some() {
            return false;
        }
        match &self.data {
            Value::Bool(b) => *b,
            Value::String(s) => s.parse().unwrap_or(false),
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }

    /// Elements of an array, keys of an object, characters of a string,
    /// otherwise 0.
    pub fn len(&self) -> usize {
        if self.error.is_some() {
            return 0;
        }
        match &self.data {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            Value::String(s) => s.chars().count(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object keys in sorted order; empty for anything else.
    pub fn keys(&self) -> Vec<String> {
        match (&self.error, &self.data) {
            (None, Value::Object(map)) => {
                let mut keys: Vec<String> = map.keys().cloned().collect();
                keys.sort();
                keys
            }
            _ => Vec::new(),
        }
    }

    /// Object values in key order; empty for anything else.
    pub fn values(&self) -> Vec<Json> {
        match (&self.error, &self.data) {
            (None, Value::Object(map)) => sorted_entries(map)
                .into_iter()
                .map(|(_, value)| Json::new(value.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Map entries in key order, whatever order the map keeps internally.
pub(crate) fn sorted_entries(map: &serde_json::Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
