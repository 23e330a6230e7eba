//! Structural equality.

use serde_json::{Number, Value};

use crate::json::Json;

/// Deep equality of two JSON values where numbers compare by value, so `1`
/// and `1.0` are equal.
///
/// ```
/// use jsonx::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"foo": [1, 2.0]}), &json!({"foo": [1.0, 2]})));
/// assert!(!deep_equal(&json!({"foo": [1, 2]}), &json!({"foo": [1, 3]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => a == b,
        _ => match (a.as_u64(), b.as_u64()) {
            (Some(a), Some(b)) => a == b,
            _ => a.as_f64() == b.as_f64(),
        },
    }
}

/// Structural equality of two values. Errored values never compare equal.
pub fn compare(a: &Json, b: &Json) -> bool {
    a.error.is_none() && b.error.is_none() && deep_equal(&a.data, &b.data)
}

impl PartialEq for Json {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error && deep_equal(&self.data, &other.data)
    }
}
