//! Shallow and deep merging of objects.

use serde_json::{Map, Value};

use crate::error::JsonxError;
use crate::json::Json;

impl Json {
    /// Shallow merge: all receiver keys, then all `other` keys, overwriting
    /// whole values on collision. Nested objects are replaced, not combined.
    ///
    /// Both sides must be objects, otherwise the result carries a
    /// `TypeMismatch` and the receiver payload.
    pub fn merge(&self, other: &Json) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        if let Some(err) = &other.error {
            return self.clone().with_error(err.clone());
        }
        match (&self.data, &other.data) {
            (Value::Object(base), Value::Object(overlay)) => {
                let mut result = base.clone();
                for (key, value) in overlay {
                    result.insert(key.clone(), value.clone());
                }
                Json::from_map(result)
            }
            (Value::Object(_), found) | (found, _) => self
                .clone()
                .with_error(JsonxError::not_an("object", found)),
        }
    }

    /// Deep merge: objects present on both sides at the same key are merged
    /// recursively; any other collision (arrays included) is won by `other`.
    /// If either root is not an object the result is a copy of `other`.
    ///
    /// ```
    /// use jsonx::Json;
    /// use serde_json::json;
    ///
    /// let base = Json::new(json!({"db": {"host": "localhost", "port": 5432}}));
    /// let overlay = Json::new(json!({"db": {"port": 6432}}));
    /// assert_eq!(
    ///     base.deep_merge(&overlay).value(),
    ///     &json!({"db": {"host": "localhost", "port": 6432}})
    /// );
    /// ```
    pub fn deep_merge(&self, other: &Json) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        if let Some(err) = &other.error {
            return self.clone().with_error(err.clone());
        }
        Json::new(deep_merge_values(&self.data, &other.data))
    }
}

fn deep_merge_values(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            let mut result: Map<String, Value> = base.clone();
            for (key, value) in overlay {
                let merged = match result.get(key) {
                    Some(existing) => deep_merge_values(existing, value),
                    None => value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Value::Object(result)
        }
        _ => overlay.clone(),
    }
}

/// Shallow-merge values left to right. No values yield an empty object; the
/// first error stops the fold.
pub fn merge_all(values: &[Json]) -> Json {
    fold(values, Json::merge)
}

/// Deep-merge values left to right. No values yield an empty object; the
/// first error stops the fold.
pub fn deep_merge_all(values: &[Json]) -> Json {
    fold(values, Json::deep_merge)
}

fn fold(values: &[Json], step: fn(&Json, &Json) -> Json) -> Json {
    let Some((first, rest)) = values.split_first() else {
        return Json::object();
    };
    let mut result = first.clone();
    for value in rest {
        result = step(&result, value);
        if result.error.is_some() {
            break;
        }
    }
    result
}
