//! Flattening to and from dot-path maps.
//!
//! `unflatten(flatten(v))` reproduces `v` as long as no object key looks like
//! an integer: such keys come back as array indices.

use std::collections::BTreeMap;

use jsonx_path::join;
use serde_json::Value;

use crate::json::Json;

impl Json {
    /// Map every leaf to its dot path. Array indices and object keys are both
    /// plain segments. Empty containers produce no entries; a scalar root
    /// produces the single entry `""`. Errored values flatten to nothing.
    ///
    /// ```
    /// use jsonx::Json;
    /// use serde_json::json;
    ///
    /// let flat = Json::new(json!({"a": [{"b": 1}], "c": {}})).flatten();
    /// assert_eq!(flat.len(), 1);
    /// assert_eq!(flat["a.0.b"], json!(1));
    /// ```
    pub fn flatten(&self) -> BTreeMap<String, Value> {
        let mut result = BTreeMap::new();
        if self.error.is_none() {
            flatten_into(&self.data, String::new(), &mut result);
        }
        result
    }
}

fn flatten_into(value: &Value, prefix: String, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(item, join(&prefix, key), out);
            }
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                flatten_into(item, join(&prefix, &i.to_string()), out);
            }
        }
        leaf => {
            out.insert(prefix, leaf.clone());
        }
    }
}

/// Rebuild a value by replaying every `(path, value)` pair through
/// [`Json::set`] on a fresh `null` root. Integer segments create arrays.
/// An empty input yields an empty object.
pub fn unflatten<I, K, V>(flat: I) -> Json
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut result = Json::default();
    for (path, value) in flat {
        result = result.set(path.as_ref(), value);
    }
    if result.is_ok() && result.is_null() {
        return Json::object();
    }
    result
}
