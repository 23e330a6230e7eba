use serde_json::Value;

use crate::json::Json;

impl Json {
    /// Byte length of the compact encoding, 0 for errored values.
    pub fn size(&self) -> usize {
        self.to_json().map(|text| text.len()).unwrap_or(0)
    }

    /// Nesting depth. Scalars and empty containers are 0; each non-empty
    /// container level adds one.
    pub fn depth(&self) -> usize {
        if self.error.is_some() {
            return 0;
        }
        depth_of(&self.data)
    }
}

fn depth_of(value: &Value) -> usize {
    let children: Box<dyn Iterator<Item = &Value>> = match value {
        Value::Array(arr) if !arr.is_empty() => Box::new(arr.iter()),
        Value::Object(map) if !map.is_empty() => Box::new(map.values()),
        _ => return 0,
    };
    1 + children.map(depth_of).max().unwrap_or(0)
}

/// Same as [`Json::map`].
pub fn transform<F, V>(value: &Json, f: F) -> Json
where
    F: FnMut(&str, &Json) -> V,
    V: Into<Value>,
{
    value.map(f)
}
