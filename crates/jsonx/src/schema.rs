//! A small structural schema: value types, object properties and required
//! keys, array items, string length bounds and numeric bounds.
//!
//! Schemas are plain serde documents, so they can be read from JSON using
//! the usual keyword spelling:
//!
//! ```
//! use jsonx::{Json, Schema, SchemaError};
//!
//! let schema = Schema::from_json(&Json::parse(r#"{
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": {
//!         "name": {"type": "string", "minLength": 1},
//!         "tags": {"type": "array", "items": {"type": "string"}}
//!     }
//! }"#)).unwrap();
//!
//! assert!(schema.validate(&Json::parse(r#"{"name": "Li", "tags": ["a"]}"#)).is_ok());
//!
//! let err = schema.validate(&Json::parse(r#"{"name": "Li", "tags": ["a", 2]}"#));
//! assert!(matches!(err, Err(SchemaError::TypeMismatch { .. })));
//! assert_eq!(err.unwrap_err().to_string(), "expected string at tags[1]");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use jsonx_path::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::JsonxError;
use crate::json::Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl SchemaType {
    /// The value shape this schema type accepts.
    pub fn kind(self) -> ValueKind {
        match self {
            SchemaType::Object => ValueKind::Object,
            SchemaType::Array => ValueKind::Array,
            SchemaType::String => ValueKind::String,
            SchemaType::Number => ValueKind::Number,
            SchemaType::Boolean => ValueKind::Boolean,
            SchemaType::Null => ValueKind::Null,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.kind().as_str()
    }

    fn matches(self, value: &Value) -> bool {
        ValueKind::of(value) == self.kind()
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First violation found by [`Schema::validate`]. `path` is empty for the
/// root, `a.b` for nested properties and `list[2]` for array items.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("expected {expected} at {}", location(.path))]
    TypeMismatch { path: String, expected: SchemaType },

    #[error("missing required field '{field}' at {}", location(.path))]
    MissingField { path: String, field: String },

    #[error("string too short at {} ({len} < {min})", location(.path))]
    TooShort { path: String, len: usize, min: usize },

    #[error("string too long at {} ({len} > {max})", location(.path))]
    TooLong { path: String, len: usize, max: usize },

    #[error("number too small at {} ({value} < {min})", location(.path))]
    TooSmall { path: String, value: f64, min: f64 },

    #[error("number too large at {} ({value} > {max})", location(.path))]
    TooLarge { path: String, value: f64, max: f64 },

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error(transparent)]
    Value(#[from] JsonxError),
}

fn location(path: &str) -> &str {
    if path.is_empty() {
        "root"
    } else {
        path
    }
}

/// A schema node. A missing `type` accepts any value; the keywords that do
/// not apply to the actual type are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl Schema {
    /// Accepts any value.
    pub fn any() -> Self {
        Schema::default()
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        Schema {
            schema_type: Some(schema_type),
            ..Schema::default()
        }
    }

    pub fn object() -> Self {
        Schema::of_type(SchemaType::Object)
    }

    /// An array whose elements all satisfy `items`.
    pub fn array(items: Schema) -> Self {
        Schema::of_type(SchemaType::Array).items(items)
    }

    pub fn string() -> Self {
        Schema::of_type(SchemaType::String)
    }

    pub fn number() -> Self {
        Schema::of_type(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Schema::of_type(SchemaType::Boolean)
    }

    pub fn null() -> Self {
        Schema::of_type(SchemaType::Null)
    }

    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn require<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn items(mut self, schema: Schema) -> Self {
        self.items = Some(Box::new(schema));
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    pub fn maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// Read a schema document.
    pub fn from_json(doc: &Json) -> Result<Schema, SchemaError> {
        if let Some(err) = doc.error() {
            return Err(err.clone().into());
        }
        doc.deserialize()
            .map_err(|err| SchemaError::InvalidSchema(err.to_string()))
    }

    /// Check `doc` against the schema, reporting the first violation.
    /// Properties are checked in sorted key order. An errored `doc` fails
    /// with its own error.
    pub fn validate(&self, doc: &Json) -> Result<(), SchemaError> {
        if let Some(err) = doc.error() {
            return Err(err.clone().into());
        }
        self.check(doc.value(), "")
    }

    fn check(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        let Some(expected) = self.schema_type else {
            return Ok(());
        };
        if !expected.matches(value) {
            return Err(SchemaError::TypeMismatch {
                path: path.to_string(),
                expected,
            });
        }
        match value {
            Value::Object(map) => {
                if let Some(field) = self.required.iter().find(|f| !map.contains_key(*f)) {
                    return Err(SchemaError::MissingField {
                        path: path.to_string(),
                        field: field.clone(),
                    });
                }
                for (name, schema) in &self.properties {
                    if let Some(child) = map.get(name) {
                        schema.check(child, &jsonx_path::join(path, name))?;
                    }
                }
            }
            Value::Array(arr) => {
                if let Some(items) = &self.items {
                    for (i, item) in arr.iter().enumerate() {
                        items.check(item, &format!("{path}[{i}]"))?;
                    }
                }
            }
            Value::String(s) => self.check_length(s.chars().count(), path)?,
            Value::Number(n) => self.check_range(n.as_f64().unwrap_or(0.0), path)?,
            _ => {}
        }
        Ok(())
    }

    fn check_length(&self, len: usize, path: &str) -> Result<(), SchemaError> {
        if let Some(min) = self.min_length.filter(|min| len < *min) {
            return Err(SchemaError::TooShort {
                path: path.to_string(),
                len,
                min,
            });
        }
        if let Some(max) = self.max_length.filter(|max| len > *max) {
            return Err(SchemaError::TooLong {
                path: path.to_string(),
                len,
                max,
            });
        }
        Ok(())
    }

    fn check_range(&self, value: f64, path: &str) -> Result<(), SchemaError> {
        if let Some(min) = self.minimum.filter(|min| value < *min) {
            return Err(SchemaError::TooSmall {
                path: path.to_string(),
                value,
                min,
            });
        }
        if let Some(max) = self.maximum.filter(|max| value > *max) {
            return Err(SchemaError::TooLarge {
                path: path.to_string(),
                value,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_schema() -> Schema {
        Schema::object()
            .require(["name", "age"])
            .property("name", Schema::string().min_length(2).max_length(5))
            .property("age", Schema::number().minimum(0.0).maximum(150.0))
            .property(
                "address",
                Schema::object().property("zip", Schema::string()),
            )
            .property("tags", Schema::array(Schema::string()))
    }

    #[test]
    fn test_valid_document() {
        let doc = Json::new(json!({
            "name": "Li",
            "age": 30,
            "address": {"zip": "75001"},
            "tags": ["a", "b"],
            "extra": true
        }));
        assert_eq!(user_schema().validate(&doc), Ok(()));
    }

    #[test]
    fn test_schema_type_names_agree_with_value_kinds() {
        for value in [json!({}), json!([]), json!("s"), json!(1), json!(true), json!(null)] {
            let name = jsonx_path::kind_name(&value);
            let schema_type: SchemaType =
                serde_json::from_value(json!(name)).expect("every kind name is a schema type");
            assert_eq!(schema_type.kind(), ValueKind::of(&value));
            assert_eq!(schema_type.as_str(), name);
            assert!(schema_type.matches(&value));
        }
    }

    #[test]
    fn test_type_mismatch_at_root() {
        let err = user_schema().validate(&Json::new(json!([1]))).unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: String::new(),
                expected: SchemaType::Object
            }
        );
        assert_eq!(err.to_string(), "expected object at root");
    }

    #[test]
    fn test_missing_required() {
        let err = user_schema().validate(&Json::new(json!({"name": "Li"})));
        assert_eq!(
            err,
            Err(SchemaError::MissingField {
                path: String::new(),
                field: "age".to_string()
            })
        );
    }

    #[test]
    fn test_nested_paths() {
        let doc = Json::new(json!({"name": "Li", "age": 1, "address": {"zip": 75001}}));
        assert_eq!(
            user_schema().validate(&doc).unwrap_err().to_string(),
            "expected string at address.zip"
        );

        let doc = Json::new(json!({"name": "Li", "age": 1, "tags": ["a", "b", 3]}));
        assert_eq!(
            user_schema().validate(&doc),
            Err(SchemaError::TypeMismatch {
                path: "tags[2]".to_string(),
                expected: SchemaType::String
            })
        );
    }

    #[test]
    fn test_bounds() {
        let schema = user_schema();
        let check = |doc: Value| schema.validate(&Json::new(doc)).unwrap_err();
        assert!(matches!(
            check(json!({"name": "L", "age": 1})),
            SchemaError::TooShort { len: 1, min: 2, .. }
        ));
        assert!(matches!(
            check(json!({"name": "Lizzie", "age": 1})),
            SchemaError::TooLong { len: 6, max: 5, .. }
        ));
        assert!(matches!(
            check(json!({"name": "Li", "age": -1})),
            SchemaError::TooSmall { .. }
        ));
        assert!(matches!(
            check(json!({"name": "Li", "age": 200.5})),
            SchemaError::TooLarge { .. }
        ));
    }

    #[test]
    fn test_sorted_property_order() {
        let schema = Schema::object()
            .property("b", Schema::string())
            .property("a", Schema::string());
        let err = schema.validate(&Json::new(json!({"a": 1, "b": 2}))).unwrap_err();
        assert_eq!(err.to_string(), "expected string at a");
    }

    #[test]
    fn test_untyped_accepts_anything() {
        assert!(Schema::any().validate(&Json::new(json!([1, "x"]))).is_ok());
        assert!(Schema::null().validate(&Json::default()).is_ok());
        assert!(Schema::boolean().validate(&Json::new(0)).is_err());
    }

    #[test]
    fn test_errored_document() {
        let doc = Json::parse("{");
        assert!(matches!(
            user_schema().validate(&doc),
            Err(SchemaError::Value(JsonxError::Parse(_)))
        ));
    }

    #[test]
    fn test_from_json_roundtrip() {
        let schema = user_schema();
        let doc = Json::new(serde_json::to_value(&schema).unwrap());
        assert_eq!(doc.get("properties.name.minLength").as_int(), 2);
        assert_eq!(Schema::from_json(&doc).unwrap(), schema);
    }

    #[test]
    fn test_from_json_invalid() {
        let doc = Json::new(json!({"type": "integer"}));
        assert!(matches!(
            Schema::from_json(&doc),
            Err(SchemaError::InvalidSchema(_))
        ));
    }
}
