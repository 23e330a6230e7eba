//! Text codec boundary, backed by `serde_json`.
//!
//! Decoding never fails loudly: malformed text yields a value carrying a
//! `Parse` error. Encoding returns `Result`. Object keys are emitted in sorted
//! order unless the `preserve_order` feature is enabled.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::JsonxError;
use crate::json::Json;

impl Json {
    /// Decode JSON text.
    ///
    /// ```
    /// use jsonx::{Json, JsonxError};
    ///
    /// let ok = Json::parse(r#"{"name": "test", "score": 98.5}"#);
    /// assert_eq!(ok.get("score").as_f64(), 98.5);
    ///
    /// let bad = Json::parse("{");
    /// assert!(matches!(bad.error(), Some(JsonxError::Parse(_))));
    /// ```
    pub fn parse(text: &str) -> Json {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Json::new(value),
            Err(err) => Json::from_error(JsonxError::Parse(err.to_string())),
        }
    }

    pub fn parse_bytes(bytes: &[u8]) -> Json {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Json::new(value),
            Err(err) => Json::from_error(JsonxError::Parse(err.to_string())),
        }
    }

    /// Capture a serializable struct as an object. Field names and skipping
    /// follow its `serde` attributes; a value that does not serialize to an
    /// object is a `TypeMismatch`.
    pub fn from_struct<T: Serialize + ?Sized>(value: &T) -> Json {
        match serde_json::to_value(value) {
            Ok(data @ Value::Object(_)) => Json::new(data),
            Ok(other) => Json::from_error(JsonxError::not_an("object", &other)),
            Err(err) => Json::from_error(JsonxError::Encode(err.to_string())),
        }
    }

    /// Read the payload into a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, JsonxError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String, JsonxError> {
        self.encode(serde_json::to_string)
    }

    /// JSON text indented by two spaces.
    pub fn to_pretty_json(&self) -> Result<String, JsonxError> {
        self.encode(serde_json::to_string_pretty)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, JsonxError> {
        self.encode(serde_json::to_vec)
    }

    pub fn to_map(&self) -> Result<Map<String, Value>, JsonxError> {
        match (&self.error, &self.data) {
            (Some(err), _) => Err(err.clone()),
            (None, Value::Object(map)) => Ok(map.clone()),
            (None, other) => Err(JsonxError::not_an("object", other)),
        }
    }

    pub fn to_vec(&self) -> Result<Vec<Value>, JsonxError> {
        match (&self.error, &self.data) {
            (Some(err), _) => Err(err.clone()),
            (None, Value::Array(arr)) => Ok(arr.clone()),
            (None, other) => Err(JsonxError::not_an("array", other)),
        }
    }

    fn encode<T>(
        &self,
        encoder: fn(&Value) -> serde_json::Result<T>,
    ) -> Result<T, JsonxError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        encoder(&self.data).map_err(|err| JsonxError::Encode(err.to_string()))
    }
}

/// Whether `text` is well-formed JSON.
pub fn is_valid(text: &str) -> bool {
    Json::parse(text).is_ok()
}

/// Re-encode JSON text with two-space indentation.
pub fn pretty(text: &str) -> Result<String, JsonxError> {
    Json::parse(text).to_pretty_json()
}

/// Re-encode JSON text without insignificant whitespace.
///
/// ```
/// assert_eq!(jsonx::minify("[ 1, 2,\n 3 ]").unwrap(), "[1,2,3]");
/// ```
pub fn minify(text: &str) -> Result<String, JsonxError> {
    Json::parse(text).to_json()
}
