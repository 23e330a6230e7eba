//! Fluent construction of objects and arrays.
//!
//! `add_*` calls go through [`Json::set`], so keys are dot paths and a nested
//! key such as `"db.host"` creates the intermediate object. `append_*` calls
//! push onto an array builder; on an object builder they leave a
//! `TypeMismatch` in the result, as any other chained misuse would.

use serde_json::Value;

use crate::error::JsonxError;
use crate::json::Json;

#[derive(Debug, Clone)]
pub struct Builder {
    json: Json,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// A builder producing an object.
    pub fn new() -> Self {
        Builder {
            json: Json::object(),
        }
    }

    /// A builder producing an array.
    pub fn array() -> Self {
        Builder {
            json: Json::array(),
        }
    }

    pub fn add_string(self, key: &str, value: impl Into<String>) -> Self {
        self.add_raw(key, value.into())
    }

    pub fn add_int(self, key: &str, value: i32) -> Self {
        self.add_raw(key, value)
    }

    pub fn add_i64(self, key: &str, value: i64) -> Self {
        self.add_raw(key, value)
    }

    /// Non-finite floats have no JSON spelling and are stored as `null`.
    pub fn add_float(self, key: &str, value: f64) -> Self {
        self.add_raw(key, value)
    }

    pub fn add_bool(self, key: &str, value: bool) -> Self {
        self.add_raw(key, value)
    }

    /// Store a copy of `value`. An errored value poisons the builder.
    pub fn add_object(self, key: &str, value: &Json) -> Self {
        self.add_json(key, value)
    }

    pub fn add_array(self, key: &str, value: &Json) -> Self {
        self.add_json(key, value)
    }

    pub fn add_raw(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.json = self.json.set(key, value);
        self
    }

    pub fn add_null(self, key: &str) -> Self {
        self.add_raw(key, Value::Null)
    }

    pub fn add_if(self, condition: bool, key: &str, value: impl Into<Value>) -> Self {
        if condition {
            self.add_raw(key, value)
        } else {
            self
        }
    }

    pub fn add_string_if(self, condition: bool, key: &str, value: impl Into<String>) -> Self {
        self.add_if(condition, key, value.into())
    }

    pub fn add_many<I, K, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        fields
            .into_iter()
            .fold(self, |builder, (key, value)| builder.add_raw(key.as_ref(), value))
    }

    pub fn append_string(self, value: impl Into<String>) -> Self {
        self.append_raw(value.into())
    }

    pub fn append_int(self, value: i32) -> Self {
        self.append_raw(value)
    }

    pub fn append_float(self, value: f64) -> Self {
        self.append_raw(value)
    }

    pub fn append_bool(self, value: bool) -> Self {
        self.append_raw(value)
    }

    pub fn append_object(self, value: &Json) -> Self {
        self.append_json(value)
    }

    pub fn append_array(self, value: &Json) -> Self {
        self.append_json(value)
    }

    pub fn append_raw(mut self, value: impl Into<Value>) -> Self {
        self.json = self.json.append(value);
        self
    }

    pub fn append_null(self) -> Self {
        self.append_raw(Value::Null)
    }

    pub fn append_many<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.json = self.json.append_many(values);
        self
    }

    pub fn build(self) -> Json {
        self.json
    }

    pub fn build_string(&self) -> Result<String, JsonxError> {
        self.json.to_json()
    }

    pub fn build_pretty_string(&self) -> Result<String, JsonxError> {
        self.json.to_pretty_json()
    }

    fn add_json(mut self, key: &str, value: &Json) -> Self {
        self.json = match &value.error {
            Some(err) => self.json.with_error(err.clone()),
            None => self.json.set(key, value.data.clone()),
        };
        self
    }

    fn append_json(mut self, value: &Json) -> Self {
        self.json = match &value.error {
            Some(err) => self.json.with_error(err.clone()),
            None => self.json.append(value.data.clone()),
        };
        self
    }
}

/// An object from `(key, value)` pairs.
///
/// ```
/// use jsonx::quick_object;
///
/// let user = quick_object([("name", "Li"), ("role", "admin")]);
/// assert_eq!(user.to_json().unwrap(), r#"{"name":"Li","role":"admin"}"#);
/// ```
pub fn quick_object<I, K, V>(fields: I) -> Json
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    Builder::new().add_many(fields).build()
}

/// An array of `values`.
pub fn quick_array<I>(values: I) -> Json
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Builder::array().append_many(values).build()
}
