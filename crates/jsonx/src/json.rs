//! The [`Json`] value type and its sticky error slot.

use serde_json::{Map, Value};

use crate::error::JsonxError;

/// A dynamically typed JSON value with a sticky error slot.
///
/// Structural operations (`get`, `set`, `index`, `append`, `merge`, ...)
/// check the slot first: once a value carries an error every further call
/// returns a value carrying that same error, so a long chain can be inspected
/// once at the end with [`Json::error`].
///
/// Coercing accessors (`as_string`, `as_int`, `as_bool`, ...) never fail; they
/// return zero values on errored values and on shape mismatches.
///
/// Mutating operations take `self` by value and return the authoritative
/// handle, since a mutation may replace the root (for example `set` on a
/// `null` root allocates a container).
///
/// # Example
///
/// ```
/// use jsonx::Json;
///
/// let doc = Json::object()
///     .set("user.profile.name", "Li")
///     .set("user.profile.age", 30);
///
/// assert_eq!(doc.get("user.profile.name").as_string(), "Li");
/// assert_eq!(doc.get("user.profile.age").as_int(), 30);
/// assert!(!doc.has("user.profile.email"));
///
/// let missing = doc.get("user.settings").get("theme");
/// assert!(missing.error().is_some());
/// assert_eq!(missing.as_string(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Json {
    pub(crate) data: Value,
    pub(crate) error: Option<JsonxError>,
}

impl Json {
    /// Wrap any value convertible into a JSON value.
    pub fn new(value: impl Into<Value>) -> Self {
        Json {
            data: value.into(),
            error: None,
        }
    }

    /// An empty object.
    pub fn object() -> Self {
        Json::new(Map::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Json::new(Vec::<Value>::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Json::new(map)
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        Json::new(items)
    }

    /// A value in the error state.
    pub fn from_error(err: JsonxError) -> Self {
        tracing::debug!(error = %err, "jsonx value created in error state");
        Json {
            data: Value::Null,
            error: Some(err),
        }
    }

    /// The sticky error, if any. Does not reset it.
    pub fn error(&self) -> Option<&JsonxError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The wrapped payload. `null` for values in the error state.
    pub fn value(&self) -> &Value {
        &self.data
    }

    pub fn into_value(self) -> Value {
        self.data
    }

    /// Convert the chain outcome into a `Result`.
    pub fn into_result(self) -> Result<Value, JsonxError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data),
        }
    }

    /// Keep the payload and attach a freshly encountered error.
    pub(crate) fn with_error(mut self, err: JsonxError) -> Self {
        tracing::debug!(error = %err, "jsonx chain entered error state");
        self.error = Some(err);
        self
    }

    /// An error-only copy of this value when it is already errored.
    pub(crate) fn short_circuit(&self) -> Option<Json> {
        self.error.as_ref().map(|err| Json {
            data: Value::Null,
            error: Some(err.clone()),
        })
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Json::new(value)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        json.data
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        json.data.clone()
    }
}
