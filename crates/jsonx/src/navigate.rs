//! Dot-path navigation and mutation.

use jsonx_path::parse_path;
use serde_json::Value;

use crate::error::JsonxError;
use crate::json::Json;

impl Json {
    /// Resolve a dot path. The empty path returns the receiver itself.
    ///
    /// Integer segments index arrays, every segment on an object is a key.
    /// Failures produce an error-state value: `IndexOutOfRange`,
    /// `PathNotFound` or `TypeMismatch`.
    pub fn get(&self, path: &str) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        match jsonx_path::get(&self.data, &parse_path(path)) {
            Ok(value) => Json::new(value.clone()),
            Err(err) => Json::from_error(err.into()),
        }
    }

    /// Whether `get(path)` would succeed. Never errors.
    pub fn has(&self, path: &str) -> bool {
        self.error.is_none() && jsonx_path::has(&self.data, &parse_path(path))
    }

    /// Assign `value` at a dot path, creating missing containers.
    ///
    /// The empty path replaces the whole payload. A `null` root or slot
    /// becomes an array when the next segment is an integer and an object
    /// otherwise, and an empty array addressed by a key becomes an object;
    /// short arrays are padded with `null`. Growing an array to an index of
    /// 10000 or more, or using a negative index, fails with `InvalidIndex`;
    /// running into a string, number or boolean fails with `TypeMismatch`.
    /// Paths of more than 256 segments fail with `PathTooDeep`. A failed
    /// `set` leaves the payload exactly as it was.
    ///
    /// ```
    /// use jsonx::Json;
    /// use serde_json::json;
    ///
    /// let list = Json::default().set("2", "c");
    /// assert_eq!(list.value(), &json!([null, null, "c"]));
    /// ```
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Json {
        if self.error.is_some() {
            return self;
        }
        tracing::trace!(path, "jsonx set");
        match jsonx_path::set(&mut self.data, &parse_path(path), value.into()) {
            Ok(()) => self,
            Err(err) => self.with_error(err.into()),
        }
    }

    /// Remove the object key addressed by a dot path.
    ///
    /// The parent is resolved like [`Json::get`]. A missing terminal key is a
    /// no-op; a parent that is not an object (including arrays) is a
    /// `TypeMismatch`. The empty path resets the payload to `null`.
    pub fn delete(mut self, path: &str) -> Json {
        if self.error.is_some() {
            return self;
        }
        tracing::trace!(path, "jsonx delete");
        match jsonx_path::remove(&mut self.data, &parse_path(path)) {
            Ok(_) => self,
            Err(err) => self.with_error(JsonxError::from(err)),
        }
    }
}
