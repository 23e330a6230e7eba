use jsonx_path::parse_path;
use serde_json::Value;

use crate::error::JsonxError;
use crate::json::Json;

impl Json {
    /// A new object holding only the listed fields that exist.
    ///
    /// Fields are dot paths, so `"user.name"` copies the nested value into the
    /// same place of the result. Absent fields are skipped; a non-object
    /// receiver is a `TypeMismatch`.
    ///
    /// ```
    /// use jsonx::Json;
    /// use serde_json::json;
    ///
    /// let user = Json::new(json!({"id": 1, "name": "x", "secret": "s"}));
    /// let public = user.pick(&["id", "name", "email"]);
    /// assert_eq!(public.len(), 2);
    /// assert!(!public.has("secret"));
    /// ```
    pub fn pick(&self, fields: &[&str]) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        if !self.data.is_object() {
            return Json::from_error(JsonxError::not_an("object", &self.data));
        }
        let mut result = Json::object();
        for field in fields {
            if let Ok(value) = jsonx_path::get(&self.data, &parse_path(field)) {
                result = result.set(field, value.clone());
            }
        }
        result
    }

    /// A deep copy of the object without the listed fields (dot paths).
    /// Fields that do not resolve are ignored; a non-object receiver is a
    /// `TypeMismatch`.
    pub fn omit(&self, fields: &[&str]) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        if !self.data.is_object() {
            return Json::from_error(JsonxError::not_an("object", &self.data));
        }
        let mut result: Value = self.data.clone();
        for field in fields {
            // An unresolvable field has nothing to remove.
            let _ = jsonx_path::remove(&mut result, &parse_path(field));
        }
        Json::new(result)
    }
}
