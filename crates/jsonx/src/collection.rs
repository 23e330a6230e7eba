//! Array operations and element-wise iteration.

use serde_json::{Map, Value};

use crate::access::sorted_entries;
use crate::error::JsonxError;
use crate::json::Json;

impl Json {
    /// Element `i` of an array. Out of range or non-array receivers produce
    /// an error-state value.
    pub fn index(&self, i: usize) -> Json {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        match &self.data {
            Value::Array(arr) => match arr.get(i) {
                Some(item) => Json::new(item.clone()),
                None => Json::from_error(JsonxError::IndexOutOfRange {
                    index: i as i64,
                    len: arr.len(),
                }),
            },
            other => Json::from_error(JsonxError::not_an("array", other)),
        }
    }

    /// Push one element onto an array.
    ///
    /// A non-array receiver keeps its payload and gets a `TypeMismatch`
    /// attached.
    pub fn append(self, value: impl Into<Value>) -> Json {
        self.append_many([value])
    }

    pub fn append_many<I>(mut self, values: I) -> Json
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if self.error.is_some() {
            return self;
        }
        match &mut self.data {
            Value::Array(arr) => {
                arr.extend(values.into_iter().map(Into::into));
                self
            }
            other => {
                let err = JsonxError::not_an("array", other);
                self.with_error(err)
            }
        }
    }

    /// Insert one element at the front of an array.
    pub fn prepend(self, value: impl Into<Value>) -> Json {
        self.prepend_many([value])
    }

    /// Insert elements at the front of an array, keeping their order.
    pub fn prepend_many<I>(mut self, values: I) -> Json
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if self.error.is_some() {
            return self;
        }
        match &mut self.data {
            Value::Array(arr) => {
                let front: Vec<Value> = values.into_iter().map(Into::into).collect();
                arr.splice(0..0, front);
                self
            }
            other => {
                let err = JsonxError::not_an("array", other);
                self.with_error(err)
            }
        }
    }

    /// Remove element `i` of an array, shifting later elements down.
    pub fn remove(mut self, i: usize) -> Json {
        if self.error.is_some() {
            return self;
        }
        let err = match &mut self.data {
            Value::Array(arr) if i < arr.len() => {
                arr.remove(i);
                return self;
            }
            Value::Array(arr) => JsonxError::IndexOutOfRange {
                index: i as i64,
                len: arr.len(),
            },
            other => JsonxError::not_an("array", other),
        };
        self.with_error(err)
    }

    /// Visit every element: arrays in index order with the index as key,
    /// objects in sorted key order. Returning `false` stops the walk.
    ///
    /// ```
    /// use jsonx::Json;
    /// use serde_json::json;
    ///
    /// let mut seen = Vec::new();
    /// Json::new(json!({"b": 2, "a": 1, "c": 3})).for_each(|key, _| {
    ///     seen.push(key.to_string());
    ///     key != "b"
    /// });
    /// assert_eq!(seen, ["a", "b"]);
    /// ```
    pub fn for_each<F>(&self, mut f: F) -> &Json
    where
        F: FnMut(&str, &Json) -> bool,
    {
        if self.error.is_some() {
            return self;
        }
        match &self.data {
            Value::Array(arr) => {
                for (i, item) in arr.iter().enumerate() {
                    if !f(&i.to_string(), &Json::new(item.clone())) {
                        break;
                    }
                }
            }
            Value::Object(map) => {
                for (key, item) in sorted_entries(map) {
                    if !f(key, &Json::new(item.clone())) {
                        break;
                    }
                }
            }
            _ => {}
        }
        self
    }

    /// Replace every element with `f(key, element)`, keeping the container
    /// shape. Scalars are returned unchanged.
    ///
    /// ```
    /// use jsonx::quick_array;
    /// use serde_json::json;
    ///
    /// let doubled = quick_array([1, 2, 3]).map(|_, v| v.as_i64() * 2);
    /// assert_eq!(doubled.value(), &json!([2, 4, 6]));
    /// ```
    pub fn map<F, V>(&self, mut f: F) -> Json
    where
        F: FnMut(&str, &Json) -> V,
        V: Into<Value>,
    {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        match &self.data {
            Value::Array(arr) => Json::new(
                arr.iter()
                    .enumerate()
                    .map(|(i, item)| f(&i.to_string(), &Json::new(item.clone())).into())
                    .collect::<Vec<Value>>(),
            ),
            Value::Object(map) => Json::new(
                sorted_entries(map)
                    .into_iter()
                    .map(|(key, item)| (key.clone(), f(key, &Json::new(item.clone())).into()))
                    .collect::<Map<String, Value>>(),
            ),
            _ => self.clone(),
        }
    }

    /// Keep the elements for which `f(key, element)` holds. Arrays keep the
    /// relative order of kept elements. Scalars are returned unchanged.
    pub fn filter<F>(&self, mut f: F) -> Json
    where
        F: FnMut(&str, &Json) -> bool,
    {
        if let Some(failed) = self.short_circuit() {
            return failed;
        }
        match &self.data {
            Value::Array(arr) => Json::new(
                arr.iter()
                    .enumerate()
                    .filter(|(i, item)| f(&i.to_string(), &Json::new((*item).clone())))
                    .map(|(_, item)| item.clone())
                    .collect::<Vec<Value>>(),
            ),
            Value::Object(map) => Json::new(
                sorted_entries(map)
                    .into_iter()
                    .filter(|(key, item)| f(key, &Json::new((*item).clone())))
                    .map(|(key, item)| (key.clone(), item.clone()))
                    .collect::<Map<String, Value>>(),
            ),
            _ => self.clone(),
        }
    }
}
