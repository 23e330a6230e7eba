use serde_json::Value;

use crate::get::{get_mut, mismatch};
use crate::types::{container_for, MAX_ARRAY_INDEX};
use crate::util::parse_index;
use crate::validate::check_depth;
use crate::PathError;

/// Set a value at a path, creating missing containers on the way.
///
/// - The root path replaces the whole document.
/// - A `null` document or intermediate slot is replaced by the container the
///   next segment needs: an array for integer segments, an object otherwise.
///   An empty array addressed by a non-integer segment is replaced the same
///   way.
/// - Arrays too short for an index are padded with `null` up to and including
///   that index.
/// - On an existing object every segment is a key, even an integer-looking one.
///
/// The whole path is checked against the document before anything is
/// written, so a failed `set` leaves the document untouched.
///
/// # Errors
///
/// - [`PathError::TooDeep`] for a path longer than
///   [`MAX_PATH_DEPTH`](crate::MAX_PATH_DEPTH) segments
/// - [`PathError::InvalidIndex`] for a negative index, or for growing an array
///   to an index at or past [`MAX_ARRAY_INDEX`]
/// - [`PathError::TypeMismatch`] when the path runs into a string, number or
///   boolean, or uses a non-numeric segment on a non-empty array
///
/// # Example
///
/// ```
/// use jsonx_path::{parse_path, set};
/// use serde_json::{json, Value};
///
/// let mut doc = Value::Null;
/// set(&mut doc, &parse_path("users.1.name"), json!("Li")).unwrap();
/// assert_eq!(doc, json!({"users": [null, {"name": "Li"}]}));
/// ```
pub fn set(doc: &mut Value, path: &[String], value: Value) -> Result<(), PathError> {
    check_depth(path)?;
    check_writable(doc, path)?;

    let mut current = doc;
    for segment in path {
        if is_replaceable(current, segment) {
            *current = container_for(segment);
        }
        current = match current {
            Value::Object(map) => map.entry(segment.clone()).or_insert(Value::Null),
            Value::Array(arr) => {
                let idx = slot_index(segment, arr.len())?;
                if idx >= arr.len() {
                    arr.resize(idx + 1, Value::Null);
                }
                &mut arr[idx]
            }
            other => return Err(mismatch(segment, other)),
        };
    }
    *current = value;
    Ok(())
}

/// Walks `path` over the existing document without writing, failing where
/// `set` would fail. Past the first absent slot the remaining containers are
/// the fresh ones `set` would create.
fn check_writable(doc: &Value, path: &[String]) -> Result<(), PathError> {
    let mut existing = Some(doc);
    for segment in path {
        existing = match existing.filter(|v| !is_replaceable(v, segment)) {
            Some(Value::Object(map)) => map.get(segment),
            Some(Value::Array(arr)) => arr.get(slot_index(segment, arr.len())?),
            Some(other) => return Err(mismatch(segment, other)),
            None => {
                if parse_index(segment).is_some() {
                    slot_index(segment, 0)?;
                }
                None
            }
        };
    }
    Ok(())
}

// Slots `set` overwrites with `container_for(segment)` before stepping in.
fn is_replaceable(slot: &Value, segment: &str) -> bool {
    match slot {
        Value::Null => true,
        Value::Array(arr) => arr.is_empty() && parse_index(segment).is_none(),
        _ => false,
    }
}

/// Resolves `segment` to a writable position in an array of length `len`.
fn slot_index(segment: &str, len: usize) -> Result<usize, PathError> {
    let index = parse_index(segment).ok_or_else(|| PathError::TypeMismatch {
        segment: segment.to_string(),
        found: "array",
    })?;
    let idx = usize::try_from(index).map_err(|_| PathError::InvalidIndex { index })?;
    if idx >= len && idx >= MAX_ARRAY_INDEX {
        return Err(PathError::InvalidIndex { index });
    }
    Ok(idx)
}

/// Remove an object key addressed by a path, returning the removed value.
///
/// The parent is resolved like [`get`](crate::get); removing an absent key
/// succeeds with `None`. Removing the root path takes the document and leaves
/// `null` behind.
///
/// # Errors
///
/// [`PathError::TooDeep`] for an overlong path, navigation errors of the
/// parent path, and [`PathError::TypeMismatch`] when
/// the parent is not an object (array elements cannot be removed by path).
///
/// # Example
///
/// ```
/// use jsonx_path::{parse_path, remove};
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1, "c": 2}});
/// assert_eq!(remove(&mut doc, &parse_path("a.b")), Ok(Some(json!(1))));
/// assert_eq!(doc, json!({"a": {"c": 2}}));
/// ```
pub fn remove(doc: &mut Value, path: &[String]) -> Result<Option<Value>, PathError> {
    check_depth(path)?;
    let Some((key, parent_path)) = path.split_last() else {
        return Ok(Some(doc.take()));
    };
    match get_mut(doc, parent_path)? {
        Value::Object(map) => Ok(map.remove(key)),
        other => Err(mismatch(key, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_path, MAX_PATH_DEPTH};
    use serde_json::json;

    #[test]
    fn test_set_root() {
        let mut doc = json!({"a": 1});
        set(&mut doc, &[], json!([1])).unwrap();
        assert_eq!(doc, json!([1]));
    }

    #[test]
    fn test_set_null_root_numeric() {
        let mut doc = Value::Null;
        set(&mut doc, &parse_path("2"), json!("x")).unwrap();
        assert_eq!(doc, json!([null, null, "x"]));
    }

    #[test]
    fn test_set_overwrites() {
        let mut doc = json!({"a": {"b": 1}});
        set(&mut doc, &parse_path("a.b"), json!(2)).unwrap();
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_set_creates_array_for_numeric_next() {
        let mut doc = json!({});
        set(&mut doc, &parse_path("list.1.id"), json!(5)).unwrap();
        assert_eq!(doc, json!({"list": [null, {"id": 5}]}));
    }

    #[test]
    fn test_set_replaces_null_intermediate() {
        let mut doc = json!({"a": null});
        set(&mut doc, &parse_path("a.b"), json!(true)).unwrap();
        assert_eq!(doc, json!({"a": {"b": true}}));
    }

    #[test]
    fn test_set_numeric_key_on_object() {
        let mut doc = json!({});
        set(&mut doc, &parse_path("7"), json!("seven")).unwrap();
        assert_eq!(doc, json!({"7": "seven"}));
    }

    #[test]
    fn test_set_into_scalar() {
        let mut doc = json!({"name": "x"});
        assert_eq!(
            set(&mut doc, &parse_path("name.first"), json!(1)),
            Err(PathError::TypeMismatch {
                segment: "first".to_string(),
                found: "string"
            })
        );
    }

    #[test]
    fn test_set_scalar_root() {
        let mut doc = json!(3);
        assert!(matches!(
            set(&mut doc, &parse_path("a"), json!(1)),
            Err(PathError::TypeMismatch { found: "number", .. })
        ));
    }

    #[test]
    fn test_set_negative_index() {
        let mut doc = json!([]);
        assert_eq!(
            set(&mut doc, &parse_path("-1"), json!(1)),
            Err(PathError::InvalidIndex { index: -1 })
        );
    }

    #[test]
    fn test_set_growth_bound() {
        let mut doc = json!([]);
        assert_eq!(
            set(&mut doc, &parse_path("10000"), json!(1)),
            Err(PathError::InvalidIndex { index: 10_000 })
        );
        assert_eq!(doc, json!([]));

        set(&mut doc, &parse_path("9999"), json!(1)).unwrap();
        assert_eq!(doc.as_array().map(Vec::len), Some(10_000));
    }

    #[test]
    fn test_set_failure_leaves_document_untouched() {
        let mut doc = json!({});
        assert_eq!(
            set(&mut doc, &parse_path("a.b.-1"), json!(1)),
            Err(PathError::InvalidIndex { index: -1 })
        );
        assert_eq!(doc, json!({}));

        let mut doc = Value::Null;
        assert_eq!(
            set(&mut doc, &parse_path("-1"), json!(1)),
            Err(PathError::InvalidIndex { index: -1 })
        );
        assert_eq!(doc, Value::Null);

        let mut doc = json!({"list": [{"id": 1}]});
        assert_eq!(
            set(&mut doc, &parse_path("list.3.tags.10000"), json!(1)),
            Err(PathError::InvalidIndex { index: 10_000 })
        );
        assert_eq!(doc, json!({"list": [{"id": 1}]}));

        let mut doc = json!({"a": {"b": "leaf"}});
        assert!(set(&mut doc, &parse_path("a.x.y.z"), json!(1)).is_ok());
        assert!(set(&mut doc, &parse_path("a.b.c"), json!(1)).is_err());
        assert_eq!(doc, json!({"a": {"b": "leaf", "x": {"y": {"z": 1}}}}));
    }

    #[test]
    fn test_set_key_on_empty_array() {
        let mut doc = json!([]);
        set(&mut doc, &parse_path("a"), json!(1)).unwrap();
        assert_eq!(doc, json!({"a": 1}));

        let mut doc = json!({"list": []});
        set(&mut doc, &parse_path("list.name"), json!("x")).unwrap();
        assert_eq!(doc, json!({"list": {"name": "x"}}));

        let mut doc = json!([1]);
        assert!(matches!(
            set(&mut doc, &parse_path("a"), json!(1)),
            Err(PathError::TypeMismatch { found: "array", .. })
        ));
        assert_eq!(doc, json!([1]));
    }

    #[test]
    fn test_set_rejects_overlong_path() {
        let path = vec!["k".to_string(); 10_000];
        let mut doc = json!({});
        assert_eq!(
            set(&mut doc, &path, json!(1)),
            Err(PathError::TooDeep {
                depth: 10_000,
                max: MAX_PATH_DEPTH
            })
        );
        assert_eq!(doc, json!({}));
        assert!(matches!(
            remove(&mut doc, &path),
            Err(PathError::TooDeep { .. })
        ));

        let path = vec!["k".to_string(); MAX_PATH_DEPTH];
        set(&mut doc, &path, json!(1)).unwrap();
        assert_eq!(crate::get(&doc, &path), Ok(&json!(1)));
    }

    #[test]
    fn test_remove_array_parent() {
        let mut doc = json!({"a": [1, 2]});
        assert!(matches!(
            remove(&mut doc, &parse_path("a.0")),
            Err(PathError::TypeMismatch { found: "array", .. })
        ));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut doc = json!({"a": {}});
        assert_eq!(remove(&mut doc, &parse_path("a.b")), Ok(None));
        assert_eq!(
            remove(&mut doc, &parse_path("x.y")),
            Err(PathError::NotFound {
                path: "x".to_string()
            })
        );
    }

    #[test]
    fn test_remove_root() {
        let mut doc = json!({"a": 1});
        assert_eq!(remove(&mut doc, &[]), Ok(Some(json!({"a": 1}))));
        assert_eq!(doc, Value::Null);
    }
}
