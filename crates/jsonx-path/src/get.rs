use serde_json::Value;

use crate::types::kind_name;
use crate::util::{format_path, parse_index};
use crate::validate::check_depth;
use crate::PathError;

/// Get a value from a JSON document by path.
///
/// Integer segments index arrays; on objects every segment, numeric or not,
/// is a key.
///
/// # Errors
///
/// - [`PathError::IndexOutOfRange`] for an array index outside `[0, len)`
/// - [`PathError::NotFound`] for a missing object key
/// - [`PathError::TypeMismatch`] when stepping into a scalar or using a
///   non-numeric segment on an array
/// - [`PathError::TooDeep`] for a path longer than
///   [`MAX_PATH_DEPTH`](crate::MAX_PATH_DEPTH) segments
///
/// # Example
///
/// ```
/// use jsonx_path::{get, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [1, 2, 3]}});
/// assert_eq!(get(&doc, &parse_path("a.b.1")), Ok(&json!(2)));
/// assert!(get(&doc, &parse_path("a.c")).is_err());
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, PathError> {
    check_depth(path)?;
    let mut current = val;
    for (depth, segment) in path.iter().enumerate() {
        current = match current {
            Value::Array(arr) => {
                let index = parse_index(segment).ok_or_else(|| mismatch(segment, current))?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| arr.get(i))
                    .ok_or(PathError::IndexOutOfRange {
                        index,
                        len: arr.len(),
                    })?
            }
            Value::Object(map) => map.get(segment).ok_or_else(|| PathError::NotFound {
                path: format_path(&path[..=depth]),
            })?,
            other => return Err(mismatch(segment, other)),
        };
    }
    Ok(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Fails exactly like [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, PathError> {
    check_depth(path)?;
    let mut current = val;
    for (depth, segment) in path.iter().enumerate() {
        current = match current {
            Value::Array(arr) => {
                let len = arr.len();
                let index = parse_index(segment).ok_or_else(|| PathError::TypeMismatch {
                    segment: segment.clone(),
                    found: "array",
                })?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| arr.get_mut(i))
                    .ok_or(PathError::IndexOutOfRange { index, len })?
            }
            Value::Object(map) => map.get_mut(segment).ok_or_else(|| PathError::NotFound {
                path: format_path(&path[..=depth]),
            })?,
            other => return Err(mismatch(segment, other)),
        };
    }
    Ok(current)
}

/// Check whether a path resolves without error.
pub fn has(val: &Value, path: &[String]) -> bool {
    get(val, path).is_ok()
}

pub(crate) fn mismatch(segment: &str, found: &Value) -> PathError {
    PathError::TypeMismatch {
        segment: segment.to_string(),
        found: kind_name(found),
    }
}
