//! Dot-path utilities for JSON values.
//!
//! A dot path addresses a location in a nested `serde_json::Value` tree:
//! `"user.tags.0"` is key `user`, key `tags`, array index `0`. Integer
//! segments index arrays; any segment on an object is a key.
//!
//! # Example
//!
//! ```
//! use jsonx_path::{format_path, get, parse_path, remove, set};
//! use serde_json::{json, Value};
//!
//! // Parse a dot path into segments
//! let path = parse_path("user.profile.name");
//! assert_eq!(path, vec!["user", "profile", "name"]);
//! assert_eq!(format_path(&path), "user.profile.name");
//!
//! // Build a document from nothing
//! let mut doc = Value::Null;
//! set(&mut doc, &path, json!("Li")).unwrap();
//! assert_eq!(get(&doc, &path), Ok(&json!("Li")));
//!
//! // Remove a key again
//! remove(&mut doc, &path).unwrap();
//! assert_eq!(doc, json!({"user": {"profile": {}}}));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{container_for, kind_name, Path, Segment, ValueKind, MAX_ARRAY_INDEX};

pub mod util;
pub use util::{
    format_path, is_child, is_index, is_root, join, parent, parse_index, parse_path, SEPARATOR,
};

mod get;
pub use get::{get, get_mut, has};

mod set;
pub use set::{remove, set};

pub mod validate;
pub use validate::{validate_path, ValidationError, MAX_PATH_DEPTH, MAX_PATH_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path not found: {path}")]
    NotFound { path: String },
    #[error("array index out of range: {index} (length {len})")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("cannot access '{segment}' on {found}")]
    TypeMismatch {
        segment: String,
        found: &'static str,
    },
    #[error("invalid array index: {index}")]
    InvalidIndex { index: i64 },
    #[error("root path has no parent")]
    NoParent,
    #[error("path too deep: {depth} segments (limit {max})")]
    TooDeep { depth: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_set_then_get() {
        let mut doc = Value::Null;
        let path = parse_path("a.0.b");
        set(&mut doc, &path, json!(1)).unwrap();
        assert_eq!(doc, json!({"a": [{"b": 1}]}));
        assert_eq!(get(&doc, &path), Ok(&json!(1)));
    }

    #[test]
    fn test_has() {
        let doc = json!({"a": [1, {"b": null}]});
        assert!(has(&doc, &parse_path("a.1.b")));
        assert!(has(&doc, &[]));
        assert!(!has(&doc, &parse_path("a.2")));
        assert!(!has(&doc, &parse_path("a.1.b.c")));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PathError::NotFound {
                path: "a.b".to_string()
            }
            .to_string(),
            "path not found: a.b"
        );
        assert_eq!(
            PathError::IndexOutOfRange { index: 5, len: 1 }.to_string(),
            "array index out of range: 5 (length 1)"
        );
        assert_eq!(
            PathError::TypeMismatch {
                segment: "x".to_string(),
                found: "string"
            }
            .to_string(),
            "cannot access 'x' on string"
        );
        assert_eq!(
            PathError::InvalidIndex { index: -2 }.to_string(),
            "invalid array index: -2"
        );
    }

    #[test]
    fn test_remove_then_has() {
        let mut doc = json!({});
        let path = parse_path("a.b");
        set(&mut doc, &path, json!("x")).unwrap();
        assert!(has(&doc, &path));
        remove(&mut doc, &path).unwrap();
        assert!(!has(&doc, &path));
        assert!(has(&doc, &parse_path("a")));
    }
}
