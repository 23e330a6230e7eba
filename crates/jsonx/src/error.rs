use jsonx_path::PathError;
use thiserror::Error;

/// Error carried in the sticky slot of a [`Json`](crate::Json) value, or
/// returned by the fallible conversions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonxError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("invalid array index: {0}")]
    InvalidIndex(i64),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("path too deep: {depth} segments (limit {max})")]
    PathTooDeep { depth: usize, max: usize },
}

impl JsonxError {
    pub(crate) fn not_an(expected: &str, found: &serde_json::Value) -> Self {
        JsonxError::TypeMismatch(format!(
            "expected {expected}, found {}",
            jsonx_path::kind_name(found)
        ))
    }
}

impl From<PathError> for JsonxError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotFound { path } => JsonxError::PathNotFound(path),
            PathError::IndexOutOfRange { index, len } => {
                JsonxError::IndexOutOfRange { index, len }
            }
            PathError::InvalidIndex { index } => JsonxError::InvalidIndex(index),
            PathError::TooDeep { depth, max } => JsonxError::PathTooDeep { depth, max },
            mismatch @ (PathError::TypeMismatch { .. } | PathError::NoParent) => {
                JsonxError::TypeMismatch(mismatch.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for JsonxError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => JsonxError::Encode(err.to_string()),
            _ => JsonxError::Parse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path_error() {
        assert_eq!(
            JsonxError::from(PathError::NotFound {
                path: "a.b".to_string()
            }),
            JsonxError::PathNotFound("a.b".to_string())
        );
        assert_eq!(
            JsonxError::from(PathError::InvalidIndex { index: 10_000 }),
            JsonxError::InvalidIndex(10_000)
        );
        assert_eq!(
            JsonxError::from(PathError::TypeMismatch {
                segment: "x".to_string(),
                found: "string"
            }),
            JsonxError::TypeMismatch("cannot access 'x' on string".to_string())
        );
        assert_eq!(
            JsonxError::from(PathError::TooDeep {
                depth: 300,
                max: 256
            }),
            JsonxError::PathTooDeep {
                depth: 300,
                max: 256
            }
        );
    }

    #[test]
    fn test_not_an() {
        assert_eq!(
            JsonxError::not_an("array", &json!({})).to_string(),
            "type mismatch: expected array, found object"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(JsonxError::from(err), JsonxError::Parse(_)));
    }
}
