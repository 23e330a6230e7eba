use crate::PathError;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Parse a dot path into its segments.
///
/// The empty string is the root path and yields no segments. Empty segments
/// are kept, so `"a..b"` has three segments.
///
/// # Example
///
/// ```
/// use jsonx_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("user.tags.0"), vec!["user", "tags", "0"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Format segments back into a dot path.
///
/// # Example
///
/// ```
/// use jsonx_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["a".to_string(), "0".to_string()]), "a.0");
/// ```
pub fn format_path(path: &[String]) -> String {
    path.join(".")
}

/// Append a segment to a dot path, omitting the separator at the root.
///
/// ```
/// use jsonx_path::join;
///
/// assert_eq!(join("", "a"), "a");
/// assert_eq!(join("a", "0"), "a.0");
/// ```
pub fn join(base: &str, segment: &str) -> String {
    if base.is_empty() {
        return segment.to_string();
    }
    let mut out = String::with_capacity(base.len() + segment.len() + 1);
    out.push_str(base);
    out.push(SEPARATOR);
    out.push_str(segment);
    out
}

/// Parse a segment as an integer array index.
///
/// Accepts anything `i64` parsing accepts, including a sign, so negative
/// indices are recognized here and rejected by the navigation functions.
///
/// ```
/// use jsonx_path::parse_index;
///
/// assert_eq!(parse_index("3"), Some(3));
/// assert_eq!(parse_index("-1"), Some(-1));
/// assert_eq!(parse_index("x"), None);
/// assert_eq!(parse_index(""), None);
/// ```
pub fn parse_index(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

/// Check whether a segment addresses a valid (non-negative) array index.
pub fn is_index(segment: &str) -> bool {
    matches!(parse_index(segment), Some(i) if i >= 0)
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` path strictly contains the `child` path.
///
/// ```
/// use jsonx_path::{is_child, parse_path};
///
/// assert!(is_child(&parse_path("a"), &parse_path("a.b")));
/// assert!(!is_child(&parse_path("a.b"), &parse_path("a")));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Vec<String>, PathError> {
    match path.split_last() {
        Some((_, head)) => Ok(head.to_vec()),
        None => Err(PathError::NoParent),
    }
}
