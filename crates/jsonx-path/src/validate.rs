//! Validation functions for dot paths.

use thiserror::Error;

use crate::PathError;

/// Maximum allowed path string length.
pub const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed number of segments.
pub const MAX_PATH_DEPTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("path too long ({0} characters)")]
    PathTooLong(usize),
    #[error("path too deep ({0} segments)")]
    PathTooDeep(usize),
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
}

/// Validate a dot path string.
///
/// The empty string (root) is valid. Navigation itself accepts any string;
/// this check is for paths that come from user input.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds [`MAX_PATH_LENGTH`] characters
/// - The path has more than [`MAX_PATH_DEPTH`] segments
/// - A segment is empty (leading, trailing or doubled `.`)
///
/// # Example
///
/// ```
/// use jsonx_path::validate_path;
///
/// validate_path("").unwrap();
/// validate_path("user.tags.0").unwrap();
/// validate_path("user..name").unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Ok(());
    }
    let length = path.chars().count();
    if length > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong(length));
    }
    let mut depth = 0;
    for (position, segment) in path.split('.').enumerate() {
        if segment.is_empty() {
            return Err(ValidationError::EmptySegment(position));
        }
        depth += 1;
    }
    if depth > MAX_PATH_DEPTH {
        return Err(ValidationError::PathTooDeep(depth));
    }
    Ok(())
}

/// Rejects segment lists longer than [`MAX_PATH_DEPTH`] before any walk.
pub(crate) fn check_depth(path: &[String]) -> Result<(), PathError> {
    if path.len() > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep {
            depth: path.len(),
            max: MAX_PATH_DEPTH,
        });
    }
    Ok(())
}
