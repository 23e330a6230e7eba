//! jsonx - dynamic JSON values with dot-path access
//!
//! [`Json`] wraps a `serde_json::Value` tree and adds dot-path navigation
//! (`"user.tags.0"`), lossy typed accessors, array and object operations,
//! merging, flattening and field selection. Every structural operation takes
//! part in a fluent chain with a sticky error slot: the first failure is kept
//! and every later call passes it through, so a chain is checked once at the
//! end.
//!
//! # Example
//!
//! ```
//! use jsonx::{quick_array, Json};
//! use serde_json::json;
//!
//! // Build a nested document from nothing
//! let doc = Json::default()
//!     .set("servers.0.host", "a")
//!     .set("servers.1.host", "b")
//!     .set("debug", false);
//! assert_eq!(doc.get("servers.1.host").as_string(), "b");
//! assert_eq!(doc.to_json().unwrap(), r#"{"debug":false,"servers":[{"host":"a"},{"host":"b"}]}"#);
//!
//! // Errors stick until inspected
//! let chain = doc.get("servers.5").get("host");
//! assert!(chain.error().is_some());
//!
//! // Collections
//! let result = quick_array(1..=5)
//!     .filter(|_, v| v.as_i64() % 2 == 0)
//!     .map(|_, v| v.as_i64() * 2);
//! assert_eq!(result.value(), &json!([4, 8]));
//! ```

mod access;
mod builder;
pub mod cli;
mod codec;
mod collection;
mod equal;
mod error;
mod flatten;
mod inspect;
mod json;
mod merge;
mod navigate;
mod schema;
mod select;
mod template;

pub use builder::{quick_array, quick_object, Builder};
pub use codec::{is_valid, minify, pretty};
pub use equal::{compare, deep_equal};
pub use error::JsonxError;
pub use flatten::unflatten;
pub use inspect::transform;
pub use json::Json;
pub use merge::{deep_merge_all, merge_all};
pub use schema::{Schema, SchemaError, SchemaType};
pub use template::Template;

pub use jsonx_path::{ValueKind, MAX_ARRAY_INDEX};
