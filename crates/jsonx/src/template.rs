//! JSON text templates with `{{name}}` placeholders.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::json::Json;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap())
}

/// Fills `{{name}}` placeholders with JSON literals and parses the result.
///
/// Each bound value is rendered as JSON text, so strings arrive quoted and
/// escaped and the placeholder should stand where a value is expected.
/// Placeholders without a binding are left untouched, which usually makes
/// the rendered text fail to parse.
///
/// ```
/// use jsonx::Template;
///
/// let j = Template::new(r#"{"name": {{name}}, "age": {{age}}}"#)
///     .set("name", "Li \"the\" dev")
///     .set("age", 30)
///     .build();
/// assert_eq!(j.get("name").as_string(), "Li \"the\" dev");
/// assert_eq!(j.get("age").as_int(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    values: BTreeMap<String, Value>,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Template {
            text: text.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn set_many<I, K, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .fold(self, |template, (name, value)| template.set(name, value))
    }

    /// The template text with every bound placeholder substituted.
    pub fn render(&self) -> String {
        placeholder_regex()
            .replace_all(&self.text, |caps: &Captures| match self.values.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    pub fn build(&self) -> Json {
        Json::parse(&self.render())
    }
}
