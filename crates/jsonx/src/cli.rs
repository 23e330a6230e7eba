//! The `jsonx` command-line tool: one document on stdin, one command,
//! the result on stdout.

use clap::{Parser, Subcommand};
use jsonx_path::{validate_path, ValidationError};
use serde_json::Value;
use thiserror::Error;

use crate::error::JsonxError;
use crate::flatten::unflatten;
use crate::json::Json;
use crate::schema::{Schema, SchemaError};

#[derive(Parser, Debug)]
#[command(name = "jsonx")]
#[command(about = "Query and reshape a JSON document read from stdin")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the value at a dot path
    Get { path: String },

    /// Assign a value at a dot path. VALUE is read as JSON, falling back to
    /// a plain string when it does not parse
    Set { path: String, value: String },

    /// Remove the key at a dot path
    Delete { path: String },

    /// List object keys at a dot path (the root by default)
    Keys { path: Option<String> },

    /// Map every leaf to its dot path
    Flatten,

    /// Rebuild a document from a dot-path map
    Unflatten,

    /// Re-encode with two-space indentation
    Pretty,

    /// Re-encode without whitespace
    Minify,

    /// Check the document parses, and optionally that it satisfies a schema
    Validate {
        /// Schema document as JSON text
        #[arg(long)]
        schema: Option<String>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    #[error("invalid path: {0}")]
    Path(#[from] ValidationError),

    #[error(transparent)]
    Json(#[from] JsonxError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Run `command` against the document `input`, returning the text to print.
pub fn run(command: &Command, input: &str) -> Result<String, CliError> {
    tracing::debug!(?command, input_len = input.len(), "running jsonx command");
    let doc = Json::parse(input);
    if let Some(err) = doc.error() {
        return Err(err.clone().into());
    }
    let output = match command {
        Command::Get { path } => {
            validate_path(path)?;
            doc.get(path).to_pretty_json()?
        }
        Command::Set { path, value } => {
            validate_path(path)?;
            let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.clone()));
            doc.set(path, value).to_pretty_json()?
        }
        Command::Delete { path } => {
            validate_path(path)?;
            doc.delete(path).to_pretty_json()?
        }
        Command::Keys { path } => {
            let target = match path {
                Some(path) => {
                    validate_path(path)?;
                    doc.get(path)
                }
                None => doc,
            };
            if let Some(err) = target.error() {
                return Err(err.clone().into());
            }
            if !target.is_object() {
                return Err(JsonxError::not_an("object", target.value()).into());
            }
            Json::new(target.keys()).to_pretty_json()?
        }
        Command::Flatten => Json::new(doc.flatten().into_iter().collect::<serde_json::Map<_, _>>())
            .to_pretty_json()?,
        Command::Unflatten => unflatten(doc.to_map()?).to_pretty_json()?,
        Command::Pretty => doc.to_pretty_json()?,
        Command::Minify => doc.to_json()?,
        Command::Validate { schema } => {
            if let Some(schema) = schema {
                Schema::from_json(&Json::parse(schema))?.validate(&doc)?;
            }
            "valid".to_string()
        }
    };
    Ok(output)
}
