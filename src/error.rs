//! Error types for the fallible edges of the form: name parsing,
//! configuration and event-script loading.
//!
//! Field validation itself never fails; an invalid value is a regular
//! state (`valid = false` plus a message), not an error.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// A field name outside `email`, `password`, `confirmPassword`.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid email pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to serialize output: {0}")]
    Output(String),
}
