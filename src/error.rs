//! Error types for agent asset loading.
//!
//! Field-level validation problems are not errors in this sense: they are
//! returned as data (`schema::FieldError`). The types here cover failures to
//! read a document or to run the tool at all.

use std::path::PathBuf;
use thiserror::Error;

/// Front-matter document errors
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No front matter found (document must start with '---' or '+++')")]
    MissingFrontMatter,

    #[error("Front matter opened with '{0}' is never closed")]
    Unterminated(&'static str),

    #[error("Invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Front matter must be a key/value mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("Front matter keys must be strings, found {0}")]
    NonStringKey(&'static str),
}

/// Tool-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {message}")]
    WalkFailed { path: PathBuf, message: String },

    #[error("Document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Identity '{identity}' is ambiguous; matches kinds: {kinds} (use --kind)")]
    AmbiguousRecord { identity: String, kinds: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ApiError {
    fn from(err: serde_yaml::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
