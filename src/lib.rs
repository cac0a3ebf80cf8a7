//! agentdef: schema validation for agent asset definitions
//!
//! Personas, rules, tools, workflows, knowledge sources and evaluations are
//! written as documents with a front-matter header. This crate parses those
//! headers, validates them against per-kind schemas, and loads whole catalogs
//! of them with batch-level identity checks.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod schema;

pub use catalog::{Catalog, CatalogEntry, CatalogOptions, CatalogReport};
pub use document::{parse_document, Document, FrontMatterFormat};
pub use error::{ApiError, DocumentError};
pub use schema::{
    check_uniqueness, validate, FieldError, FieldErrorKind, FieldWarning, FileKindHint,
    FrontMatter, Record, RecordKind, Validation, ValidationProfile, Validator,
};
