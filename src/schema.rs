//! Asset record schemas and their validator.
//!
//! A front-matter mapping plus a location hint goes in; either a typed
//! [`Record`] or the complete list of [`FieldError`]s comes out. Validation
//! is pure and never touches the filesystem.

pub mod errors;
mod fields;
pub mod front_matter;
pub mod kind;
pub mod records;
pub mod template;
pub mod uniqueness;
pub mod validator;
pub mod vocab;

pub use errors::{FieldError, FieldErrorKind, FieldWarning};
pub use front_matter::{FrontMatter, KeyOrder};
pub use kind::{FileKindHint, RecordKind};
pub use records::{
    Access, ArgSpec, Evaluation, InputSpec, Knowledge, Persona, PriorityTier, Record, Rule, Tool,
    Workflow,
};
pub use uniqueness::check_uniqueness;
pub use validator::{validate, Validation, ValidationProfile, Validator};
pub use vocab::Vocabulary;
