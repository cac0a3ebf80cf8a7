//! Field-level validation findings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    MissingField,
    TypeMismatch,
    EnumViolation,
    RangeViolation,
    /// Handle, slug or identifier format
    PatternViolation,
    /// Batch-level identity collision
    DuplicateIdentifier,
    /// Tool command referencing an undeclared argument
    DanglingPlaceholder,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingField => "missing_field",
            FieldErrorKind::TypeMismatch => "type_mismatch",
            FieldErrorKind::EnumViolation => "enum_violation",
            FieldErrorKind::RangeViolation => "range_violation",
            FieldErrorKind::PatternViolation => "pattern_violation",
            FieldErrorKind::DuplicateIdentifier => "duplicate_identifier",
            FieldErrorKind::DanglingPlaceholder => "dangling_placeholder",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violation, naming the offending field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path, e.g. `args.path.type` or `inputs[1].name`
    pub path: String,
    pub kind: FieldErrorKind,
    pub reason: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: FieldErrorKind, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, FieldErrorKind::MissingField, "required field is missing")
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &str, found: &str) -> Self {
        Self::new(
            path,
            FieldErrorKind::TypeMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    pub fn enum_violation(path: impl Into<String>, value: &str, allowed: &[&str]) -> Self {
        Self::new(
            path,
            FieldErrorKind::EnumViolation,
            format!("'{}' is not one of: {}", value, allowed.join(", ")),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.path, self.kind, self.reason)
    }
}

impl std::error::Error for FieldError {}

/// Non-fatal observation; never causes a document to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    pub path: String,
    pub reason: String,
}

impl FieldWarning {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}
