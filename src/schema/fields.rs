//! Typed field access over a raw mapping, recording every violation.
//!
//! Readers never stop at the first problem: each accessor records its own
//! error and returns `None`, so the caller can keep checking the remaining
//! fields and assemble the record only when everything succeeded.

use super::errors::{FieldError, FieldErrorKind, FieldWarning};
use super::front_matter::value_kind;
use super::vocab::Vocabulary;
use regex::Regex;
use serde_yaml::{Mapping, Number, Value};
use std::sync::OnceLock;

/// Errors and warnings gathered during one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub errors: Vec<FieldError>,
    pub warnings: Vec<FieldWarning>,
}

impl Findings {
    pub fn error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn warn(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(FieldWarning::new(path, reason));
    }
}

/// View over one mapping at a path prefix (`""`, `args.path`, `inputs[0]`).
pub(crate) struct FieldReader<'m> {
    mapping: &'m Mapping,
    prefix: String,
}

impl<'m> FieldReader<'m> {
    pub fn root(mapping: &'m Mapping) -> Self {
        Self {
            mapping,
            prefix: String::new(),
        }
    }

    pub fn nested(mapping: &'m Mapping, prefix: impl Into<String>) -> Self {
        Self {
            mapping,
            prefix: prefix.into(),
        }
    }

    pub fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    pub fn get(&self, key: &str) -> Option<&'m Value> {
        self.mapping.get(key)
    }

    /// Present value, or a `MissingField` error.
    pub fn required(&self, key: &str, findings: &mut Findings) -> Option<&'m Value> {
        let value = self.get(key);
        if value.is_none() {
            findings.error(FieldError::missing(self.path(key)));
        }
        value
    }

    pub fn string(&self, key: &str, findings: &mut Findings) -> Option<String> {
        let value = self.required(key, findings)?;
        expect_string(&self.path(key), value, findings)
    }

    /// Outer `None`: present but invalid. Inner `None`: absent.
    pub fn optional_string(&self, key: &str, findings: &mut Findings) -> Option<Option<String>> {
        match self.get(key) {
            None => Some(None),
            Some(value) => expect_string(&self.path(key), value, findings).map(Some),
        }
    }

    pub fn string_list(&self, key: &str, findings: &mut Findings) -> Option<Vec<String>> {
        let value = self.required(key, findings)?;
        expect_string_list(&self.path(key), value, findings)
    }

    /// Outer `None`: present but invalid. Inner `None`: absent.
    pub fn optional_string_list(
        &self,
        key: &str,
        findings: &mut Findings,
    ) -> Option<Option<Vec<String>>> {
        match self.get(key) {
            None => Some(None),
            Some(value) => expect_string_list(&self.path(key), value, findings).map(Some),
        }
    }

    pub fn vocab<T: Vocabulary>(&self, key: &str, findings: &mut Findings) -> Option<T> {
        let path = self.path(key);
        let text = self.string(key, findings)?;
        let parsed = T::parse(&text);
        if parsed.is_none() {
            findings.error(FieldError::enum_violation(path, &text, T::VALUES));
        }
        parsed
    }

    /// Numbers keep their source form, so `90` stays an integer.
    pub fn number(&self, key: &str, findings: &mut Findings) -> Option<Number> {
        let value = self.required(key, findings)?;
        expect_number(&self.path(key), value, findings)
    }

    /// Number, or `default` when absent.
    pub fn number_or(&self, key: &str, default: Number, findings: &mut Findings) -> Option<Number> {
        match self.get(key) {
            None => Some(default),
            Some(value) => expect_number(&self.path(key), value, findings),
        }
    }

    /// Number within `[min, max]` inclusive.
    pub fn number_in(
        &self,
        key: &str,
        min: f64,
        max: f64,
        findings: &mut Findings,
    ) -> Option<Number> {
        let number = self.number(key, findings)?;
        if number.as_f64().is_some_and(|n| (min..=max).contains(&n)) {
            Some(number)
        } else {
            findings.error(FieldError::new(
                self.path(key),
                FieldErrorKind::RangeViolation,
                format!("must be between {} and {}, got {}", min, max, number),
            ));
            None
        }
    }

    /// Boolean, or `default` when absent.
    pub fn bool_or(&self, key: &str, default: bool, findings: &mut Findings) -> Option<bool> {
        match self.get(key) {
            None => Some(default),
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                findings.error(FieldError::type_mismatch(
                    self.path(key),
                    "boolean",
                    value_kind(other),
                ));
                None
            }
        }
    }

    pub fn mapping(&self, key: &str, findings: &mut Findings) -> Option<&'m Mapping> {
        match self.required(key, findings)? {
            Value::Mapping(mapping) => Some(mapping),
            other => {
                findings.error(FieldError::type_mismatch(
                    self.path(key),
                    "mapping",
                    value_kind(other),
                ));
                None
            }
        }
    }

    pub fn sequence(&self, key: &str, findings: &mut Findings) -> Option<&'m [Value]> {
        match self.required(key, findings)? {
            Value::Sequence(items) => Some(items.as_slice()),
            other => {
                findings.error(FieldError::type_mismatch(
                    self.path(key),
                    "sequence",
                    value_kind(other),
                ));
                None
            }
        }
    }

    /// Entries whose keys are not in `declared`, in source order.
    pub fn extra(&self, declared: &[&str]) -> Mapping {
        self.mapping
            .iter()
            .filter(|(key, _)| !key.as_str().is_some_and(|k| declared.contains(&k)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

pub(crate) fn expect_string(path: &str, value: &Value, findings: &mut Findings) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            findings.error(FieldError::type_mismatch(path, "string", value_kind(other)));
            None
        }
    }
}

fn expect_number(path: &str, value: &Value, findings: &mut Findings) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        other => {
            findings.error(FieldError::type_mismatch(path, "number", value_kind(other)));
            None
        }
    }
}

pub(crate) fn expect_string_list(
    path: &str,
    value: &Value,
    findings: &mut Findings,
) -> Option<Vec<String>> {
    let items = match value {
        Value::Sequence(items) => items,
        other => {
            findings.error(FieldError::type_mismatch(
                path,
                "sequence of strings",
                value_kind(other),
            ));
            return None;
        }
    };

    let mut strings = Vec::with_capacity(items.len());
    let mut valid = true;
    for (index, item) in items.iter().enumerate() {
        match expect_string(&format!("{}[{}]", path, index), item, findings) {
            Some(s) => strings.push(s),
            None => valid = false,
        }
    }
    valid.then_some(strings)
}

/// `@` followed by at least one character.
pub(crate) fn is_handle(value: &str) -> bool {
    value.strip_prefix('@').is_some_and(|rest| !rest.is_empty())
}

/// `/` followed by at least one character.
pub(crate) fn is_slug(value: &str) -> bool {
    value.strip_prefix('/').is_some_and(|rest| !rest.is_empty())
}

pub(crate) fn is_snake_case(value: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)*$").expect("snake_case pattern is valid")
    })
    .is_match(value)
}

/// Record a `PatternViolation` unless `check` accepts the value.
pub(crate) fn require_pattern(
    path: &str,
    value: String,
    check: fn(&str) -> bool,
    expectation: &str,
    findings: &mut Findings,
) -> Option<String> {
    if check(&value) {
        Some(value)
    } else {
        findings.error(FieldError::new(
            path,
            FieldErrorKind::PatternViolation,
            format!("must be {} (found '{}')", expectation, value),
        ));
        None
    }
}
