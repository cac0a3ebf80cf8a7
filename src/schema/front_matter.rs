//! Raw front-matter mapping handed to the validator.

use crate::error::DocumentError;
use serde_yaml::{Mapping, Value};

/// Whether the source format kept the author's key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Keys appear in document order (YAML).
    Preserved,
    /// Keys were re-ordered or the order is not known (TOML, JSON objects).
    Unknown,
}

/// String-keyed mapping of arbitrary values, as parsed from a document header.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
    key_order: KeyOrder,
}

impl FrontMatter {
    pub fn new(fields: Mapping, key_order: KeyOrder) -> Self {
        Self { fields, key_order }
    }

    /// Parse a YAML mapping; key order is preserved.
    pub fn from_yaml_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value, KeyOrder::Preserved)
    }

    /// Parse a TOML table; the `toml` table type sorts keys, so order is unknown.
    pub fn from_toml_str(source: &str) -> Result<Self, DocumentError> {
        let table: toml::Table = toml::from_str(source)?;
        let value = serde_yaml::to_value(table).map_err(DocumentError::Yaml)?;
        Self::from_value(value, KeyOrder::Unknown)
    }

    /// Wrap a JSON object parsed elsewhere; key order is unknown.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DocumentError> {
        let value = serde_yaml::to_value(value).map_err(DocumentError::Yaml)?;
        Self::from_value(value, KeyOrder::Unknown)
    }

    fn from_value(value: Value, key_order: KeyOrder) -> Result<Self, DocumentError> {
        let fields = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            other => return Err(DocumentError::NotAMapping(value_kind(&other))),
        };
        if let Some(key) = fields.keys().find(|key| !key.is_string()) {
            return Err(DocumentError::NonStringKey(value_kind(key)));
        }
        Ok(Self { fields, key_order })
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn key_order(&self) -> KeyOrder {
        self.key_order
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// First key in document order, if the order is known.
    pub fn first_key(&self) -> Option<&str> {
        match self.key_order {
            KeyOrder::Preserved => self.fields.keys().next().and_then(Value::as_str),
            KeyOrder::Unknown => None,
        }
    }
}

/// Short name of a value's shape, used in error reasons.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
