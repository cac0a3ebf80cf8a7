//! Record kinds and the location hint used to pick a schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The six asset record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Persona,
    Rule,
    Tool,
    Workflow,
    Knowledge,
    Evaluation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Persona,
        RecordKind::Rule,
        RecordKind::Tool,
        RecordKind::Workflow,
        RecordKind::Knowledge,
        RecordKind::Evaluation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Persona => "persona",
            RecordKind::Rule => "rule",
            RecordKind::Tool => "tool",
            RecordKind::Workflow => "workflow",
            RecordKind::Knowledge => "knowledge",
            RecordKind::Evaluation => "evaluation",
        }
    }

    /// Conventional directory name holding documents of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            RecordKind::Persona => "personas",
            RecordKind::Rule => "rules",
            RecordKind::Tool => "tools",
            RecordKind::Workflow => "workflows",
            RecordKind::Knowledge => "knowledge",
            RecordKind::Evaluation => "evals",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dir_name() == name)
    }

    /// Field whose value must be unique among records of this kind.
    pub fn identity_field(&self) -> &'static str {
        match self {
            RecordKind::Persona => "handle",
            RecordKind::Workflow => "slug",
            _ => "name",
        }
    }

    /// Value accepted in the `type` discriminator, for kinds that carry one.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            RecordKind::Rule => Some("rule"),
            RecordKind::Tool => Some("tool"),
            RecordKind::Workflow => Some("workflow"),
            _ => None,
        }
    }

    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            "rule" => Some(RecordKind::Rule),
            "tool" => Some(RecordKind::Tool),
            "workflow" => Some(RecordKind::Workflow),
            _ => None,
        }
    }

    /// Parse a user-facing kind name (`persona`, `personas`, `eval`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.dir_name() == name)
            .or(match name.as_str() {
                "eval" => Some(RecordKind::Evaluation),
                _ => None,
            })
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which schema a document's location suggests.
///
/// Persona, Knowledge and Evaluation documents carry no `type` field, so the
/// hint is the only thing that selects their schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKindHint {
    Kind(RecordKind),
    #[default]
    Unknown,
}

impl FileKindHint {
    /// Derive the hint from the document's immediate parent directory.
    pub fn from_path(path: &Path) -> Self {
        path.parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str())
            .and_then(RecordKind::from_dir_name)
            .map(FileKindHint::Kind)
            .unwrap_or(FileKindHint::Unknown)
    }

    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            FileKindHint::Kind(kind) => Some(*kind),
            FileKindHint::Unknown => None,
        }
    }
}

impl From<RecordKind> for FileKindHint {
    fn from(kind: RecordKind) -> Self {
        FileKindHint::Kind(kind)
    }
}
