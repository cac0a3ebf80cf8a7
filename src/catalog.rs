//! Asset catalogs: every definition document under a root such as `.agent/`.
//!
//! Loading is split from lookup. [`Catalog::load`] walks the conventional
//! kind directories and returns a [`CatalogReport`] describing each document;
//! [`CatalogReport::catalog`] exposes the accepted records for lookup.

mod loader;

use crate::schema::{
    FieldError, FieldWarning, FileKindHint, Persona, Record, RecordKind, Tool, Workflow,
};
use std::path::{Path, PathBuf};

pub use loader::CatalogOptions;

/// Outcome for one document in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    /// Path relative to the catalog root
    pub relative_path: PathBuf,
    pub hint: FileKindHint,
    /// Schema that was applied, if one could be selected
    pub kind: Option<RecordKind>,
    pub record: Option<Record>,
    pub errors: Vec<FieldError>,
    pub warnings: Vec<FieldWarning>,
    /// Read or front-matter failure; no validation ran
    pub document_error: Option<String>,
}

impl CatalogEntry {
    pub fn is_valid(&self) -> bool {
        self.record.is_some()
    }
}

/// Per-document results of loading a catalog root.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub root: PathBuf,
    /// In sorted path order
    pub entries: Vec<CatalogEntry>,
}

impl CatalogReport {
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(CatalogEntry::is_valid)
    }

    pub fn accepted(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.is_valid())
    }

    pub fn failed(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| !entry.is_valid())
    }

    pub fn warning_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.warnings.len()).sum()
    }

    pub fn entry(&self, relative_path: &Path) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.relative_path == relative_path)
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog {
            entries: self.accepted().collect(),
        }
    }
}

/// Accepted records of a loaded catalog.
#[derive(Debug, Clone)]
pub struct Catalog<'r> {
    entries: Vec<&'r CatalogEntry>,
}

impl<'r> Catalog<'r> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted entries, each paired with its record.
    pub fn iter(&self) -> impl Iterator<Item = (&'r CatalogEntry, &'r Record)> + '_ {
        self.entries
            .iter()
            .filter_map(|&entry| entry.record.as_ref().map(|record| (entry, record)))
    }

    pub fn records(&self, kind: RecordKind) -> impl Iterator<Item = &'r Record> + '_ {
        self.iter()
            .map(|(_, record)| record)
            .filter(move |record| record.kind() == kind)
    }

    /// Entries whose identity matches, optionally restricted to one kind.
    pub fn find(
        &self,
        identity: &str,
        kind: Option<RecordKind>,
    ) -> Vec<(&'r CatalogEntry, &'r Record)> {
        self.iter()
            .filter(|(_, record)| kind.map_or(true, |kind| record.kind() == kind))
            .filter(|(_, record)| record.identity() == identity)
            .collect()
    }

    pub fn persona(&self, handle: &str) -> Option<&'r Persona> {
        self.iter().find_map(|(_, record)| match record {
            Record::Persona(persona) if persona.handle == handle => Some(persona),
            _ => None,
        })
    }

    pub fn tool(&self, name: &str) -> Option<&'r Tool> {
        self.iter().find_map(|(_, record)| match record {
            Record::Tool(tool) if tool.name == name => Some(tool),
            _ => None,
        })
    }

    pub fn workflow(&self, slug: &str) -> Option<&'r Workflow> {
        self.iter().find_map(|(_, record)| match record {
            Record::Workflow(workflow) if workflow.slug == slug => Some(workflow),
            _ => None,
        })
    }
}
