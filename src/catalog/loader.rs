//! Directory walk and per-document validation for a catalog root.

use super::{Catalog, CatalogEntry, CatalogReport};
use crate::document::parse_document;
use crate::error::ApiError;
use crate::schema::{check_uniqueness, FileKindHint, RecordKind, Validator};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which files count as definition documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// File extensions without the dot, matched case-insensitively
    pub extensions: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string(), "mdc".to_string()],
        }
    }
}

impl CatalogOptions {
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

impl Catalog<'_> {
    /// Load and validate every definition document under `root`.
    ///
    /// Only direct children of the six kind directories are read, so
    /// `knowledge/sources/**` is never mistaken for definitions. Per-document
    /// failures are recorded on the entries; only an unusable root is an error.
    pub fn load(
        root: &Path,
        options: &CatalogOptions,
        validator: &Validator,
    ) -> Result<CatalogReport, ApiError> {
        if !root.is_dir() {
            return Err(ApiError::RootNotFound(root.to_path_buf()));
        }
        let root = dunce::canonicalize(root).map_err(|e| ApiError::ReadFailed {
            path: root.to_path_buf(),
            source: e,
        })?;

        let mut paths = Vec::new();
        for kind in RecordKind::ALL {
            paths.extend(definition_files(&root, kind, options)?);
        }
        paths.sort();

        tracing::debug!(root = %root.display(), documents = paths.len(), "Loading catalog");

        let mut entries: Vec<CatalogEntry> = paths
            .into_iter()
            .map(|path| load_entry(&root, path, validator))
            .collect();

        reject_duplicates(&mut entries);

        let report = CatalogReport { root, entries };
        tracing::info!(
            root = %report.root.display(),
            accepted = report.accepted().count(),
            failed = report.failed().count(),
            warnings = report.warning_count(),
            "Catalog loaded"
        );
        Ok(report)
    }
}

fn definition_files(
    root: &Path,
    kind: RecordKind,
    options: &CatalogOptions,
) -> Result<Vec<PathBuf>, ApiError> {
    let dir = root.join(kind.dir_name());
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Kind directory absent, skipping");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ApiError::WalkFailed {
                    path: dir,
                    message: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Failed to read directory entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && options.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn load_entry(root: &Path, path: PathBuf, validator: &Validator) -> CatalogEntry {
    let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
    let hint = FileKindHint::from_path(&path);
    let mut entry = CatalogEntry {
        path,
        relative_path,
        hint,
        kind: None,
        record: None,
        errors: Vec::new(),
        warnings: Vec::new(),
        document_error: None,
    };

    let text = match std::fs::read_to_string(&entry.path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", entry.path.display(), e);
            entry.document_error = Some(format!("read failed: {}", e));
            return entry;
        }
    };

    let document = match parse_document(&text) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!(
                path = %entry.relative_path.display(),
                error = %e,
                "Front matter rejected"
            );
            entry.document_error = Some(e.to_string());
            return entry;
        }
    };

    let validation = validator.validate(&document.front_matter, hint);
    entry.kind = validation.kind;
    entry.warnings = validation.warnings;
    match validation.result {
        Ok(record) => entry.record = Some(record),
        Err(errors) => entry.errors = errors,
    }
    tracing::debug!(
        path = %entry.relative_path.display(),
        valid = entry.is_valid(),
        errors = entry.errors.len(),
        warnings = entry.warnings.len(),
        "Validated document"
    );
    entry
}

/// Later documents that reuse an identity lose their record.
fn reject_duplicates(entries: &mut [CatalogEntry]) {
    let accepted: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_valid())
        .map(|(index, _)| index)
        .collect();
    let records: Vec<_> = accepted
        .iter()
        .filter_map(|&index| entries[index].record.clone())
        .collect();

    for (position, error) in check_uniqueness(&records) {
        let entry = &mut entries[accepted[position]];
        tracing::debug!(path = %entry.relative_path.display(), "{}", error);
        entry.record = None;
        entry.errors.push(error);
    }
}
