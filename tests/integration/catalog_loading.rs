//! Catalog loading over a real directory tree

use crate::integration::test_utils::{
    write_file, yaml_document, EVALUATION, KNOWLEDGE, LINT_TOOL, PERSONA, RULE, WORKFLOW,
};
use agentdef::catalog::{Catalog, CatalogOptions};
use agentdef::schema::{FieldErrorKind, RecordKind, Validator};
use std::path::Path;
use tempfile::TempDir;

fn populated_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "personas/architect.mdc", &yaml_document(PERSONA));
    write_file(root, "rules/no-secrets.md", &yaml_document(RULE));
    write_file(root, "tools/lint.md", &yaml_document(LINT_TOOL));
    write_file(root, "workflows/spec.md", &yaml_document(WORKFLOW));
    write_file(root, "knowledge/tiers.md", &yaml_document(KNOWLEDGE));
    write_file(root, "evals/architect.md", &yaml_document(EVALUATION));
    temp
}

fn load(root: &Path) -> agentdef::catalog::CatalogReport {
    Catalog::load(root, &CatalogOptions::default(), &Validator::new()).unwrap()
}

#[test]
fn loads_every_kind_with_lookups() {
    let temp = populated_root();
    let report = load(temp.path());
    assert_eq!(report.entries.len(), 6);
    assert!(report.is_valid(), "{:#?}", report.failed().collect::<Vec<_>>());

    let catalog = report.catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.persona("@architect").unwrap().name, "Architect");
    assert_eq!(catalog.tool("lint").unwrap().command, "eslint {{args.path}}");
    assert_eq!(catalog.workflow("/spec").unwrap().name, "Spec");
    assert_eq!(catalog.records(RecordKind::Knowledge).count(), 1);
    assert!(catalog.persona("@missing").is_none());
}

#[test]
fn entries_are_in_sorted_path_order() {
    let temp = populated_root();
    let report = load(temp.path());
    let paths: Vec<_> = report.entries.iter().map(|e| e.relative_path.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn knowledge_sources_are_not_definitions() {
    let temp = populated_root();
    write_file(temp.path(), "knowledge/sources/tiers.md", "# Tier notes\n\nPlain prose.\n");
    write_file(temp.path(), "knowledge/sources/deep/more.md", "---\nname: 3\n---\n");

    let report = load(temp.path());
    assert_eq!(report.entries.len(), 6);
    assert!(report.is_valid());
}

#[test]
fn duplicate_across_files_fails_only_the_later_file() {
    let temp = populated_root();
    let duplicate = LINT_TOOL.replace("description: Lints code", "description: Lints again");
    write_file(temp.path(), "tools/z-lint-copy.md", &yaml_document(&duplicate));

    let report = load(temp.path());
    let original = report.entry(Path::new("tools/lint.md")).unwrap();
    let copy = report.entry(Path::new("tools/z-lint-copy.md")).unwrap();

    assert!(original.is_valid());
    assert!(!copy.is_valid());
    assert_eq!(copy.errors.len(), 1);
    assert_eq!(copy.errors[0].kind, FieldErrorKind::DuplicateIdentifier);
    assert_eq!(report.catalog().tool("lint").unwrap().description, "Lints code");
}

#[test]
fn invalid_documents_do_not_stop_the_load() {
    let temp = populated_root();
    write_file(temp.path(), "personas/broken.md", "no front matter here\n");
    let hot = PERSONA
        .replace("temperature: 0.2", "temperature: 1.5")
        .replace("@architect", "@hot");
    write_file(temp.path(), "personas/hot.md", &yaml_document(&hot));

    let report = load(temp.path());
    assert_eq!(report.entries.len(), 8);
    assert_eq!(report.failed().count(), 2);

    let broken = report.entry(Path::new("personas/broken.md")).unwrap();
    assert!(broken.document_error.is_some());

    let hot = report.entry(Path::new("personas/hot.md")).unwrap();
    assert_eq!(hot.kind, Some(RecordKind::Persona));
    assert_eq!(hot.errors[0].kind, FieldErrorKind::RangeViolation);
}

#[test]
fn rules_without_type_fail_in_rules_directory() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "rules/untyped.md",
        &yaml_document("name: x\nseverity: guideline\ndescription: d\n"),
    );
    let report = load(temp.path());
    let entry = &report.entries[0];
    assert_eq!(entry.errors[0].path, "type");
    assert_eq!(entry.errors[0].kind, FieldErrorKind::MissingField);
}

#[test]
fn custom_extensions_limit_the_scan() {
    let temp = populated_root();
    let options = CatalogOptions {
        extensions: vec!["mdc".to_string()],
    };
    let report = Catalog::load(temp.path(), &options, &Validator::new()).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].kind, Some(RecordKind::Persona));
}
