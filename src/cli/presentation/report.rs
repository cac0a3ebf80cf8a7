//! Validation presentation: catalog reports and single-document checks.

use super::shared::{
    findings_json, format_section_heading, push_findings, record_json, status_mark, to_pretty_json,
};
use crate::catalog::{CatalogEntry, CatalogReport};
use crate::error::ApiError;
use crate::schema::Validation;
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use std::path::Path;

fn kind_label(kind: Option<impl std::fmt::Display>) -> String {
    kind.map(|k| k.to_string()).unwrap_or_else(|| "unknown".to_string())
}

pub fn format_catalog_report_text(report: &CatalogReport) -> String {
    let mut out = format!(
        "{}\n  Root: {}\n\n",
        format_section_heading("Catalog validation"),
        report.root.display()
    );

    if report.entries.is_empty() {
        out.push_str("  No definition documents found.\n");
        return out;
    }

    for entry in &report.entries {
        push_entry(&mut out, entry);
    }

    let failed = report.failed().count();
    let summary = format!(
        "{} document(s): {} valid, {} failed, {} warning(s)",
        report.entries.len(),
        report.entries.len() - failed,
        failed,
        report.warning_count()
    );
    out.push('\n');
    if failed == 0 {
        out.push_str(&format!("{}\n", summary.green()));
    } else {
        out.push_str(&format!("{}\n", summary.red()));
    }
    out
}

fn push_entry(out: &mut String, entry: &CatalogEntry) {
    out.push_str(&format!(
        "{} {} ({})\n",
        status_mark(entry.is_valid()),
        entry.relative_path.display(),
        kind_label(entry.kind.or(entry.hint.kind()))
    ));
    if let Some(error) = &entry.document_error {
        out.push_str(&format!("    {} {}\n", "error:".red(), error));
    }
    push_findings(out, &entry.errors, &entry.warnings);
}

fn entry_json(entry: &CatalogEntry) -> Value {
    let mut value = json!({
        "path": entry.relative_path.display().to_string(),
        "kind": entry.kind,
        "valid": entry.is_valid(),
        "identity": entry.record.as_ref().map(|r| r.identity()),
    });
    if let Value::Object(findings) = findings_json(&entry.errors, &entry.warnings) {
        if let Value::Object(map) = &mut value {
            map.extend(findings);
        }
    }
    if let Some(error) = &entry.document_error {
        value["document_error"] = json!(error);
    }
    value
}

pub fn format_catalog_report_json(report: &CatalogReport) -> Result<String, ApiError> {
    let documents: Vec<Value> = report.entries.iter().map(entry_json).collect();
    let failed = report.failed().count();
    let out = json!({
        "root": report.root.display().to_string(),
        "valid": report.is_valid(),
        "documents": documents,
        "summary": {
            "total": report.entries.len(),
            "valid": report.entries.len() - failed,
            "failed": failed,
            "warnings": report.warning_count(),
        },
    });
    to_pretty_json(&out)
}

pub fn format_check_text(path: &Path, validation: &Validation) -> String {
    let mut out = format!(
        "{} {} ({})\n",
        status_mark(validation.is_valid()),
        path.display(),
        kind_label(validation.kind)
    );
    push_findings(&mut out, validation.errors(), &validation.warnings);
    if let Some(record) = validation.record() {
        out.push_str(&format!("    {}: {}\n", record.kind().identity_field(), record.identity()));
    }
    out
}

pub fn format_check_json(path: &Path, validation: &Validation) -> Result<String, ApiError> {
    let record = match validation.record() {
        Some(record) => record_json(record)?,
        None => Value::Null,
    };
    let mut out = json!({
        "path": path.display().to_string(),
        "kind": validation.kind,
        "valid": validation.is_valid(),
        "record": record,
    });
    if let (Value::Object(map), Value::Object(findings)) = (
        &mut out,
        findings_json(validation.errors(), &validation.warnings),
    ) {
        map.extend(findings);
    }
    to_pretty_json(&out)
}
