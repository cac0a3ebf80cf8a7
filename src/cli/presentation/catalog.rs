//! Record presentation: listings and single-record views.

use super::shared::{format_section_heading, record_detail, record_json, to_pretty_json};
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::ApiError;
use crate::schema::{Record, RecordKind};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

fn selected<'r>(
    catalog: &Catalog<'r>,
    kind: Option<RecordKind>,
) -> Vec<(&'r CatalogEntry, &'r Record)> {
    catalog
        .iter()
        .filter(|(_, record)| kind.map_or(true, |kind| record.kind() == kind))
        .collect()
}

pub fn format_record_list_text(catalog: &Catalog<'_>, kind: Option<RecordKind>) -> String {
    let rows = selected(catalog, kind);
    if rows.is_empty() {
        return "No records found.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Identity", "Name", "Detail", "Path"]);
    for (entry, record) in &rows {
        table.add_row(vec![
            record.kind().to_string(),
            record.identity().to_string(),
            record.name().to_string(),
            record_detail(record),
            entry.relative_path.display().to_string(),
        ]);
    }

    format!(
        "{}\n\n{}\n\nTotal: {} record(s)",
        format_section_heading("Records"),
        table,
        rows.len()
    )
}

pub fn format_record_list_json(
    catalog: &Catalog<'_>,
    kind: Option<RecordKind>,
) -> Result<String, ApiError> {
    let rows = selected(catalog, kind);
    let records: Vec<_> = rows
        .iter()
        .map(|(entry, record)| {
            json!({
                "kind": record.kind(),
                "identity": record.identity(),
                "name": record.name(),
                "description": record.description(),
                "path": entry.relative_path.display().to_string(),
            })
        })
        .collect();
    to_pretty_json(&json!({ "records": records, "total": rows.len() }))
}

/// Record with defaults applied, as json or yaml front matter.
pub fn format_record(record: &Record, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        to_pretty_json(&record_json(record)?)
    } else {
        Ok(serde_yaml::to_string(&record.to_mapping()?)?)
    }
}
