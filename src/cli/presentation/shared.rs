//! Shared presentation helpers: headings, finding lines, record summaries.

use crate::error::ApiError;
use crate::schema::{FieldError, FieldWarning, Record};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn push_findings(out: &mut String, errors: &[FieldError], warnings: &[FieldWarning]) {
    for error in errors {
        out.push_str(&format!("    {} {}\n", "error:".red(), error));
    }
    for warning in warnings {
        out.push_str(&format!("    {} {}\n", "warning:".yellow(), warning));
    }
}

pub fn status_mark(valid: bool) -> String {
    if valid {
        format!("{}", "✓".green())
    } else {
        format!("{}", "✗".red())
    }
}

/// One-line kind-specific detail for listings.
pub fn record_detail(record: &Record) -> String {
    match record {
        Record::Persona(p) => format!("model {}, temperature {}", p.model, p.temperature),
        Record::Rule(r) => format!("{} (priority {})", r.severity, r.priority),
        Record::Tool(t) => format!("{} runtime, {} arg(s)", t.runtime, t.args.len()),
        Record::Workflow(w) => format!("{}, {} input(s)", w.mode, w.inputs.len()),
        Record::Knowledge(k) => format!("{} strategy, refresh {}", k.strategy, k.refresh_schedule),
        Record::Evaluation(e) => format!("{} at >= {}", e.target_agent, e.pass_threshold),
    }
}

/// Front-matter view of a record as JSON.
pub fn record_json(record: &Record) -> Result<Value, ApiError> {
    let mapping = record.to_mapping()?;
    Ok(serde_json::to_value(mapping)?)
}

pub fn findings_json(errors: &[FieldError], warnings: &[FieldWarning]) -> Value {
    json!({
        "errors": errors,
        "warnings": warnings,
    })
}

pub fn to_pretty_json(value: &Value) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
