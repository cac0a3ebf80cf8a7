//! CLI presentation: text and json formatters per command family.

mod catalog;
mod report;
mod shared;

pub use catalog::{format_record, format_record_list_json, format_record_list_text};
pub use report::{
    format_catalog_report_json, format_catalog_report_text, format_check_json, format_check_text,
};
