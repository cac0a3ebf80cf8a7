//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_catalog_report_json, format_catalog_report_text, format_check_json,
    format_check_text, format_record_list_json, format_record_list_text, format_record,
};
pub use route::RunContext;
