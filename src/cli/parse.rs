//! CLI parse: clap types for agentdef. No behavior; definitions only.

use crate::schema::RecordKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// agentdef - validate and inspect agent asset definitions
#[derive(Parser, Debug)]
#[command(name = "agentdef")]
#[command(
    about = "Validate and inspect agent asset definitions (personas, rules, tools, workflows, knowledge, evals)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every definition document under the catalog root
    Validate {
        /// Catalog root (default: catalog.root from config, relative to the workspace)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Use the strict validation profile
        #[arg(long)]
        strict: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Validate a single definition document
    Check {
        /// Document to validate
        file: PathBuf,
        /// Record kind to assume (default: inferred from the parent directory)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<RecordKind>,
        /// Use the strict validation profile
        #[arg(long)]
        strict: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// List accepted records
    List {
        /// Catalog root (default: catalog.root from config, relative to the workspace)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Only list records of this kind
        #[arg(long, value_parser = parse_kind)]
        kind: Option<RecordKind>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print one validated record with defaults applied
    Show {
        /// Handle, slug or name of the record
        identity: String,
        /// Catalog root (default: catalog.root from config, relative to the workspace)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Restrict the lookup to one kind
        #[arg(long, value_parser = parse_kind)]
        kind: Option<RecordKind>,
        /// Output format (json or yaml)
        #[arg(long, default_value = "yaml", value_parser = ["json", "yaml"])]
        format: String,
    },
}

fn parse_kind(value: &str) -> Result<RecordKind, String> {
    RecordKind::parse(value).ok_or_else(|| {
        let names: Vec<&str> = RecordKind::ALL.iter().map(RecordKind::as_str).collect();
        format!("unknown kind '{}' (expected one of: {})", value, names.join(", "))
    })
}
