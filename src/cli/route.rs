//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::catalog::{Catalog, CatalogReport};
use crate::cli::command_name;
use crate::cli::output::CommandOutput;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_catalog_report_json, format_catalog_report_text, format_check_json, format_check_text,
    format_record, format_record_list_json, format_record_list_text,
};
use crate::config::{AgentdefConfig, ConfigLoader};
use crate::document::parse_document;
use crate::error::ApiError;
use crate::schema::{FileKindHint, RecordKind, ValidationProfile, Validator};
use std::path::{Path, PathBuf};

/// Runtime context for CLI execution: workspace root and resolved configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: AgentdefConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: AgentdefConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &AgentdefConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let span = tracing::info_span!("command", name = command_name(command));
        let _guard = span.enter();

        match command {
            Commands::Validate {
                root,
                strict,
                format,
            } => {
                let report = self.load_catalog(root.as_deref(), *strict)?;
                let text = if format == "json" {
                    format_catalog_report_json(&report)?
                } else {
                    format_catalog_report_text(&report)
                };
                Ok(if report.is_valid() {
                    CommandOutput::success(text)
                } else {
                    CommandOutput::invalid(text)
                })
            }
            Commands::Check {
                file,
                kind,
                strict,
                format,
            } => self.handle_check(file, *kind, *strict, format),
            Commands::List { root, kind, format } => {
                let report = self.load_catalog(root.as_deref(), false)?;
                let catalog = report.catalog();
                let text = if format == "json" {
                    format_record_list_json(&catalog, *kind)?
                } else {
                    format_record_list_text(&catalog, *kind)
                };
                Ok(CommandOutput::success(text))
            }
            Commands::Show {
                identity,
                root,
                kind,
                format,
            } => {
                let report = self.load_catalog(root.as_deref(), false)?;
                let catalog = report.catalog();
                let matches = catalog.find(identity, *kind);
                match matches.as_slice() {
                    [] => Err(ApiError::RecordNotFound(identity.clone())),
                    [(_, record)] => Ok(CommandOutput::success(format_record(record, format)?)),
                    several => Err(ApiError::AmbiguousRecord {
                        identity: identity.clone(),
                        kinds: several
                            .iter()
                            .map(|(_, record)| record.kind().as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    }

    fn validator(&self, strict: bool) -> Validator {
        let validator = self.config.validation.validator();
        if strict {
            validator.with_profile(ValidationProfile::Strict)
        } else {
            validator
        }
    }

    fn catalog_root(&self, root: Option<&Path>) -> PathBuf {
        match root {
            Some(root) if root.is_absolute() => root.to_path_buf(),
            Some(root) => self.workspace_root.join(root),
            None => self.config.catalog.resolve_root(&self.workspace_root),
        }
    }

    fn load_catalog(&self, root: Option<&Path>, strict: bool) -> Result<CatalogReport, ApiError> {
        let root = self.catalog_root(root);
        Catalog::load(&root, &self.config.catalog.options(), &self.validator(strict))
    }

    fn handle_check(
        &self,
        file: &Path,
        kind: Option<RecordKind>,
        strict: bool,
        format: &str,
    ) -> Result<CommandOutput, ApiError> {
        let text = std::fs::read_to_string(file).map_err(|e| ApiError::ReadFailed {
            path: file.to_path_buf(),
            source: e,
        })?;
        let document = parse_document(&text).map_err(|e| ApiError::Document {
            path: file.to_path_buf(),
            source: e,
        })?;
        let hint = kind
            .map(FileKindHint::from)
            .unwrap_or_else(|| FileKindHint::from_path(file));

        let validation = self.validator(strict).validate(&document.front_matter, hint);
        tracing::debug!(
            path = %file.display(),
            valid = validation.is_valid(),
            "Checked document"
        );

        let text = if format == "json" {
            format_check_json(file, &validation)?
        } else {
            format_check_text(file, &validation)
        };
        Ok(if validation.is_valid() {
            CommandOutput::success(text)
        } else {
            CommandOutput::invalid(text)
        })
    }
}
