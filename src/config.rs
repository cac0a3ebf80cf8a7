//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global file, the
//! workspace file, then `AGENTDEF__SECTION__KEY` environment variables. CLI
//! flags are applied on top by the command layer.

use crate::catalog::CatalogOptions;
use crate::logging::LoggingConfig;
use crate::schema::{ValidationProfile, Validator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;

/// XDG path helpers
pub mod xdg {
    pub use super::paths::xdg_root::*;
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentdefConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where definition documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog root, relative to the workspace unless absolute
    #[serde(default = "default_catalog_root")]
    pub root: PathBuf,

    /// Definition file extensions, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_catalog_root() -> PathBuf {
    PathBuf::from(".agent")
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdc".to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_catalog_root(),
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub profile: ValidationProfile,

    /// Persona display names longer than this draw a warning
    #[serde(default = "default_max_display_name_len")]
    pub max_display_name_len: usize,
}

fn default_max_display_name_len() -> usize {
    crate::schema::validator::DEFAULT_MAX_DISPLAY_NAME_LEN
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            profile: ValidationProfile::default(),
            max_display_name_len: default_max_display_name_len(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Catalog(String),
    Validation(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Catalog(msg) => write!(f, "Catalog: {}", msg),
            ValidationError::Validation(msg) => write!(f, "Validation: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CatalogConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.root.as_os_str().is_empty() {
            errors.push("Catalog root cannot be empty".to_string());
        }
        if self.extensions.is_empty() {
            errors.push("At least one file extension is required".to_string());
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                errors.push(format!(
                    "Invalid extension '{}' (use e.g. 'md', without the dot)",
                    ext
                ));
            }
        }
        errors
    }

    pub fn options(&self) -> CatalogOptions {
        CatalogOptions {
            extensions: self.extensions.clone(),
        }
    }

    /// Catalog root resolved against the workspace.
    pub fn resolve_root(&self, workspace_root: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            workspace_root.join(&self.root)
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_display_name_len == 0 {
            return Err("max_display_name_len must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn validator(&self) -> Validator {
        Validator::new()
            .with_profile(self.profile)
            .with_max_display_name_len(self.max_display_name_len)
    }
}

impl AgentdefConfig {
    /// Validate the entire configuration, reporting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = self
            .catalog
            .validate()
            .into_iter()
            .map(ValidationError::Catalog)
            .collect();

        if let Err(e) = self.validation.validate() {
            errors.push(ValidationError::Validation(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
