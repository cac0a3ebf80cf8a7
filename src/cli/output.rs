//! CLI output: command results and error mapping to the CLI surface.

use crate::error::ApiError;

/// Rendered command result plus the process exit status it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }

    /// Output for a run that found invalid documents.
    pub fn invalid(text: String) -> Self {
        Self { text, exit_code: 1 }
    }
}

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("error: {}", e)
}
