//! XDG Base Directory utilities.

use crate::error::ApiError;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Result<PathBuf, ApiError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        ApiError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Get XDG state home directory, where the default log file lives
///
/// Returns `$XDG_STATE_HOME` if set, otherwise defaults to `$HOME/.local/state`
pub fn state_home() -> Option<PathBuf> {
    if let Ok(xdg_state_home) = std::env::var("XDG_STATE_HOME") {
        if !xdg_state_home.is_empty() {
            return Some(PathBuf::from(xdg_state_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local").join("state"))
}

/// Default log file: `$XDG_STATE_HOME/agentdef/agentdef.log`
pub fn default_log_file() -> Option<PathBuf> {
    state_home().map(|dir| dir.join("agentdef").join("agentdef.log"))
}
