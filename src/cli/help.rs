//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log spans (e.g. "validate", "show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Validate { .. } => "validate",
        Commands::Check { .. } => "check",
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
    }
}
