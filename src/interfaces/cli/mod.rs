//! CLI interface module
//!
//! One-shot commands that run the same page flows as the browser front.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::ShortfrontError;
use crate::runtime::lifetime::startup::prepare_startup;
use commands::{config_generate, resolve_code, shorten_url};

#[derive(Debug)]
pub enum CliError {
    /// The input was rejected before any request was made
    ParseError(String),
    /// The shortening service failed or refused
    ServiceError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::ServiceError(msg) => format!("Service error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::ServiceError(msg) => {
                format!("{} {}", "Service error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShortfrontError> for CliError {
    fn from(err: ShortfrontError) -> Self {
        match err {
            ShortfrontError::MissingInput(msg) | ShortfrontError::InvalidUrl(msg) => {
                CliError::ParseError(msg)
            }
            ShortfrontError::ServiceRejected { .. }
            | ShortfrontError::TransportFailure(_)
            | ShortfrontError::ResolutionFailure(_) => CliError::ServiceError(err.format_simple()),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // config generate needs no service
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force).await;
    }

    let startup = prepare_startup(config).map_err(|e| CliError::CommandError(e.to_string()))?;
    let service = startup.service.as_ref();

    match cmd {
        Commands::Shorten { url } => shorten_url(service, url).await,
        Commands::Resolve { code } => resolve_code(service, code).await,
        Commands::Config { .. } => unreachable!("handled above"),
        Commands::Serve => unreachable!("server handled in main"),
        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_errors_map_to_cli_errors() {
        assert!(matches!(
            CliError::from(ShortfrontError::invalid_url("bad")),
            CliError::ParseError(m) if m == "bad"
        ));
        assert!(matches!(
            CliError::from(ShortfrontError::service_rejected(500, "rate limited")),
            CliError::ServiceError(m) if m.contains("rate limited")
        ));
        assert!(matches!(
            CliError::from(ShortfrontError::config("nope")),
            CliError::CommandError(_)
        ));
    }
}
