//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use commands::{check_api, config_generate};

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    ApiError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::ApiError(msg) => format!("Content API error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::ApiError(msg) => {
                format!("{} {}", "Content API error:".red().bold(), msg.white())
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

impl From<crate::errors::SiteError> for CliError {
    fn from(err: crate::errors::SiteError) -> Self {
        match err {
            crate::errors::SiteError::Api(e) => CliError::ApiError(e.to_string()),
            crate::errors::SiteError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::CheckApi => check_api(&crate::config::get_config().api).await,
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by server mode".to_string(),
        )),
    }
}
